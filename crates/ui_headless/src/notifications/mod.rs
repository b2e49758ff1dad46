//! Notification queue manager.
//!
//! A store holds an ordered set of visible notifications bounded by a limit and a FIFO queue for
//! the overflow. Every mutation goes through [`reduce_notifications`]; [`NotificationStore`] adds
//! id generation and default resolution on top, and [`registry`] lets code outside the component
//! tree reach whichever store is currently registered.

pub mod model;
pub mod reducer;
pub mod registry;
pub mod store;
pub mod timer;

pub use model::{
    AutoClose, Notification, NotificationData, NotificationId, NotificationKind,
    NotificationPatch, NotificationPosition, NotificationsState,
};
pub use reducer::{reduce_notifications, NotificationAction};
pub use registry::{
    clean, clean_queue, error, hide, info, loading, register_global, set_auto_close, set_limit,
    show, success, unregister_global,
    update, update_state, warning, NotificationHandlers, NotificationRegistry, Registration,
    StateUpdate, UnregisteredPolicy,
};
pub use store::{
    Base36IdGenerator, IdGenerator, NotificationStore, SharedNotificationStore, UuidIdGenerator,
};
pub use timer::{DismissTimer, TimerState, TimerTick};
