//! DOM-free state machines and UI math behind the `ui_kit` component primitives.
//!
//! Everything in this crate is plain data plus pure transition functions so it can be exercised
//! natively without a browser: the notification queue manager (model, reducer, store, global
//! registry, auto-dismiss timer), range-slider value mapping, pagination range generation, and
//! calendar grid/date-range selection. The Leptos layer in `ui_kit` owns rendering and event
//! wiring and delegates every decision here.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod calendar;
pub mod config;
pub mod error;
pub mod notifications;
pub mod pagination;
pub mod slider;
pub mod time;

pub use config::{IdSource, NotificationsConfig};
pub use error::{ConfigError, NotifyError};
pub use notifications::{
    reduce_notifications, AutoClose, DismissTimer, IdGenerator, Notification, NotificationAction,
    NotificationData, NotificationHandlers, NotificationId, NotificationKind, NotificationPatch,
    NotificationPosition, NotificationRegistry, NotificationStore, NotificationsState,
    Registration, SharedNotificationStore, TimerState, TimerTick, UnregisteredPolicy,
};
pub use pagination::{pagination_range, PaginationItem, PaginationState};
pub use slider::{RangeThumb, RangeValue, SliderMark};
pub use time::unix_time_ms_now;
