//! Leptos component primitives for web application interfaces.
//!
//! The crate owns rendering and DOM event wiring for buttons, inputs, sliders, modals, date
//! pickers, tables, pagination, and notifications. Interaction state machines and UI math live in
//! `ui_headless`; components here feed them DOM events and render their output through the stable
//! `data-ui-*` attribute contract consumed by stylesheets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod console_logger;
mod icon;
mod notifications;
mod primitives;

pub use console_logger::install_console_logger;
pub use icon::{Icon, IconName, IconSize};
pub use notifications::{
    use_notifications, NotificationItem, NotificationsContainer, NotificationsContext,
    NotificationsProvider,
};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Calendar, Cluster, DataTable, DataTableColumn,
    DatePicker, DateRangePicker, FieldVariant, Heading, IconButton, LayoutAlign, LayoutGap,
    LayoutJustify, Loader, Modal, ModalSize, Pagination, RangeSlider, Slider, Stack, Text,
    TextField, TextRole, TextTone,
};

/// Convenience imports for application crates consuming the primitive set.
pub mod prelude {
    pub use crate::{
        use_notifications, Badge, Button, ButtonSize, ButtonVariant, Calendar, Cluster, DataTable,
        DataTableColumn, DatePicker, DateRangePicker, FieldVariant, Heading, Icon, IconButton,
        IconName, IconSize, LayoutAlign, LayoutGap, LayoutJustify, Loader, Modal, ModalSize,
        NotificationsContext, NotificationsProvider, Pagination, RangeSlider, Slider, Stack, Text,
        TextField, TextRole, TextTone,
    };
    pub use ui_headless::notifications::{
        AutoClose, NotificationData, NotificationKind, NotificationPatch, NotificationPosition,
    };
    pub use ui_headless::slider::{RangeValue, SliderMark};
    pub use ui_headless::NotificationsConfig;
}
