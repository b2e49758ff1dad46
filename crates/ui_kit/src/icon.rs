//! Centralized inline SVG icon set.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Icons available to primitives and consumers.
pub enum IconName {
    /// Dismiss/close cross.
    Dismiss,
    /// Left chevron.
    ChevronLeft,
    /// Right chevron.
    ChevronRight,
    /// Double left chevron.
    ChevronsLeft,
    /// Double right chevron.
    ChevronsRight,
    /// Check mark.
    Check,
    /// Information circle.
    Info,
    /// Warning triangle.
    Warning,
    /// Error circle.
    Error,
    /// Calendar page.
    Calendar,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Dismiss => "dismiss",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::ChevronsLeft => "chevrons-left",
            Self::ChevronsRight => "chevrons-right",
            Self::Check => "check",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Calendar => "calendar",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Dismiss => "M6 6l12 12M18 6L6 18",
            Self::ChevronLeft => "M15 6l-6 6 6 6",
            Self::ChevronRight => "M9 6l6 6-6 6",
            Self::ChevronsLeft => "M11 7l-5 5 5 5M18 7l-5 5 5 5",
            Self::ChevronsRight => "M13 7l5 5-5 5M6 7l5 5-5 5",
            Self::Check => "M5 12l5 5 9-10",
            Self::Info => "M12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18zM12 11v6M12 7.5v.5",
            Self::Warning => "M12 3l10 18H2L12 3zM12 10v5M12 18v.5",
            Self::Error => "M12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18zM9 9l6 6M15 9l-6 6",
            Self::Calendar => "M4 6h16v14H4zM4 10h16M8 3v4M16 3v4",
        }
    }

    /// Icon matching a notification severity, if it has one.
    pub fn for_kind(kind: ui_headless::NotificationKind) -> Option<Self> {
        use ui_headless::NotificationKind;

        match kind {
            NotificationKind::Default => None,
            NotificationKind::Success => Some(Self::Check),
            NotificationKind::Error => Some(Self::Error),
            NotificationKind::Warning => Some(Self::Warning),
            NotificationKind::Info => Some(Self::Info),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Inline/dense icon.
    Sm,
    /// Default icon.
    #[default]
    Md,
    /// Prominent icon.
    Lg,
}

impl IconSize {
    fn pixels(self) -> u8 {
        match self {
            Self::Sm => 14,
            Self::Md => 18,
            Self::Lg => 24,
        }
    }
}

#[component]
/// Decorative inline SVG icon.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    let pixels = size.pixels();
    view! {
        <svg
            class="ui-icon"
            width=pixels
            height=pixels
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
        >
            <path d=icon.path()></path>
        </svg>
    }
}
