//! Notification records, caller payloads, and store state.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{DEFAULT_AUTO_CLOSE_MS, DEFAULT_LIMIT};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
/// Stable notification identifier.
pub struct NotificationId(pub String);

impl NotificationId {
    /// Borrows the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NotificationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NotificationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Screen region a notification is rendered in.
pub enum NotificationPosition {
    /// Top-left corner.
    TopLeft,
    /// Top edge, centered.
    TopCenter,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom edge, centered.
    BottomCenter,
    /// Bottom-right corner.
    #[default]
    BottomRight,
}

impl NotificationPosition {
    /// Every position in render order.
    pub const ALL: [Self; 6] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// DOM token for the position.
    pub fn token(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
        }
    }

    /// Whether the region is anchored to the bottom edge.
    pub fn is_bottom(self) -> bool {
        matches!(
            self,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Auto-close behavior for a notification.
pub enum AutoClose {
    /// Stays until closed explicitly.
    Never,
    /// Closes after the given number of milliseconds.
    After(u32),
}

impl Default for AutoClose {
    fn default() -> Self {
        Self::After(DEFAULT_AUTO_CLOSE_MS)
    }
}

impl AutoClose {
    /// Builds an auto-close value from a signed millisecond count; anything `<= 0` disables it.
    pub fn from_millis(ms: i64) -> Self {
        if ms <= 0 {
            Self::Never
        } else {
            Self::After(u32::try_from(ms).unwrap_or(u32::MAX))
        }
    }

    /// Delay in milliseconds, or `None` when disabled.
    pub fn millis(self) -> Option<u32> {
        match self {
            Self::Never => None,
            Self::After(0) => None,
            Self::After(ms) => Some(ms),
        }
    }

    /// Whether the notification closes on its own.
    pub fn is_enabled(self) -> bool {
        self.millis().is_some()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AutoCloseRepr {
    Flag(bool),
    Millis(i64),
}

impl<'de> Deserialize<'de> for AutoClose {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match AutoCloseRepr::deserialize(deserializer)? {
            AutoCloseRepr::Flag(false) => Self::Never,
            AutoCloseRepr::Flag(true) => Self::default(),
            AutoCloseRepr::Millis(ms) => Self::from_millis(ms),
        })
    }
}

impl Serialize for AutoClose {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.millis() {
            Some(ms) => serializer.serialize_u32(ms),
            None => serializer.serialize_bool(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Severity preset of a notification.
pub enum NotificationKind {
    /// Neutral notification without a severity preset.
    #[default]
    Default,
    /// Successful outcome.
    Success,
    /// Failure.
    Error,
    /// Non-critical issue.
    Warning,
    /// Informational message.
    Info,
}

impl NotificationKind {
    /// DOM token for the kind.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Title used by the severity wrappers when the caller does not set one.
    pub fn preset_title(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Success => Some("Success"),
            Self::Error => Some("Error"),
            Self::Warning => Some("Warning"),
            Self::Info => Some("Info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Caller payload for `show`.
///
/// Unset position and auto-close fall back to the store-level defaults at the time of the call.
pub struct NotificationData {
    /// Caller-supplied id; generated when absent.
    pub id: Option<NotificationId>,
    /// Body text.
    pub message: String,
    /// Optional heading.
    pub title: Option<String>,
    /// Optional icon token.
    pub icon: Option<String>,
    /// Severity preset.
    pub kind: NotificationKind,
    /// Optional accent color token.
    pub color: Option<String>,
    /// Screen region override.
    pub position: Option<NotificationPosition>,
    /// Auto-close override.
    pub auto_close: Option<AutoClose>,
    /// Renders a loading indicator instead of the icon.
    pub loading: bool,
    /// Renders a border around the notification.
    pub with_border: bool,
    /// Renders a close button.
    pub with_close_button: bool,
}

impl Default for NotificationData {
    fn default() -> Self {
        Self {
            id: None,
            message: String::new(),
            title: None,
            icon: None,
            kind: NotificationKind::Default,
            color: None,
            position: None,
            auto_close: None,
            loading: false,
            with_border: false,
            with_close_button: true,
        }
    }
}

impl NotificationData {
    /// Creates a payload with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Sets a caller-chosen id.
    pub fn with_id(mut self, id: impl Into<NotificationId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the heading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the icon token.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the severity preset.
    pub fn with_kind(mut self, kind: NotificationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the accent color token.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Overrides the screen region.
    pub fn with_position(mut self, position: NotificationPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Overrides auto-close.
    pub fn with_auto_close(mut self, auto_close: AutoClose) -> Self {
        self.auto_close = Some(auto_close);
        self
    }

    /// Toggles the loading indicator.
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Toggles the border.
    pub fn with_border(mut self, with_border: bool) -> Self {
        self.with_border = with_border;
        self
    }

    /// Toggles the close button.
    pub fn with_close_button(mut self, with_close_button: bool) -> Self {
        self.with_close_button = with_close_button;
        self
    }

    /// Applies a severity preset: kind plus a default title when none was set.
    pub fn preset(mut self, kind: NotificationKind) -> Self {
        self.kind = kind;
        if self.title.is_none() {
            self.title = kind.preset_title().map(str::to_string);
        }
        self
    }

    /// Resolves the payload into a stored record using `id` and the store-level defaults.
    pub fn resolve(self, id: NotificationId, state: &NotificationsState) -> Notification {
        Notification {
            id,
            message: self.message,
            title: self.title,
            icon: self.icon,
            kind: self.kind,
            color: self.color,
            position: self.position.unwrap_or(state.position),
            auto_close: self.auto_close.unwrap_or(state.auto_close),
            loading: self.loading,
            with_border: self.with_border,
            with_close_button: self.with_close_button,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A notification held by the store, with every default resolved.
pub struct Notification {
    /// Identifier, unique within the store.
    pub id: NotificationId,
    /// Body text.
    pub message: String,
    /// Optional heading.
    pub title: Option<String>,
    /// Optional icon token.
    pub icon: Option<String>,
    /// Severity preset.
    pub kind: NotificationKind,
    /// Optional accent color token.
    pub color: Option<String>,
    /// Screen region.
    pub position: NotificationPosition,
    /// Auto-close behavior.
    pub auto_close: AutoClose,
    /// Loading indicator flag.
    pub loading: bool,
    /// Border flag.
    pub with_border: bool,
    /// Close-button flag.
    pub with_close_button: bool,
}

/// Absent keys stay `None` through `#[serde(default)]`; an explicit `null` becomes `Some(None)`.
fn deserialize_clearable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Shallow partial update merged into an existing notification by id.
pub struct NotificationPatch {
    /// New body text.
    pub message: Option<String>,
    /// New heading; `Some(None)` removes it.
    #[serde(deserialize_with = "deserialize_clearable", skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    /// New icon token; `Some(None)` removes it.
    #[serde(deserialize_with = "deserialize_clearable", skip_serializing_if = "Option::is_none")]
    pub icon: Option<Option<String>>,
    /// New severity preset.
    pub kind: Option<NotificationKind>,
    /// New accent color token; `Some(None)` removes it.
    #[serde(deserialize_with = "deserialize_clearable", skip_serializing_if = "Option::is_none")]
    pub color: Option<Option<String>>,
    /// New screen region.
    pub position: Option<NotificationPosition>,
    /// New auto-close behavior.
    pub auto_close: Option<AutoClose>,
    /// New loading flag.
    pub loading: Option<bool>,
    /// New border flag.
    pub with_border: Option<bool>,
    /// New close-button flag.
    pub with_close_button: Option<bool>,
}

impl NotificationPatch {
    /// Overwrites the fields of `target` that are set in the patch, leaving the rest untouched.
    pub fn merge_into(self, target: &mut Notification) {
        if let Some(message) = self.message {
            target.message = message;
        }
        if let Some(title) = self.title {
            target.title = title;
        }
        if let Some(icon) = self.icon {
            target.icon = icon;
        }
        if let Some(kind) = self.kind {
            target.kind = kind;
        }
        if let Some(color) = self.color {
            target.color = color;
        }
        if let Some(position) = self.position {
            target.position = position;
        }
        if let Some(auto_close) = self.auto_close {
            target.auto_close = auto_close;
        }
        if let Some(loading) = self.loading {
            target.loading = loading;
        }
        if let Some(with_border) = self.with_border {
            target.with_border = with_border;
        }
        if let Some(with_close_button) = self.with_close_button {
            target.with_close_button = with_close_button;
        }
    }

    /// Whether the patch carries no changes.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Store state: visible notifications, the overflow queue, and store-level defaults.
///
/// `notifications.len() <= limit` holds after every reducer transition.
pub struct NotificationsState {
    /// Visible notifications in arrival order.
    pub notifications: Vec<Notification>,
    /// Overflow waiting for a free slot, oldest first.
    pub queue: Vec<Notification>,
    /// Maximum number of visible notifications.
    pub limit: usize,
    /// Default position for new notifications.
    pub position: NotificationPosition,
    /// Default auto-close for new notifications.
    pub auto_close: AutoClose,
}

impl Default for NotificationsState {
    fn default() -> Self {
        Self {
            notifications: Vec::new(),
            queue: Vec::new(),
            limit: DEFAULT_LIMIT,
            position: NotificationPosition::default(),
            auto_close: AutoClose::default(),
        }
    }
}

impl NotificationsState {
    /// Empty state with the given defaults; `limit` is clamped to at least one.
    pub fn new(limit: usize, position: NotificationPosition, auto_close: AutoClose) -> Self {
        Self {
            limit: limit.max(1),
            position,
            auto_close,
            ..Self::default()
        }
    }

    /// Looks up a notification in the visible set, then the queue.
    pub fn find(&self, id: &NotificationId) -> Option<&Notification> {
        self.notifications
            .iter()
            .chain(self.queue.iter())
            .find(|notification| &notification.id == id)
    }

    /// Whether `id` is visible or queued.
    pub fn contains(&self, id: &NotificationId) -> bool {
        self.find(id).is_some()
    }

    /// Whether `id` is currently visible.
    pub fn is_visible(&self, id: &NotificationId) -> bool {
        self.notifications.iter().any(|notification| &notification.id == id)
    }

    /// Visible notifications rendered in `position`, in arrival order.
    pub fn visible_at(&self, position: NotificationPosition) -> Vec<Notification> {
        self.notifications
            .iter()
            .filter(|notification| notification.position == position)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(id: &str) -> Notification {
        NotificationData::new("body").resolve(id.into(), &NotificationsState::default())
    }

    #[test]
    fn resolve_fills_store_defaults_only_when_unset() {
        let state = NotificationsState::new(3, NotificationPosition::TopLeft, AutoClose::Never);

        let defaulted = NotificationData::new("a").resolve("a".into(), &state);
        assert_eq!(defaulted.position, NotificationPosition::TopLeft);
        assert_eq!(defaulted.auto_close, AutoClose::Never);

        let explicit = NotificationData::new("b")
            .with_position(NotificationPosition::BottomCenter)
            .with_auto_close(AutoClose::After(900))
            .resolve("b".into(), &state);
        assert_eq!(explicit.position, NotificationPosition::BottomCenter);
        assert_eq!(explicit.auto_close, AutoClose::After(900));
    }

    #[test]
    fn patch_merges_without_dropping_unset_fields() {
        let mut target = record("a");
        target.title = Some("Saving".to_string());
        target.loading = true;

        NotificationPatch {
            message: Some("Saved".to_string()),
            loading: Some(false),
            ..NotificationPatch::default()
        }
        .merge_into(&mut target);

        assert_eq!(target.message, "Saved");
        assert_eq!(target.title.as_deref(), Some("Saving"));
        assert!(!target.loading);
        assert!(target.with_close_button);
    }

    #[test]
    fn patch_can_clear_optional_fields() {
        let mut target = record("a");
        target.title = Some("Saving".to_string());
        target.color = Some("teal".to_string());
        target.icon = Some("cloud".to_string());

        NotificationPatch {
            title: Some(None),
            color: Some(Some("red".to_string())),
            ..NotificationPatch::default()
        }
        .merge_into(&mut target);

        assert_eq!(target.title, None);
        assert_eq!(target.color.as_deref(), Some("red"));
        assert_eq!(target.icon.as_deref(), Some("cloud"));
    }

    #[test]
    fn patch_json_distinguishes_null_from_missing() {
        let patch: NotificationPatch =
            serde_json::from_str(r#"{"title":null,"color":"red"}"#).expect("parse patch");
        assert_eq!(patch.title, Some(None));
        assert_eq!(patch.color, Some(Some("red".to_string())));
        assert_eq!(patch.icon, None);
        assert!(NotificationPatch::default().is_empty());
    }

    #[test]
    fn auto_close_from_non_positive_millis_is_disabled() {
        assert_eq!(AutoClose::from_millis(0), AutoClose::Never);
        assert_eq!(AutoClose::from_millis(-20), AutoClose::Never);
        assert_eq!(AutoClose::from_millis(250), AutoClose::After(250));
        assert!(!AutoClose::After(0).is_enabled());
    }

    #[test]
    fn preset_keeps_caller_title() {
        let preset = NotificationData::new("x").preset(NotificationKind::Error);
        assert_eq!(preset.title.as_deref(), Some("Error"));

        let custom = NotificationData::new("x")
            .with_title("Upload failed")
            .preset(NotificationKind::Error);
        assert_eq!(custom.title.as_deref(), Some("Upload failed"));
        assert_eq!(custom.kind, NotificationKind::Error);
    }

    #[test]
    fn visible_at_groups_by_position() {
        let mut state = NotificationsState::default();
        let mut top = record("top");
        top.position = NotificationPosition::TopRight;
        state.notifications = vec![record("a"), top, record("b")];

        let bottom: Vec<_> = state
            .visible_at(NotificationPosition::BottomRight)
            .into_iter()
            .map(|n| n.id.0)
            .collect();
        assert_eq!(bottom, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(state.visible_at(NotificationPosition::TopRight).len(), 1);
        assert!(state.visible_at(NotificationPosition::TopLeft).is_empty());
    }
}
