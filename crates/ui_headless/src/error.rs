//! Error types surfaced by the headless layer.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures of the notification dispatch surface.
///
/// Reducer and store operations are total; the only failure is reaching the global registry while
/// no provider is registered.
pub enum NotifyError {
    /// A call was routed through the global registry before a provider registered itself, or after
    /// it unregistered.
    #[error("notifications provider is not registered; mount a NotificationsProvider before calling `{operation}`")]
    NotRegistered {
        /// Operation that was attempted.
        operation: &'static str,
    },
}

#[derive(Debug, Error)]
/// Failures while loading [`crate::NotificationsConfig`].
pub enum ConfigError {
    /// The configuration payload was not valid JSON for the config schema.
    #[error("invalid notifications config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configuration parsed but carried an unusable value.
    #[error("invalid notifications config field `{field}`: {reason}")]
    Invalid {
        /// Offending field name.
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },
}
