//! Provider-level configuration for the notification system.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::notifications::{AutoClose, NotificationPosition};

/// Default number of concurrently visible notifications.
pub const DEFAULT_LIMIT: usize = 5;
/// Default auto-close delay in milliseconds.
pub const DEFAULT_AUTO_CLOSE_MS: u32 = 4000;
/// Default exit transition duration in milliseconds.
pub const DEFAULT_TRANSITION_DURATION_MS: u32 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Source used to generate notification ids when the caller does not supply one.
pub enum IdSource {
    /// Random UUID v4 backed by the platform's secure random source.
    #[default]
    Uuid,
    /// Pseudo-random base-36 string seeded from the clock, for hosts without secure randomness.
    Base36,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Settings accepted by the notifications provider at initialization.
pub struct NotificationsConfig {
    /// Default screen position for notifications that do not name one.
    pub position: NotificationPosition,
    /// Default auto-close behavior for notifications that do not name one.
    pub auto_close: AutoClose,
    /// Maximum number of concurrently visible notifications.
    pub limit: usize,
    /// Exit transition length before a closed notification is removed from the store.
    pub transition_duration_ms: u32,
    /// Id generation strategy.
    pub id_source: IdSource,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            position: NotificationPosition::default(),
            auto_close: AutoClose::After(DEFAULT_AUTO_CLOSE_MS),
            limit: DEFAULT_LIMIT,
            transition_duration_ms: DEFAULT_TRANSITION_DURATION_MS,
            id_source: IdSource::default(),
        }
    }
}

impl NotificationsConfig {
    /// Parses and validates a JSON configuration payload. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] when `limit` is zero.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `limit` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit == 0 {
            return Err(ConfigError::Invalid {
                field: "limit",
                reason: "at least one notification must be visible".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = NotificationsConfig::from_json("{}").expect("parse");
        assert_eq!(config, NotificationsConfig::default());
        assert_eq!(config.position, NotificationPosition::BottomRight);
        assert_eq!(config.auto_close, AutoClose::After(4000));
    }

    #[test]
    fn auto_close_accepts_false_and_millis() {
        let config = NotificationsConfig::from_json(
            r#"{"position":"top-center","auto_close":false,"limit":2,"id_source":"base36"}"#,
        )
        .expect("parse");
        assert_eq!(config.position, NotificationPosition::TopCenter);
        assert_eq!(config.auto_close, AutoClose::Never);
        assert_eq!(config.limit, 2);
        assert_eq!(config.id_source, IdSource::Base36);

        let config = NotificationsConfig::from_json(r#"{"auto_close":1500}"#).expect("parse");
        assert_eq!(config.auto_close, AutoClose::After(1500));

        let config = NotificationsConfig::from_json(r#"{"auto_close":0}"#).expect("parse");
        assert_eq!(config.auto_close, AutoClose::Never);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let err = NotificationsConfig::from_json(r#"{"limit":0}"#).expect_err("invalid");
        assert!(matches!(err, ConfigError::Invalid { field: "limit", .. }));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = NotificationsConfig::from_json(r#"{"limt":3}"#).expect_err("unknown field");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
