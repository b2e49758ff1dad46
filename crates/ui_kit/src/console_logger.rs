//! `log` facade backend that forwards records to the Leptos console macros.
//!
//! `ui_headless` reports through `log`; installing this backend routes those records (unregistered
//! notification calls, replaced providers, ignored duplicates) to the browser console.

use leptos::logging;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct LeptosConsoleLogger;

static LOGGER: LeptosConsoleLogger = LeptosConsoleLogger;

impl Log for LeptosConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record.target();
        match record.level() {
            Level::Error => logging::error!("[{target}] {}", record.args()),
            Level::Warn => logging::warn!("[{target}] {}", record.args()),
            Level::Info | Level::Debug | Level::Trace => {
                logging::log!("[{target}] {}", record.args())
            }
        }
    }

    fn flush(&self) {}
}

/// Installs the console backend for the `log` facade and sets the maximum level.
///
/// # Errors
///
/// Returns [`SetLoggerError`] when another `log` backend is already installed; the existing
/// backend and level are left untouched.
pub fn install_console_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ui_headless::{NotificationHandlers, NotificationRegistry, UnregisteredPolicy};

    use super::*;

    #[test]
    fn installed_backend_receives_unregistered_call_warnings() {
        install_console_logger(LevelFilter::Warn).expect("first install");
        assert_eq!(log::max_level(), LevelFilter::Warn);

        let warn = Metadata::builder().level(Level::Warn).build();
        let info = Metadata::builder().level(Level::Info).build();
        assert!(log::logger().enabled(&warn));
        assert!(!log::logger().enabled(&info));

        let registry = NotificationRegistry::new();
        registry.set_policy(UnregisteredPolicy::Warn);
        let outcome = registry.dispatch_or_report("clean", |handlers| handlers.clean());
        assert!(outcome.is_err());

        assert!(install_console_logger(LevelFilter::Trace).is_err());
        assert_eq!(log::max_level(), LevelFilter::Warn);
    }
}
