//! Registry that routes notification calls from anywhere in the application to the active store.
//!
//! A provider registers its handlers on mount and unregisters on cleanup. Code outside the
//! component tree (request error handlers, background tasks) calls the free functions in this
//! module, which dispatch through the thread-local global registry.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::NotifyError;
use crate::notifications::model::{
    AutoClose, NotificationData, NotificationId, NotificationKind, NotificationPatch,
    NotificationsState,
};

/// Boxed state transform accepted by [`NotificationHandlers::update_state`].
pub type StateUpdate = Box<dyn FnOnce(&NotificationsState) -> NotificationsState>;

/// Imperative notification surface implemented by stores and providers.
pub trait NotificationHandlers {
    /// Shows a notification and returns its id.
    fn show(&self, data: NotificationData) -> NotificationId;
    /// Hides a notification by id.
    fn hide(&self, id: &NotificationId);
    /// Merges a patch into a notification by id.
    fn update(&self, id: &NotificationId, patch: NotificationPatch);
    /// Removes every notification.
    fn clean(&self);
    /// Removes queued notifications.
    fn clean_queue(&self);
    /// Changes the visible limit.
    fn set_limit(&self, limit: usize);
    /// Changes the default auto-close.
    fn set_auto_close(&self, auto_close: AutoClose);
    /// Reconciles limit, position, and auto-close from a state transform.
    fn update_state(&self, update: StateUpdate);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Token returned by [`NotificationRegistry::register`]; required to unregister.
pub struct Registration {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the free functions do when no handlers are registered.
pub enum UnregisteredPolicy {
    /// Panic with the [`NotifyError`] message.
    Panic,
    /// Log a warning and do nothing.
    Warn,
}

impl Default for UnregisteredPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Panic
        } else {
            Self::Warn
        }
    }
}

struct ActiveHandlers {
    generation: u64,
    handlers: Rc<dyn NotificationHandlers>,
}

/// Holds the currently registered [`NotificationHandlers`].
///
/// The most recent registration wins. Unregistering with a stale [`Registration`] is ignored, so an
/// older provider unmounting never removes a newer one.
pub struct NotificationRegistry {
    active: RefCell<Option<ActiveHandlers>>,
    next_generation: Cell<u64>,
    policy: Cell<UnregisteredPolicy>,
}

impl Default for NotificationRegistry {
    fn default() -> Self {
        Self {
            active: RefCell::new(None),
            next_generation: Cell::new(1),
            policy: Cell::new(UnregisteredPolicy::default()),
        }
    }
}

impl NotificationRegistry {
    /// Empty registry with the build-dependent default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `handlers` the dispatch target, replacing any previous registration.
    pub fn register(&self, handlers: Rc<dyn NotificationHandlers>) -> Registration {
        let generation = self.next_generation.get();
        self.next_generation.set(generation.wrapping_add(1));
        let replaced = self
            .active
            .replace(Some(ActiveHandlers {
                generation,
                handlers,
            }))
            .is_some();
        if replaced {
            log::warn!("notifications provider registered while another was active; the newest wins");
        }
        Registration { generation }
    }

    /// Clears the dispatch target if `registration` is still the active one.
    ///
    /// Returns whether the registry was cleared.
    pub fn unregister(&self, registration: Registration) -> bool {
        let mut active = self.active.borrow_mut();
        match active.as_ref() {
            Some(current) if current.generation == registration.generation => {
                *active = None;
                true
            }
            _ => false,
        }
    }

    /// Whether handlers are registered.
    pub fn is_registered(&self) -> bool {
        self.active.borrow().is_some()
    }

    /// Current unregistered-call policy.
    pub fn policy(&self) -> UnregisteredPolicy {
        self.policy.get()
    }

    /// Replaces the unregistered-call policy.
    pub fn set_policy(&self, policy: UnregisteredPolicy) {
        self.policy.set(policy);
    }

    /// Runs `call` against the registered handlers.
    ///
    /// The handlers are cloned out of the registry before the call so handlers may re-enter the
    /// registry (for example, to register a replacement).
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::NotRegistered`] when no handlers are registered.
    pub fn dispatch<R>(
        &self,
        operation: &'static str,
        call: impl FnOnce(&dyn NotificationHandlers) -> R,
    ) -> Result<R, NotifyError> {
        let handlers = self
            .active
            .borrow()
            .as_ref()
            .map(|active| Rc::clone(&active.handlers));
        match handlers {
            Some(handlers) => Ok(call(handlers.as_ref())),
            None => Err(NotifyError::NotRegistered { operation }),
        }
    }

    /// Like [`Self::dispatch`] but applies the [`UnregisteredPolicy`] to failures.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::NotRegistered`] under [`UnregisteredPolicy::Warn`].
    ///
    /// # Panics
    ///
    /// Panics under [`UnregisteredPolicy::Panic`] when no handlers are registered.
    pub fn dispatch_or_report<R>(
        &self,
        operation: &'static str,
        call: impl FnOnce(&dyn NotificationHandlers) -> R,
    ) -> Result<R, NotifyError> {
        self.dispatch(operation, call).inspect_err(|err| match self.policy() {
            UnregisteredPolicy::Panic => panic!("{err}"),
            UnregisteredPolicy::Warn => log::warn!("{err}"),
        })
    }
}

thread_local! {
    static GLOBAL_REGISTRY: NotificationRegistry = NotificationRegistry::new();
}

/// Runs `f` with the thread-local global registry.
pub fn with_global_registry<R>(f: impl FnOnce(&NotificationRegistry) -> R) -> R {
    GLOBAL_REGISTRY.with(f)
}

/// Registers `handlers` with the global registry.
pub fn register_global(handlers: Rc<dyn NotificationHandlers>) -> Registration {
    with_global_registry(|registry| registry.register(handlers))
}

/// Unregisters from the global registry; see [`NotificationRegistry::unregister`].
pub fn unregister_global(registration: Registration) -> bool {
    with_global_registry(|registry| registry.unregister(registration))
}

fn dispatch_global<R>(
    operation: &'static str,
    call: impl FnOnce(&dyn NotificationHandlers) -> R,
) -> Result<R, NotifyError> {
    with_global_registry(|registry| registry.dispatch_or_report(operation, call))
}

/// Shows a notification through the global registry.
///
/// # Errors
///
/// Returns [`NotifyError::NotRegistered`] when no provider is registered (warn policy).
pub fn show(data: NotificationData) -> Result<NotificationId, NotifyError> {
    dispatch_global("show", |handlers| handlers.show(data))
}

/// Hides a notification through the global registry.
///
/// # Errors
///
/// Returns [`NotifyError::NotRegistered`] when no provider is registered (warn policy).
pub fn hide(id: &NotificationId) -> Result<(), NotifyError> {
    dispatch_global("hide", |handlers| handlers.hide(id))
}

/// Updates a notification through the global registry.
///
/// # Errors
///
/// Returns [`NotifyError::NotRegistered`] when no provider is registered (warn policy).
pub fn update(id: &NotificationId, patch: NotificationPatch) -> Result<(), NotifyError> {
    dispatch_global("update", |handlers| handlers.update(id, patch))
}

/// Removes every notification through the global registry.
///
/// # Errors
///
/// Returns [`NotifyError::NotRegistered`] when no provider is registered (warn policy).
pub fn clean() -> Result<(), NotifyError> {
    dispatch_global("clean", |handlers| handlers.clean())
}

/// Removes queued notifications through the global registry.
///
/// # Errors
///
/// Returns [`NotifyError::NotRegistered`] when no provider is registered (warn policy).
pub fn clean_queue() -> Result<(), NotifyError> {
    dispatch_global("clean_queue", |handlers| handlers.clean_queue())
}

/// Changes the visible limit through the global registry.
///
/// # Errors
///
/// Returns [`NotifyError::NotRegistered`] when no provider is registered (warn policy).
pub fn set_limit(limit: usize) -> Result<(), NotifyError> {
    dispatch_global("set_limit", |handlers| handlers.set_limit(limit))
}

/// Changes the default auto-close through the global registry.
///
/// # Errors
///
/// Returns [`NotifyError::NotRegistered`] when no provider is registered (warn policy).
pub fn set_auto_close(auto_close: AutoClose) -> Result<(), NotifyError> {
    dispatch_global("set_auto_close", |handlers| {
        handlers.set_auto_close(auto_close)
    })
}

/// Reconciles store defaults from a state transform through the global registry.
///
/// # Errors
///
/// Returns [`NotifyError::NotRegistered`] when no provider is registered (warn policy).
pub fn update_state(
    update: impl FnOnce(&NotificationsState) -> NotificationsState + 'static,
) -> Result<(), NotifyError> {
    dispatch_global("update_state", |handlers| {
        handlers.update_state(Box::new(update))
    })
}

fn show_preset(
    kind: NotificationKind,
    message: impl Into<String>,
) -> Result<NotificationId, NotifyError> {
    show(NotificationData::new(message).preset(kind))
}

/// Shows a success notification.
///
/// # Errors
///
/// Returns [`NotifyError::NotRegistered`] when no provider is registered (warn policy).
pub fn success(message: impl Into<String>) -> Result<NotificationId, NotifyError> {
    show_preset(NotificationKind::Success, message)
}

/// Shows an error notification.
///
/// # Errors
///
/// Returns [`NotifyError::NotRegistered`] when no provider is registered (warn policy).
pub fn error(message: impl Into<String>) -> Result<NotificationId, NotifyError> {
    show_preset(NotificationKind::Error, message)
}

/// Shows a warning notification.
///
/// # Errors
///
/// Returns [`NotifyError::NotRegistered`] when no provider is registered (warn policy).
pub fn warning(message: impl Into<String>) -> Result<NotificationId, NotifyError> {
    show_preset(NotificationKind::Warning, message)
}

/// Shows an informational notification.
///
/// # Errors
///
/// Returns [`NotifyError::NotRegistered`] when no provider is registered (warn policy).
pub fn info(message: impl Into<String>) -> Result<NotificationId, NotifyError> {
    show_preset(NotificationKind::Info, message)
}

/// Shows a persistent loading notification; update it by id once the work settles.
///
/// # Errors
///
/// Returns [`NotifyError::NotRegistered`] when no provider is registered (warn policy).
pub fn loading(message: impl Into<String>) -> Result<NotificationId, NotifyError> {
    show(
        NotificationData::new(message)
            .with_loading(true)
            .with_auto_close(AutoClose::Never)
            .with_close_button(false),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::notifications::store::{NotificationStore, SharedNotificationStore};

    fn shared() -> SharedNotificationStore {
        SharedNotificationStore::new(NotificationStore::default())
    }

    #[test]
    fn dispatch_before_registration_is_rejected() {
        let registry = NotificationRegistry::new();
        let result = registry.dispatch("show", |handlers| {
            handlers.show(NotificationData::new("x"))
        });
        assert_eq!(result, Err(NotifyError::NotRegistered { operation: "show" }));
    }

    #[test]
    fn register_dispatch_unregister() {
        let registry = NotificationRegistry::new();
        let store = shared();
        let registration = registry.register(Rc::new(store.clone()));

        let id = registry
            .dispatch("show", |handlers| handlers.show(NotificationData::new("x")))
            .expect("registered");
        assert!(store.snapshot().is_visible(&id));

        assert!(registry.unregister(registration));
        assert!(!registry.is_registered());
        assert!(registry.dispatch("clean", |handlers| handlers.clean()).is_err());
    }

    #[test]
    fn stale_registration_does_not_clear_newer_provider() {
        let registry = NotificationRegistry::new();
        let first = shared();
        let second = shared();
        let first_registration = registry.register(Rc::new(first.clone()));
        let _second_registration = registry.register(Rc::new(second.clone()));

        assert!(!registry.unregister(first_registration));
        assert!(registry.is_registered());

        let id = registry
            .dispatch("show", |handlers| handlers.show(NotificationData::new("x")))
            .expect("registered");
        assert!(second.snapshot().contains(&id));
        assert!(first.snapshot().notifications.is_empty());
    }

    #[test]
    fn warn_policy_reports_without_panicking() {
        let registry = NotificationRegistry::new();
        registry.set_policy(UnregisteredPolicy::Warn);
        let result = registry.dispatch_or_report("hide", |handlers| handlers.hide(&"x".into()));
        assert_eq!(result, Err(NotifyError::NotRegistered { operation: "hide" }));
    }

    #[test]
    #[should_panic(expected = "notifications provider is not registered")]
    fn panic_policy_fails_fast() {
        let registry = NotificationRegistry::new();
        registry.set_policy(UnregisteredPolicy::Panic);
        let _ = registry.dispatch_or_report("clean", |handlers| handlers.clean());
    }

    #[test]
    fn global_free_functions_route_to_registered_store() {
        let store = shared();
        let registration = register_global(Rc::new(store.clone()));

        let saved = success("Saved").expect("registered");
        let pending = loading("Uploading").expect("registered");
        update(
            &pending,
            NotificationPatch {
                loading: Some(false),
                message: Some("Uploaded".to_string()),
                ..NotificationPatch::default()
            },
        )
        .expect("registered");
        set_limit(1).expect("registered");

        let snapshot = store.snapshot();
        let saved_record = snapshot.find(&saved).expect("saved record");
        assert_eq!(saved_record.kind, NotificationKind::Success);
        assert_eq!(saved_record.title.as_deref(), Some("Success"));
        let pending_record = snapshot.find(&pending).expect("pending record");
        assert_eq!(pending_record.message, "Uploaded");
        assert!(!pending_record.loading);
        assert_eq!(pending_record.auto_close, AutoClose::Never);
        assert_eq!(snapshot.notifications.len(), 1);
        assert_eq!(snapshot.queue.len(), 1);

        hide(&saved).expect("registered");
        assert!(store.snapshot().is_visible(&pending));

        assert!(unregister_global(registration));
        with_global_registry(|registry| registry.set_policy(UnregisteredPolicy::Warn));
        assert!(info("late").is_err());
    }
}
