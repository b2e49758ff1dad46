//! Imperative store wrapping the notification reducer.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{IdSource, NotificationsConfig};
use crate::notifications::model::{
    AutoClose, NotificationData, NotificationId, NotificationPatch, NotificationPosition,
    NotificationsState,
};
use crate::notifications::reducer::{reduce_notifications, NotificationAction};
use crate::notifications::registry::{NotificationHandlers, StateUpdate};
use crate::time::unix_time_ms_now;

/// Source of identifiers for notifications shown without one.
pub trait IdGenerator {
    /// Returns a new, non-empty identifier.
    fn next_id(&mut self) -> NotificationId;
}

#[derive(Debug, Default, Clone, Copy)]
/// Random UUID v4 identifiers.
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> NotificationId {
        NotificationId(uuid::Uuid::new_v4().to_string())
    }
}

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const BASE36_ID_LEN: usize = 9;

#[derive(Debug, Clone)]
/// Pseudo-random base-36 identifiers (`ui-` prefix) for hosts without secure randomness.
pub struct Base36IdGenerator {
    rng: SmallRng,
}

impl Base36IdGenerator {
    /// Generator seeded from the current clock.
    pub fn from_clock() -> Self {
        Self::with_seed(unix_time_ms_now())
    }

    /// Generator with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl IdGenerator for Base36IdGenerator {
    fn next_id(&mut self) -> NotificationId {
        let mut id = String::with_capacity(3 + BASE36_ID_LEN);
        id.push_str("ui-");
        for _ in 0..BASE36_ID_LEN {
            let digit = self.rng.random_range(0..BASE36_DIGITS.len());
            id.push(char::from(BASE36_DIGITS[digit]));
        }
        NotificationId(id)
    }
}

/// Builds the id generator named by `source`.
pub fn id_generator_for(source: IdSource) -> Box<dyn IdGenerator> {
    match source {
        IdSource::Uuid => Box::new(UuidIdGenerator),
        IdSource::Base36 => Box::new(Base36IdGenerator::from_clock()),
    }
}

/// Notification store: reducer state plus id generation and default resolution.
pub struct NotificationStore {
    state: NotificationsState,
    ids: Box<dyn IdGenerator>,
}

impl std::fmt::Debug for NotificationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new(&NotificationsConfig::default())
    }
}

impl NotificationStore {
    /// Empty store initialized from provider configuration.
    pub fn new(config: &NotificationsConfig) -> Self {
        Self::with_id_generator(config, id_generator_for(config.id_source))
    }

    /// Empty store using a caller-supplied id generator.
    pub fn with_id_generator(config: &NotificationsConfig, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            state: NotificationsState::new(config.limit, config.position, config.auto_close),
            ids,
        }
    }

    /// Current state.
    pub fn state(&self) -> &NotificationsState {
        &self.state
    }

    /// Applies a raw reducer action.
    pub fn dispatch(&mut self, action: NotificationAction) {
        reduce_notifications(&mut self.state, action);
    }

    /// Shows a notification and returns its id, generating one when the payload has none.
    pub fn show(&mut self, mut data: NotificationData) -> NotificationId {
        let id = match data.id.take() {
            Some(id) if !id.as_str().is_empty() => id,
            _ => self.ids.next_id(),
        };
        let notification = data.resolve(id.clone(), &self.state);
        self.dispatch(NotificationAction::Show(notification));
        id
    }

    /// Hides a visible or queued notification.
    pub fn hide(&mut self, id: &NotificationId) {
        self.dispatch(NotificationAction::Hide(id.clone()));
    }

    /// Merges `patch` into the notification with `id`.
    pub fn update(&mut self, id: &NotificationId, patch: NotificationPatch) {
        self.dispatch(NotificationAction::Update {
            id: id.clone(),
            patch,
        });
    }

    /// Removes every notification.
    pub fn clean(&mut self) {
        self.dispatch(NotificationAction::Clean);
    }

    /// Removes queued notifications.
    pub fn clean_queue(&mut self) {
        self.dispatch(NotificationAction::CleanQueue);
    }

    /// Changes the visible limit.
    pub fn set_limit(&mut self, limit: usize) {
        self.dispatch(NotificationAction::SetLimit(limit));
    }

    /// Changes the default position.
    pub fn set_position(&mut self, position: NotificationPosition) {
        self.dispatch(NotificationAction::SetPosition(position));
    }

    /// Changes the default auto-close.
    pub fn set_auto_close(&mut self, auto_close: AutoClose) {
        self.dispatch(NotificationAction::SetAutoClose(auto_close));
    }

    /// Runs `update` against a snapshot and reconciles the limit, position, and auto-close deltas.
    ///
    /// Changes to the notification lists made by `update` are ignored.
    pub fn update_state(&mut self, update: impl FnOnce(&NotificationsState) -> NotificationsState) {
        let next = update(&self.state);
        let mut actions = Vec::new();
        if next.position != self.state.position {
            actions.push(NotificationAction::SetPosition(next.position));
        }
        if next.auto_close != self.state.auto_close {
            actions.push(NotificationAction::SetAutoClose(next.auto_close));
        }
        if next.limit != self.state.limit {
            actions.push(NotificationAction::SetLimit(next.limit));
        }
        for action in actions {
            self.dispatch(action);
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Shared, interior-mutable store for hosts that register a store without a reactive runtime.
pub struct SharedNotificationStore(Rc<RefCell<NotificationStore>>);

impl SharedNotificationStore {
    /// Wraps `store`.
    pub fn new(store: NotificationStore) -> Self {
        Self(Rc::new(RefCell::new(store)))
    }

    /// Snapshot of the current state.
    pub fn snapshot(&self) -> NotificationsState {
        self.0.borrow().state().clone()
    }
}

impl NotificationHandlers for SharedNotificationStore {
    fn show(&self, data: NotificationData) -> NotificationId {
        self.0.borrow_mut().show(data)
    }

    fn hide(&self, id: &NotificationId) {
        self.0.borrow_mut().hide(id);
    }

    fn update(&self, id: &NotificationId, patch: NotificationPatch) {
        self.0.borrow_mut().update(id, patch);
    }

    fn clean(&self) {
        self.0.borrow_mut().clean();
    }

    fn clean_queue(&self) {
        self.0.borrow_mut().clean_queue();
    }

    fn set_limit(&self, limit: usize) {
        self.0.borrow_mut().set_limit(limit);
    }

    fn set_auto_close(&self, auto_close: AutoClose) {
        self.0.borrow_mut().set_auto_close(auto_close);
    }

    fn update_state(&self, update: StateUpdate) {
        self.0.borrow_mut().update_state(update);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn show_without_id_generates_distinct_ids() {
        let mut store = NotificationStore::default();
        let first = store.show(NotificationData::new("x"));
        let second = store.show(NotificationData::new("x"));

        assert!(!first.as_str().is_empty());
        assert!(!second.as_str().is_empty());
        assert_ne!(first, second);
        assert!(store.state().is_visible(&first));
    }

    #[test]
    fn show_keeps_caller_id() {
        let mut store = NotificationStore::default();
        let id = store.show(NotificationData::new("x").with_id("upload"));
        assert_eq!(id.as_str(), "upload");
        assert!(store.state().contains(&"upload".into()));
    }

    #[test]
    fn empty_caller_id_is_replaced() {
        let mut store = NotificationStore::default();
        let id = store.show(NotificationData::new("x").with_id(""));
        assert!(!id.as_str().is_empty());
    }

    #[test]
    fn base36_ids_are_prefixed_and_distinct() {
        let mut ids = Base36IdGenerator::with_seed(7);
        let first = ids.next_id();
        let second = ids.next_id();

        assert!(first.as_str().starts_with("ui-"));
        assert_eq!(first.as_str().len(), 3 + BASE36_ID_LEN);
        assert!(first.as_str()[3..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_ne!(first, second);
    }

    #[test]
    fn show_resolves_defaults_from_current_store_state() {
        let config = NotificationsConfig {
            position: NotificationPosition::TopRight,
            auto_close: AutoClose::After(1000),
            ..NotificationsConfig::default()
        };
        let mut store = NotificationStore::new(&config);
        let first = store.show(NotificationData::new("first"));
        store.set_auto_close(AutoClose::Never);
        let second = store.show(NotificationData::new("second"));

        let state = store.state();
        assert_eq!(state.find(&first).map(|n| n.auto_close), Some(AutoClose::After(1000)));
        assert_eq!(state.find(&second).map(|n| n.auto_close), Some(AutoClose::Never));
        assert_eq!(
            state.find(&second).map(|n| n.position),
            Some(NotificationPosition::TopRight)
        );
    }

    #[test]
    fn update_state_reconciles_only_defaults() {
        let config = NotificationsConfig {
            limit: 3,
            ..NotificationsConfig::default()
        };
        let mut store = NotificationStore::new(&config);
        for message in ["a", "b", "c"] {
            store.show(NotificationData::new(message));
        }

        store.update_state(|current| NotificationsState {
            limit: 1,
            position: NotificationPosition::TopLeft,
            notifications: Vec::new(),
            ..current.clone()
        });

        let state = store.state();
        assert_eq!(state.limit, 1);
        assert_eq!(state.position, NotificationPosition::TopLeft);
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.queue.len(), 2);
    }

    #[test]
    fn shared_store_handlers_mutate_the_inner_store() {
        let shared = SharedNotificationStore::default();
        let id = NotificationHandlers::show(&shared, NotificationData::new("hello"));
        NotificationHandlers::update(
            &shared,
            &id,
            NotificationPatch {
                title: Some(Some("Greeting".to_string())),
                ..NotificationPatch::default()
            },
        );

        let snapshot = shared.snapshot();
        assert_eq!(
            snapshot.find(&id).and_then(|n| n.title.clone()).as_deref(),
            Some("Greeting")
        );

        NotificationHandlers::hide(&shared, &id);
        assert!(shared.snapshot().notifications.is_empty());
    }
}
