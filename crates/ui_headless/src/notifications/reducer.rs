//! Reducer actions and transition logic for the notification store.

use crate::notifications::model::{
    AutoClose, Notification, NotificationId, NotificationPatch, NotificationPosition,
    NotificationsState,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_notifications`].
pub enum NotificationAction {
    /// Show a resolved notification, queueing it when the visible set is full.
    Show(Notification),
    /// Remove a notification by id, promoting the queue head when a visible slot frees up.
    Hide(NotificationId),
    /// Shallow-merge a patch into the notification with the given id.
    Update {
        /// Target notification.
        id: NotificationId,
        /// Fields to overwrite.
        patch: NotificationPatch,
    },
    /// Drop every visible and queued notification.
    Clean,
    /// Drop queued notifications only.
    CleanQueue,
    /// Change the visible limit.
    SetLimit(usize),
    /// Change the default position for future notifications.
    SetPosition(NotificationPosition),
    /// Change the default auto-close for future notifications.
    SetAutoClose(AutoClose),
}

/// Applies a [`NotificationAction`] to the notification store state.
///
/// Every action is total: unknown ids and duplicate shows are ignored rather than reported.
pub fn reduce_notifications(state: &mut NotificationsState, action: NotificationAction) {
    match action {
        NotificationAction::Show(notification) => {
            if state.contains(&notification.id) {
                log::debug!("ignoring duplicate notification id {}", notification.id);
                return;
            }
            if state.notifications.len() < state.limit {
                state.notifications.push(notification);
            } else {
                state.queue.push(notification);
            }
        }
        NotificationAction::Hide(id) => {
            if let Some(index) = state.notifications.iter().position(|n| n.id == id) {
                state.notifications.remove(index);
                promote_from_queue(state);
            } else if let Some(index) = state.queue.iter().position(|n| n.id == id) {
                state.queue.remove(index);
            }
        }
        NotificationAction::Update { id, patch } => {
            let target = state
                .notifications
                .iter_mut()
                .chain(state.queue.iter_mut())
                .find(|n| n.id == id);
            if let Some(target) = target {
                patch.merge_into(target);
            }
        }
        NotificationAction::Clean => {
            state.notifications.clear();
            state.queue.clear();
        }
        NotificationAction::CleanQueue => state.queue.clear(),
        NotificationAction::SetLimit(limit) => {
            state.limit = limit.max(1);
            rebalance(state);
        }
        NotificationAction::SetPosition(position) => state.position = position,
        NotificationAction::SetAutoClose(auto_close) => state.auto_close = auto_close,
    }
}

fn promote_from_queue(state: &mut NotificationsState) {
    while state.notifications.len() < state.limit && !state.queue.is_empty() {
        let next = state.queue.remove(0);
        state.notifications.push(next);
    }
}

fn rebalance(state: &mut NotificationsState) {
    if state.notifications.len() > state.limit {
        let overflow = state.notifications.split_off(state.limit);
        state.queue.splice(0..0, overflow);
    }
    promote_from_queue(state);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::notifications::model::NotificationData;

    fn show(state: &mut NotificationsState, id: &str) {
        let notification = NotificationData::new(format!("message {id}")).resolve(id.into(), state);
        reduce_notifications(state, NotificationAction::Show(notification));
    }

    fn ids(list: &[Notification]) -> Vec<&str> {
        list.iter().map(|n| n.id.as_str()).collect()
    }

    fn limited(limit: usize) -> NotificationsState {
        NotificationsState::new(limit, NotificationPosition::default(), AutoClose::default())
    }

    #[test]
    fn shows_beyond_limit_queue_in_call_order() {
        let mut state = limited(3);
        for id in ["a", "b", "c", "d", "e", "f"] {
            show(&mut state, id);
            assert!(state.notifications.len() <= state.limit);
        }

        assert_eq!(ids(&state.notifications), vec!["a", "b", "c"]);
        assert_eq!(ids(&state.queue), vec!["d", "e", "f"]);
    }

    #[test]
    fn limit_two_scenario_promotes_and_ignores_unknown() {
        let mut state = limited(2);
        show(&mut state, "A");
        show(&mut state, "B");
        show(&mut state, "C");
        assert_eq!(ids(&state.notifications), vec!["A", "B"]);
        assert_eq!(ids(&state.queue), vec!["C"]);

        reduce_notifications(&mut state, NotificationAction::Hide("A".into()));
        assert_eq!(ids(&state.notifications), vec!["B", "C"]);
        assert!(state.queue.is_empty());

        let before = state.clone();
        reduce_notifications(&mut state, NotificationAction::Hide("Z".into()));
        assert_eq!(state, before);
    }

    #[test]
    fn hiding_visible_promotes_oldest_queued() {
        let mut state = limited(2);
        for id in ["a", "b", "c", "d"] {
            show(&mut state, id);
        }

        reduce_notifications(&mut state, NotificationAction::Hide("b".into()));

        assert_eq!(state.notifications.len(), 2);
        assert_eq!(ids(&state.notifications), vec!["a", "c"]);
        assert_eq!(ids(&state.queue), vec!["d"]);
    }

    #[test]
    fn hiding_queued_item_leaves_visible_untouched() {
        let mut state = limited(1);
        for id in ["a", "b", "c"] {
            show(&mut state, id);
        }

        reduce_notifications(&mut state, NotificationAction::Hide("b".into()));

        assert_eq!(ids(&state.notifications), vec!["a"]);
        assert_eq!(ids(&state.queue), vec!["c"]);
    }

    #[test]
    fn update_merges_into_visible_or_queued_record() {
        let mut state = limited(1);
        show(&mut state, "a");
        show(&mut state, "b");

        reduce_notifications(
            &mut state,
            NotificationAction::Update {
                id: "b".into(),
                patch: NotificationPatch {
                    title: Some(Some("Queued title".to_string())),
                    ..NotificationPatch::default()
                },
            },
        );
        reduce_notifications(
            &mut state,
            NotificationAction::Update {
                id: "a".into(),
                patch: NotificationPatch {
                    message: Some("changed".to_string()),
                    ..NotificationPatch::default()
                },
            },
        );

        let visible = &state.notifications[0];
        assert_eq!(visible.message, "changed");
        assert_eq!(visible.title, None);
        let queued = &state.queue[0];
        assert_eq!(queued.title.as_deref(), Some("Queued title"));
        assert_eq!(queued.message, "message b");
    }

    #[test]
    fn update_of_unknown_id_is_noop() {
        let mut state = limited(2);
        show(&mut state, "a");
        let before = state.clone();

        reduce_notifications(
            &mut state,
            NotificationAction::Update {
                id: "missing".into(),
                patch: NotificationPatch {
                    message: Some("x".to_string()),
                    ..NotificationPatch::default()
                },
            },
        );

        assert_eq!(state, before);
    }

    #[test]
    fn clean_and_clean_queue() {
        let mut state = limited(1);
        for id in ["a", "b", "c"] {
            show(&mut state, id);
        }

        reduce_notifications(&mut state, NotificationAction::CleanQueue);
        assert_eq!(ids(&state.notifications), vec!["a"]);
        assert!(state.queue.is_empty());

        show(&mut state, "d");
        reduce_notifications(&mut state, NotificationAction::Clean);
        assert!(state.notifications.is_empty());
        assert!(state.queue.is_empty());
    }

    #[test]
    fn duplicate_id_is_ignored() {
        let mut state = limited(1);
        show(&mut state, "a");
        show(&mut state, "a");
        show(&mut state, "b");
        show(&mut state, "b");

        assert_eq!(ids(&state.notifications), vec!["a"]);
        assert_eq!(ids(&state.queue), vec!["b"]);
    }

    #[test]
    fn set_limit_rebalances_visible_and_queue() {
        let mut state = limited(3);
        for id in ["a", "b", "c", "d"] {
            show(&mut state, id);
        }

        reduce_notifications(&mut state, NotificationAction::SetLimit(1));
        assert_eq!(ids(&state.notifications), vec!["a"]);
        assert_eq!(ids(&state.queue), vec!["b", "c", "d"]);

        reduce_notifications(&mut state, NotificationAction::SetLimit(3));
        assert_eq!(ids(&state.notifications), vec!["a", "b", "c"]);
        assert_eq!(ids(&state.queue), vec!["d"]);

        reduce_notifications(&mut state, NotificationAction::SetLimit(0));
        assert_eq!(state.limit, 1);
    }

    #[test]
    fn defaults_do_not_touch_existing_records() {
        let mut state = limited(2);
        show(&mut state, "a");

        reduce_notifications(
            &mut state,
            NotificationAction::SetPosition(NotificationPosition::TopCenter),
        );
        reduce_notifications(&mut state, NotificationAction::SetAutoClose(AutoClose::Never));
        show(&mut state, "b");

        assert_eq!(state.notifications[0].position, NotificationPosition::BottomRight);
        assert_eq!(state.notifications[0].auto_close, AutoClose::default());
        assert_eq!(state.notifications[1].position, NotificationPosition::TopCenter);
        assert_eq!(state.notifications[1].auto_close, AutoClose::Never);
    }
}
