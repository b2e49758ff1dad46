//! Notification provider, viewport regions, and per-notification auto-dismiss wiring.
//!
//! [`NotificationsProvider`] owns a [`NotificationStore`], mirrors its state into a signal for
//! rendering, and registers itself with the global registry so
//! `ui_headless::notifications::show` and friends work from anywhere in the application.

use std::rc::Rc;
use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use ui_headless::notifications::{
    register_global, unregister_global, AutoClose, DismissTimer, Notification, NotificationData,
    NotificationHandlers, NotificationId, NotificationPatch, NotificationPosition,
    NotificationStore, NotificationsState, StateUpdate, TimerTick,
};
use ui_headless::{unix_time_ms_now, NotificationsConfig};

use crate::primitives::{bool_token, merge_layout_class};
use crate::{Icon, IconButton, IconName, IconSize, Loader};

#[derive(Clone, Copy)]
/// Leptos context for reading notification state and driving the store.
pub struct NotificationsContext {
    /// Reactive mirror of the store state.
    pub state: RwSignal<NotificationsState>,
    store: StoredValue<NotificationStore>,
    transition_duration_ms: u32,
}

impl NotificationsContext {
    fn new(config: &NotificationsConfig) -> Self {
        let store = NotificationStore::new(config);
        Self {
            state: create_rw_signal(store.state().clone()),
            store: store_value(store),
            transition_duration_ms: config.transition_duration_ms,
        }
    }

    /// Exit transition length applied before a closed notification leaves the store.
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.transition_duration_ms))
    }

    fn with_store<R>(
        &self,
        operation: &'static str,
        apply: impl FnOnce(&mut NotificationStore) -> R,
    ) -> Option<R> {
        let outcome = self.store.try_update_value(|store| {
            let result = apply(store);
            (result, store.state().clone())
        });
        let Some((result, next)) = outcome else {
            logging::warn!("notifications `{operation}` called after the provider was disposed");
            return None;
        };
        if self.state.with_untracked(|state| *state != next) {
            self.state.set(next);
        }
        Some(result)
    }

    /// Changes the default position for notifications shown later.
    pub fn set_position(&self, position: NotificationPosition) {
        self.with_store("set_position", |store| store.set_position(position));
    }

    /// Resolved record for `id`, tracked.
    pub fn find(&self, id: &NotificationId) -> Option<Notification> {
        self.state.with(|state| state.find(id).cloned())
    }
}

impl NotificationHandlers for NotificationsContext {
    fn show(&self, data: NotificationData) -> NotificationId {
        let fallback = data.id.clone();
        self.with_store("show", |store| store.show(data))
            .or(fallback)
            .unwrap_or_else(|| NotificationId::from(String::new()))
    }

    fn hide(&self, id: &NotificationId) {
        self.with_store("hide", |store| store.hide(id));
    }

    fn update(&self, id: &NotificationId, patch: NotificationPatch) {
        self.with_store("update", |store| store.update(id, patch));
    }

    fn clean(&self) {
        self.with_store("clean", NotificationStore::clean);
    }

    fn clean_queue(&self) {
        self.with_store("clean_queue", NotificationStore::clean_queue);
    }

    fn set_limit(&self, limit: usize) {
        self.with_store("set_limit", |store| store.set_limit(limit));
    }

    fn set_auto_close(&self, auto_close: AutoClose) {
        self.with_store("set_auto_close", |store| store.set_auto_close(auto_close));
    }

    fn update_state(&self, update: StateUpdate) {
        self.with_store("update_state", |store| store.update_state(update));
    }
}

#[component]
/// Provides [`NotificationsContext`] to descendants, registers it globally, and renders the
/// notification regions after `children`.
pub fn NotificationsProvider(
    /// Store defaults; invalid configurations fall back to [`NotificationsConfig::default`].
    #[prop(optional)]
    config: Option<NotificationsConfig>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let config = match config {
        Some(config) => match config.validate() {
            Ok(()) => config,
            Err(err) => {
                logging::warn!("notifications config rejected, using defaults: {err}");
                NotificationsConfig::default()
            }
        },
        None => NotificationsConfig::default(),
    };

    let notifications = NotificationsContext::new(&config);
    provide_context(notifications);

    let registration = register_global(Rc::new(notifications));
    on_cleanup(move || {
        unregister_global(registration);
    });

    view! {
        {children()}
        <NotificationsContainer layout_class=layout_class.unwrap_or("") />
    }
}

/// Returns the current [`NotificationsContext`].
///
/// # Panics
///
/// Panics if called outside [`NotificationsProvider`].
pub fn use_notifications() -> NotificationsContext {
    use_context::<NotificationsContext>().expect("NotificationsContext not provided")
}

#[component]
/// Six fixed viewport regions, one per [`NotificationPosition`], each listing its visible
/// notifications in store order.
pub fn NotificationsContainer(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    let notifications = use_notifications();

    NotificationPosition::ALL
        .into_iter()
        .map(|position| {
            let visible = create_memo(move |_| {
                notifications
                    .state
                    .with(|state| state.visible_at(position))
                    .into_iter()
                    .map(|notification| notification.id)
                    .collect::<Vec<_>>()
            });
            view! {
                <div
                    class=merge_layout_class("ui-notifications", layout_class)
                    role="region"
                    aria-label="Notifications"
                    aria-live="polite"
                    data-ui-primitive="true"
                    data-ui-kind="notifications"
                    data-ui-position=position.token()
                    data-ui-empty=move || bool_token(visible.with(Vec::is_empty))
                >
                    <For
                        each=move || visible.get()
                        key=|id| id.clone()
                        children=move |id| view! { <NotificationItem id=id /> }
                    />
                </div>
            }
        })
        .collect_view()
}

fn notification_style(notification: &Notification, transition_ms: u32) -> String {
    let mut style = format!("--ui-notification-transition: {transition_ms}ms;");
    if let Some(color) = notification.color.as_deref() {
        style.push_str(&format!(" --ui-notification-color: {color};"));
    }
    style
}

/// Millisecond clock for dismiss timers.
///
/// `performance.now()` is monotonic like the `setTimeout` scheduler, so wall-clock adjustments
/// cannot stretch or shrink a countdown.
fn timer_clock_ms() -> u64 {
    window()
        .performance()
        .map(|performance| performance.now().max(0.0) as u64)
        .unwrap_or_else(unix_time_ms_now)
}

/// Replaces the pending dismiss timeout with one matching the timer's current state.
///
/// A timeout that fires before the deadline re-arms itself for the remainder.
fn arm_dismiss_timeout<F>(
    timer: StoredValue<DismissTimer>,
    slot: StoredValue<Option<TimeoutHandle>>,
    close: F,
) where
    F: Fn() + Copy + 'static,
{
    if let Some(handle) = slot.try_get_value().flatten() {
        handle.clear();
    }
    slot.try_set_value(None);

    let Some(tick) = timer.try_with_value(|timer| timer.tick(timer_clock_ms())) else {
        return;
    };
    let delay = match tick {
        TimerTick::Expire => {
            close();
            return;
        }
        TimerTick::Reschedule(remaining) => remaining,
        TimerTick::Idle => return,
    };
    let fire = move || arm_dismiss_timeout(timer, slot, close);
    match set_timeout_with_handle(fire, Duration::from_millis(delay)) {
        Ok(handle) => {
            slot.try_set_value(Some(handle));
        }
        Err(err) => logging::warn!("notification auto-close could not be scheduled: {err:?}"),
    }
}

#[component]
/// One rendered notification with its own auto-dismiss countdown.
///
/// The countdown pauses while hovered or while the document is hidden, restarts when the record's
/// auto-close changes, and the close transition runs before the record is hidden in the store.
pub fn NotificationItem(id: NotificationId) -> impl IntoView {
    let notifications = use_notifications();
    let id = store_value(id);
    let record = create_memo(move |_| id.with_value(|id| notifications.find(id)));
    let initial_auto_close = record
        .get_untracked()
        .map_or(AutoClose::Never, |notification| notification.auto_close);

    let timer = store_value(DismissTimer::start_with_visibility(
        initial_auto_close,
        timer_clock_ms(),
        document().hidden(),
    ));
    let dismiss_timeout = store_value::<Option<TimeoutHandle>>(None);
    let exit_timeout = store_value::<Option<TimeoutHandle>>(None);
    let closing = create_rw_signal(false);

    let close = move || {
        if closing.get_untracked() {
            return;
        }
        closing.set(true);
        let hide = move || id.with_value(|id| notifications.hide(id));
        let delay = notifications.transition_duration();
        if delay.is_zero() {
            hide();
            return;
        }
        match set_timeout_with_handle(hide, delay) {
            Ok(handle) => exit_timeout.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("notification exit transition could not be scheduled: {err:?}");
                hide();
            }
        }
    };

    let schedule = move || arm_dismiss_timeout(timer, dismiss_timeout, close);

    create_effect(move |previous: Option<AutoClose>| {
        let auto_close = record.with(|record| {
            record
                .as_ref()
                .map_or(AutoClose::Never, |notification| notification.auto_close)
        });
        if previous != Some(auto_close) {
            timer.update_value(|timer| timer.restart(auto_close, timer_clock_ms()));
            schedule();
        }
        auto_close
    });

    let visibility_listener = window_event_listener_untyped("visibilitychange", move |_| {
        let now = timer_clock_ms();
        if document().hidden() {
            timer.update_value(|timer| timer.document_hidden(now));
        } else {
            timer.update_value(|timer| timer.document_visible(now));
        }
        schedule();
    });

    on_cleanup(move || {
        visibility_listener.remove();
        for handle in [dismiss_timeout.get_value(), exit_timeout.get_value()]
            .into_iter()
            .flatten()
        {
            handle.clear();
        }
    });

    move || {
        let Some(notification) = record.get() else {
            return ().into_view();
        };
        let kind_icon = IconName::for_kind(notification.kind);
        let style = notification_style(&notification, notifications.transition_duration_ms);
        let title = notification.title.clone();
        let custom_icon = notification.icon.clone();

        view! {
            <div
                class="ui-notification"
                role="alert"
                style=style
                data-ui-primitive="true"
                data-ui-kind="notification"
                data-ui-variant=notification.kind.token()
                data-ui-state=move || if closing.get() { "closing" } else { "open" }
                data-ui-loading=bool_token(notification.loading)
                data-ui-bordered=bool_token(notification.with_border)
                data-ui-id=notification.id.to_string()
                on:mouseenter=move |_| {
                    timer.update_value(|timer| timer.pointer_enter(timer_clock_ms()));
                    schedule();
                }
                on:mouseleave=move |_| {
                    timer.update_value(|timer| timer.pointer_leave(timer_clock_ms()));
                    schedule();
                }
            >
                <span data-ui-slot="icon">
                    {if notification.loading {
                        view! { <Loader size=IconSize::Sm /> }.into_view()
                    } else if let Some(icon) = custom_icon {
                        view! { <span data-ui-slot="custom-icon">{icon}</span> }.into_view()
                    } else if let Some(icon) = kind_icon {
                        view! { <Icon icon=icon size=IconSize::Md /> }.into_view()
                    } else {
                        ().into_view()
                    }}
                </span>
                <div data-ui-slot="body">
                    {title.map(|title| view! { <div data-ui-slot="title">{title}</div> })}
                    <div data-ui-slot="description">{notification.message.clone()}</div>
                </div>
                {notification.with_close_button.then(|| view! {
                    <IconButton
                        icon=IconName::Dismiss
                        aria_label="Close notification"
                        ui_slot="close"
                        on_click=Callback::new(move |_| close())
                    />
                })}
            </div>
        }
        .into_view()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ui_headless::NotificationKind;

    use super::*;

    fn record(color: Option<&str>) -> Notification {
        Notification {
            id: NotificationId::from("n1"),
            message: "Saved".to_string(),
            title: None,
            icon: None,
            kind: NotificationKind::Success,
            color: color.map(str::to_string),
            position: NotificationPosition::default(),
            auto_close: AutoClose::default(),
            loading: false,
            with_border: false,
            with_close_button: true,
        }
    }

    #[test]
    fn style_carries_transition_and_optional_color() {
        assert_eq!(
            notification_style(&record(None), 250),
            "--ui-notification-transition: 250ms;"
        );
        assert_eq!(
            notification_style(&record(Some("teal")), 0),
            "--ui-notification-transition: 0ms; --ui-notification-color: teal;"
        );
    }
}
