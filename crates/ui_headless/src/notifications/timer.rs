//! Per-notification auto-dismiss countdown with pause/resume bookkeeping.
//!
//! Time is supplied by the caller in milliseconds so the state machine is deterministic; the Leptos
//! layer feeds it `unix_time_ms_now()` and reschedules a browser timeout from
//! [`DismissTimer::remaining_ms`] after each transition.

use crate::notifications::model::AutoClose;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Countdown state.
pub enum TimerState {
    /// Counting down toward `deadline_ms`.
    Running {
        /// Absolute expiry time.
        deadline_ms: u64,
    },
    /// Suspended with `remaining_ms` left on the clock.
    Paused {
        /// Time left when the countdown resumes.
        remaining_ms: u64,
    },
    /// Auto-close is off.
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the host should do when its scheduled timeout fires.
pub enum TimerTick {
    /// The deadline has passed; close the notification.
    Expire,
    /// The countdown is still running; schedule another timeout after this many milliseconds.
    Reschedule(u64),
    /// Paused or disabled; nothing to schedule.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Auto-dismiss timer for one visible notification.
///
/// Hover and document visibility are independent pause reasons; the countdown only runs while
/// neither holds.
pub struct DismissTimer {
    state: TimerState,
    hovered: bool,
    document_hidden: bool,
}

impl DismissTimer {
    /// Starts a countdown at `now_ms`, or a disabled timer when auto-close is off.
    pub fn start(auto_close: AutoClose, now_ms: u64) -> Self {
        let state = match auto_close.millis() {
            Some(ms) => TimerState::Running {
                deadline_ms: now_ms.saturating_add(u64::from(ms)),
            },
            None => TimerState::Disabled,
        };
        Self {
            state,
            hovered: false,
            document_hidden: false,
        }
    }

    /// Starts a countdown that is already paused when the document is hidden at mount time.
    pub fn start_with_visibility(auto_close: AutoClose, now_ms: u64, document_hidden: bool) -> Self {
        let mut timer = Self::start(auto_close, now_ms);
        if document_hidden {
            timer.document_hidden(now_ms);
        }
        timer
    }

    /// Replaces the countdown after the notification's auto-close changed, keeping pause reasons.
    pub fn restart(&mut self, auto_close: AutoClose, now_ms: u64) {
        let restarted = Self::start(auto_close, now_ms);
        self.state = restarted.state;
        if self.is_suspended() {
            self.suspend(now_ms);
        }
    }

    /// Current countdown state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Pointer entered the notification.
    pub fn pointer_enter(&mut self, now_ms: u64) {
        self.hovered = true;
        self.suspend(now_ms);
    }

    /// Pointer left the notification.
    pub fn pointer_leave(&mut self, now_ms: u64) {
        self.hovered = false;
        self.resume_if_free(now_ms);
    }

    /// The document became hidden.
    pub fn document_hidden(&mut self, now_ms: u64) {
        self.document_hidden = true;
        self.suspend(now_ms);
    }

    /// The document became visible again.
    pub fn document_visible(&mut self, now_ms: u64) {
        self.document_hidden = false;
        self.resume_if_free(now_ms);
    }

    /// Time left before expiry while running, the frozen remainder while paused, `None` when
    /// disabled.
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        match self.state {
            TimerState::Running { deadline_ms } => Some(deadline_ms.saturating_sub(now_ms)),
            TimerState::Paused { remaining_ms } => Some(remaining_ms),
            TimerState::Disabled => None,
        }
    }

    /// Whether a running countdown has reached its deadline.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        matches!(self.state, TimerState::Running { deadline_ms } if now_ms >= deadline_ms)
    }

    /// Whether the countdown is running and should have a scheduled timeout.
    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// Decision for a fired timeout.
    ///
    /// Timeouts can fire slightly before the deadline (or the clock can step), so a running timer
    /// that has not expired asks to be rescheduled for the remainder instead of being dropped.
    pub fn tick(&self, now_ms: u64) -> TimerTick {
        match self.state {
            TimerState::Running { deadline_ms } if now_ms >= deadline_ms => TimerTick::Expire,
            TimerState::Running { deadline_ms } => TimerTick::Reschedule(deadline_ms - now_ms),
            TimerState::Paused { .. } | TimerState::Disabled => TimerTick::Idle,
        }
    }

    fn is_suspended(&self) -> bool {
        self.hovered || self.document_hidden
    }

    fn suspend(&mut self, now_ms: u64) {
        if let TimerState::Running { deadline_ms } = self.state {
            self.state = TimerState::Paused {
                remaining_ms: deadline_ms.saturating_sub(now_ms),
            };
        }
    }

    fn resume_if_free(&mut self, now_ms: u64) {
        if self.is_suspended() {
            return;
        }
        if let TimerState::Paused { remaining_ms } = self.state {
            self.state = TimerState::Running {
                deadline_ms: now_ms.saturating_add(remaining_ms),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hover_pause_extends_deadline_by_pause_length() {
        let mut timer = DismissTimer::start(AutoClose::After(5000), 0);
        timer.pointer_enter(3000);
        assert_eq!(timer.state(), TimerState::Paused { remaining_ms: 2000 });
        assert!(!timer.is_expired(5000));

        timer.pointer_leave(4000);
        assert_eq!(timer.state(), TimerState::Running { deadline_ms: 6000 });
        assert!(!timer.is_expired(5000));
        assert!(!timer.is_expired(5999));
        assert!(timer.is_expired(6000));
    }

    #[test]
    fn early_tick_reschedules_for_the_remainder() {
        let mut timer = DismissTimer::start(AutoClose::After(4000), 1000);
        assert_eq!(timer.tick(4999), TimerTick::Reschedule(1));
        assert_eq!(timer.tick(5000), TimerTick::Expire);
        assert_eq!(timer.tick(7000), TimerTick::Expire);

        timer.pointer_enter(4500);
        assert_eq!(timer.tick(4600), TimerTick::Idle);
        assert_eq!(DismissTimer::start(AutoClose::Never, 0).tick(10), TimerTick::Idle);
    }

    #[test]
    fn hidden_document_at_mount_starts_paused() {
        let mut timer = DismissTimer::start_with_visibility(AutoClose::After(2000), 100, true);
        assert_eq!(timer.state(), TimerState::Paused { remaining_ms: 2000 });
        assert_eq!(timer.tick(50_000), TimerTick::Idle);

        timer.document_visible(9000);
        assert_eq!(timer.state(), TimerState::Running { deadline_ms: 11_000 });

        let visible = DismissTimer::start_with_visibility(AutoClose::After(2000), 100, false);
        assert_eq!(visible.state(), TimerState::Running { deadline_ms: 2100 });
    }

    #[test]
    fn disabled_timer_never_expires() {
        let mut timer = DismissTimer::start(AutoClose::Never, 100);
        timer.pointer_enter(200);
        timer.pointer_leave(300);
        assert_eq!(timer.state(), TimerState::Disabled);
        assert_eq!(timer.remaining_ms(10_000), None);
        assert!(!timer.is_expired(u64::MAX));
    }

    #[test]
    fn resumes_only_when_hover_and_visibility_both_clear() {
        let mut timer = DismissTimer::start(AutoClose::After(1000), 0);
        timer.pointer_enter(200);
        timer.document_hidden(300);
        timer.pointer_leave(400);
        assert_eq!(timer.state(), TimerState::Paused { remaining_ms: 800 });

        timer.document_visible(1000);
        assert_eq!(timer.state(), TimerState::Running { deadline_ms: 1800 });
        assert_eq!(timer.remaining_ms(1500), Some(300));
    }

    #[test]
    fn restart_while_hovered_stays_paused_with_full_duration() {
        let mut timer = DismissTimer::start(AutoClose::Never, 0);
        timer.pointer_enter(50);
        timer.restart(AutoClose::After(3000), 100);
        assert_eq!(timer.state(), TimerState::Paused { remaining_ms: 3000 });

        timer.pointer_leave(500);
        assert_eq!(timer.state(), TimerState::Running { deadline_ms: 3500 });
    }
}
