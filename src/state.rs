//! Countdown state and its transitions.
//!
//! `TimerState` is a small `Copy` value. Every transition takes the
//! current state and returns the next one, so the whole state machine is
//! testable without a browser. The Yew side only ever sees it through the
//! [`Reducible`] impl at the bottom of this file.

use crate::config::START_DURATION;
use log::{debug, info};
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

/// Errors from building a `TimerState` by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    OutOfRange { remaining: u32, max: u32 },
    ActiveWhenExpired,
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::OutOfRange { remaining, max } => write!(
                f,
                "Remaining seconds out of range: {} (must be 0-{})",
                remaining, max
            ),
            TimerError::ActiveWhenExpired => {
                write!(f, "A timer with no time left cannot be active")
            }
        }
    }
}

impl std::error::Error for TimerError {}

/// Where a state sits in the countdown lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Expired,
}

/// User and scheduler requests understood by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    Toggle,
    Reset,
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    remaining_seconds: u32,
    is_active: bool,
}

impl TimerState {
    /// Build a state directly, rejecting combinations the transitions can
    /// never reach.
    pub fn new(remaining_seconds: u32, is_active: bool) -> Result<Self, TimerError> {
        if remaining_seconds > START_DURATION {
            return Err(TimerError::OutOfRange {
                remaining: remaining_seconds,
                max: START_DURATION,
            });
        }
        if remaining_seconds == 0 && is_active {
            return Err(TimerError::ActiveWhenExpired);
        }
        Ok(Self {
            remaining_seconds,
            is_active,
        })
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_seconds == 0
    }

    pub fn phase(&self) -> Phase {
        if self.is_expired() {
            Phase::Expired
        } else if self.is_active {
            Phase::Running
        } else if self.remaining_seconds == START_DURATION {
            Phase::Idle
        } else {
            Phase::Paused
        }
    }

    /// Whether the one-second tick should be scheduled for this state.
    pub fn should_tick(&self) -> bool {
        self.is_active && self.remaining_seconds > 0
    }

    /// Start, pause or resume. An expired timer restarts from the full
    /// duration.
    pub fn toggle(self) -> Self {
        let next = if self.is_expired() {
            Self {
                remaining_seconds: START_DURATION,
                is_active: true,
            }
        } else {
            Self {
                is_active: !self.is_active,
                ..self
            }
        };
        debug!("toggle: {:?} -> {:?}", self.phase(), next.phase());
        next
    }

    pub fn reset(self) -> Self {
        debug!("reset from {:?} at {}s", self.phase(), self.remaining_seconds);
        Self::default()
    }

    /// One-second decrement. No-op unless counting.
    pub fn tick(self) -> Self {
        if !self.should_tick() {
            return self;
        }

        let remaining_seconds = self.remaining_seconds - 1;
        if remaining_seconds == 0 {
            info!("Countdown expired");
        }
        Self {
            remaining_seconds,
            is_active: remaining_seconds > 0,
        }
    }

    pub fn apply(self, action: TimerAction) -> Self {
        match action {
            TimerAction::Toggle => self.toggle(),
            TimerAction::Reset => self.reset(),
            TimerAction::Tick => self.tick(),
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            remaining_seconds: START_DURATION,
            is_active: false,
        }
    }
}

impl Reducible for TimerState {
    type Action = TimerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            // Same Rc means no re-render
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn state(remaining: u32, active: bool) -> TimerState {
        TimerState::new(remaining, active).unwrap()
    }

    fn assert_invariants(s: &TimerState) {
        assert!(s.remaining_seconds() <= START_DURATION);
        if s.remaining_seconds() == 0 {
            assert!(!s.is_active());
        }
    }

    #[test]
    fn default_is_idle_full_duration() {
        let s = TimerState::default();
        assert_eq!(s.remaining_seconds(), 30);
        assert!(!s.is_active());
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(
            TimerState::new(31, false),
            Err(TimerError::OutOfRange {
                remaining: 31,
                max: START_DURATION
            })
        );
    }

    #[test]
    fn new_rejects_active_at_zero() {
        assert_eq!(TimerState::new(0, true), Err(TimerError::ActiveWhenExpired));
        assert!(TimerState::new(0, false).is_ok());
    }

    #[test]
    fn error_messages_are_readable() {
        let err = TimerState::new(45, false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Remaining seconds out of range: 45 (must be 0-30)"
        );
    }

    #[test_case(30, false, Phase::Idle ; "idle")]
    #[test_case(30, true, Phase::Running ; "running_full")]
    #[test_case(12, true, Phase::Running ; "running_partial")]
    #[test_case(12, false, Phase::Paused ; "paused")]
    #[test_case(0, false, Phase::Expired ; "expired")]
    fn phase_classification(remaining: u32, active: bool, expected: Phase) {
        assert_eq!(state(remaining, active).phase(), expected);
    }

    #[test_case(30, false, false ; "idle")]
    #[test_case(30, true, true ; "running_full")]
    #[test_case(1, true, true ; "running_last_second")]
    #[test_case(20, false, false ; "paused")]
    #[test_case(0, false, false ; "expired")]
    fn tick_scheduled_only_while_running(remaining: u32, active: bool, expected: bool) {
        assert_eq!(state(remaining, active).should_tick(), expected);
    }

    #[test]
    fn tick_schedule_stops_on_every_exit_from_running() {
        let running = state(20, true);
        assert!(running.should_tick());
        assert!(!running.toggle().should_tick());
        assert!(!running.reset().should_tick());
        assert!(!state(1, true).tick().should_tick());
        assert!(state(0, false).toggle().should_tick());
    }

    #[test]
    fn toggle_from_idle_starts() {
        let s = TimerState::default().toggle();
        assert_eq!(s, state(30, true));
        assert_eq!(s.phase(), Phase::Running);
    }

    #[test]
    fn toggle_pauses_and_resumes_without_losing_time() {
        let paused = state(20, true).toggle();
        assert_eq!(paused, state(20, false));
        assert_eq!(paused.phase(), Phase::Paused);

        let resumed = paused.toggle();
        assert_eq!(resumed, state(20, true));
    }

    #[test]
    fn toggle_on_expired_restarts() {
        let s = state(0, false).toggle();
        assert_eq!(s, state(30, true));
    }

    #[test]
    fn tick_decrements_while_running() {
        assert_eq!(state(30, true).tick(), state(29, true));
        assert_eq!(state(2, true).tick(), state(1, true));
    }

    #[test]
    fn tick_on_last_second_expires() {
        let s = state(1, true).tick();
        assert_eq!(s.remaining_seconds(), 0);
        assert!(!s.is_active());
        assert_eq!(s.phase(), Phase::Expired);
    }

    #[test_case(30, false ; "idle")]
    #[test_case(20, false ; "paused")]
    #[test_case(0, false ; "expired")]
    fn tick_is_noop_when_inactive(remaining: u32, active: bool) {
        let s = state(remaining, active);
        assert_eq!(s.tick(), s);
    }

    #[test_case(30, false ; "idle")]
    #[test_case(17, true ; "running")]
    #[test_case(9, false ; "paused")]
    #[test_case(0, false ; "expired")]
    fn reset_returns_to_idle(remaining: u32, active: bool) {
        let s = state(remaining, active).reset();
        assert_eq!(s, TimerState::default());
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn reset_is_idempotent() {
        let once = state(11, true).reset();
        assert_eq!(once.reset(), once);
    }

    #[test]
    fn apply_dispatches_actions() {
        let s = TimerState::default();
        assert_eq!(s.apply(TimerAction::Toggle), s.toggle());
        assert_eq!(state(5, true).apply(TimerAction::Tick), state(4, true));
        assert_eq!(state(5, true).apply(TimerAction::Reset), s);
    }

    #[test]
    fn full_countdown_expires_after_thirty_ticks() {
        let mut s = TimerState::default().toggle();
        for _ in 0..START_DURATION {
            assert_invariants(&s);
            s = s.tick();
        }
        assert_eq!(s, state(0, false));

        // An extra tick after expiry changes nothing
        assert_eq!(s.tick(), s);
        assert_eq!(s.toggle(), state(30, true));
    }

    #[test]
    fn every_action_sequence_keeps_invariants() {
        // (action, repeat) bursts: long tick runs outlast the duration,
        // short ones land mid-countdown before a pause or reset.
        let schedule = [
            (TimerAction::Toggle, 1),
            (TimerAction::Tick, 12),
            (TimerAction::Toggle, 1),
            (TimerAction::Tick, 4),
            (TimerAction::Toggle, 1),
            (TimerAction::Tick, 40),
            (TimerAction::Toggle, 1),
            (TimerAction::Tick, 7),
            (TimerAction::Reset, 1),
            (TimerAction::Tick, 3),
            (TimerAction::Reset, 1),
            (TimerAction::Toggle, 1),
            (TimerAction::Tick, 31),
            (TimerAction::Tick, 2),
        ];

        let mut s = TimerState::default();
        let mut expired_steps = 0;
        let mut restarts_from_expired = 0;
        let mut lowest = START_DURATION;

        for _ in 0..5 {
            for &(action, repeat) in &schedule {
                for _ in 0..repeat {
                    let before = s;
                    s = s.apply(action);
                    assert_invariants(&s);

                    lowest = lowest.min(s.remaining_seconds());
                    if s.phase() == Phase::Expired {
                        expired_steps += 1;
                    }
                    if before.phase() == Phase::Expired && action == TimerAction::Toggle {
                        assert_eq!(s, state(30, true));
                        restarts_from_expired += 1;
                    }
                }
            }
        }

        assert_eq!(lowest, 0);
        assert!(expired_steps > 0);
        assert!(restarts_from_expired > 0);
    }

    #[test]
    fn reducer_keeps_rc_when_nothing_changes() {
        let idle = Rc::new(TimerState::default());
        let after_tick = idle.clone().reduce(TimerAction::Tick);
        assert!(Rc::ptr_eq(&idle, &after_tick));

        let started = idle.reduce(TimerAction::Toggle);
        assert_eq!(*started, state(30, true));
    }
}
