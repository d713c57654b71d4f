//! Scheduling hook for the countdown.

use crate::config::TICK_INTERVAL_MS;
use crate::state::{TimerAction, TimerState};
use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

/// Holds the countdown state and the callbacks wired to the controls.
#[derive(Clone)]
pub struct Countdown {
    /// Snapshot of the state for this render.
    pub state: TimerState,
    /// Start, pause, resume, or restart after expiry.
    pub on_toggle: Callback<MouseEvent>,
    /// Back to the full duration, stopped.
    pub on_reset: Callback<MouseEvent>,
}

/// Custom hook driving a single countdown.
///
/// The one-second `Interval` lives inside an effect keyed on the state and
/// is only armed when [`TimerState::should_tick`] holds. Dropping an
/// `Interval` cancels it, and Yew runs the effect destructor before every
/// re-run and on unmount, so there is never more than one pending tick.
#[hook]
pub fn use_countdown() -> Countdown {
    let state = use_reducer(TimerState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with(*state, move |state| {
            let interval = if state.should_tick() {
                debug!("arming tick interval at {}s", state.remaining_seconds());
                Some(Interval::new(TICK_INTERVAL_MS, move || {
                    dispatcher.dispatch(TimerAction::Tick);
                }))
            } else {
                None
            };

            move || drop(interval)
        });
    }

    let on_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(TimerAction::Toggle))
    };

    let on_reset = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(TimerAction::Reset))
    };

    Countdown {
        state: *state,
        on_toggle,
        on_reset,
    }
}
