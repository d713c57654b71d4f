use crate::config::{
    CAPTION_COUNTING, CAPTION_EXPIRED, CAPTION_WAITING, RING_RADIUS, START_DURATION,
};
use crate::state::TimerState;
use std::f64::consts::PI;

/// Format whole seconds as `MM:SS`.
pub fn format_time(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Share of the countdown still left, in `[0, 1]`.
pub fn progress_fraction(remaining_seconds: u32) -> f64 {
    (remaining_seconds.min(START_DURATION) as f64) / START_DURATION as f64
}

pub fn ring_circumference() -> f64 {
    2.0 * PI * RING_RADIUS
}

/// Stroke dash offset that hides the spent part of the ring.
///
/// A fraction of 1.0 gives an offset of 0 (full ring), 0.0 gives the
/// whole circumference (nothing drawn).
pub fn dash_offset(fraction: f64) -> f64 {
    let circumference = ring_circumference();
    circumference - fraction.clamp(0.0, 1.0) * circumference
}

/// Caption shown under the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Waiting,
    Counting,
    Expired,
}

impl Status {
    /// Expiry wins over activity, activity over waiting.
    pub fn of(state: &TimerState) -> Self {
        if state.is_expired() {
            Status::Expired
        } else if state.is_active() {
            Status::Counting
        } else {
            Status::Waiting
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            Status::Waiting => CAPTION_WAITING,
            Status::Counting => CAPTION_COUNTING,
            Status::Expired => CAPTION_EXPIRED,
        }
    }
}
