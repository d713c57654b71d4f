//! A neon countdown timer widget for the browser, built with Yew.
//!
//! The countdown logic in [`state`] and the derived display values in
//! [`utils`] are plain Rust and run anywhere; [`hooks`] and
//! [`components`] wire them to the DOM.

pub mod components;
pub mod config;
pub mod hooks;
pub mod state;
pub mod utils;

pub use components::Timer;
pub use state::{Phase, TimerAction, TimerError, TimerState};
pub use utils::{dash_offset, format_time, progress_fraction, ring_circumference, Status};
