//! Yew view components for the countdown widget.
//!
//! Everything except `Timer` is stateless and renders from props; `Timer`
//! owns the countdown through `use_countdown`.

use crate::config::{
    ARIA_PAUSE, ARIA_RESET, ARIA_START, GHOST_DIGITS, LABEL_PAUSE, LABEL_START, RING_RADIUS,
    RING_STROKE_WIDTH, VIEWBOX_SIZE,
};
use crate::hooks::use_countdown;
use crate::utils::{dash_offset, format_time, progress_fraction, ring_circumference, Status};
use yew::prelude::*;

/// Background track plus the neon arc for the remaining time.
#[derive(Properties, PartialEq)]
pub struct ProgressRingProps {
    pub fraction: f64,
}

#[function_component(ProgressRing)]
pub fn progress_ring(props: &ProgressRingProps) -> Html {
    let center = (VIEWBOX_SIZE / 2).to_string();
    let radius = RING_RADIUS.to_string();
    let stroke_width = RING_STROKE_WIDTH.to_string();
    let circumference = format!("{:.3}", ring_circumference());
    let offset = format!("{:.3}", dash_offset(props.fraction));

    html! {
        <div class="ring">
            <svg class="ring-svg" viewBox={format!("0 0 {0} {0}", VIEWBOX_SIZE)}>
                <circle class="ring-track"
                    cx={center.clone()}
                    cy={center.clone()}
                    r={radius.clone()}
                    fill="none"
                    stroke-width={stroke_width.clone()}
                />
                <circle class="ring-progress"
                    cx={center.clone()}
                    cy={center}
                    r={radius}
                    fill="none"
                    stroke-width={stroke_width}
                    stroke-dasharray={circumference}
                    stroke-dashoffset={offset}
                    stroke-linecap="round"
                />
            </svg>
        </div>
    }
}

/// `MM:SS` readout over faint unlit segments. Pulses once expired.
#[derive(Properties, PartialEq)]
pub struct DigitalDisplayProps {
    pub remaining_seconds: u32,
}

#[function_component(DigitalDisplay)]
pub fn digital_display(props: &DigitalDisplayProps) -> Html {
    let expired = props.remaining_seconds == 0;

    html! {
        <div class="display">
            <div class="display-digits">
                <span class="display-ghost" aria-hidden="true">{ GHOST_DIGITS }</span>
                <span class={classes!("display-time", expired.then_some("pulse"))}>
                    { format_time(props.remaining_seconds) }
                </span>
            </div>
        </div>
    }
}

fn play_icon() -> Html {
    html! {
        <svg class="icon icon-play" viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <polygon points="6 3 20 12 6 21 6 3" />
        </svg>
    }
}

fn pause_icon() -> Html {
    html! {
        <svg class="icon icon-pause" viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <rect x="14" y="4" width="4" height="16" rx="1" />
            <rect x="6" y="4" width="4" height="16" rx="1" />
        </svg>
    }
}

fn reset_icon() -> Html {
    html! {
        <svg class="icon icon-reset" viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8" />
            <path d="M3 3v5h5" />
        </svg>
    }
}

/// Start/pause button and reset button.
#[derive(Properties, PartialEq)]
pub struct ControlsProps {
    pub is_active: bool,
    pub on_toggle: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

#[function_component(Controls)]
pub fn controls(props: &ControlsProps) -> Html {
    let (icon, label, aria) = if props.is_active {
        (pause_icon(), LABEL_PAUSE, ARIA_PAUSE)
    } else {
        (play_icon(), LABEL_START, ARIA_START)
    };

    html! {
        <div class="controls">
            <button class="btn-primary" aria-label={aria} onclick={props.on_toggle.clone()}>
                { icon }
                <span class="btn-label">{ label }</span>
            </button>
            <button class="btn-secondary" aria-label={ARIA_RESET} onclick={props.on_reset.clone()}>
                { reset_icon() }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusCaptionProps {
    pub status: Status,
}

#[function_component(StatusCaption)]
pub fn status_caption(props: &StatusCaptionProps) -> Html {
    html! {
        <div class="status">{ props.status.caption() }</div>
    }
}

/// The countdown widget: ring, display, controls and caption.
#[function_component(Timer)]
pub fn timer() -> Html {
    let countdown = use_countdown();
    let state = countdown.state;

    html! {
        <div class="timer">
            <ProgressRing fraction={progress_fraction(state.remaining_seconds())} />
            <div class="timer-face">
                <DigitalDisplay remaining_seconds={state.remaining_seconds()} />
                <Controls
                    is_active={state.is_active()}
                    on_toggle={countdown.on_toggle}
                    on_reset={countdown.on_reset}
                />
                <StatusCaption status={Status::of(&state)} />
            </div>
        </div>
    }
}
