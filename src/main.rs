//! Entry point for the countdown page.
//! Renders the page shell around the `Timer` widget.

use neon_timer::config::TITLE;
use neon_timer::Timer;
use yew::prelude::*;

/// Page shell: ambient glow, title and the timer.
#[function_component]
pub fn App() -> Html {
    html! {
        <div class="page">
            // Ambient background glow
            <div class="glow" aria-hidden="true" />
            <main class="stage">
                <h1 class="title">{ TITLE }</h1>
                <Timer />
            </main>
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the app.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    log::info!("Mounting countdown widget");
    yew::Renderer::<App>::new().render();
}
