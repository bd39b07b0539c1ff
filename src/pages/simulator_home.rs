use crate::components::SimulationCanvas;
use crate::site::INTRO_PATH;
use leptos::*;
use leptos_router::A;

#[component]
pub fn SimulatorPage() -> impl IntoView {
    view! {
        <main class="container content-page simulator-page">
            <header>
                <h1>"\u{1F9EA} NCA Simulator"</h1>
                <p class="tagline">"A neural cellular automaton running live in your browser"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back home"</A>
            </nav>

            <section class="content-section">
                <SimulationCanvas controls=true/>
            </section>

            <section class="content-section">
                <h2>"What You Are Seeing"</h2>
                <p>
                    "The coloured discs are the input image; they never change. The blue tint is the "
                    "automaton\u{2019}s alive channel, spreading out from a single seed cell in the middle. "
                    "Each step, roughly half of the cells fire and apply the network\u{2019}s update."
                </p>
                <p>
                    "Untrained weights are drawn at random from the seed, so every seed behaves "
                    "differently. Paste trained weights into the panel above to run a real model. "
                    "New to NCA? Start with the "
                    <A href=INTRO_PATH>"introduction"</A>
                    "."
                </p>
            </section>

            <section class="content-section">
                <h2>"URL Parameters"</h2>
                <p>
                    <code>"seed"</code>", "<code>"grid_size"</code>", "<code>"channels"</code>", "
                    <code>"hidden_channels"</code>", "<code>"fire_rate"</code>", "
                    <code>"alive_threshold"</code>", "<code>"init_std"</code>", "
                    <code>"steps_per_frame"</code>" and "<code>"frame_ms"</code>
                    " can be set in the query string. Invalid values fall back to the defaults."
                </p>
            </section>

            <nav class="back-nav bottom">
                <A href="/">"< Back home"</A>
            </nav>
        </main>
    }
}
