use crate::site::{RESEARCH_PATH, SIMULATOR_PATH};
use leptos::*;
use leptos_router::A;

#[component]
pub fn IntroPage() -> impl IntoView {
    view! {
        <main class="container content-page">
            <header>
                <h1>"\u{1F4D8} What is Neural Cellular Automata?"</h1>
                <p class="tagline">"Tiny neural networks, one per cell, all sharing the same weights"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back home"</A>
            </nav>

            <section class="content-section">
                <h2>"Cellular Automata"</h2>
                <p>
                    "A cellular automaton is a grid of cells that all follow the same local rule. "
                    "At every step each cell looks only at its immediate neighbours and decides "
                    "its next state. Conway\u{2019}s Game of Life is the classic example: a handful "
                    "of hand-written rules produce gliders, oscillators and surprisingly complex patterns."
                </p>
            </section>

            <section class="content-section">
                <h2>"Making the Rule Learnable"</h2>
                <p>
                    "A neural cellular automaton replaces the hand-written rule with a small neural "
                    "network. Each cell carries a vector of channels instead of a single on/off bit. "
                    "Every step, a cell:"
                </p>
                <ol>
                    <li>"perceives its 3\u{00D7}3 neighbourhood through Sobel filters, giving the local gradient of every channel;"</li>
                    <li>"feeds its own state and those gradients through the shared network;"</li>
                    <li>"adds the network\u{2019}s output to its hidden channels\u{2014}but only if it \u{201C}fires\u{201D} this step, which happens at random."</li>
                </ol>
                <p>
                    "Cells with no living neighbours are cleared, so structure can only grow outward "
                    "from cells that are already alive. Because the rule is differentiable, the "
                    "network can be trained end-to-end with gradient descent."
                </p>
            </section>

            <section class="content-section">
                <h2>"Why It Is Interesting"</h2>
                <p>
                    "The same few thousand parameters run everywhere on the grid, so a trained NCA is "
                    "tiny, works on grids of any size, and tends to recover from damage. Read about "
                    <A href=RESEARCH_PATH>"what we are working on"</A>
                    ", or "
                    <A href=SIMULATOR_PATH>"watch one run"</A>
                    " in your browser."
                </p>
            </section>

            <nav class="back-nav bottom">
                <A href="/">"< Back home"</A>
            </nav>
        </main>
    }
}
