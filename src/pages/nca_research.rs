use crate::site::UPDATES_PATH;
use leptos::*;
use leptos_router::A;

#[component]
pub fn ResearchPage() -> impl IntoView {
    view! {
        <main class="container content-page">
            <header>
                <h1>"\u{1F52C} Our Research"</h1>
                <p class="tagline">"Neural Cellular Automata for image understanding"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back home"</A>
            </nav>

            <section class="content-section">
                <h2>"Segmentation with NCA"</h2>
                <p>
                    "Our current models treat an image as the input channels of an NCA grid. "
                    "The image itself never changes; the remaining channels evolve step by step, "
                    "and one of them is read out as a segmentation mask once the automaton settles."
                </p>
                <p>
                    "Each cell\u{2019}s perception vector stacks its 16 channels with their horizontal "
                    "and vertical Sobel gradients (48 values). A 1\u{00D7}1 convolution expands that to "
                    "128 hidden units, and a second, bias-free 1\u{00D7}1 convolution produces the update "
                    "for the 13 non-image channels. Weights start very close to zero so training "
                    "begins from an automaton that barely moves."
                </p>
            </section>

            <section class="content-section">
                <h2>"Open Questions"</h2>
                <ul>
                    <li>"How many steps does a segmentation need to stabilise, and does it stay stable?"</li>
                    <li>"How well do models trained on small grids transfer to full-resolution images?"</li>
                    <li>"Can the stochastic update be tuned to trade accuracy for speed at inference time?"</li>
                </ul>
            </section>

            <section class="content-section">
                <p>
                    "Progress is posted on the "
                    <A href=UPDATES_PATH>"project updates"</A>
                    " page."
                </p>
            </section>

            <nav class="back-nav bottom">
                <A href="/">"< Back home"</A>
            </nav>
        </main>
    }
}
