use crate::site::SIMULATOR_PATH;
use leptos::*;
use leptos_router::A;

#[component]
pub fn UpdatesPage() -> impl IntoView {
    view! {
        <main class="container content-page">
            <header>
                <h1>"\u{1F4F0} Project Updates"</h1>
                <p class="tagline">"Keeping up with the NCA team"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back home"</A>
            </nav>

            <section class="content-section">
                <h2>"Changelog"</h2>
                <dl class="version-history">
                    <dt>"Website \u{2014} Rust rewrite"</dt>
                    <dd>
                        <ul>
                            <li>"Site rebuilt as a single Rust/WebAssembly app"</li>
                            <li>
                                "The " <A href=SIMULATOR_PATH>"simulator"</A>
                                " now runs the segmentation NCA update rule directly in the browser"
                            </li>
                            <li>"Simulation parameters can be set from the URL, e.g. "<code>"?seed=7&fire_rate=0.3"</code></li>
                        </ul>
                    </dd>
                    <dt>"Models"</dt>
                    <dd>
                        <ul>
                            <li>"16-channel segmentation NCA with Sobel perception and circular padding"</li>
                            <li>"Trained weights can be pasted into the simulator as JSON"</li>
                        </ul>
                    </dd>
                </dl>
            </section>

            <nav class="back-nav bottom">
                <A href="/">"< Back home"</A>
            </nav>
        </main>
    }
}
