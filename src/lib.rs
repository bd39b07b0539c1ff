pub mod analytics;
pub mod components;
pub mod config;
pub mod nca;
pub mod pages;
pub mod site;
pub mod view_tree;

use components::NavBar;
use leptos::*;
use leptos_router::*;
use pages::{IntroPage, LandingPage, NotFoundPage, ResearchPage, SimulatorPage, UpdatesPage};
use site::{INTRO_PATH, RESEARCH_PATH, SIMULATOR_PATH, UPDATES_PATH};
use wasm_bindgen::prelude::*;

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container">
                <div class="error-container">
                    <h2>"Something went wrong"</h2>
                    <p>"The page failed to render. Try reloading; the simulation restarts from its seed."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Reload"</button>
                </div>
            </main>
        }>
            <Router>
                <NavBar/>
                <Routes>
                    <Route path="/" view=LandingPage/>
                    <Route path=INTRO_PATH view=IntroPage/>
                    <Route path=RESEARCH_PATH view=ResearchPage/>
                    <Route path=SIMULATOR_PATH view=SimulatorPage/>
                    <Route path=UPDATES_PATH view=UpdatesPage/>
                    <Route path="/*" view=NotFoundPage/>
                </Routes>
            </Router>
        </ErrorBoundary>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(Root);
}
