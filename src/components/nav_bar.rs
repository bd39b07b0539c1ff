use crate::site::{INTRO_PATH, RESEARCH_PATH, SIMULATOR_PATH, UPDATES_PATH};
use leptos::*;
use leptos_router::{use_location, A};

#[component]
pub fn NavBar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    let link_class = move |href: &'static str| {
        let current = pathname();
        if current == href || (href != "/" && current.starts_with(href)) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <nav class="site-nav">
            <div class="site-nav-inner">
                <A href="/" class="nav-brand">"NCA"</A>
                <div class="nav-links">
                    <A href=INTRO_PATH class=move || link_class(INTRO_PATH)>"Intro"</A>
                    <A href=RESEARCH_PATH class=move || link_class(RESEARCH_PATH)>"Research"</A>
                    <A href=SIMULATOR_PATH class=move || link_class(SIMULATOR_PATH)>"Simulator"</A>
                    <A href=UPDATES_PATH class=move || link_class(UPDATES_PATH)>"Updates"</A>
                </div>
            </div>
        </nav>
    }
}
