use crate::analytics::{track_event, OUTBOUND_CLICK};
use crate::components::SimulationCanvas;
use crate::config::SimulationConfig;
use crate::site::{Activation, NavEntry};
use crate::view_tree::{landing_view, Inline, ViewNode};
use leptos::*;
use leptos_router::A;

fn render_link(entry: NavEntry, class: &'static str) -> View {
    let label = entry.display_label();
    match entry.resolve() {
        Activation::Route(path) => view! { <A href=path class=class>{label}</A> }.into_view(),
        Activation::NewContext { .. } => {
            let attrs: Vec<(&'static str, Attribute)> = entry
                .anchor_attributes()
                .into_iter()
                .map(|(name, value)| (name, value.into_attribute()))
                .collect();
            view! {
                <a {..attrs} class=class on:click=move |_| track_event(OUTBOUND_CLICK)>
                    {label}
                </a>
            }
            .into_view()
        }
    }
}

fn render_inline(run: Inline) -> View {
    match run {
        Inline::Plain(text) => text.into_view(),
        Inline::Strong(text) => view! { <strong>{text}</strong> }.into_view(),
    }
}

fn render_node(node: ViewNode) -> View {
    match node {
        ViewNode::Block { class, children } => view! {
            <div class=class>{children.into_iter().map(render_node).collect_view()}</div>
        }
        .into_view(),
        ViewNode::Heading { level: 1, text } => view! { <h1>{text}</h1> }.into_view(),
        ViewNode::Heading { level: 2, text } => view! { <h2>{text}</h2> }.into_view(),
        ViewNode::Heading { text, .. } => view! { <h3>{text}</h3> }.into_view(),
        ViewNode::Paragraph { class, runs } => view! {
            <p class=class>{runs.into_iter().map(render_inline).collect_view()}</p>
        }
        .into_view(),
        // The landing embed ignores query parameters
        ViewNode::SimulationCanvas => {
            view! { <SimulationCanvas config=SimulationConfig::default()/> }.into_view()
        }
        ViewNode::LinkList(entries) => view! {
            <ul class="explore-links">
                {entries
                    .into_iter()
                    .map(|entry| view! { <li>{render_link(entry, "explore-link")}</li> })
                    .collect_view()}
            </ul>
        }
        .into_view(),
        ViewNode::CallToAction(entry) => render_link(entry, "cta-button"),
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main class="landing">
            {render_node(landing_view())}
        </main>
    }
}
