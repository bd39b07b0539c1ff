use crate::components::{SimulationControls, WeightsPanel};
use crate::config::SimulationConfig;
use crate::nca::Automaton;
use leptos::logging::warn;
use leptos::*;
use leptos_router::use_location;
use std::time::Duration;
use wasm_bindgen::{Clamped, JsCast};

/// Paint an RGBA8 buffer of `size x size` pixels onto the canvas.
fn draw(canvas: &web_sys::HtmlCanvasElement, size: u32, rgba: &[u8]) -> Result<(), String> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|_| "canvas: get_context threw".to_string())?
        .ok_or("canvas: missing 2d context".to_string())?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| "canvas: context is not 2d".to_string())?;
    let image = web_sys::ImageData::new_with_u8_clamped_array_and_sh(Clamped(rgba), size, size)
        .map_err(|_| "canvas: could not build ImageData".to_string())?;
    ctx.put_image_data(&image, 0.0, 0.0)
        .map_err(|_| "canvas: put_image_data failed".to_string())
}

/// Self-contained NCA surface.
///
/// Reads its parameters from the query string unless `config` is given (an
/// invalid explicit config falls back to defaults), then advances the automaton on a browser interval and repaints after each tick.
/// With `controls`, run controls and the weights panel are shown below it.
#[component]
pub fn SimulationCanvas(
    /// Show run controls and the weights panel
    #[prop(optional)]
    controls: bool,
    /// Explicit parameters; defaults to the page's query string
    #[prop(optional)]
    config: Option<SimulationConfig>,
) -> impl IntoView {
    let config = match config {
        Some(config) => config.validated_or_default(),
        None => {
            let search = use_location().search.get_untracked();
            SimulationConfig::from_query_or_default(&search)
        }
    };

    let automaton = store_value(Automaton::new(config));
    let canvas_ref = create_node_ref::<html::Canvas>();

    let (running, set_running) = create_signal(true);
    let (steps_per_frame, set_steps_per_frame) = create_signal(config.steps_per_frame);
    // Bumped after every change to the grid; the paint effect follows it
    let (frame, set_frame) = create_signal(0u64);

    create_effect(move |_| {
        frame.track();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let rgba = automaton.with_value(|a| a.rgba());
        if let Err(e) = draw(&canvas, config.grid_size as u32, &rgba) {
            warn!("NCA: {}", e);
        }
    });

    let tick = move || {
        if !running.get_untracked() {
            return;
        }
        let n = steps_per_frame.get_untracked().min(config.max_steps_per_frame());
        automaton.update_value(|a| {
            for _ in 0..n {
                a.step();
            }
        });
        set_frame.update(|f| *f += 1);
    };

    match set_interval_with_handle(tick, Duration::from_millis(config.frame_ms as u64)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(_) => warn!("NCA: could not start the simulation interval"),
    }

    view! {
        <div class="simulation">
            <canvas
                node_ref=canvas_ref
                class="nca-canvas"
                width=config.grid_size
                height=config.grid_size
                role="img"
                aria-label="Neural cellular automaton simulation"
            ></canvas>
            <Show when=move || controls>
                <SimulationControls
                    automaton=automaton
                    running=running
                    set_running=set_running
                    steps_per_frame=steps_per_frame
                    max_steps_per_frame=config.max_steps_per_frame()
                    set_steps_per_frame=set_steps_per_frame
                    frame=frame
                    set_frame=set_frame
                />
                <WeightsPanel automaton=automaton set_frame=set_frame/>
            </Show>
        </div>
    }
}
