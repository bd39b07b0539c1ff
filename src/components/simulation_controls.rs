use crate::nca::Automaton;
use leptos::*;

#[component]
pub fn SimulationControls(
    automaton: StoredValue<Automaton>,
    running: ReadSignal<bool>,
    set_running: WriteSignal<bool>,
    steps_per_frame: ReadSignal<u32>,
    /// Slider ceiling from the config's frame budget
    max_steps_per_frame: u32,
    set_steps_per_frame: WriteSignal<u32>,
    frame: ReadSignal<u64>,
    set_frame: WriteSignal<u64>,
) -> impl IntoView {
    let redraw = move || set_frame.update(|f| *f += 1);

    let step_once = move |_| {
        automaton.update_value(|a| a.step());
        redraw();
    };

    let reset = move |_| {
        automaton.update_value(|a| a.reset());
        redraw();
    };

    // Next seed derived from the current one so reseeding stays reproducible
    let reseed = move |_| {
        automaton.update_value(|a| {
            let seed = a.config().seed.wrapping_add(1);
            a.reseed(seed);
        });
        redraw();
    };

    let step_count = move || {
        frame.track();
        automaton.with_value(|a| a.steps())
    };
    let seed = move || {
        frame.track();
        automaton.with_value(|a| a.config().seed)
    };
    let alive = move || {
        frame.track();
        automaton.with_value(|a| a.alive_cells())
    };

    view! {
        <div class="simulation-controls">
            <div class="control-buttons">
                <button
                    class:active=move || running.get()
                    on:click=move |_| set_running.update(|r| *r = !*r)
                >
                    {move || if running.get() { "Pause" } else { "Resume" }}
                </button>
                <button on:click=step_once disabled=move || running.get()>"Step"</button>
                <button on:click=reset>"Reset"</button>
                <button on:click=reseed>"Reseed"</button>
            </div>
            <label class="speed-control">
                <span>"Steps per frame: " {move || steps_per_frame.get()}</span>
                <input
                    type="range"
                    min="1"
                    max=max_steps_per_frame
                    prop:value=move || steps_per_frame.get()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                            set_steps_per_frame.set(v.clamp(1, max_steps_per_frame));
                        }
                    }
                />
            </label>
            <dl class="simulation-stats">
                <dt>"Step"</dt>
                <dd>{step_count}</dd>
                <dt>"Seed"</dt>
                <dd>{seed}</dd>
                <dt>"Alive cells"</dt>
                <dd>{alive}</dd>
            </dl>
        </div>
    }
}
