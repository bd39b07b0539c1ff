use crate::analytics::{track_event, WEIGHTS_LOADED};
use crate::nca::{Automaton, UpdateNetwork, WeightsError};
use leptos::logging::log;
use leptos::*;

/// Paste exported weights to replace the randomly initialised update network,
/// or export the current one.
#[component]
pub fn WeightsPanel(automaton: StoredValue<Automaton>, set_frame: WriteSignal<u64>) -> impl IntoView {
    let (text, set_text) = create_signal(String::new());
    let (status, set_status) = create_signal::<Option<Result<String, String>>>(None);

    let load = move |_| {
        let result = UpdateNetwork::from_json(&text.get_untracked()).and_then(|network| {
            let mut outcome: Result<(), WeightsError> = Ok(());
            automaton.update_value(|a| outcome = a.load_network(network));
            outcome
        });
        match result {
            Ok(()) => {
                log!("NCA: loaded update network from pasted weights");
                track_event(WEIGHTS_LOADED);
                set_frame.update(|f| *f += 1);
                set_status.set(Some(Ok("Weights loaded".to_string())));
            }
            Err(e) => set_status.set(Some(Err(e.to_string()))),
        }
    };

    let export = move |_| match automaton.with_value(|a| a.network().to_json()) {
        Ok(json) => {
            set_text.set(json);
            set_status.set(Some(Ok("Current weights exported".to_string())));
        }
        Err(e) => set_status.set(Some(Err(e.to_string()))),
    };

    view! {
        <details class="weights-panel">
            <summary>"Update network weights"</summary>
            <textarea
                rows="6"
                placeholder="{\"perception_channels\": 48, \"hidden_channels\": 128, ...}"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            ></textarea>
            <div class="control-buttons">
                <button on:click=load>"Load"</button>
                <button on:click=export>"Export"</button>
            </div>
            {move || status.get().map(|s| match s {
                Ok(msg) => view! { <p class="status ok">{msg}</p> },
                Err(msg) => view! { <p class="status error">{msg}</p> },
            })}
        </details>
    }
}
