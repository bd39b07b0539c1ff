use wasm_bindgen::prelude::*;

/// Visitor followed a link that leaves the site (e.g. "Get in Touch")
pub const OUTBOUND_CLICK: &str = "outbound-click";
/// Trained weights were pasted into the simulator
pub const WEIGHTS_LOADED: &str = "weights-loaded";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = umami, js_name = track)]
    fn umami_track(event: &str);
}

/// Track a custom event in Umami analytics.
/// Does nothing if the script was not loaded (e.g. blocked by an adblocker).
pub fn track_event(event: &str) {
    let loaded = js_sys::eval("typeof umami !== 'undefined'")
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    if loaded {
        umami_track(event);
    }
}
