pub mod canvas;
pub mod components;
pub mod dom;
pub mod motion;
pub mod state;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(window) = dom::window() else { return };
    let loaded = dom::document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);

    // Measurements need final layout.
    if loaded {
        boot();
    } else {
        dom::listen::<web_sys::Event>(&window, "load", |_| boot());
    }
}

fn boot() {
    leptos::mount::mount_to_body(components::app::App);
}
