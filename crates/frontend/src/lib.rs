pub mod app;
pub mod nav;
pub mod web;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn run() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Err(err) = app::boot() {
        log::error!("SPA navigation disabled: {}", err);
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    run();
}
