use wasm_bindgen::prelude::*;

mod api;
mod canvas;
mod error;
mod fetch;
mod interop;

pub use api::GraphPad;
pub use canvas::CanvasSurface;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(start)]
pub fn start() {
    let _ = console_log::init_with_level(log::Level::Info);
}
