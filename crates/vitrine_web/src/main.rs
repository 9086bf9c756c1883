//! Binary target so `trunk build --features web` emits the page script.

fn main() {}

/// Runs when the wasm module is instantiated.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    vitrine_web::start();
}
