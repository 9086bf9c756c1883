//! Attaches the `vitrine` controllers to a live document.
//!
//! Off wasm32, or without `--features web`, [`start`] only logs, so
//! `cargo test --workspace` runs on any host.

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn start() {
    tracing::debug!("vitrine_web built without the `web` feature; nothing to wire");
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
