//! Browser bindings.
//!
//! Enabled with the `wasm` feature. The page owns the peer connection and
//! the animations; this module owns the match.

pub mod duel;

pub use duel::DuelHandle;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
