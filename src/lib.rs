//! Gridpulse Engine - grid-constrained particles and click ripples in WASM
//!
//! Architecture:
//! - core/        - RNG, colors, vectors, logging macros
//! - domain/      - configuration and errors
//! - spatial/     - viewport and the line occupancy registry
//! - render/      - drawing surface abstraction
//! - systems/     - grid renderer, particle pool, ripple manager
//! - simulation/  - engine context, tick sequence, animation loop
//! - api/         - canvas bindings and JS-facing exports

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod render;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Gridpulse engine v{} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::{default_config_json, start_animation, AnimationHandle, GridEffect};
pub use domain::{ConfigError, EngineConfig};
pub use simulation::{EffectCore, FrameStats, InputEvent};
