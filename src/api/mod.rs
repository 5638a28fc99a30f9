//! Browser bindings: canvas surface, rAF scheduler and the exported classes

pub mod canvas;
pub mod raf;
pub mod wasm;
