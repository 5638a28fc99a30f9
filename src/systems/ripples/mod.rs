//! Ripples - click-triggered expanding rings with a glyph overlay.

mod manager;
mod ripple;

pub use manager::RippleManager;
pub use ripple::Ripple;

use crate::core::Rgba;

/// Look shared by every ripple
#[derive(Clone, Debug)]
pub struct RippleStyle {
    pub color: Rgba,
    pub font: String,
    pub glyphs: Vec<char>,
}
