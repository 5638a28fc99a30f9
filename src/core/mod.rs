//! Core utilities shared by every system

#[macro_use]
pub mod utils;
pub mod color;
pub mod random;
pub mod vec2;

pub use color::{with_alpha, Rgba};
pub use random::{RandomSource, XorShift32};
pub use vec2::Vec2;
