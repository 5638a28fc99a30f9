use crate::core::{Rgba, Vec2};

/// Stroke/fill paint
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    /// Two-stop linear gradient from `start` at `from` to `end` at `to`
    Linear {
        from: Vec2,
        to: Vec2,
        start: Rgba,
        end: Rgba,
    },
}

/// What the engine needs from a 2D drawing target (a canvas context in the
/// browser, a command recorder in tests). Operations cannot fail.
pub trait DrawingSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Resize the backing store; called when a resize event is applied
    fn set_size(&mut self, width: u32, height: u32);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba);
    /// Stroke a batch of independent line segments with one paint
    fn stroke_lines(&mut self, segments: &[(Vec2, Vec2)], paint: &Paint);
    fn stroke_circle(&mut self, center: Vec2, radius: f64, color: Rgba);
    /// Filled disc
    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba);
    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, color: Rgba);
}
