use crate::core::{with_alpha, RandomSource, Vec2};
use crate::render::DrawingSurface;

use super::RippleStyle;

/// Expanding ring. Radius is a pure function of elapsed time, so it grows
/// the same at any frame rate.
#[derive(Clone, Debug)]
pub struct Ripple {
    origin: Vec2,
    radius: f64,
    max_radius: f64,
    duration_ms: f64,
    created_at_ms: f64,
}

impl Ripple {
    pub fn new(origin: Vec2, now_ms: f64, max_radius: f64, duration_ms: f64) -> Self {
        Self {
            origin,
            radius: 0.0,
            max_radius,
            duration_ms,
            created_at_ms: now_ms,
        }
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    pub fn created_at(&self) -> f64 {
        self.created_at_ms
    }

    /// Radius the ring has at `now_ms`; never below the last computed one
    pub fn radius_at(&self, now_ms: f64) -> f64 {
        let elapsed = (now_ms - self.created_at_ms).max(0.0);
        (self.max_radius * (elapsed / self.duration_ms)).max(self.radius)
    }

    pub fn update(&mut self, now_ms: f64) {
        self.radius = self.radius_at(now_ms);
    }

    pub fn alpha(&self) -> f64 {
        (1.0 - self.radius / self.max_radius).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.radius >= self.max_radius
    }

    /// Completion predicate evaluated at a given time
    pub fn is_complete_at(&self, now_ms: f64) -> bool {
        self.radius_at(now_ms) >= self.max_radius
    }

    /// Ring plus one random glyph somewhere inside its bounding square
    pub fn draw<R: RandomSource>(&self, surface: &mut dyn DrawingSurface, style: &RippleStyle, rng: &mut R) {
        let color = with_alpha(style.color, self.alpha());
        surface.stroke_circle(self.origin, self.radius, color);

        if style.glyphs.is_empty() {
            return;
        }
        let glyph = style.glyphs[rng.below(style.glyphs.len() as u32) as usize];
        let dx = (rng.next_f64() - 0.5) * self.radius * 2.0;
        let dy = (rng.next_f64() - 0.5) * self.radius * 2.0;
        let mut buf = [0u8; 4];
        surface.fill_text(glyph.encode_utf8(&mut buf), self.origin + Vec2::new(dx, dy), &style.font, color);
    }
}
