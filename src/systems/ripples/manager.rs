use crate::core::{RandomSource, Vec2};
use crate::render::DrawingSurface;

use super::ripple::Ripple;
use super::RippleStyle;

/// Live ripples. Grows on clicks, shrinks as ripples complete.
pub struct RippleManager {
    ripples: Vec<Ripple>,
    max_radius: f64,
    duration_ms: f64,
    style: RippleStyle,
}

impl RippleManager {
    pub fn new(max_radius: f64, duration_ms: f64, style: RippleStyle) -> Self {
        Self {
            ripples: Vec::new(),
            max_radius,
            duration_ms,
            style,
        }
    }

    pub fn spawn(&mut self, origin: Vec2, now_ms: f64) {
        self.ripples.push(Ripple::new(origin, now_ms, self.max_radius, self.duration_ms));
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    /// Prune, then update and draw the survivors. Completion is judged at
    /// `now_ms`, so a ripple that reaches full radius this tick is never
    /// drawn at full radius. Returns how many were drawn.
    pub fn step<R: RandomSource>(&mut self, now_ms: f64, surface: &mut dyn DrawingSurface, rng: &mut R) -> usize {
        self.ripples.retain(|r| !r.is_complete_at(now_ms));
        for ripple in self.ripples.iter_mut() {
            ripple.update(now_ms);
            ripple.draw(surface, &self.style, &mut *rng);
        }
        self.ripples.len()
    }
}
