use crate::core::{RandomSource, Rgba};
use crate::render::DrawingSurface;
use crate::spatial::LineClaim;

use super::particle::{Particle, ParticleState};
use super::LineContext;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParticleCounts {
    pub travelling: u32,
    pub draining: u32,
    pub dormant: u32,
}

/// Fixed-size particle collection. Particles are never added or removed,
/// only moved between states.
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    /// Build `count` particles with palette colors and give each a first spawn
    pub fn new<R: RandomSource>(
        count: usize,
        palette: &[Rgba],
        trail_capacity: usize,
        ctx: &mut LineContext<'_, R>,
    ) -> Self {
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let color = match palette.len() {
                0 => Rgba::WHITE,
                n => palette[ctx.rng.below(n as u32) as usize],
            };
            let mut particle = Particle::new(color, trail_capacity);
            let _ = particle.reset(ctx);
            particles.push(particle);
        }
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Update then draw each particle, in pool order
    pub fn update_and_draw<R: RandomSource>(
        &mut self,
        ctx: &mut LineContext<'_, R>,
        surface: &mut dyn DrawingSurface,
        dot_radius: f64,
    ) {
        for particle in self.particles.iter_mut() {
            particle.update(ctx);
            particle.draw(surface, dot_radius);
        }
    }

    /// Force every particle through reset regardless of state.
    /// Every held line is released before any particle re-claims, so a
    /// stale key never frees a line another particle just took.
    /// Returns how many ended up Dormant.
    pub fn reset_all<R: RandomSource>(&mut self, ctx: &mut LineContext<'_, R>) -> u32 {
        for particle in self.particles.iter_mut() {
            particle.release_claim(ctx);
        }
        let mut dormant = 0;
        for particle in self.particles.iter_mut() {
            if particle.reset(ctx).is_err() {
                dormant += 1;
            }
        }
        dormant
    }

    pub fn counts(&self) -> ParticleCounts {
        let mut counts = ParticleCounts::default();
        for p in &self.particles {
            match p.state() {
                ParticleState::Travelling => counts.travelling += 1,
                ParticleState::Draining => counts.draining += 1,
                ParticleState::Dormant => counts.dormant += 1,
            }
        }
        counts
    }

    /// Lines held by travelling particles
    pub fn claims(&self) -> impl Iterator<Item = LineClaim> + '_ {
        self.particles.iter().filter_map(|p| p.claim())
    }
}
