//! Particles - fixed pool of line-travelling entities with fading trails.

mod particle;
mod pool;
mod trail;

pub use particle::{Particle, ParticleState};
pub use pool::{ParticleCounts, ParticlePool};
pub use trail::Trail;

use crate::core::RandomSource;
use crate::spatial::{LineOccupancyRegistry, Viewport};

/// Shared state a particle needs to spawn and move
pub struct LineContext<'a, R: RandomSource> {
    pub registry: &'a mut LineOccupancyRegistry,
    pub viewport: &'a Viewport,
    pub rng: &'a mut R,
    pub speed_min: f64,
    pub speed_max: f64,
}
