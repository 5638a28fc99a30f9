//! Systems driven once per tick by the engine

pub mod grid_renderer;
pub mod particles;
pub mod ripples;

pub use grid_renderer::GridRenderer;
pub use particles::{LineContext, Particle, ParticleCounts, ParticlePool, ParticleState};
pub use ripples::{Ripple, RippleManager, RippleStyle};
