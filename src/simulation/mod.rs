//! Effect engine - one context object owning every piece of tick state.
//!
//! - init/      - construction from config
//! - events/    - resize / click handling and the deferred event queue
//! - step/      - the per-tick sequence (grid, particles, ripples)
//! - schedule/  - frame scheduler abstraction and the animation loop
//! - perf/      - optional frame statistics
//!
//! Nothing here is global: independent engines can coexist, and tests drive
//! one with a seeded random source, an explicit clock and a recording surface.

use std::collections::VecDeque;

use crate::core::{RandomSource, XorShift32};
use crate::domain::EngineConfig;
use crate::render::DrawingSurface;
use crate::spatial::{LineOccupancyRegistry, Viewport};
use crate::systems::{GridRenderer, LineContext, ParticleCounts, ParticlePool, RippleManager};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "events/events.rs"]
mod events;
#[path = "step/step.rs"]
mod step;
#[path = "schedule/scheduler.rs"]
mod scheduler;

pub use events::InputEvent;
pub use perf_stats::FrameStats;
pub use scheduler::{AnimationLoop, FrameScheduler, ManualScheduler};

use perf_timer::PerfTimer;

pub struct EffectCore<R: RandomSource = XorShift32> {
    config: EngineConfig,
    viewport: Viewport,
    registry: LineOccupancyRegistry,
    particles: ParticlePool,
    ripples: RippleManager,
    grid: GridRenderer,
    rng: R,

    /// Events waiting for the start of the next tick
    pending: VecDeque<InputEvent>,
    frame: u64,

    perf_enabled: bool,
    stats: FrameStats,
}

impl EffectCore<XorShift32> {
    /// Engine seeded from `config.rng_seed` (or the default seed)
    pub fn new(config: EngineConfig, viewport: Viewport) -> Self {
        let rng = XorShift32::new(config.rng_seed.unwrap_or(crate::core::random::DEFAULT_SEED));
        init::create_effect_core(config, viewport, rng)
    }
}

impl<R: RandomSource> EffectCore<R> {
    /// Engine with an injected random source
    pub fn with_rng(config: EngineConfig, viewport: Viewport, rng: R) -> Self {
        init::create_effect_core(config, viewport, rng)
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn viewport(&self) -> Viewport { self.viewport }

    pub fn registry(&self) -> &LineOccupancyRegistry { &self.registry }

    pub fn particles(&self) -> &ParticlePool { &self.particles }

    pub fn ripples(&self) -> &RippleManager { &self.ripples }

    pub fn particle_counts(&self) -> ParticleCounts { self.particles.counts() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Enable or disable per-tick frame stats (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
        if !enabled {
            self.stats.reset();
        }
    }

    /// Last tick's stats (zeros when perf disabled)
    pub fn frame_stats(&self) -> FrameStats {
        self.stats.clone()
    }

    /// Defer an event to the start of the next tick
    pub fn queue_event(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Apply an event right now (same-thread delivery)
    pub fn handle_event(&mut self, event: InputEvent, now_ms: f64) {
        events::apply_event(self, event, now_ms);
    }

    /// Run one tick: pending events, grid, particles, ripples
    pub fn tick(&mut self, now_ms: f64, surface: &mut dyn DrawingSurface) {
        step::tick(self, now_ms, surface);
    }

    /// Borrow the pieces a particle needs, leaving the pool free
    fn line_context(&mut self) -> (&mut ParticlePool, LineContext<'_, R>) {
        let ctx = LineContext {
            registry: &mut self.registry,
            viewport: &self.viewport,
            rng: &mut self.rng,
            speed_min: self.config.particle_speed_min,
            speed_max: self.config.particle_speed_max,
        };
        (&mut self.particles, ctx)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
