use crate::core::RandomSource;
use crate::render::DrawingSurface;
use crate::spatial::Direction;

use super::events::drain_pending;
use super::{EffectCore, PerfTimer};

/// One tick, in fixed order:
/// 0. deferred events (resize / click), surface size sync
/// 1. grid background
/// 2. every particle: update then draw, pool order
/// 3. ripples: prune, update, draw
///
/// Never blocks; no I/O.
pub(super) fn tick<R: RandomSource>(core: &mut EffectCore<R>, now_ms: f64, surface: &mut dyn DrawingSurface) {
    let perf_on = core.perf_enabled;
    let tick_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let events_applied = drain_pending(core, now_ms);

    let vp = core.viewport;
    if surface.width() != vp.width || surface.height() != vp.height {
        surface.set_size(vp.width, vp.height);
    }

    core.grid.draw(&vp, surface);

    let dot_radius = core.config.trail_dot_radius;
    {
        let (particles, mut ctx) = core.line_context();
        particles.update_and_draw(&mut ctx, surface, dot_radius);
    }

    let ripples_drawn = core.ripples.step(now_ms, surface, &mut core.rng);

    if perf_on {
        let counts = core.particles.counts();
        let stats = &mut core.stats;
        stats.reset();
        stats.frame = core.frame;
        stats.events_applied = events_applied;
        stats.travelling = counts.travelling;
        stats.draining = counts.draining;
        stats.dormant = counts.dormant;
        stats.ripples = ripples_drawn as u32;
        stats.horizontal_lines = core.registry.claimed_count(Direction::Horizontal) as u32;
        stats.vertical_lines = core.registry.claimed_count(Direction::Vertical) as u32;
        if let Some(start) = tick_start {
            stats.tick_ms = start.elapsed_ms();
        }
    }

    core.frame += 1;
}
