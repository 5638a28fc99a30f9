use std::collections::VecDeque;

use crate::core::RandomSource;
use crate::domain::EngineConfig;
use crate::spatial::{LineOccupancyRegistry, Viewport};
use crate::systems::{GridRenderer, LineContext, ParticlePool, RippleManager, RippleStyle};

use super::perf_stats::FrameStats;
use super::EffectCore;

pub(super) fn create_effect_core<R: RandomSource>(
    config: EngineConfig,
    viewport: Viewport,
    mut rng: R,
) -> EffectCore<R> {
    let mut registry = LineOccupancyRegistry::new(config.grid_size, config.line_probe_limit);

    let particles = {
        let mut ctx = LineContext {
            registry: &mut registry,
            viewport: &viewport,
            rng: &mut rng,
            speed_min: config.particle_speed_min,
            speed_max: config.particle_speed_max,
        };
        ParticlePool::new(
            config.particle_count,
            &config.particle_colors,
            config.trail_length,
            &mut ctx,
        )
    };

    let dormant = particles.counts().dormant;
    if dormant > 0 {
        console_warn!(
            "{} of {} particles found no free grid line",
            dormant,
            particles.len()
        );
    }

    let ripples = RippleManager::new(
        config.ripple_max_radius,
        config.ripple_duration,
        RippleStyle {
            color: config.ripple_color,
            font: config.glyph_font.clone(),
            glyphs: config.glyph_alphabet.chars().collect(),
        },
    );

    let grid = GridRenderer::new(config.grid_size, config.grid_color, config.background_color);

    console_debug!(
        "effect core ready: {}x{}, {} particles, cell {}",
        viewport.width,
        viewport.height,
        particles.len(),
        config.grid_size
    );

    EffectCore {
        config,
        viewport,
        registry,
        particles,
        ripples,
        grid,
        rng,
        pending: VecDeque::new(),
        frame: 0,
        perf_enabled: false,
        stats: FrameStats::default(),
    }
}
