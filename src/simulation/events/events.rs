use crate::core::{RandomSource, Vec2};
use crate::spatial::Viewport;

use super::EffectCore;

/// Host input the engine reacts to
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// New viewport extent in px
    Resize { width: u32, height: u32 },
    /// Pointer click in canvas px
    Click { x: f64, y: f64 },
}

pub(super) fn apply_event<R: RandomSource>(core: &mut EffectCore<R>, event: InputEvent, now_ms: f64) {
    match event {
        InputEvent::Resize { width, height } => apply_resize(core, width, height),
        InputEvent::Click { x, y } => core.ripples.spawn(Vec2::new(x, y), now_ms),
    }
}

/// Old claims and positions are relative to the old extent: drop every claim,
/// then give every particle a fresh reset (Dormant ones included).
fn apply_resize<R: RandomSource>(core: &mut EffectCore<R>, width: u32, height: u32) {
    core.viewport = Viewport::new(width, height);
    core.registry.clear();

    let (particles, mut ctx) = core.line_context();
    let dormant = particles.reset_all(&mut ctx);

    console_log!(
        "viewport resized to {}x{} ({} of {} particles dormant)",
        width,
        height,
        dormant,
        core.particles.len()
    );
    if dormant > 0 {
        console_warn!("grid saturated: {} particles waiting for the next resize", dormant);
    }
}

/// Apply everything queued, in arrival order. Returns how many were applied.
pub(super) fn drain_pending<R: RandomSource>(core: &mut EffectCore<R>, now_ms: f64) -> u32 {
    let mut applied = 0;
    while let Some(event) = core.pending.pop_front() {
        apply_event(core, event, now_ms);
        applied += 1;
    }
    applied
}
