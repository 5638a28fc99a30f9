use crate::core::RandomSource;
use crate::render::DrawingSurface;

use super::EffectCore;

/// Source of "run again on the next refresh" callbacks
pub trait FrameScheduler {
    /// Ask for one more frame signal
    fn request_frame(&mut self);
    /// Drop an outstanding request, if any
    fn cancel(&mut self);
}

/// Drives an engine: one tick per frame signal, then re-arms the scheduler.
/// Stopping cancels the outstanding request; late signals are ignored.
#[derive(Debug, Default)]
pub struct AnimationLoop {
    running: bool,
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self { running: false }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) {
        if self.running {
            return;
        }
        self.running = true;
        scheduler.request_frame();
    }

    /// Handle one frame signal. Returns whether a tick ran.
    pub fn on_frame<R: RandomSource>(
        &mut self,
        core: &mut EffectCore<R>,
        now_ms: f64,
        surface: &mut dyn DrawingSurface,
        scheduler: &mut dyn FrameScheduler,
    ) -> bool {
        if !self.running {
            return false;
        }
        core.tick(now_ms, surface);
        scheduler.request_frame();
        true
    }

    pub fn stop(&mut self, scheduler: &mut dyn FrameScheduler) {
        if !self.running {
            return;
        }
        self.running = false;
        scheduler.cancel();
    }
}

/// Scheduler for tests and headless hosts: records requests, fires nothing.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: bool,
    requests: u32,
    cancels: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a frame is outstanding; clears it (the host "delivers" it)
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn requests(&self) -> u32 {
        self.requests
    }

    pub fn cancels(&self) -> u32 {
        self.cancels
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.pending = true;
        self.requests += 1;
    }

    fn cancel(&mut self) {
        if self.pending {
            self.pending = false;
            self.cancels += 1;
        }
    }
}
