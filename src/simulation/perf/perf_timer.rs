#[cfg(not(target_arch = "wasm32"))]
use std::{sync::OnceLock, time::Instant};

/// Milliseconds on a clock that only needs to be consistent within a run
fn clock_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        static ORIGIN: OnceLock<Instant> = OnceLock::new();
        ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
    }
}

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { start_ms: clock_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (clock_ms() - self.start_ms).max(0.0)
    }
}
