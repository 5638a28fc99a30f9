use wasm_bindgen::prelude::*;

/// Per-tick snapshot, filled only while perf metrics are enabled
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub(super) frame: u64,
    pub(super) tick_ms: f64,
    pub(super) events_applied: u32,
    pub(super) travelling: u32,
    pub(super) draining: u32,
    pub(super) dormant: u32,
    pub(super) ripples: u32,
    pub(super) horizontal_lines: u32,
    pub(super) vertical_lines: u32,
}

impl FrameStats {
    pub(crate) fn reset(&mut self) {
        *self = FrameStats::default();
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn events_applied(&self) -> u32 { self.events_applied }
    #[wasm_bindgen(getter)]
    pub fn travelling(&self) -> u32 { self.travelling }
    #[wasm_bindgen(getter)]
    pub fn draining(&self) -> u32 { self.draining }
    #[wasm_bindgen(getter)]
    pub fn dormant(&self) -> u32 { self.dormant }
    #[wasm_bindgen(getter)]
    pub fn ripples(&self) -> u32 { self.ripples }
    #[wasm_bindgen(getter)]
    pub fn horizontal_lines(&self) -> u32 { self.horizontal_lines }
    #[wasm_bindgen(getter)]
    pub fn vertical_lines(&self) -> u32 { self.vertical_lines }
}
