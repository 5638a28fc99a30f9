//! `requestAnimationFrame`-backed scheduler.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::simulation::FrameScheduler;

/// Slot holding the per-frame callback. Shared between the scheduler (which
/// re-arms it) and the owner (which drops it on stop).
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct RafScheduler {
    window: Window,
    callback: FrameCallback,
    handle: Option<i32>,
}

impl RafScheduler {
    pub fn new(window: Window, callback: FrameCallback) -> Self {
        Self { window, callback, handle: None }
    }

    /// Called at the top of the frame callback: the request it answered is spent
    pub fn frame_fired(&mut self) {
        self.handle = None;
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        if self.handle.is_some() {
            return;
        }
        let slot = self.callback.borrow();
        let Some(cb) = slot.as_ref() else {
            return;
        };
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.handle = Some(id),
            Err(e) => console_warn!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel(&mut self) {
        if let Some(id) = self.handle.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}
