use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use crate::domain::EngineConfig;
use crate::render::DrawingSurface;
use crate::simulation::{AnimationLoop, EffectCore, FrameStats, InputEvent};
use crate::spatial::Viewport;

use super::canvas::CanvasSurface;
use super::raf::{FrameCallback, RafScheduler};

fn parse_config(config_json: Option<String>) -> Result<EngineConfig, JsValue> {
    let mut config = match config_json {
        Some(json) => EngineConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => EngineConfig::default(),
    };
    if config.rng_seed.is_none() {
        config.rng_seed = Some((js_sys::Math::random() * u32::MAX as f64) as u32);
    }
    console_log!(
        "config loaded: {} particles, cell {}px, trail {}",
        config.particle_count,
        config.grid_size,
        config.trail_length
    );
    Ok(config)
}

fn window_size(window: &Window) -> (u32, u32) {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32;
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Stock configuration as JSON, for hosts that want to tweak a copy
#[wasm_bindgen]
pub fn default_config_json() -> String {
    EngineConfig::default().to_json()
}

/// Engine bound to a canvas, driven by the host: call `frame` from the host's
/// own `requestAnimationFrame` loop, forward resize and click events.
#[wasm_bindgen]
pub struct GridEffect {
    core: EffectCore,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl GridEffect {
    /// Build from a canvas (sized by the host) and an optional JSON config
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<GridEffect, JsValue> {
        let config = parse_config(config_json)?;
        let surface = CanvasSurface::new(canvas)?;
        let viewport = Viewport::new(surface.width(), surface.height());
        Ok(Self {
            core: EffectCore::new(config, viewport),
            surface,
        })
    }

    /// Run one tick; `now_ms` is the rAF timestamp
    pub fn frame(&mut self, now_ms: f64) {
        self.core.tick(now_ms, &mut self.surface);
    }

    /// Queue a viewport resize for the next frame
    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.queue_event(InputEvent::Resize { width, height });
    }

    /// Queue a ripple at canvas coordinates for the next frame
    pub fn click(&mut self, x: f64, y: f64) {
        self.core.queue_event(InputEvent::Click { x, y });
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.viewport().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.viewport().height }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize { self.core.particles().len() }

    #[wasm_bindgen(getter)]
    pub fn dormant_count(&self) -> u32 { self.core.particle_counts().dormant }

    #[wasm_bindgen(getter)]
    pub fn ripple_count(&self) -> usize { self.core.ripples().len() }

    /// Enable or disable per-frame stats (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last frame's stats (zeros when perf disabled)
    pub fn get_frame_stats(&self) -> FrameStats {
        self.core.frame_stats()
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }
}

struct Runner {
    core: EffectCore,
    surface: CanvasSurface,
    scheduler: RafScheduler,
    animation: AnimationLoop,
}

/// Self-driving animation attached to a canvas. Dropping or stopping it
/// cancels the pending frame and detaches the listeners.
#[wasm_bindgen]
pub struct AnimationHandle {
    runner: Rc<RefCell<Runner>>,
    frame_cb: FrameCallback,
    resize_cb: Option<Closure<dyn FnMut()>>,
    click_cb: Option<Closure<dyn FnMut(MouseEvent)>>,
    window: Window,
    canvas: HtmlCanvasElement,
}

/// Size the canvas to the window, wire window resize and canvas clicks, and
/// start a `requestAnimationFrame` loop.
#[wasm_bindgen]
pub fn start_animation(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<AnimationHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let config = parse_config(config_json)?;

    let (width, height) = window_size(&window);
    canvas.set_width(width);
    canvas.set_height(height);

    let surface = CanvasSurface::new(canvas.clone())?;
    let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
    let runner = Rc::new(RefCell::new(Runner {
        core: EffectCore::new(config, Viewport::new(width, height)),
        surface,
        scheduler: RafScheduler::new(window.clone(), frame_cb.clone()),
        animation: AnimationLoop::new(),
    }));

    {
        let runner = runner.clone();
        *frame_cb.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |now_ms: f64| {
            let mut guard = runner.borrow_mut();
            let Runner { core, surface, scheduler, animation } = &mut *guard;
            scheduler.frame_fired();
            animation.on_frame(core, now_ms, surface, scheduler);
        }));
    }

    let resize_cb = {
        let runner = runner.clone();
        let win = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            let (width, height) = window_size(&win);
            runner.borrow_mut().core.queue_event(InputEvent::Resize { width, height });
        })
    };
    window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())?;

    let click_cb = {
        let runner = runner.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let (x, y) = (event.client_x() as f64, event.client_y() as f64);
            runner.borrow_mut().core.queue_event(InputEvent::Click { x, y });
        })
    };
    canvas.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())?;

    {
        let mut guard = runner.borrow_mut();
        let Runner { scheduler, animation, .. } = &mut *guard;
        animation.start(scheduler);
    }
    console_log!("animation started at {}x{}", width, height);

    Ok(AnimationHandle {
        runner,
        frame_cb,
        resize_cb: Some(resize_cb),
        click_cb: Some(click_cb),
        window,
        canvas,
    })
}

#[wasm_bindgen]
impl AnimationHandle {
    /// Stop scheduling frames and detach listeners. Idempotent.
    pub fn stop(&mut self) {
        {
            let mut guard = self.runner.borrow_mut();
            let Runner { scheduler, animation, .. } = &mut *guard;
            if animation.is_running() {
                animation.stop(scheduler);
                console_log!("animation stopped after {} frames", guard.core.frame());
            }
        }
        if let Some(cb) = self.resize_cb.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
        if let Some(cb) = self.click_cb.take() {
            let _ = self
                .canvas
                .remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        }
        // Breaks the callback -> runner -> scheduler -> callback cycle
        self.frame_cb.borrow_mut().take();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.runner.borrow().animation.is_running()
    }

    pub fn enable_perf_metrics(&self, enabled: bool) {
        self.runner.borrow_mut().core.enable_perf_metrics(enabled);
    }

    pub fn get_frame_stats(&self) -> FrameStats {
        self.runner.borrow().core.frame_stats()
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
