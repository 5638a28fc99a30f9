//! `DrawingSurface` over a 2D canvas context.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::core::{Rgba, Vec2};
use crate::render::{DrawingSurface, Paint};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    fn apply_stroke(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_stroke_style_str(&color.css()),
            Paint::Linear { from, to, start, end } => {
                let gradient = self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
                let _ = gradient.add_color_stop(0.0, &start.css());
                let _ = gradient.add_color_stop(1.0, &end.css());
                self.ctx.set_stroke_style_canvas_gradient(&gradient);
            }
        }
    }
}

impl DrawingSurface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(x, y, w, h);
    }

    fn stroke_lines(&mut self, segments: &[(Vec2, Vec2)], paint: &Paint) {
        if segments.is_empty() {
            return;
        }
        self.apply_stroke(paint);
        self.ctx.begin_path();
        for (a, b) in segments {
            self.ctx.move_to(a.x, a.y);
            self.ctx.line_to(b.x, b.y);
        }
        self.ctx.stroke();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU);
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.set_font(font);
        let _ = self.ctx.fill_text(text, at.x, at.y);
    }
}
