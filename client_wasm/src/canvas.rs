//! HTML canvas 2D drawing target

use game_core::{Clock, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Performance};

/// [`Surface`] backed by a canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    fn trace_circle(&self, x: f32, y: f32, radius: f32) {
        self.ctx.begin_path();
        if let Err(err) = self.ctx.arc(
            x as f64,
            y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {err:?}");
        }
        self.ctx.close_path();
    }
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.trace_circle(x, y, radius);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.ctx.set_stroke_style_str(color);
        self.trace_circle(x, y, radius);
        self.ctx.stroke();
    }
}

/// Frame clock on `performance.now()`, the same time base as
/// `requestAnimationFrame` timestamps
pub struct PerformanceClock {
    performance: Performance,
}

impl PerformanceClock {
    pub fn new(performance: Performance) -> Self {
        Self { performance }
    }
}

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        self.performance.now()
    }
}
