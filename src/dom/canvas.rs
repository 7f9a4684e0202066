use std::f64::consts::TAU;

use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::media::device_pixel_ratio;
use crate::motion::Surface;

/// A canvas plus its 2D context, sized in CSS pixels.
pub struct Canvas {
    element: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl Canvas {
    pub fn attach(element: HtmlCanvasElement) -> Option<Self> {
        let context = match element.get_context("2d") {
            Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok()?,
            Ok(None) => {
                warn!("Canvas has no 2d context");
                return None;
            }
            Err(e) => {
                warn!("getContext failed: {:?}", e);
                return None;
            }
        };
        Some(Canvas { element, context })
    }

    /// Sizes the backing store for the current pixel ratio and scales the
    /// context so drawing happens in CSS pixels. Returns the CSS size used.
    pub fn fit(&self, width: f64, height: f64) -> (f64, f64) {
        let (w, h) = (width.max(1.0).floor(), height.max(1.0).floor());
        let dpr = device_pixel_ratio();
        self.element.set_width((w * dpr).floor() as u32);
        self.element.set_height((h * dpr).floor() as u32);
        let style = self.element.style();
        let _ = style.set_property("width", &format!("{w}px"));
        let _ = style.set_property("height", &format!("{h}px"));
        let _ = self.context.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        (w, h)
    }

    pub fn element(&self) -> &HtmlCanvasElement {
        &self.element
    }

    pub fn surface(&mut self) -> &mut CanvasRenderingContext2d {
        &mut self.context
    }
}

#[allow(deprecated)]
impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.set_global_alpha(alpha);
    }

    fn set_fill(&mut self, color: &str) {
        self.set_fill_style(&JsValue::from_str(color));
    }

    fn set_stroke(&mut self, color: &str) {
        self.set_stroke_style(&JsValue::from_str(color));
        self.set_line_width(1.0);
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64) {
        self.begin_path();
        if self.arc(x, y, radius, 0.0, TAU).is_ok() {
            self.fill();
        }
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.fill_rect(x, y, width, height);
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64)) {
        self.begin_path();
        self.move_to(from.0, from.1);
        self.line_to(to.0, to.1);
        self.stroke();
    }
}
