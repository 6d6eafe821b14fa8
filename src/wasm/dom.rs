use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::boot::CanvasSurface;
use crate::draw::Surface2d;
use crate::error::BootError;
use crate::scale::LogicalSize;

pub struct PreparedCanvas {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

/// Looks up the canvas by id and acquires its 2D context.
pub fn prepare_canvas(document: &Document, id: &str) -> Result<PreparedCanvas, BootError> {
    let canvas = document
        .get_element_by_id(id)
        .ok_or_else(|| BootError::ElementNotFound(id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| BootError::NotACanvas(id.to_string()))?;

    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .ok_or(BootError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| BootError::ContextUnavailable)?;

    Ok(PreparedCanvas { canvas, context })
}

impl CanvasSurface for HtmlCanvasElement {
    fn logical_size(&self) -> LogicalSize {
        LogicalSize::new(self.width(), self.height())
    }

    fn set_backing_size(&self, width: u32, height: u32) {
        self.set_width(width);
        self.set_height(height);
    }

    fn set_css_size(&self, width: &str, height: &str) -> Result<(), BootError> {
        let style = self.style();
        style
            .set_property("width", width)
            .and_then(|_| style.set_property("height", height))
            .map_err(|err| BootError::Dom(format!("{:?}", err)))
    }
}

impl Surface2d for CanvasRenderingContext2d {
    fn set_fill_style(&self, style: &str) {
        self.set_fill_style_str(style);
    }

    fn set_stroke_style(&self, style: &str) {
        self.set_stroke_style_str(style);
    }

    fn set_line_width(&self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn stroke_rect(&self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::stroke_rect(self, x, y, w, h);
    }

    fn begin_path(&self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn stroke(&self) {
        CanvasRenderingContext2d::stroke(self);
    }
}
