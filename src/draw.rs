//! Debug drawing. Not called during startup; handy for checking that strokes
//! land on whole physical pixels at a given device pixel ratio.

use crate::scale::DisplayScale;

/// The 2D drawing calls used by [`debug_draw`].
pub trait Surface2d {
    fn set_fill_style(&self, style: &str);
    fn set_stroke_style(&self, style: &str);
    fn set_line_width(&self, width: f64);
    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_rect(&self, x: f64, y: f64, w: f64, h: f64);
    fn begin_path(&self);
    fn move_to(&self, x: f64, y: f64);
    fn line_to(&self, x: f64, y: f64);
    fn stroke(&self);
}

/// Side length of the marker square, in logical pixels.
pub const MARKER_SIZE: f64 = 10.0;

/// Paints a green block in the corner and a marker square with a vertical
/// tail at `(x, y)`, given in physical pixels.
pub fn debug_draw<S: Surface2d + ?Sized>(surface: &S, scale: DisplayScale, x: f64, y: f64) {
    let ratio = scale.ratio();
    // half a physical pixel puts a 1px stroke on a pixel boundary
    let pixel_offset = ratio / 2.0;
    let size = MARKER_SIZE * ratio;
    let offset = size / 2.0 + pixel_offset;

    surface.set_fill_style("green");
    surface.fill_rect(10.0, 10.0, 100.0, 100.0);

    surface.set_line_width(ratio);
    surface.set_stroke_style("black");
    surface.stroke_rect(x - offset, y - offset, size, size);

    let (x0, y0) = (x - pixel_offset, y - pixel_offset);
    let y1 = y - size - pixel_offset;
    log::debug!("line {x0} {y0} {x0} {y1}");
    surface.begin_path();
    surface.move_to(x0, y0);
    surface.line_to(x0, y1);
    surface.stroke();
}
