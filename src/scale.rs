//! Device-pixel-ratio arithmetic for the canvas backing store.
//!
//! A canvas has two sizes: the pixel buffer it draws into and the size it is
//! laid out at on the page. On a high density display the buffer has to be
//! `ratio` times larger than the layout size or everything drawn looks blurry.

use crate::error::BootError;

/// Physical pixels per logical (CSS) pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale(f64);

impl DisplayScale {
    pub fn new(ratio: f64) -> Result<Self, BootError> {
        if ratio.is_finite() && ratio > 0.0 {
            Ok(Self(ratio))
        } else {
            Err(BootError::InvalidScale(ratio))
        }
    }

    pub fn ratio(self) -> f64 {
        self.0
    }

    /// Scales a logical length to physical pixels.
    ///
    /// Truncates toward zero, which is what the browser does when a float is
    /// assigned to `canvas.width`.
    pub fn to_physical(self, logical: u32) -> u32 {
        (logical as f64 * self.0) as u32
    }
}

/// Canvas size as declared by the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalSize {
    pub width: u32,
    pub height: u32,
}

impl LogicalSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledLayout {
    pub logical: LogicalSize,
    pub physical: (u32, u32),
}

impl ScaledLayout {
    pub fn new(logical: LogicalSize, scale: DisplayScale) -> Self {
        Self {
            logical,
            physical: (
                scale.to_physical(logical.width),
                scale.to_physical(logical.height),
            ),
        }
    }

    pub fn css_width(&self) -> String {
        format!("{}px", self.logical.width)
    }

    pub fn css_height(&self) -> String {
        format!("{}px", self.logical.height)
    }
}
