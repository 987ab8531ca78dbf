//! Process-wide constants and render options.

use crate::surface::Color;

/// Tolerance for degenerate norms and basis orthogonality.
pub const MATH_EPS: f64 = 1e-8;

/// Fraction of the canvas reserved as margin on each side.
pub const CANVAS_MARGIN: f64 = 0.1;

/// Stroke color for links.
pub const LINE_COLOR: Color = Color::rgb(0, 0, 0);

/// Fill color for node labels.
pub const TEXT_COLOR: Color = Color::rgb(255, 0, 0);

/// Canvas background.
pub const BACKGROUND_COLOR: Color = Color::rgb(255, 255, 255);

/// Largest canvas width or height; pixel coordinates are `i32`.
pub const MAX_CANVAS_SIDE: u32 = i32::MAX as u32;

/// Default canvas height in pixels.
pub const DEFAULT_TARGET_HEIGHT: u32 = 600;

/// Default link stroke width in pixels.
pub const DEFAULT_LINE_WIDTH: u32 = 2;

/// Per-call render parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Canvas height in pixels; the width follows from the model's aspect ratio.
    pub target_height: u32,
    /// Link stroke width in pixels.
    pub line_width: u32,
}

impl RenderOptions {
    pub fn new(target_height: u32, line_width: u32) -> Self {
        Self {
            target_height,
            line_width,
        }
    }

    pub fn with_target_height(mut self, target_height: u32) -> Self {
        self.target_height = target_height;
        self
    }

    pub fn with_line_width(mut self, line_width: u32) -> Self {
        self.line_width = line_width;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_HEIGHT, DEFAULT_LINE_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.target_height, 600);
        assert_eq!(options.line_width, 2);
    }

    #[test]
    fn test_builder_setters() {
        let options = RenderOptions::default()
            .with_target_height(120)
            .with_line_width(1);
        assert_eq!(options, RenderOptions::new(120, 1));
    }
}
