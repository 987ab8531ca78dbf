/// Mapping from the projection plane to integer canvas pixels
use nalgebra::Vector2;

use crate::config::{CANVAS_MARGIN, MAX_CANVAS_SIDE};
use crate::error::{GeometryError, Result};

/// Smallest axis-aligned rectangle containing a set of 2D points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn from_points(points: &[Vector2<f64>]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(points[1..].iter().fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True when the box has positive extent along both axes.
    pub fn has_area(&self) -> bool {
        self.min_x < self.max_x && self.min_y < self.max_y
    }
}

/// An integer pixel coordinate; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Uniform scale and offset that fit a bounding box into a canvas with a
/// fixed margin on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    pub origin_x: f64,
    pub origin_y: f64,
    pub scale: f64,
    pub canvas_width: u32,
    pub canvas_height: u32,
    min_x: f64,
    min_y: f64,
}

impl CanvasTransform {
    /// Derive a canvas for `bbox` at the given pixel height.
    ///
    /// The width follows the box's aspect ratio so both axes share one
    /// scale. Fails if the box is flat along either axis; there is no
    /// fallback scale.
    pub fn fit(bbox: &BoundingBox, target_height: u32) -> Result<Self> {
        if !bbox.has_area() {
            return Err(GeometryError::DegenerateBoundingBox {
                width: bbox.width(),
                height: bbox.height(),
            });
        }
        if target_height == 0 || target_height > MAX_CANVAS_SIDE {
            return Err(GeometryError::InvalidCanvas {
                width: 0,
                height: target_height,
            });
        }

        let height = f64::from(target_height);
        let width = (height / bbox.height() * bbox.width()).round_ties_even();
        if !(width >= 1.0 && width <= f64::from(MAX_CANVAS_SIDE)) {
            return Err(GeometryError::InvalidCanvas {
                // Saturating cast: NaN maps to 0.
                width: width as u32,
                height: target_height,
            });
        }

        let transform = Self {
            origin_x: CANVAS_MARGIN * width,
            origin_y: CANVAS_MARGIN * height,
            scale: (1.0 - 2.0 * CANVAS_MARGIN) * width / bbox.width(),
            canvas_width: width as u32,
            canvas_height: target_height,
            min_x: bbox.min_x,
            min_y: bbox.min_y,
        };
        log::debug!(
            "canvas {}x{}, scale {}, origin ({}, {})",
            transform.canvas_width,
            transform.canvas_height,
            transform.scale,
            transform.origin_x,
            transform.origin_y
        );
        Ok(transform)
    }

    /// Map a projected point to a pixel, flipping y so it grows downward.
    pub fn to_pixel(&self, point: &Vector2<f64>) -> PixelPos {
        let x = ((point.x - self.min_x) * self.scale + self.origin_x).round_ties_even();
        let y = ((point.y - self.min_y) * self.scale + self.origin_y).round_ties_even();
        PixelPos::new(x as i32, self.canvas_height as i32 - y as i32)
    }

    /// Whether a pixel lies on the canvas.
    pub fn contains(&self, pixel: PixelPos) -> bool {
        pixel.x >= 0
            && pixel.y >= 0
            && (pixel.x as i64) < i64::from(self.canvas_width)
            && (pixel.y as i64) < i64::from(self.canvas_height)
    }
}
