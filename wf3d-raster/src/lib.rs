//! Raster drawing surface for wireframe drawings.
//!
//! [`RasterCanvas`] implements [`DrawSurface`] on top of an in-memory RGB
//! image: thick straight lines, labels rasterized with `ab_glyph` (an
//! embedded DejaVu Sans Mono by default), and export to any format the
//! `image` crate can encode.

pub mod error;
pub mod font;

use std::io::Cursor;
use std::path::Path;

use ab_glyph::{point, Font, FontArc, PxScale, ScaleFont};
use image::{ImageFormat, Rgb, RgbImage};
use wf3d_core::{Color, DrawSurface, Drawing, PixelPos};

pub use error::{RasterError, Result};
pub use font::{default_font, load_font, FONT_SIZE};

/// Glyph coverage at or above which a pixel is inked; labels are not anti-aliased.
const COVERAGE_THRESHOLD: f32 = 0.5;

/// An RGB canvas that clips everything drawn outside its bounds.
pub struct RasterCanvas {
    image: RgbImage,
    font: FontArc,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self::with_font(width, height, background, default_font())
    }

    pub fn with_font(width: u32, height: u32, background: Color, font: FontArc) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(background.to_array())),
            font,
        }
    }

    /// Allocate a canvas sized for `drawing` and paint it with the default font.
    pub fn from_drawing(drawing: &Drawing) -> Self {
        drawing.paint()
    }

    /// Allocate a canvas sized for `drawing` and paint its labels in `font`.
    pub fn from_drawing_with_font(drawing: &Drawing, font: FontArc) -> Self {
        let mut canvas = Self::with_font(drawing.width, drawing.height, drawing.background, font);
        drawing.replay(&mut canvas);
        canvas
    }

    /// Width in pixels of `text` in this canvas's font.
    pub fn text_width(&self, text: &str) -> u32 {
        font::text_width(&self.font, text).ceil() as u32
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Color at a pixel, or `None` off-canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return None;
        }
        let Rgb([r, g, b]) = *self.image.get_pixel(x as u32, y as u32);
        Some(Color::rgb(r, g, b))
    }

    /// Save to `path`; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.image.save(path)?;
        log::info!(
            "saved {}x{} canvas to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }

    /// Encode the canvas as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    fn plot(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            self.image.put_pixel(x as u32, y as u32, Rgb(color.to_array()));
        }
    }

    /// Fill a `size`-pixel square centred on (x, y).
    fn stamp(&mut self, x: i32, y: i32, size: u32, color: Color) {
        let size = size.max(1) as i32;
        let lo = -(size - 1) / 2;
        for dy in lo..lo + size {
            for dx in lo..lo + size {
                self.plot(x + dx, y + dy, color);
            }
        }
    }
}

impl DrawSurface for RasterCanvas {
    fn blank(width: u32, height: u32, background: Color) -> Self {
        Self::new(width, height, background)
    }

    fn draw_line(&mut self, from: PixelPos, to: PixelPos, color: Color, width: u32) {
        // Bresenham, stamping the brush at every step.
        let (mut x, mut y) = (from.x, from.y);
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp(x, y, width, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_text(&mut self, at: PixelPos, text: &str, color: Color) {
        let font = self.font.clone();
        let scaled = font.as_scaled(PxScale::from(FONT_SIZE));
        let baseline = at.y as f32 + scaled.ascent();
        let mut pen_x = at.x as f32;
        let mut prev = None;
        let mut clipped = false;

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = prev {
                pen_x += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(FONT_SIZE, point(pen_x, baseline));
            pen_x += scaled.h_advance(id);
            prev = Some(id);

            // Whitespace has no outline.
            let Some(outlined) = font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
            outlined.draw(|gx, gy, coverage| {
                if coverage >= COVERAGE_THRESHOLD {
                    let (x, y) = (left + gx as i32, top + gy as i32);
                    clipped |= self.pixel(x, y).is_none();
                    self.plot(x, y, color);
                }
            });
        }

        if clipped {
            log::warn!("label {:?} at ({}, {}) runs off the canvas", text, at.x, at.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf3d_core::config::{BACKGROUND_COLOR, LINE_COLOR, TEXT_COLOR};
    use wf3d_core::{render, RenderOptions, WireframeModel};

    fn canvas(w: u32, h: u32) -> RasterCanvas {
        RasterCanvas::blank(w, h, BACKGROUND_COLOR)
    }

    #[test]
    fn test_blank_is_background() {
        let c = canvas(4, 3);
        assert_eq!((c.width(), c.height()), (4, 3));
        assert_eq!(c.pixel(3, 2), Some(BACKGROUND_COLOR));
        assert_eq!(c.pixel(4, 0), None);
    }

    #[test]
    fn test_thin_horizontal_line() {
        let mut c = canvas(10, 5);
        c.draw_line(PixelPos::new(1, 2), PixelPos::new(8, 2), LINE_COLOR, 1);
        assert!((1..=8).all(|x| c.pixel(x, 2) == Some(LINE_COLOR)));
        assert_eq!(c.pixel(0, 2), Some(BACKGROUND_COLOR));
        assert_eq!(c.pixel(9, 2), Some(BACKGROUND_COLOR));
        assert_eq!(c.pixel(4, 1), Some(BACKGROUND_COLOR));
    }

    #[test]
    fn test_diagonal_line_hits_both_ends() {
        let mut c = canvas(10, 10);
        c.draw_line(PixelPos::new(8, 1), PixelPos::new(1, 8), LINE_COLOR, 1);
        assert_eq!(c.pixel(8, 1), Some(LINE_COLOR));
        assert_eq!(c.pixel(1, 8), Some(LINE_COLOR));
        assert_eq!(c.pixel(4, 5), Some(LINE_COLOR));
    }

    #[test]
    fn test_line_width_thickens_stroke() {
        let mut c = canvas(10, 10);
        c.draw_line(PixelPos::new(2, 5), PixelPos::new(7, 5), LINE_COLOR, 3);
        assert_eq!(c.pixel(4, 4), Some(LINE_COLOR));
        assert_eq!(c.pixel(4, 6), Some(LINE_COLOR));
        assert_eq!(c.pixel(4, 3), Some(BACKGROUND_COLOR));
        assert_eq!(c.pixel(4, 7), Some(BACKGROUND_COLOR));
    }

    #[test]
    fn test_off_canvas_line_is_clipped() {
        let mut c = canvas(5, 5);
        c.draw_line(PixelPos::new(-10, -10), PixelPos::new(20, 20), LINE_COLOR, 2);
        assert_eq!(c.pixel(2, 2), Some(LINE_COLOR));
    }

    fn inked(c: &RasterCanvas, color: Color) -> Vec<(i32, i32)> {
        let (w, h) = (c.width() as i32, c.height() as i32);
        (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .filter(|&(x, y)| c.pixel(x, y) == Some(color))
            .collect()
    }

    #[test]
    fn test_label_inks_below_and_right_of_anchor() {
        let mut c = canvas(160, 40);
        let at = PixelPos::new(10, 8);
        c.draw_text(at, "(1,0,0.5)", TEXT_COLOR);

        let pixels = inked(&c, TEXT_COLOR);
        assert!(!pixels.is_empty());
        let right = at.x + c.text_width("(1,0,0.5)") as i32;
        let bottom = at.y + (FONT_SIZE * 1.5) as i32;
        for (x, y) in pixels {
            assert!(x >= at.x - 1 && x <= right, "x {x} outside label box");
            assert!(y >= at.y - 1 && y <= bottom, "y {y} outside label box");
        }
    }

    #[test]
    fn test_exponent_and_non_finite_labels_render() {
        for text in ["(1e+06,-2,0)", "(inf,nan,-inf)"] {
            let mut c = canvas(200, 30);
            c.draw_text(PixelPos::new(2, 2), text, TEXT_COLOR);
            assert!(!inked(&c, TEXT_COLOR).is_empty(), "nothing drawn for {text}");
        }
    }

    #[test]
    fn test_whitespace_draws_nothing() {
        let mut c = canvas(40, 30);
        c.draw_text(PixelPos::new(2, 2), "   ", TEXT_COLOR);
        assert!(inked(&c, TEXT_COLOR).is_empty());
    }

    #[test]
    fn test_off_canvas_label_is_clipped() {
        let mut c = canvas(20, 20);
        c.draw_text(PixelPos::new(15, 15), "(123,456,789)", TEXT_COLOR);
        c.draw_text(PixelPos::new(-500, -500), "(0,0,0)", TEXT_COLOR);
        assert_eq!((c.width(), c.height()), (20, 20));
    }

    #[test]
    fn test_text_width_grows_with_length() {
        let c = canvas(1, 1);
        assert_eq!(c.text_width(""), 0);
        assert!(c.text_width("(0,0,0)") > c.text_width("(0)"));
    }

    #[test]
    fn test_custom_font_canvas() {
        let drawing = render(&WireframeModel::unit_cube(), &RenderOptions::new(100, 1)).unwrap();
        let c = RasterCanvas::from_drawing_with_font(&drawing, default_font());
        assert_eq!((c.width(), c.height()), (drawing.width, drawing.height));
        assert!(!inked(&c, TEXT_COLOR).is_empty());
    }

    #[test]
    fn test_paint_cube_drawing() {
        let drawing = render(&WireframeModel::unit_cube(), &RenderOptions::new(200, 2)).unwrap();
        let c = RasterCanvas::from_drawing(&drawing);
        assert_eq!((c.width(), c.height()), (drawing.width, drawing.height));

        let image = c.image();
        let black = image.pixels().filter(|p| p.0 == LINE_COLOR.to_array()).count();
        let red = image.pixels().filter(|p| p.0 == TEXT_COLOR.to_array()).count();
        assert!(black > 0);
        assert!(red > 0);
    }

    #[test]
    fn test_encode_png_signature() {
        let bytes = canvas(3, 3).encode_png().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
