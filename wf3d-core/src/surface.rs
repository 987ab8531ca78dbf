//! The drawing-surface seam between geometry and pixels.
//!
//! The core never touches pixels itself. It produces a [`crate::Drawing`]
//! and replays it onto anything implementing [`DrawSurface`].

use crate::canvas::PixelPos;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// A canvas that can receive drawing commands.
pub trait DrawSurface: Sized {
    /// Allocate a blank canvas filled with `background`.
    fn blank(width: u32, height: u32, background: Color) -> Self;

    /// Draw a straight segment between two pixels.
    fn draw_line(&mut self, from: PixelPos, to: PixelPos, color: Color, width: u32);

    /// Draw text with its top-left corner at `at`, in the surface's default font.
    fn draw_text(&mut self, at: PixelPos, text: &str, color: Color);
}
