//! Label fonts: the embedded default and user-supplied font files.

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::Result;

/// Pixel height labels are drawn at.
pub const FONT_SIZE: f32 = 14.0;

static DEFAULT_FONT_DATA: &[u8] = include_bytes!("../data/fonts/DejaVuSansMono.ttf");

/// The font used when no other is supplied (DejaVu Sans Mono).
pub fn default_font() -> FontArc {
    static FONT: OnceLock<FontArc> = OnceLock::new();
    FONT.get_or_init(|| {
        FontArc::try_from_slice(DEFAULT_FONT_DATA).expect("embedded font is a valid TrueType file")
    })
    .clone()
}

/// Load a TrueType or OpenType font from disk.
pub fn load_font<P: AsRef<Path>>(path: P) -> Result<FontArc> {
    let data = fs::read(path.as_ref())?;
    let font = FontArc::try_from_vec(data)?;
    log::debug!("loaded label font from {}", path.as_ref().display());
    Ok(font)
}

/// Horizontal extent of `text` at [`FONT_SIZE`], kerning included.
pub fn text_width(font: &FontArc, text: &str) -> f32 {
    let scaled = font.as_scaled(PxScale::from(FONT_SIZE));
    let mut width = 0.0;
    let mut prev = None;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = prev {
            width += scaled.kern(prev, id);
        }
        width += scaled.h_advance(id);
        prev = Some(id);
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_font_covers_label_characters() {
        let font = default_font();
        for c in "0123456789(),.-+einfa".chars() {
            assert_ne!(font.glyph_id(c).0, 0, "missing glyph for {c:?}");
        }
    }

    #[test]
    fn test_text_width_is_monospaced() {
        let font = default_font();
        assert_eq!(text_width(&font, ""), 0.0);
        let one = text_width(&font, "1");
        assert!(one > 0.0);
        assert_relative_eq!(text_width(&font, "(1,0,0)"), one * 7.0, epsilon = 1e-3);
    }

    #[test]
    fn test_load_missing_font_is_io_error() {
        let err = load_font("/nonexistent/font.ttf").unwrap_err();
        assert!(matches!(err, crate::RasterError::Io(_)));
    }

    #[test]
    fn test_load_invalid_font() {
        let path = std::env::temp_dir().join("wf3d-raster-not-a-font.ttf");
        fs::write(&path, b"definitely not a font").unwrap();
        let err = load_font(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(err, crate::RasterError::Font(_)));
    }
}
