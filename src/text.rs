//! Label rendering with the fixed 8x8 bitmap font.

use font8x8::legacy::BASIC_LEGACY;
use image::{Rgb, RgbImage};

/// Glyph cell size in pixels (the font is a fixed 8x8 grid).
pub const GLYPH_SIZE: u32 = 8;

/// Margin between the glyph bottoms and the bottom image edge.
pub const BOTTOM_MARGIN: u32 = 10;

/// Measured pixel width of a label (fixed-pitch font).
#[must_use]
pub fn text_width(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX).saturating_mul(GLYPH_SIZE)
}

/// Draw `text` with its top-left corner at `(x, y)`, clipping at the image
/// edges. Characters outside the basic ASCII range advance the pen but draw
/// nothing.
pub fn draw_text(image: &mut RgbImage, text: &str, x: i32, y: i32, color: Rgb<u8>) {
    let (width, height) = image.dimensions();
    let mut pen_x = x;

    for ch in text.chars() {
        if let Some(rows) = BASIC_LEGACY.get(ch as usize) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_SIZE {
                    if bits >> col & 1 == 0 {
                        continue;
                    }
                    let px = pen_x + i32::try_from(col).unwrap_or(0);
                    let py = y + i32::try_from(row).unwrap_or(0);
                    if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                        image.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
        pen_x += GLYPH_SIZE as i32;
    }
}

/// Draw a label horizontally centered, glyph bottoms [`BOTTOM_MARGIN`]
/// pixels above the bottom edge.
pub fn draw_label(image: &mut RgbImage, text: &str, color: Rgb<u8>) {
    let (width, height) = image.dimensions();
    let x = (i64::from(width) - i64::from(text_width(text))) / 2;
    let y = i64::from(height) - i64::from(BOTTOM_MARGIN) - i64::from(GLYPH_SIZE);
    #[allow(clippy::cast_possible_truncation)]
    draw_text(image, text, x as i32, y as i32, color);
}
