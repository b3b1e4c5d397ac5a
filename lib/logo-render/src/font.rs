//! Monogram font resolution with an ordered fallback chain.
//!
//! Each candidate TrueType file is tried in sequence; the terminal fallback
//! is a built-in 5x7 block face rendered from bitmask rows, so resolution
//! can never fail and missing fonts never surface as errors.

use ab_glyph::{FontArc, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use std::fs;

/// Candidate font files, tried in order. The first two match the fonts the
/// original artwork was designed with; the rest cover common Linux and
/// Windows install paths.
const FONT_CANDIDATES: &[&str] = &[
    "arial.ttf",
    "arialbd.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "C:/Windows/Fonts/arialbd.ttf",
];

/// Built-in face geometry: 5 columns by 7 rows per glyph, with a one-column
/// gap between glyphs.
const GLYPH_COLS: u32 = 5;
const GLYPH_ROWS: u32 = 7;
const GLYPH_ADVANCE: u32 = GLYPH_COLS + 1;

/// A font usable for the monogram: either a loaded TrueType face or the
/// built-in block face.
pub enum MonogramFont {
    Truetype(FontArc),
    Builtin,
}

impl MonogramFont {
    /// Resolves a font through the fallback chain. Always succeeds; the
    /// built-in face is the terminal, non-failing strategy.
    pub fn resolve() -> Self {
        for path in FONT_CANDIDATES {
            let Ok(data) = fs::read(path) else {
                continue;
            };
            match FontArc::try_from_vec(data) {
                Ok(font) => {
                    log::debug!("monogram font: {path}");
                    return Self::Truetype(font);
                }
                Err(e) => log::debug!("skipping unusable font {path}: {e}"),
            }
        }

        log::debug!("monogram font: builtin block face");
        Self::Builtin
    }

    /// Measures the rendered bounding box of `text` at pixel size `px`.
    pub fn measure(&self, text: &str, px: f32) -> (u32, u32) {
        let glyphs = text.chars().count() as u32;
        if glyphs == 0 {
            return (0, 0);
        }

        match self {
            Self::Truetype(font) => {
                let (w, h) = text_size(PxScale::from(px), font, text);
                (w as u32, h as u32)
            }
            Self::Builtin => {
                let cell = px / GLYPH_ROWS as f32;
                let cols = glyphs * GLYPH_ADVANCE - 1;
                ((cols as f32 * cell).round() as u32, px.round() as u32)
            }
        }
    }

    /// Draws `text` with its top-left corner at `(x, y)`.
    pub fn draw(
        &self,
        canvas: &mut RgbImage,
        color: Rgb<u8>,
        x: i32,
        y: i32,
        px: f32,
        text: &str,
    ) {
        match self {
            Self::Truetype(font) => {
                draw_text_mut(canvas, color, x, y, PxScale::from(px), font, text);
            }
            Self::Builtin => draw_builtin(canvas, color, x, y, px, text),
        }
    }
}

fn draw_builtin(canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, px: f32, text: &str) {
    let cell = px / GLYPH_ROWS as f32;
    let mut pen_x = x as f32;

    for ch in text.chars() {
        let rows = glyph_rows(ch.to_ascii_uppercase());
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_COLS {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                let x0 = (pen_x + col as f32 * cell).round() as i32;
                let y0 = (y as f32 + row as f32 * cell).round() as i32;
                let x1 = (pen_x + (col + 1) as f32 * cell).round() as i32;
                let y1 = (y as f32 + (row + 1) as f32 * cell).round() as i32;
                let rect = Rect::at(x0, y0)
                    .of_size((x1 - x0).max(1) as u32, (y1 - y0).max(1) as u32);
                draw_filled_rect_mut(canvas, rect, color);
            }
        }
        pen_x += GLYPH_ADVANCE as f32 * cell;
    }
}

/// Row bitmasks for the built-in face, one `u8` per row with bit 4 as the
/// leftmost column. Unknown characters render as a filled box.
fn glyph_rows(ch: char) -> [u8; 7] {
    match ch {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        _ => [0x1F; 7],
    }
}
