//! Circular trading arrows: a ring with four chevron-tipped radial arrows.

use crate::primitives::{draw_ring_mut, draw_thick_segment_mut};
use image::{Rgb, RgbImage};
use std::f32::consts::PI;

const NUM_ARROWS: u32 = 4;

/// Draws the trading symbol centered at `(cx, cy)`.
///
/// Stroke widths are proportional to the overall canvas `size`, not to the
/// ring radius, so the motif keeps its weight relative to the whole logo.
/// Four arrows sit at 90 degree intervals, rotated by -45 degrees, each a
/// radial segment from `0.7 * radius` to `0.9 * radius` tipped with two
/// chevron strokes at +-135 degrees of length `0.025 * size`.
pub fn draw_trading_arrows(
    canvas: &mut RgbImage,
    cx: f32,
    cy: f32,
    radius: f32,
    size: f32,
    color: Rgb<u8>,
) {
    let stroke = size * 0.015;

    draw_ring_mut(canvas, cx, cy, radius, stroke, color);

    for i in 0..NUM_ARROWS {
        let angle = (i as f32 * 360.0 / NUM_ARROWS as f32 - 45.0) * PI / 180.0;

        let start = (
            cx + radius * 0.7 * angle.cos(),
            cy + radius * 0.7 * angle.sin(),
        );
        let end = (
            cx + radius * 0.9 * angle.cos(),
            cy + radius * 0.9 * angle.sin(),
        );
        draw_thick_segment_mut(canvas, start, end, stroke, color);

        let head_len = size * 0.025;
        for head_turn in [0.75, 1.25] {
            let head_angle = angle + PI * head_turn;
            let tip = (
                end.0 + head_len * head_angle.cos(),
                end.1 + head_len * head_angle.sin(),
            );
            draw_thick_segment_mut(canvas, end, tip, stroke, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DARK_GREEN, WHITE};

    #[test]
    fn test_ring_and_arrows_are_drawn() {
        let mut canvas = RgbImage::from_pixel(200, 200, WHITE);
        draw_trading_arrows(&mut canvas, 100.0, 100.0, 50.0, 400.0, DARK_GREEN);

        // Ring stroke: width 6 inward from radius 50.
        assert_eq!(canvas.get_pixel(148, 100), &DARK_GREEN);
        assert_eq!(canvas.get_pixel(100, 148), &DARK_GREEN);

        // Arrow shaft at 45 degrees: radial span [35, 45], so the point at
        // distance 40 along the diagonal lies on the shaft.
        assert_eq!(canvas.get_pixel(128, 128), &DARK_GREEN);
    }

    #[test]
    fn test_interior_and_exterior_untouched() {
        let mut canvas = RgbImage::from_pixel(200, 200, WHITE);
        draw_trading_arrows(&mut canvas, 100.0, 100.0, 50.0, 400.0, DARK_GREEN);

        assert_eq!(canvas.get_pixel(100, 100), &WHITE);
        assert_eq!(canvas.get_pixel(5, 5), &WHITE);
        assert_eq!(canvas.get_pixel(100, 5), &WHITE);
    }
}
