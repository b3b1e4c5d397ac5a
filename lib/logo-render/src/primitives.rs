//! Pixel-level drawing helpers shared by the logo renderers.
//!
//! `imageproc` only draws single-pixel outlines and lines, while the logo
//! needs strokes whose width scales with the canvas. Rings are filled as
//! annuli and thick segments as filled quads.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;

/// Draws a circle outline of the given stroke width. The stroke extends
/// inward from `radius`, matching the outline convention of the original
/// artwork.
pub fn draw_ring_mut(
    canvas: &mut RgbImage,
    cx: f32,
    cy: f32,
    radius: f32,
    stroke: f32,
    color: Rgb<u8>,
) {
    if radius <= 0.0 || stroke <= 0.0 {
        return;
    }

    let inner = (radius - stroke).max(0.0);
    let inner_sq = inner * inner;
    let outer_sq = radius * radius;

    let (width, height) = canvas.dimensions();
    let x0 = (cx - radius).floor().max(0.0) as u32;
    let y0 = (cy - radius).floor().max(0.0) as u32;
    let x1 = ((cx + radius).ceil().max(0.0) as u32 + 1).min(width);
    let y1 = ((cy + radius).ceil().max(0.0) as u32 + 1).min(height);

    for y in y0..y1 {
        for x in x0..x1 {
            // Sample at the pixel center.
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq >= inner_sq && dist_sq <= outer_sq {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Draws a line segment with a given stroke width as a filled quad.
/// Degenerate or hairline strokes fall back to a single-pixel segment.
pub fn draw_thick_segment_mut(
    canvas: &mut RgbImage,
    start: (f32, f32),
    end: (f32, f32),
    stroke: f32,
    color: Rgb<u8>,
) {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let len = (dx * dx + dy * dy).sqrt();

    if len < 0.5 || stroke <= 1.5 {
        draw_line_segment_mut(canvas, start, end, color);
        return;
    }

    // Half-stroke offset perpendicular to the segment direction.
    let nx = -dy / len * stroke / 2.0;
    let ny = dx / len * stroke / 2.0;

    let quad = [
        Point::new((start.0 + nx).round() as i32, (start.1 + ny).round() as i32),
        Point::new((end.0 + nx).round() as i32, (end.1 + ny).round() as i32),
        Point::new((end.0 - nx).round() as i32, (end.1 - ny).round() as i32),
        Point::new((start.0 - nx).round() as i32, (start.1 - ny).round() as i32),
    ];

    // draw_polygon_mut panics when the first and last points coincide, which
    // can happen after rounding very short strokes.
    if quad[0] == quad[3] || quad[1] == quad[2] {
        draw_line_segment_mut(canvas, start, end, color);
        return;
    }

    draw_polygon_mut(canvas, &quad, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DARK_GREEN, WHITE};

    #[test]
    fn test_ring_covers_annulus_only() {
        let mut canvas = RgbImage::from_pixel(50, 50, WHITE);
        draw_ring_mut(&mut canvas, 25.0, 25.0, 20.0, 3.0, DARK_GREEN);

        // On the stroke: distance from center is within [17, 20].
        assert_eq!(canvas.get_pixel(44, 25), &DARK_GREEN);
        assert_eq!(canvas.get_pixel(25, 44), &DARK_GREEN);

        // Center and interior stay untouched.
        assert_eq!(canvas.get_pixel(25, 25), &WHITE);
        assert_eq!(canvas.get_pixel(35, 25), &WHITE);

        // Outside the outer radius stays untouched.
        assert_eq!(canvas.get_pixel(47, 25), &WHITE);
        assert_eq!(canvas.get_pixel(0, 0), &WHITE);
    }

    #[test]
    fn test_ring_clips_at_canvas_edge() {
        let mut canvas = RgbImage::from_pixel(30, 30, WHITE);
        // Ring larger than the canvas must not panic.
        draw_ring_mut(&mut canvas, 15.0, 15.0, 40.0, 5.0, DARK_GREEN);
        assert_eq!(canvas.get_pixel(15, 15), &WHITE);
    }

    #[test]
    fn test_thick_segment_spans_stroke_width() {
        let mut canvas = RgbImage::from_pixel(50, 50, WHITE);
        draw_thick_segment_mut(&mut canvas, (10.0, 25.0), (40.0, 25.0), 6.0, DARK_GREEN);

        assert_eq!(canvas.get_pixel(25, 25), &DARK_GREEN);
        assert_eq!(canvas.get_pixel(25, 23), &DARK_GREEN);
        assert_eq!(canvas.get_pixel(25, 27), &DARK_GREEN);

        // Clear of the stroke.
        assert_eq!(canvas.get_pixel(25, 18), &WHITE);
        assert_eq!(canvas.get_pixel(5, 25), &WHITE);
        assert_eq!(canvas.get_pixel(45, 25), &WHITE);
    }

    #[test]
    fn test_hairline_segment_falls_back_to_line() {
        let mut canvas = RgbImage::from_pixel(20, 20, WHITE);
        draw_thick_segment_mut(&mut canvas, (2.0, 10.0), (18.0, 10.0), 1.0, DARK_GREEN);
        assert_eq!(canvas.get_pixel(10, 10), &DARK_GREEN);
    }
}
