//! Wheat stalk glyph: a vertical stalk body with three grains attached.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

/// Draws one wheat stalk anchored at `(x, bottom_y)`, growing upward.
///
/// The stalk body is a filled rectangle of horizontal extent `x ± width`.
/// Three grains hang off the upper portion, alternating sides: grain `i`
/// sits at `top_y + i * height * 0.15`, offset by `2 * width` to the right
/// for even `i` and to the left for odd `i`.
pub fn draw_wheat_stalk(
    canvas: &mut RgbImage,
    x: f32,
    bottom_y: f32,
    height: f32,
    width: f32,
    color: Rgb<u8>,
) {
    let top_y = bottom_y - height;

    // Corner-inclusive extent: the body spans both `x - width` and
    // `x + width` columns, and both `top_y` and `bottom_y` rows.
    let body = Rect::at((x - width).round() as i32, top_y.round() as i32).of_size(
        (width * 2.0).round() as u32 + 1,
        height.round() as u32 + 1,
    );
    draw_filled_rect_mut(canvas, body, color);

    let grain_radius = (width * 1.5).round().max(1.0) as i32;
    for i in 0..3 {
        let grain_y = top_y + i as f32 * height * 0.15;
        let grain_x = if i % 2 == 0 {
            x + width * 2.0
        } else {
            x - width * 2.0
        };
        draw_filled_circle_mut(
            canvas,
            (grain_x.round() as i32, grain_y.round() as i32),
            grain_radius,
            color,
        );
    }
}
