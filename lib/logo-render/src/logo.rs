//! Top-level logo generator: orchestrates canvas creation and all drawing
//! steps, returning the finished image to the caller.

use crate::arrows::draw_trading_arrows;
use crate::font::MonogramFont;
use crate::primitives::draw_ring_mut;
use crate::stalk::draw_wheat_stalk;
use crate::{BRAND_GREEN, DARK_GREEN, RenderError, RenderResult, WHITE};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;

/// Drop shadow offset of the monogram, in pixels.
const SHADOW_OFFSET: i32 = 2;

/// Logo generator configuration.
///
/// The defaults reproduce the original artwork exactly; the setters exist so
/// callers can retune the cosmetic constants without touching the geometry.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct LogoConfig {
    /// Canvas edge length in pixels.
    #[derivative(Default(value = "1024"))]
    size: u32,
    /// Monogram text drawn at the center.
    #[derivative(Default(value = "String::from(\"AT\")"))]
    monogram: String,
    /// Brand green; fills the canvas background and the monogram.
    #[derivative(Default(value = "BRAND_GREEN"))]
    background: Rgb<u8>,
    /// Dark green; stalks, arrows and the monogram shadow.
    #[derivative(Default(value = "DARK_GREEN"))]
    foreground: Rgb<u8>,
    /// Light backdrop; border ring and inner disk.
    #[derivative(Default(value = "WHITE"))]
    backdrop: Rgb<u8>,
}

impl LogoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the logo onto a fresh canvas.
    ///
    /// Deterministic for a given configuration and font availability. The
    /// only error condition is a zero-sized canvas; font lookup failures are
    /// absorbed by the fallback chain and never surface.
    pub fn render(&self) -> RenderResult<RgbImage> {
        if self.size == 0 {
            return Err(RenderError::InvalidParameter(
                "canvas size must be at least 1 pixel".to_string(),
            ));
        }

        let mut canvas = RgbImage::from_pixel(self.size, self.size, self.background);

        let s = self.size as f32;
        let cx = s / 2.0;
        let cy = s / 2.0;
        let radius = s * 0.45;
        log::debug!("rendering {0}x{0} logo, outer radius {radius:.1}", self.size);

        // White border ring, stroke extending inward.
        draw_ring_mut(&mut canvas, cx, cy, radius, s * 0.02, self.backdrop);

        // Filled inner disk, the light backdrop for the artwork.
        let inner_radius = radius * 0.85;
        draw_filled_circle_mut(
            &mut canvas,
            (cx as i32, cy as i32),
            inner_radius as i32,
            self.backdrop,
        );

        // Wheat stalks below center; the middle one stands taller.
        let stalk_bottom_y = cy + s * 0.25;
        let stalk_height = s * 0.15;
        let stalk_width = s * 0.015;
        draw_wheat_stalk(
            &mut canvas,
            cx - s * 0.15,
            stalk_bottom_y,
            stalk_height,
            stalk_width,
            self.foreground,
        );
        draw_wheat_stalk(
            &mut canvas,
            cx,
            stalk_bottom_y,
            stalk_height * 1.2,
            stalk_width,
            self.foreground,
        );
        draw_wheat_stalk(
            &mut canvas,
            cx + s * 0.15,
            stalk_bottom_y,
            stalk_height,
            stalk_width,
            self.foreground,
        );

        // Trading arrows above center.
        draw_trading_arrows(&mut canvas, cx, cy - s * 0.25, s * 0.12, s, self.foreground);

        // Centered monogram with a drop shadow.
        let font = MonogramFont::resolve();
        let px = s * 0.25;
        let (text_w, text_h) = font.measure(&self.monogram, px);
        let text_x = (cx - text_w as f32 / 2.0).round() as i32;
        let text_y = (cy - text_h as f32 / 2.0 - s * 0.05).round() as i32;
        font.draw(
            &mut canvas,
            self.foreground,
            text_x + SHADOW_OFFSET,
            text_y + SHADOW_OFFSET,
            px,
            &self.monogram,
        );
        font.draw(&mut canvas, self.background, text_x, text_y, px, &self.monogram);

        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_dimensions_match_size() {
        for size in [64, 100, 256] {
            let logo = LogoConfig::new().with_size(size).render().unwrap();
            assert_eq!(logo.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let err = LogoConfig::new().with_size(0).render().unwrap_err();
        assert!(matches!(err, RenderError::InvalidParameter(_)));
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = LogoConfig::new().with_size(256).render().unwrap();
        let second = LogoConfig::new().with_size(256).render().unwrap();
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn test_full_size_composition() {
        let logo = LogoConfig::new().render().unwrap();
        assert_eq!(logo.dimensions(), (1024, 1024));

        // A clear patch of the inner disk, right of the monogram and below
        // the arrows: distance 358 from center, disk radius 391. No font
        // can reach this far out, so the check holds for any resolved face.
        assert_eq!(logo.get_pixel(870, 512), &WHITE);

        // Corners lie outside the border ring and keep the background color.
        assert_eq!(logo.get_pixel(5, 5), &BRAND_GREEN);
        assert_eq!(logo.get_pixel(1018, 5), &BRAND_GREEN);
        assert_eq!(logo.get_pixel(5, 1018), &BRAND_GREEN);
        assert_eq!(logo.get_pixel(1018, 1018), &BRAND_GREEN);
    }

    #[test]
    fn test_inner_disk_covers_center() {
        // Monogram ink shares the background color, so with glyphs drawn a
        // pixel-equality check at the center depends on which font resolved.
        // Rendering without a monogram pins the disk coverage itself: the
        // center must be backdrop white, not background green.
        let logo = LogoConfig::new()
            .with_monogram(String::new())
            .render()
            .unwrap();
        assert_eq!(logo.get_pixel(512, 512), &WHITE);
        assert_eq!(logo.get_pixel(512, 460), &WHITE);
    }

    #[test]
    fn test_small_canvas_renders_without_clipping_panics() {
        let logo = LogoConfig::new().with_size(64).render().unwrap();
        assert_eq!(logo.dimensions(), (64, 64));

        // Proportions scale linearly: the inner disk still covers the center.
        assert_eq!(logo.get_pixel(54, 32), &WHITE);
        assert_eq!(logo.get_pixel(0, 0), &BRAND_GREEN);
    }

    #[test]
    fn test_custom_monogram_changes_output() {
        let at = LogoConfig::new().with_size(128).render().unwrap();
        let gt = LogoConfig::new()
            .with_size(128)
            .with_monogram(String::from("GT"))
            .render()
            .unwrap();
        assert_ne!(at.as_raw(), gt.as_raw());
    }
}
