//! Procedural renderer for the AgriTrade application icon.
//!
//! The logo combines an agricultural symbol (wheat stalks) with a trading
//! symbol (circular arrows) and an "AT" monogram on a white disk. Everything
//! is drawn from geometric primitives, so the icon can be regenerated at any
//! resolution without source artwork.

pub mod arrows;
pub mod font;
pub mod logo;
pub mod primitives;
pub mod stalk;

use image::{Rgb, RgbImage};
use std::fs;
use std::path::Path;

pub use font::MonogramFont;
pub use logo::LogoConfig;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Brand green, the canvas background and monogram fill (`#4CAF50`).
pub const BRAND_GREEN: Rgb<u8> = Rgb([76, 175, 80]);

/// Dark green used for stalks, arrows and the monogram shadow (`#2E7D32`).
pub const DARK_GREEN: Rgb<u8> = Rgb([46, 125, 50]);

/// The white backdrop of the inner disk and border ring.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Writes a rendered logo to `path` as a PNG, creating the parent directory
/// if it does not exist. Repeated calls overwrite the previous file.
pub fn save_png(img: &RgbImage, path: &Path) -> RenderResult<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
