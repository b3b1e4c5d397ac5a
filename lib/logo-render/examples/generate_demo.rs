use anyhow::Result;
use logo_render::{LogoConfig, save_png};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let logo = LogoConfig::new().with_size(256).render()?;
    let output = output_dir.join("app_icon_256.png");
    save_png(&logo, &output)?;

    println!("✓ Logo rendered successfully!");
    println!("  Size: 256x256 pixels");
    println!("  Output: {}", output.display());

    Ok(())
}
