use anyhow::Result;
use clap::Parser;
use logo_render::{LogoConfig, save_png};
use std::path::Path;

/// Where the Flutter app expects its launcher icon source image.
const OUTPUT_PATH: &str = "assets/icon/app_icon.png";

#[derive(Parser)]
#[command(about = "Generate the AgriTrade application icon", version)]
struct Args {
    /// Canvas edge length in pixels
    #[arg(long, default_value_t = 1024)]
    size: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Generating AgriTrade logo...");
    log::debug!("canvas size: {}", args.size);

    let logo = LogoConfig::new().with_size(args.size).render()?;

    let output_path = Path::new(OUTPUT_PATH);
    save_png(&logo, output_path)?;

    println!("Logo generated successfully at: {}", output_path.display());
    println!("Size: {}x{} pixels", logo.width(), logo.height());
    println!();
    println!("Next steps:");
    println!("1. Review the generated logo");
    println!("2. Run: flutter pub get");
    println!("3. Run: flutter pub run flutter_launcher_icons");
    println!("4. Run: flutter clean && flutter run");

    Ok(())
}
