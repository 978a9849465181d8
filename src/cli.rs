// cli.rs - Command-line interface for the headless demo
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "almasa-page")]
#[command(about = "Headless driver for the Almasa landing-page runtime", long_about = None)]
pub struct Cli {
    /// Seed for the cloud placement RNG
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Optional JSON config overriding recipient and cloud count
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of cloud groups in the scene
    #[arg(long, default_value = "8")]
    pub clouds: usize,

    /// Frames to simulate while scrolling through the page
    #[arg(long, default_value = "240")]
    pub frames: u64,

    /// Render surface width in pixels
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Render surface height in pixels
    #[arg(long, default_value = "450")]
    pub height: u32,

    /// Where to write the final frame (PNG, or SVG with --fallback)
    #[arg(long, default_value = "airplane.png")]
    pub out: PathBuf,

    /// Pretend 3D rendering is unavailable and exercise the SVG fallback
    #[arg(long, default_value = "false")]
    pub fallback: bool,
}
