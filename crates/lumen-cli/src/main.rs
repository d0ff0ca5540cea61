//! Lumen — render palette gradients to PNG strips or raw RGB lookup buffers.
//!
//! The raw output is exactly what a viewer uploads as its 1D palette texture:
//! `size × 3` bytes in R, G, B order.

mod strip;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lumen_core::GradientConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON gradient configuration. Uses the built-in palettes when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Palette name. Defaults to the first palette in the configuration.
    #[arg(short, long)]
    palette: Option<String>,
    /// Gradient length in pixels. Overrides the configured size.
    #[arg(short, long)]
    size: Option<usize>,
    /// Height of the PNG strip in pixels.
    #[arg(long, default_value_t = 1)]
    height: u32,
    /// Write packed RGB bytes instead of an image.
    #[arg(long)]
    raw: bool,
    /// List the available palettes and exit.
    #[arg(long)]
    list: bool,
    /// Output file.
    #[arg(required_unless_present = "list")]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GradientConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GradientConfig::default(),
    };

    if cli.list {
        for palette in &config.palettes {
            let mode = if palette.seamless { "seamless" } else { "clamped" };
            println!("{} ({} stops, {mode})", palette.name, palette.stops.len());
        }
        return Ok(());
    }

    let palette = match &cli.palette {
        Some(name) => config
            .palette(name)
            .with_context(|| format!("no palette named '{name}'"))?,
        None => config
            .palettes
            .first()
            .context("configuration has no palettes")?,
    };
    let size = cli.size.unwrap_or(config.size);
    let output = cli.output.context("an output path is required")?;

    let bytes = palette
        .generate_bytes(size)
        .with_context(|| format!("generating palette '{}'", palette.name))?;

    if cli.raw {
        std::fs::write(&output, &bytes)
            .with_context(|| format!("writing {}", output.display()))?;
        tracing::info!("wrote {} bytes to {}", bytes.len(), output.display());
    } else {
        strip::save_strip(&bytes, cli.height, &output)?;
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
