use anyhow::{Context, Result};
use clap::Parser;
use paintboard::export::{self, ExportFormat};
use paintboard::{Config, DrawingSurface, script};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "paintboard")]
#[command(version, about = "Raster drawing surface with brush, eraser and shape tools")]
struct Cli {
    /// Event script to replay (tool/color/width/fill/down/move/up/cancel/clear/export)
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Config file to use instead of ~/.config/paintboard/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Surface width in pixels
    #[arg(long, value_name = "PX")]
    width: Option<i32>,

    /// Surface height in pixels
    #[arg(long, value_name = "PX")]
    height: Option<i32>,

    /// Directory exports are written to
    #[arg(long, short = 'o', value_name = "DIR")]
    output: Option<PathBuf>,

    /// Export format
    #[arg(long, short = 'f', value_enum)]
    format: Option<ExportFormat>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.surface.width = width;
    }
    if let Some(height) = cli.height {
        config.surface.height = height;
    }
    if let Some(format) = cli.format {
        config.export.format = format;
    }
    config.validate_and_clamp();

    let source = fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script {}", cli.script.display()))?;
    let commands = script::parse(&source)
        .with_context(|| format!("Invalid script {}", cli.script.display()))?;
    log::info!(
        "Replaying {} commands on a {}x{} surface",
        commands.len(),
        config.surface.width,
        config.surface.height
    );

    let mut surface =
        DrawingSurface::from_config(&config).context("Failed to allocate drawing surface")?;
    let exports = script::replay(&mut surface, &commands, config.export.format)
        .context("Failed to export drawing")?;

    let directory = cli.output.unwrap_or_else(|| config.export_directory());
    for image in &exports {
        let path = export::save_export(image, &directory)
            .with_context(|| format!("Failed to save {}", image.filename))?;
        println!("{}", path.display());
    }

    Ok(())
}
