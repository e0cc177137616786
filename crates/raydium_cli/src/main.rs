use anyhow::{Context, Result};
use clap::Parser;
use raydium_tracer::presets::Preset;
use raydium_tracer::{output, render, RenderConfig};
use std::fs;
use std::path::Path;

mod cli;

use cli::Args;

fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;

    log::info!("Loaded settings from {}", path.display());
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let mut config = load_config(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    let output_path = args.output_path(&config);
    if let Some(dir) = output_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let preset = Preset::from(args.preset);
    log::info!("Building scene {} (seed {})", preset.name(), config.seed);
    let scene = preset.build(config.seed);

    let image = render(&scene, &config)?;
    output::save_image(&image, &output_path, args.gamma)?;

    Ok(())
}
