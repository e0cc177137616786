use clap::{Parser, ValueEnum};
use log::LevelFilter;
use raydium_tracer::presets::Preset;
use raydium_tracer::{BudgetPolicy, RenderConfig};
use std::path::PathBuf;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Scenes that can be rendered
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SceneArg {
    GlassSpheres,
    Bubbles,
    RandomSpheres,
}

impl From<SceneArg> for Preset {
    fn from(scene: SceneArg) -> Self {
        match scene {
            SceneArg::GlassSpheres => Preset::GlassSpheres,
            SceneArg::Bubbles => Preset::GlassSphereWithBubbles,
            SceneArg::RandomSpheres => Preset::RandomSpheres,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "raydium")]
#[command(about = "Path trace a scene of spheres to an image file")]
pub struct Args {
    /// Scene to render
    #[arg(long, value_enum, default_value = "random-spheres")]
    pub preset: SceneArg,

    /// JSON render settings; command line values take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image width in pixels [default: 640]
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels [default: 480]
    #[arg(long)]
    pub height: Option<u32>,

    /// Paths traced per pixel [default: 2]
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Maximum bounces per path [default: 30]
    #[arg(long)]
    pub max_bounces: Option<u32>,

    /// Seed for the scene layout and the render [default: 1618611775]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Square each channel before writing the image
    #[arg(long)]
    pub gamma: bool,

    /// Paths that run out of bounces return the background of their first direction
    #[arg(long)]
    pub legacy_budget: bool,

    /// Output file; the format follows the extension
    /// [default: images/<preset>_<seed>_<width>x<height>.png]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply command line overrides on top of `config`.
    pub fn apply(&self, config: &mut RenderConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(samples) = self.samples {
            config.samples_per_pixel = samples;
        }
        if let Some(max_bounces) = self.max_bounces {
            config.max_bounces = max_bounces;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.legacy_budget {
            config.budget_policy = BudgetPolicy::InitialBackground;
        }
    }

    /// Where to write the image for `config`.
    pub fn output_path(&self, config: &RenderConfig) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => {
                let preset = Preset::from(self.preset);
                PathBuf::from("images").join(format!(
                    "{}_{}_{}x{}.png",
                    preset.name(),
                    config.seed,
                    config.width,
                    config.height
                ))
            }
        }
    }
}
