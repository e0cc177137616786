//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - A fixed pinhole camera
//! - Several independent paths per pixel, averaged
//! - Parallel bucket rendering with per-bucket random streams
//!
//! Output is linear and unclamped; see [`crate::output`] for display.

use crate::bucket::{
    bucket_seed, generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
use crate::integrator::{trace_ray, BudgetPolicy, DEFAULT_MAX_BOUNCES};
use crate::{Camera, Scene};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use raydium_math::Color;
use rayon::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Default samples per pixel.
pub const DEFAULT_SAMPLES_PER_PIXEL: u32 = 2;

/// Default seed for the random streams.
pub const DEFAULT_SEED: u64 = 1_618_611_775;

/// Errors from invalid render settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("image resolution must be non-zero, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("at least one sample per pixel is required")]
    NoSamples,

    #[error("bucket size must be non-zero")]
    InvalidBucketSize,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Paths traced and averaged per pixel
    pub samples_per_pixel: u32,
    /// Maximum surface interactions per path
    pub max_bounces: u32,
    /// Seed all random streams derive from
    pub seed: u64,
    /// Edge length of the square tiles rendered in parallel
    pub bucket_size: u32,
    /// Radiance of a path that runs out of bounces
    pub budget_policy: BudgetPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            samples_per_pixel: DEFAULT_SAMPLES_PER_PIXEL,
            max_bounces: DEFAULT_MAX_BOUNCES,
            seed: DEFAULT_SEED,
            bucket_size: DEFAULT_BUCKET_SIZE,
            budget_policy: BudgetPolicy::default(),
        }
    }
}

impl RenderConfig {
    /// Check the settings describe a renderable image.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::NoSamples);
        }
        if self.bucket_size == 0 {
            return Err(RenderError::InvalidBucketSize);
        }
        Ok(())
    }
}

/// Render a single pixel with multi-sampling.
///
/// Every sample shares the pixel-centre ray; the variation between samples
/// comes from the stochastic bounces.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    column: u32,
    row: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let ray = camera.get_ray(column, row);
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        pixel_color += trace_ray(&ray, scene, config.max_bounces, config.budget_policy, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f64
}

/// Linear RGB image, row-major with row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let local_x = (i % bucket.width as usize) as u32;
            let local_y = (i / bucket.width as usize) as u32;
            self.set(bucket.x + local_x, bucket.y + local_y, *color);
        }
    }
}

/// Render the entire scene in parallel.
///
/// The image is split into buckets rendered on the rayon pool. Output is
/// reproducible for a given seed and bucket size regardless of thread count.
pub fn render(scene: &Scene, config: &RenderConfig) -> Result<ImageBuffer, RenderError> {
    config.validate()?;

    if config.max_bounces == 0 {
        warn!("max_bounces is 0: every path ends on the exhausted-budget color");
    }

    let camera = Camera::new(config.width, config.height);
    let buckets = generate_buckets(config.width, config.height, config.bucket_size);

    info!(
        "Rendering {}x{} @ {} spp, {} max bounces: {} objects, {} buckets on {} threads",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_bounces,
        scene.len(),
        buckets.len(),
        rayon::current_num_threads()
    );
    let start = std::time::Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let mut rng = StdRng::seed_from_u64(bucket_seed(config.seed, bucket.index));
            let pixels = render_bucket(bucket, &camera, scene, config, &mut rng);
            debug!("Bucket {} ({}, {}) done", bucket.index, bucket.x, bucket.y);
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        image.write_bucket(result);
    }

    info!("Rendered in {:.2?}", start.elapsed());
    Ok(image)
}

/// Render the entire scene on the calling thread with one random stream.
///
/// Scanlines are traced bottom-up and stored flipped, so camera row `r`
/// lands in image row `height - r - 1`.
pub fn render_serial(
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Result<ImageBuffer, RenderError> {
    config.validate()?;

    let camera = Camera::new(config.width, config.height);
    let mut image = ImageBuffer::new(config.width, config.height);

    for row in 0..config.height {
        if row % 50 == 0 {
            debug!("Scanline {}/{}", row, config.height);
        }
        for column in 0..config.width {
            let color = render_pixel(&camera, scene, column, row, config, rng);
            image.set(column, config.height - row - 1, color);
        }
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere};
    use raydium_math::Vec3;

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: 16,
            height: 12,
            samples_per_pixel: 1,
            bucket_size: 5,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate() {
        assert!(RenderConfig::default().validate().is_ok());

        let zero_width = RenderConfig { width: 0, ..Default::default() };
        assert_eq!(
            zero_width.validate(),
            Err(RenderError::InvalidResolution { width: 0, height: 480 })
        );

        let no_samples = RenderConfig { samples_per_pixel: 0, ..Default::default() };
        assert_eq!(render(&Scene::new(|_| Color::ZERO), &no_samples), Err(RenderError::NoSamples));

        let no_buckets = RenderConfig { bucket_size: 0, ..Default::default() };
        assert_eq!(no_buckets.validate(), Err(RenderError::InvalidBucketSize));
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{ "width": 320, "seed": 9, "budget_policy": "initial_background" }"#;
        let config: RenderConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.width, 320);
        assert_eq!(config.height, 480);
        assert_eq!(config.seed, 9);
        assert_eq!(config.budget_policy, BudgetPolicy::InitialBackground);

        assert!(serde_json::from_str::<RenderConfig>(r#"{ "widht": 320 }"#).is_err());
    }

    #[test]
    fn test_constant_background_fills_image() {
        let background = Color::new(0.1, 0.2, 0.3);
        // Sphere behind the camera is never hit
        let behind = Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0, Material::Specular(Color::ONE));
        let scene = Scene::with_objects([behind], move |_| background);

        let image = render(&scene, &small_config()).unwrap();
        assert!(image.pixels.iter().all(|&p| p == background));
    }

    #[test]
    fn test_enclosing_emitter_fills_image() {
        let emission = Color::new(3.0, 2.0, 1.0);
        let light = Sphere::new(Vec3::ZERO, 1000.0, Material::Emissive(emission));
        let scene = Scene::with_objects([light], |_| Color::ZERO);

        for max_bounces in [1, 30] {
            let config = RenderConfig { max_bounces, ..small_config() };
            let image = render(&scene, &config).unwrap();
            assert!(image.pixels.iter().all(|&p| p == emission));
        }
    }

    #[test]
    fn test_parallel_is_deterministic() {
        let _ = env_logger::builder().is_test(true).try_init();
        let scene = crate::presets::random_spheres(3);
        let config = RenderConfig { width: 24, height: 16, ..small_config() };

        let a = render(&scene, &config).unwrap();
        let b = render(&scene, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serial_is_deterministic() {
        let scene = crate::presets::glass_spheres();
        let config = small_config();

        let a = render_serial(&scene, &config, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = render_serial(&scene, &config, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serial_row_orientation() {
        // Top half bright, bottom half dark
        let scene = Scene::new(|d: Vec3| if d.y > 0.0 { Color::ONE } else { Color::ZERO });
        let config = RenderConfig {
            width: 2,
            height: 2,
            samples_per_pixel: 1,
            ..Default::default()
        };

        let image = render_serial(&scene, &config, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(image.get(0, 0), Color::ONE);
        assert_eq!(image.get(1, 1), Color::ZERO);

        let parallel = render(&scene, &config).unwrap();
        assert_eq!(parallel, image);
    }

    #[test]
    fn test_render_pixel_averages_samples() {
        let scene = Scene::new(|_| Color::splat(0.25));
        let camera = Camera::new(8, 8);
        let config = RenderConfig { samples_per_pixel: 4, ..small_config() };
        let mut rng = StdRng::seed_from_u64(42);

        let color = render_pixel(&camera, &scene, 3, 3, &config, &mut rng);
        assert_eq!(color, Color::splat(0.25));
    }

    #[test]
    fn test_image_buffer_write_bucket() {
        let mut image = ImageBuffer::new(4, 4);
        let bucket = crate::Bucket::new(2, 1, 2, 2, 0);
        let pixels = [1.0, 2.0, 3.0, 4.0].map(Color::splat).to_vec();

        image.write_bucket(&BucketResult::new(bucket, pixels));
        assert_eq!(image.get(2, 1), Color::splat(1.0));
        assert_eq!(image.get(3, 1), Color::splat(2.0));
        assert_eq!(image.get(2, 2), Color::splat(3.0));
        assert_eq!(image.get(3, 2), Color::splat(4.0));
        assert_eq!(image.get(0, 0), Color::ZERO);
    }

    #[test]
    fn test_image_buffer_index_does_not_wrap() {
        // 70000 * 70000 overflows u32
        let image = ImageBuffer {
            width: 70_000,
            height: 70_000,
            pixels: Vec::new(),
        };
        assert_eq!(image.index(69_999, 69_999), 70_000 * 70_000 - 1);
    }
}
