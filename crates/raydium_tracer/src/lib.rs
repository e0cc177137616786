//! Raydium tracer - CPU path tracing of sphere scenes.
//!
//! A Monte Carlo path tracer: for each pixel, camera rays are followed
//! through reflections, refractions and diffuse bounces until they reach a
//! light, escape to the background, or run out of bounces, and the radiance
//! estimates are averaged.
//!
//! # Example
//!
//! ```no_run
//! use raydium_tracer::{presets, render, output, RenderConfig};
//!
//! let scene = presets::glass_spheres();
//! let image = render(&scene, &RenderConfig::default()).unwrap();
//! output::save_image(&image, "glass_spheres.png", false).unwrap();
//! ```

mod bucket;
mod camera;
mod hittable;
mod integrator;
mod material;
mod renderer;
mod scene;
mod sphere;

pub mod output;
pub mod presets;
pub mod sampling;

pub use bucket::{
    bucket_seed, generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::{Camera, FOCAL_DEPTH};
pub use hittable::{Hittable, SceneHit};
pub use integrator::{trace_ray, BudgetPolicy, DEFAULT_MAX_BOUNCES};
pub use material::{glass_fresnel, refract, Interaction, Material, DIFFUSE_SCATTER_RADIUS};
pub use renderer::{
    render, render_pixel, render_serial, ImageBuffer, RenderConfig, RenderError,
    DEFAULT_SAMPLES_PER_PIXEL, DEFAULT_SEED,
};
pub use scene::{Background, Scene, MIN_HIT_DISTANCE};
pub use sphere::{Sphere, HIT_EPSILON};

/// Re-export the math types the tracer's API is written in
pub use raydium_math::{Color, Interval, MathError, Ray, Vec3};
