//! Raydium math - vectors, rays and intervals shared by the tracer.
//!
//! Everything is double precision: scenes routinely mix unit spheres with
//! "ground" spheres ten thousand units across, and the ray-sphere quadratic
//! cancels catastrophically in `f32` at that scale.

// Re-export glam's double precision vector as the workspace vector type
pub use glam::DVec3 as Vec3;

mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{not_zero, reflect, unit_vector, MathError, NEAR_ZERO};

/// RGB color. Shares the vector type; channels are nominally in [0, 1].
pub type Color = Vec3;
