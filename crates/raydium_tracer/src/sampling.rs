//! Random sampling helpers.
//!
//! Every stochastic decision draws from an explicitly passed generator so a
//! seeded stream reproduces a render exactly.

use raydium_math::Vec3;
use rand::{Rng, RngCore};
use std::f64::consts::PI;

/// Uniform draw in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Uniform draw in [min, max).
#[inline]
pub fn uniform(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    min + (max - min) * gen_f64(rng)
}

/// Uniformly distributed point on the surface of a sphere.
///
/// Picks `z` uniformly in [-1, 1) and an azimuth uniformly in [0, 2pi), which
/// by Archimedes' hat-box theorem covers the surface uniformly.
pub fn random_on_sphere(rng: &mut dyn RngCore, centre: Vec3, radius: f64) -> Vec3 {
    let a = uniform(rng, -1.0, 1.0);
    let b = (1.0 - a * a).sqrt();
    let phi = uniform(rng, 0.0, 2.0 * PI);
    centre + radius * Vec3::new(b * phi.cos(), b * phi.sin(), a)
}

/// Uniformly distributed point inside a ball.
pub fn random_in_sphere(rng: &mut dyn RngCore, centre: Vec3, radius: f64) -> Vec3 {
    let r = radius * gen_f64(rng).cbrt();
    random_on_sphere(rng, centre, r)
}
