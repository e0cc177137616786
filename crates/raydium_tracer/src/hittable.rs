//! Hittable trait for ray-object intersection.

use crate::Material;
use raydium_math::{Ray, Vec3};

/// Trait for objects that can be hit by rays.
///
/// The integrator only needs a distance, a normal at the hit point and a
/// material, so new primitives plug in without touching transport code.
pub trait Hittable: Send + Sync {
    /// Distance along `ray` to the nearest valid intersection, if any.
    ///
    /// `ray.direction()` must be unit length for the distance to be metric.
    fn intersect(&self, ray: &Ray) -> Option<f64>;

    /// Surface normal at a point on the object.
    ///
    /// Not necessarily outward facing: implementations may encode
    /// orientation (for example through a signed radius).
    fn normal_at(&self, point: Vec3) -> Vec3;

    /// Material of the object's surface.
    fn material(&self) -> &Material;
}

/// Result of a nearest-hit query against a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneHit {
    /// Distance along the ray to the intersection
    pub distance: f64,
    /// Index of the hit object in scene order
    pub index: usize,
}
