//! Light transport: follows one camera ray through the scene.
//!
//! The bounce loop is iterative. Each step finds the nearest surface, lets
//! its material decide between terminating (emitter), scattering diffusely,
//! passing through glass or mirroring, and multiplies the path throughput
//! by the surface attenuation. A path ends on an emitter, by escaping to the
//! background, or when the bounce budget runs out.

use crate::material::Interaction;
use crate::Scene;
use raydium_math::{Color, Ray};
use rand::RngCore;
use serde::Deserialize;

/// Default number of surface interactions followed per path.
pub const DEFAULT_MAX_BOUNCES: u32 = 30;

/// What a path returns when it runs out of bounces without terminating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetPolicy {
    /// The path contributes no light.
    #[default]
    Black,
    /// The path returns the background sample along the camera ray, ignoring
    /// everything it bounced off. Matches renders made before paths were
    /// allowed to go dark.
    InitialBackground,
}

/// Estimate the radiance arriving along `ray`.
///
/// `ray.direction()` must be unit length.
pub fn trace_ray(
    ray: &Ray,
    scene: &Scene,
    max_bounces: u32,
    policy: BudgetPolicy,
    rng: &mut dyn RngCore,
) -> Color {
    let initial_direction = ray.direction();
    let mut throughput = Color::ONE;
    let mut ray = *ray;

    for _ in 0..max_bounces {
        let Some(hit) = scene.hit_object(&ray) else {
            return throughput * scene.background(ray.direction());
        };
        let Some(object) = scene.object(hit.index) else {
            break;
        };

        let hit_point = ray.at(hit.distance);
        let normal = object.normal_at(hit_point);

        match object.material().interact(&ray, hit_point, normal, rng) {
            Interaction::Emit(emitted) => return throughput * emitted,
            Interaction::Scatter {
                direction,
                attenuation,
            } => {
                throughput *= attenuation;
                ray = Ray::new(hit_point, direction);
            }
        }
    }

    match policy {
        BudgetPolicy::Black => Color::ZERO,
        BudgetPolicy::InitialBackground => scene.background(initial_direction),
    }
}
