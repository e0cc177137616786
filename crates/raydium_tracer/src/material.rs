//! Surface materials and the scattering rules for each.

use crate::sampling::{gen_f64, random_on_sphere};
use raydium_math::{not_zero, reflect, unit_vector, Color, Ray, Vec3};
use rand::RngCore;

/// Radius of the offset sphere diffuse bounces sample their target from.
///
/// Slightly under one so the target never touches the hit point itself.
pub const DIFFUSE_SCATTER_RADIUS: f64 = 0.99;

/// How a surface responds to light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Light source. Rays that reach it stop and take its color.
    Emissive(Color),
    /// Matte surface that scatters in random directions.
    Diffuse(Color),
    /// Transparent, non-absorbing refractive surface such as glass.
    Dielectric {
        /// Index of refraction (1.0 = air, 1.5 = glass, 2.417 = diamond)
        refractive_index: f64,
    },
    /// Mirror that reflects and attenuates per channel.
    Specular(Color),
}

/// Outcome of a ray meeting a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    /// The path ends on an emitter.
    Emit(Color),
    /// The path continues in `direction` with throughput scaled by `attenuation`.
    Scatter { direction: Vec3, attenuation: Color },
}

impl Material {
    /// Resolve a material from raw sphere parameters.
    ///
    /// Precedence is emission, then diffuse, then dielectric (index above
    /// 1.0), with specular as the fallback. A fallback with a black
    /// reflectivity is legal and absorbs everything.
    pub fn from_parameters(
        emitted_color: Color,
        diffuse_reflectivity: Color,
        specular_reflectivity: Color,
        refractive_index: f64,
    ) -> Self {
        if not_zero(emitted_color) {
            Material::Emissive(emitted_color)
        } else if not_zero(diffuse_reflectivity) {
            Material::Diffuse(diffuse_reflectivity)
        } else if refractive_index > 1.0 {
            Material::Dielectric { refractive_index }
        } else {
            Material::Specular(specular_reflectivity)
        }
    }

    /// Decide what happens to `ray` at `hit_point`.
    ///
    /// `normal` is the sphere's signed normal, `(p - centre) / radius`; for a
    /// negative radius it points inwards.
    pub fn interact(
        &self,
        ray: &Ray,
        hit_point: Vec3,
        normal: Vec3,
        rng: &mut dyn RngCore,
    ) -> Interaction {
        match *self {
            Material::Emissive(color) => Interaction::Emit(color),
            Material::Diffuse(albedo) => {
                let target = random_on_sphere(rng, hit_point + normal, DIFFUSE_SCATTER_RADIUS);
                // Degenerate only if the normal is far from unit length
                let direction = unit_vector(target - hit_point).unwrap_or(normal);
                Interaction::Scatter {
                    direction,
                    attenuation: albedo,
                }
            }
            Material::Dielectric { refractive_index } => Interaction::Scatter {
                direction: scatter_dielectric(ray.direction(), normal, refractive_index, rng),
                attenuation: Color::ONE,
            },
            Material::Specular(albedo) => Interaction::Scatter {
                direction: reflect(ray.direction(), normal),
                attenuation: albedo,
            },
        }
    }
}

/// Pick a reflected or transmitted direction at a dielectric boundary.
fn scatter_dielectric(
    direction: Vec3,
    normal: Vec3,
    refractive_index: f64,
    rng: &mut dyn RngCore,
) -> Vec3 {
    let cos_incident = direction.dot(normal);
    let (ni, nt, normal) = if cos_incident < 0.0 {
        // Entering
        (1.0, refractive_index, normal)
    } else {
        (refractive_index, 1.0, -normal)
    };

    match refract(direction, normal, ni, nt) {
        Some(refracted) => {
            let cos_refracted = refracted.dot(normal).abs();
            let reflect_probability = glass_fresnel(cos_incident.abs().min(cos_refracted));
            if gen_f64(rng) < reflect_probability {
                reflect(direction, normal)
            } else {
                refracted
            }
        }
        // Total internal reflection
        None => reflect(direction, normal),
    }
}

/// Refract `v` through a boundary with normal `n` facing the incoming ray.
///
/// Returns `None` when Snell's law has no solution. With `eta = ni / nt`,
/// `c2m` equals `-eta^2 sin^2(theta_i)`, so `c2m < -1` is exactly the usual
/// `eta sin(theta_i) > 1` test and `1 + c2m` is `cos^2(theta_t)`.
pub fn refract(v: Vec3, n: Vec3, ni: f64, nt: f64) -> Option<Vec3> {
    let eta = ni / nt;
    let c1 = -v.dot(n);
    let w = eta * c1;
    let c2m = (w - eta) * (w + eta);
    if c2m < -1.0 {
        None
    } else {
        Some(eta * v + (w - (1.0 + c2m).sqrt()) * n)
    }
}

/// Probability of reflection at a glass boundary for a cosine `c`.
///
/// 0.05 at normal incidence rising to 0.95 at grazing angles.
pub fn glass_fresnel(c: f64) -> f64 {
    let c5 = (1.0 - c).powi(5);
    0.05 * (1.0 - c5) + 0.95 * c5
}
