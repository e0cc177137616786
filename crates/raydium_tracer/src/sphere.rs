//! Sphere primitive for ray tracing.

use crate::{hittable::Hittable, Material};
use raydium_math::{Color, Ray, Vec3};

/// Intersections closer than this to the ray origin are ignored, so a ray
/// leaving a surface does not immediately hit it again.
pub const HIT_EPSILON: f64 = 1e-5;

/// A sphere primitive.
///
/// The radius is signed. Intersection only depends on its square, but the
/// normal is `(p - centre) / radius`, so a negative radius turns the sphere
/// inside out. Nesting a negative sphere inside a glass one makes a hollow
/// shell or an air bubble.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    centre: Vec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(centre: Vec3, radius: f64, material: Material) -> Self {
        Self {
            centre,
            radius,
            material,
        }
    }

    /// Create a sphere from raw surface parameters.
    ///
    /// See [`Material::from_parameters`] for how the parameters resolve.
    pub fn from_parameters(
        radius: f64,
        centre: Vec3,
        emitted_color: Color,
        diffuse_reflectivity: Color,
        specular_reflectivity: Color,
        refractive_index: f64,
    ) -> Self {
        let material = Material::from_parameters(
            emitted_color,
            diffuse_reflectivity,
            specular_reflectivity,
            refractive_index,
        );
        Self::new(centre, radius, material)
    }

    pub fn centre(&self) -> Vec3 {
        self.centre
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        // Half-b form of the quadratic, assuming a unit direction
        let oc = ray.origin() - self.centre;
        let qb = oc.dot(ray.direction());
        let qc = oc.dot(oc) - self.radius * self.radius;

        let discriminant = qb * qb - qc;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        [-qb - sqrtd, -qb + sqrtd]
            .into_iter()
            .find(|&t| t > HIT_EPSILON)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (1.0 / self.radius) * (point - self.centre)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mirror(centre: Vec3, radius: f64) -> Sphere {
        Sphere::new(centre, radius, Material::Specular(Color::ONE))
    }

    #[test]
    fn test_sphere_hit_distance() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        for r in [0.5, 1.0, 2.0, 4.5] {
            let sphere = mirror(Vec3::ZERO, r);
            assert_eq!(sphere.intersect(&ray), Some(5.0 - r));
        }
    }

    #[test]
    fn test_sphere_negative_radius_same_distance() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let outer = mirror(Vec3::ZERO, 1.0);
        let inner = mirror(Vec3::ZERO, -1.0);

        assert_eq!(outer.intersect(&ray), inner.intersect(&ray));

        let p = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(outer.normal_at(p), Vec3::Z);
        assert_eq!(inner.normal_at(p), -Vec3::Z);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = mirror(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(sphere.intersect(&ray), None);

        // Ray grazing the silhouette counts as a miss
        let tangent = Ray::new(Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(sphere.intersect(&tangent), None);
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = mirror(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        // Near root is behind the origin, far root is taken
        assert_eq!(sphere.intersect(&ray), Some(2.0));
    }

    #[test]
    fn test_sphere_ignores_hit_at_origin() {
        let sphere = mirror(Vec3::ZERO, 1.0);

        // Ray starting on the surface heading outwards
        let leaving = Ray::new(Vec3::Z, Vec3::Z);
        assert_eq!(sphere.intersect(&leaving), None);

        // Ray starting on the surface heading inwards finds the far side
        let entering = Ray::new(Vec3::Z, -Vec3::Z);
        let t = entering_distance(&sphere, &entering);
        assert!((t - 2.0).abs() < 1e-12);
    }

    fn entering_distance(sphere: &Sphere, ray: &Ray) -> f64 {
        sphere.intersect(ray).expect("ray should hit the far side")
    }

    #[test]
    fn test_from_parameters() {
        let sphere = Sphere::from_parameters(
            -0.95,
            Vec3::new(1.0, 1.0, -7.0),
            Color::ZERO,
            Color::ZERO,
            Color::new(0.7, 0.6, 0.5),
            1.5,
        );

        assert_eq!(sphere.radius(), -0.95);
        assert_eq!(sphere.centre(), Vec3::new(1.0, 1.0, -7.0));
        assert_eq!(
            *sphere.material(),
            Material::Dielectric { refractive_index: 1.5 }
        );
    }
}
