//! Ready-made scenes and backgrounds.
//!
//! The randomized scenes take a seed so the same scene can be rebuilt.

use crate::sampling::{gen_f64, random_in_sphere, uniform};
use crate::{Material, Scene, Sphere};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use raydium_math::{Color, Vec3};

/// Radius of the spheres standing in for a ground plane.
const GROUND_RADIUS: f64 = 10_000.0;

const GLASS_INDEX: f64 = 1.5;

/// Blend from dark blue straight down to pale blue straight up.
pub fn blue_blend_background(direction: Vec3) -> Color {
    let u = 0.5 * (1.0 + direction.y);
    u * Color::new(0.7, 0.8, 0.9) + (1.0 - u) * Color::new(0.05, 0.05, 0.2)
}

/// Background of a single color in every direction.
pub fn constant_background(color: Color) -> impl Fn(Vec3) -> Color + Send + Sync + 'static {
    move |_: Vec3| color
}

fn glass(centre: Vec3, radius: f64) -> Sphere {
    Sphere::new(
        centre,
        radius,
        Material::Dielectric {
            refractive_index: GLASS_INDEX,
        },
    )
}

fn ground(material: Material) -> Sphere {
    Sphere::new(Vec3::new(0.0, -GROUND_RADIUS - 1.0, 0.0), GROUND_RADIUS, material)
}

/// Solid and hollow glass spheres on a mirrored floor.
pub fn glass_spheres() -> Scene {
    let mut scene = Scene::new(blue_blend_background);

    scene.add(Sphere::new(
        Vec3::new(0.05, 3.0, -10.0),
        1.0,
        Material::Emissive(Color::ONE),
    ));
    scene.add(ground(Material::Specular(Color::splat(0.7))));

    // Hollow shell: the inner sphere's negative radius flips its normals
    scene.add(glass(Vec3::new(1.0, 1.0, -7.0), 1.0));
    scene.add(glass(Vec3::new(1.0, 1.0, -7.0), -0.95));

    scene.add(glass(Vec3::new(-0.75, 0.74, -3.0), 0.25));
    scene.add(Sphere::new(
        Vec3::new(-1.0, 0.0, -6.0),
        1.0,
        Material::Specular(Color::ONE),
    ));

    scene
}

/// Air bubbles placed uniformly inside a unit glass ball at `centre`.
///
/// The negative radius turns each bubble inside out, so rays refract from
/// glass into air on entering it.
fn bubbles(rng: &mut dyn RngCore, centre: Vec3, count: u32) -> Vec<Sphere> {
    let radius = 0.3 * (1.0 / count as f64).powf(0.333);
    (0..count)
        .map(|_| glass(random_in_sphere(rng, centre, 1.0 - 1.1 * radius), -radius))
        .collect()
}

/// A light beside a solid glass sphere holding air bubbles.
pub fn glass_sphere_with_bubbles(seed: u64) -> Scene {
    const BUBBLES: u32 = 10;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut scene = Scene::new(blue_blend_background);
    let centre = Vec3::new(1.0, 0.0, -5.0);

    scene.add(Sphere::new(
        Vec3::new(-1.0, 0.0, -5.0),
        1.0,
        Material::Emissive(Color::splat(3.0)),
    ));
    scene.add(glass(centre, 1.0));

    for bubble in bubbles(&mut rng, centre, BUBBLES) {
        scene.add(bubble);
    }

    scene
}

fn random_color(rng: &mut dyn RngCore, min: f64, max: f64) -> Color {
    Color::new(
        uniform(rng, min, max),
        uniform(rng, min, max),
        uniform(rng, min, max),
    )
}

/// Mirrored, glass and hollow glass spheres scattered over a matte floor.
pub fn random_spheres(seed: u64) -> Scene {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut scene = Scene::new(blue_blend_background);

    scene.add(Sphere::new(
        Vec3::new(0.0, 4.0, -10.0),
        5.0,
        Material::Emissive(Color::ONE),
    ));
    scene.add(ground(Material::Diffuse(Color::ONE)));

    for _ in 0..9 {
        let radius = uniform(&mut rng, 0.2, 0.5);
        let albedo = if gen_f64(&mut rng) < 0.5 {
            random_color(&mut rng, 0.5, 0.9)
        } else {
            random_color(&mut rng, 0.1, 0.9)
        };
        let centre = Vec3::new(
            uniform(&mut rng, -5.0, 5.0),
            -1.0 + radius,
            uniform(&mut rng, -15.0, -3.0),
        );
        scene.add(Sphere::new(centre, radius, Material::Specular(albedo)));
    }

    for _ in 0..11 {
        let radius = uniform(&mut rng, 0.2, 0.5);
        let centre = Vec3::new(
            uniform(&mut rng, -5.0, 5.0),
            -1.0 + radius,
            uniform(&mut rng, -15.0, -3.0),
        );
        scene.add(glass(centre, radius));
    }

    for _ in 0..4 {
        let radius = uniform(&mut rng, 0.2, 0.7);
        let centre = Vec3::new(
            uniform(&mut rng, -4.0, 4.0),
            -1.0 + radius,
            uniform(&mut rng, -10.0, -2.0),
        );
        scene.add(glass(centre, radius));
        scene.add(glass(centre, -0.9 * radius));
    }

    scene
}

/// The built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    GlassSpheres,
    GlassSphereWithBubbles,
    RandomSpheres,
}

impl Preset {
    /// Build the scene. Fixed scenes ignore the seed.
    pub fn build(self, seed: u64) -> Scene {
        match self {
            Preset::GlassSpheres => glass_spheres(),
            Preset::GlassSphereWithBubbles => glass_sphere_with_bubbles(seed),
            Preset::RandomSpheres => random_spheres(seed),
        }
    }

    /// Short name used in output file names.
    pub fn name(self) -> &'static str {
        match self {
            Preset::GlassSpheres => "glass_spheres",
            Preset::GlassSphereWithBubbles => "glass_sphere_bubbles",
            Preset::RandomSpheres => "random_sphere_scene",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hittable;
    use raydium_math::Ray;

    #[test]
    fn test_blue_blend_background() {
        assert_eq!(blue_blend_background(Vec3::Y), Color::new(0.7, 0.8, 0.9));
        assert_eq!(blue_blend_background(-Vec3::Y), Color::new(0.05, 0.05, 0.2));

        let horizon = blue_blend_background(Vec3::X);
        assert!((horizon - Color::new(0.375, 0.425, 0.55)).length() < 1e-12);
    }

    #[test]
    fn test_constant_background() {
        let background = constant_background(Color::new(0.1, 0.2, 0.3));
        assert_eq!(background(Vec3::X), Color::new(0.1, 0.2, 0.3));
        assert_eq!(background(-Vec3::Z), Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_preset_sizes() {
        assert_eq!(glass_spheres().len(), 6);
        assert_eq!(glass_sphere_with_bubbles(1).len(), 12);
        assert_eq!(random_spheres(1).len(), 2 + 9 + 11 + 8);
    }

    #[test]
    fn test_seeded_presets_are_reproducible() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.1, -0.1, -1.0).normalize());
        for preset in [Preset::GlassSphereWithBubbles, Preset::RandomSpheres] {
            let a = preset.build(1_618_611_775);
            let b = preset.build(1_618_611_775);
            assert_eq!(a.len(), b.len());
            assert_eq!(a.hit_object(&ray), b.hit_object(&ray));
        }
    }

    #[test]
    fn test_bubbles_stay_inside_glass() {
        let centre = Vec3::new(1.0, 0.0, -5.0);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let spheres = bubbles(&mut rng, centre, 10);
            assert_eq!(spheres.len(), 10);

            for bubble in &spheres {
                assert!(bubble.radius() < 0.0, "bubble normals must point inwards");
                assert_eq!(
                    *bubble.material(),
                    Material::Dielectric {
                        refractive_index: GLASS_INDEX
                    }
                );

                let reach = (bubble.centre() - centre).length() + bubble.radius().abs();
                assert!(reach <= 1.0, "bubble pokes out of the glass: reach = {reach}");
            }
        }
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(Preset::GlassSpheres.name(), "glass_spheres");
        assert_eq!(Preset::GlassSphereWithBubbles.name(), "glass_sphere_bubbles");
        assert_eq!(Preset::RandomSpheres.name(), "random_sphere_scene");
    }
}
