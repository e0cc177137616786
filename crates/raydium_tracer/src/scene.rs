//! Scene: the objects to render and the color of everything else.

use crate::hittable::{Hittable, SceneHit};
use raydium_math::{Color, Interval, Ray, Vec3};

/// Nearest-hit queries ignore intersections closer than this.
pub const MIN_HIT_DISTANCE: f64 = 1e-4;

/// Maps a unit direction that escapes the scene to a color.
pub type Background = Box<dyn Fn(Vec3) -> Color + Send + Sync>;

/// An ordered list of objects plus a background.
///
/// Built once up front and only read while rendering.
pub struct Scene {
    objects: Vec<Box<dyn Hittable>>,
    background: Background,
}

impl Scene {
    /// Create an empty scene with the given background.
    pub fn new(background: impl Fn(Vec3) -> Color + Send + Sync + 'static) -> Self {
        Self {
            objects: Vec::new(),
            background: Box::new(background),
        }
    }

    /// Create a scene from a list of objects.
    pub fn with_objects<H>(
        objects: impl IntoIterator<Item = H>,
        background: impl Fn(Vec3) -> Color + Send + Sync + 'static,
    ) -> Self
    where
        H: Hittable + 'static,
    {
        let mut scene = Self::new(background);
        for object in objects {
            scene.add(object);
        }
        scene
    }

    /// Add an object to the end of the list.
    pub fn add(&mut self, object: impl Hittable + 'static) {
        self.objects.push(Box::new(object));
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Get the object at `index`.
    pub fn object(&self, index: usize) -> Option<&dyn Hittable> {
        self.objects.get(index).map(|object| object.as_ref())
    }

    /// Color seen along an escaping unit direction.
    pub fn background(&self, direction: Vec3) -> Color {
        (self.background)(direction)
    }

    /// Find the closest object along `ray`.
    ///
    /// Linear scan; when two objects are hit at exactly the same distance
    /// the one added first wins.
    pub fn hit_object(&self, ray: &Ray) -> Option<SceneHit> {
        let mut range = Interval::new(MIN_HIT_DISTANCE, f64::INFINITY);
        let mut closest = None;

        for (index, object) in self.objects.iter().enumerate() {
            if let Some(distance) = object.intersect(ray) {
                if range.admits(distance) {
                    range = range.with_max(distance);
                    closest = Some(SceneHit { distance, index });
                }
            }
        }

        closest
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("objects", &self.objects.len())
            .finish_non_exhaustive()
    }
}
