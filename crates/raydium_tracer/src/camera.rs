//! Pinhole camera for primary ray generation.

use raydium_math::{Ray, Vec3};

/// Distance from the pinhole to the image plane.
pub const FOCAL_DEPTH: f64 = 2.0;

/// Pinhole camera at the origin looking down -Z.
///
/// The image plane spans [-1, 1] horizontally at `z = -depth`; the vertical
/// extent is scaled by `height / width` so pixels stay square. Rows are
/// counted from the bottom of the picture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    depth: f64,
    aspect_ratio: f64,
}

impl Camera {
    /// Create a camera for an image of the given size.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            depth: FOCAL_DEPTH,
            aspect_ratio: image_height as f64 / image_width as f64,
        }
    }

    /// Camera position.
    pub fn origin(&self) -> Vec3 {
        Vec3::ZERO
    }

    /// Get the height / width ratio.
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Generate the ray through the centre of pixel (`column`, `row`).
    ///
    /// `row` 0 is the bottom scanline.
    pub fn get_ray(&self, column: u32, row: u32) -> Ray {
        let u = (column as f64 + 0.5) / self.image_width as f64;
        let v = (row as f64 + 0.5) / self.image_height as f64;

        // z is always -depth, so the vector is never zero
        let direction = Vec3::new(
            2.0 * u - 1.0,
            self.aspect_ratio * (2.0 * v - 1.0),
            -self.depth,
        )
        .normalize();

        Ray::new(self.origin(), direction)
    }
}
