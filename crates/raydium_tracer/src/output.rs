//! Conversion of rendered images to 8-bit files.
//!
//! Rendered values are linear and may fall outside [0, 1]. Before encoding,
//! channels optionally get an approximate gamma adjustment (each value is
//! squared), are clamped to [0, 1] and scaled to bytes.

use crate::ImageBuffer;
use image::{Rgb, RgbImage};
use log::info;
use raydium_math::{Color, Interval};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Map one linear channel value to a byte.
#[inline]
pub fn channel_to_u8(value: f64, gamma_correction: bool) -> u8 {
    let value = if gamma_correction { value * value } else { value };
    (Interval::UNIT.clamp(value) * 255.0).round() as u8
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Color, gamma_correction: bool) -> [u8; 3] {
    [
        channel_to_u8(color.x, gamma_correction),
        channel_to_u8(color.y, gamma_correction),
        channel_to_u8(color.z, gamma_correction),
    ]
}

/// Convert a rendered image to an 8-bit RGB image.
pub fn to_rgb8(image: &ImageBuffer, gamma_correction: bool) -> RgbImage {
    RgbImage::from_fn(image.width, image.height, |x, y| {
        Rgb(color_to_rgb(image.get(x, y), gamma_correction))
    })
}

/// Save a rendered image; the format is picked from the file extension.
pub fn save_image(
    image: &ImageBuffer,
    path: impl AsRef<Path>,
    gamma_correction: bool,
) -> Result<(), OutputError> {
    let path = path.as_ref();
    to_rgb8(image, gamma_correction)
        .save(path)
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Image saved as {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_clamps() {
        assert_eq!(channel_to_u8(-0.5, false), 0);
        assert_eq!(channel_to_u8(0.0, false), 0);
        assert_eq!(channel_to_u8(1.0, false), 255);
        assert_eq!(channel_to_u8(3.0, false), 255);
        assert_eq!(channel_to_u8(3.0, true), 255);
    }

    #[test]
    fn test_channel_gamma_squares() {
        assert_eq!(channel_to_u8(0.5, false), 128);
        assert_eq!(channel_to_u8(0.5, true), 64);
    }

    #[test]
    fn test_to_rgb8_keeps_layout() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 0, Color::new(1.0, 0.0, 0.0));
        image.set(0, 1, Color::new(0.0, 0.0, 2.0));

        let rgb = to_rgb8(&image, false);
        assert_eq!(rgb.dimensions(), (3, 2));
        assert_eq!(rgb.get_pixel(2, 0).0, [255, 0, 0]);
        assert_eq!(rgb.get_pixel(0, 1).0, [0, 0, 255]);
        assert_eq!(rgb.get_pixel(1, 1).0, [0, 0, 0]);
    }

    #[test]
    fn test_save_image_png() {
        let path = std::env::temp_dir().join(format!("raydium_output_{}.png", std::process::id()));
        let image = ImageBuffer::new(4, 4);

        save_image(&image, &path, true).unwrap();
        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (4, 4));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_image_unknown_extension() {
        let path = std::env::temp_dir().join("raydium_output.unknown");
        let result = save_image(&ImageBuffer::new(1, 1), &path, false);

        assert!(matches!(result, Err(OutputError::Write { .. })));
    }
}
