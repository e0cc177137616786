//! Free functions over [`Vec3`] used throughout light transport.

use crate::Vec3;
use thiserror::Error;

/// Squared length at or below which a material vector counts as black.
pub const NEAR_ZERO: f64 = 1e-6;

/// Errors raised by vector operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// A zero-length or non-finite vector cannot be used as a direction.
    #[error("invalid direction {0}: cannot normalize a zero-length or non-finite vector")]
    InvalidDirection(Vec3),
}

/// Normalize `v` to unit length.
///
/// Fails with [`MathError::InvalidDirection`] instead of producing NaNs when
/// `v` has no length.
pub fn unit_vector(v: Vec3) -> Result<Vec3, MathError> {
    let length = v.dot(v).sqrt();
    if length == 0.0 || !length.is_finite() {
        return Err(MathError::InvalidDirection(v));
    }
    Ok(v / length)
}

/// Returns true if `v` is not (effectively) the zero vector.
///
/// Material parameters use this to decide whether an emission, diffuse or
/// specular term is active.
#[inline]
pub fn not_zero(v: Vec3) -> bool {
    v.dot(v) > NEAR_ZERO
}

/// Mirror `v` about the (unit) normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
