//! Huemat Core - Color matrix math library
//!
//! This crate provides the core color-matrix functionality for Huemat:
//! building luminance-preserving hue-rotation matrices, blending them
//! against the identity transform, and applying them to RGBA pixel data.

pub mod apply;
pub mod hue;

pub use apply::apply_color_matrix;
pub use hue::{hue_rotate_matrix, partial_hue_rotate_matrix};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of coefficients in a color matrix (4 rows x 5 columns).
pub const MATRIX_LEN: usize = 20;

/// Identity coefficients: 1.0 on the channel diagonal, zero offsets.
const IDENTITY: [f32; MATRIX_LEN] = [
    1.0, 0.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 0.0, 1.0, 0.0,
];

/// Error types for color matrix construction.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// The coefficient slice does not hold exactly 20 values.
    #[error("Expected {MATRIX_LEN} matrix coefficients, got {0}")]
    InvalidLength(usize),
}

/// A 4x5 affine color transform over (R, G, B, A) channels.
///
/// Coefficients are stored row-major: each row holds four channel weights
/// followed by an additive offset. Channel values and offsets are in
/// normalized [0, 1] units. The identity matrix has 1.0 at indices
/// 0, 6, 12 and 18 and 0.0 everywhere else.
///
/// Matrices are plain immutable values; operations return fresh matrices
/// rather than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorMatrix {
    values: [f32; MATRIX_LEN],
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl ColorMatrix {
    /// Create a color matrix from 20 row-major coefficients.
    pub fn new(values: [f32; MATRIX_LEN]) -> Self {
        Self { values }
    }

    /// The identity transform: leaves every color unchanged.
    pub fn identity() -> Self {
        Self { values: IDENTITY }
    }

    /// Create a color matrix from a coefficient slice.
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidLength`] if the slice does not hold
    /// exactly 20 values.
    pub fn from_slice(values: &[f32]) -> Result<Self, MatrixError> {
        let values: [f32; MATRIX_LEN] = values
            .try_into()
            .map_err(|_| MatrixError::InvalidLength(values.len()))?;
        Ok(Self { values })
    }

    /// Get the row-major coefficients.
    pub fn values(&self) -> &[f32; MATRIX_LEN] {
        &self.values
    }

    /// Check whether this is exactly the identity transform.
    pub fn is_identity(&self) -> bool {
        self.values == IDENTITY
    }

    /// Linearly interpolate each coefficient toward `target`.
    ///
    /// `fraction = 0.0` returns `self`, `fraction = 1.0` returns `target`,
    /// and values outside [0, 1] extrapolate along the same line. The
    /// fraction is deliberately not clamped.
    pub fn lerp(&self, target: &ColorMatrix, fraction: f32) -> ColorMatrix {
        let mut out = [0.0f32; MATRIX_LEN];
        for (i, value) in out.iter_mut().enumerate() {
            *value = self.values[i] + fraction * (target.values[i] - self.values[i]);
        }
        ColorMatrix::new(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let m = ColorMatrix::default();
        assert!(m.is_identity());
        assert_eq!(m, ColorMatrix::identity());
    }

    #[test]
    fn test_identity_diagonal_positions() {
        let identity = ColorMatrix::identity();
        let values = identity.values();
        for (i, &v) in values.iter().enumerate() {
            let expected = if i == 0 || i == 6 || i == 12 || i == 18 {
                1.0
            } else {
                0.0
            };
            assert_eq!(v, expected, "Unexpected identity value at index {}", i);
        }
    }

    #[test]
    fn test_from_slice_valid() {
        let coefficients = vec![0.5f32; MATRIX_LEN];
        let m = ColorMatrix::from_slice(&coefficients).unwrap();
        assert_eq!(m.values()[7], 0.5);
    }

    #[test]
    fn test_from_slice_wrong_length() {
        let too_short = vec![0.0f32; 12];
        let err = ColorMatrix::from_slice(&too_short).unwrap_err();
        assert!(matches!(err, MatrixError::InvalidLength(12)));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = ColorMatrix::identity();
        let b = ColorMatrix::new([0.25; MATRIX_LEN]);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = ColorMatrix::new([0.0; MATRIX_LEN]);
        let b = ColorMatrix::new([1.0; MATRIX_LEN]);
        let mid = a.lerp(&b, 0.5);
        for &v in mid.values() {
            assert!((v - 0.5).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_lerp_extrapolates_past_target() {
        let a = ColorMatrix::new([0.0; MATRIX_LEN]);
        let b = ColorMatrix::new([1.0; MATRIX_LEN]);
        let over = a.lerp(&b, 2.0);
        for &v in over.values() {
            assert!((v - 2.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_is_identity_rejects_near_identity() {
        let mut values = *ColorMatrix::identity().values();
        values[1] = 1e-6;
        assert!(!ColorMatrix::new(values).is_identity());
    }
}
