//! Hue rotation color matrices.
//!
//! Builds the standard luminance-preserving hue-rotation matrix: colors are
//! rotated around the luma axis so perceived brightness stays roughly
//! constant while hue shifts by the requested angle.
//!
//! For rotation by `angle` degrees, with `c = cos(angle)` and
//! `s = sin(angle)`, each RGB row mixes a luminance term, a cosine term
//! that fades the original channel back in, and a sine term that swirls
//! the off-axis channels. The alpha row is always identity and all offsets
//! are zero.

use crate::ColorMatrix;

/// Luminance weight for the red channel in the hue-rotation formula.
pub const LUM_R: f32 = 0.213;

/// Luminance weight for the green channel in the hue-rotation formula.
pub const LUM_G: f32 = 0.715;

/// Luminance weight for the blue channel in the hue-rotation formula.
pub const LUM_B: f32 = 0.072;

/// Build the hue-rotation matrix for `angle_degrees`.
///
/// Any finite angle is accepted; values outside [0, 360) wrap naturally
/// through the trigonometric functions, and negative angles rotate the
/// opposite way. Non-finite angles propagate NaN through the coefficients
/// rather than being rejected.
///
/// Trigonometry is evaluated in `f64` and each coefficient is narrowed to
/// `f32` for storage.
pub fn hue_rotate_matrix(angle_degrees: f32) -> ColorMatrix {
    let rad = (angle_degrees as f64).to_radians();
    let c = rad.cos();
    let s = rad.sin();

    let lum_r = LUM_R as f64;
    let lum_g = LUM_G as f64;
    let lum_b = LUM_B as f64;

    ColorMatrix::new([
        (lum_r + c * (1.0 - lum_r) + s * (-lum_r)) as f32,
        (lum_g + c * (-lum_g) + s * (-lum_g)) as f32,
        (lum_b + c * (-lum_b) + s * (1.0 - lum_b)) as f32,
        0.0,
        0.0,
        (lum_r + c * (-lum_r) + s * 0.143) as f32,
        (lum_g + c * (1.0 - lum_g) + s * 0.140) as f32,
        (lum_b + c * (-lum_b) + s * (-0.283)) as f32,
        0.0,
        0.0,
        (lum_r + c * (-lum_r) + s * (-(1.0 - lum_r))) as f32,
        (lum_g + c * (-lum_g) + s * lum_g) as f32,
        (lum_b + c * (1.0 - lum_b) + s * lum_b) as f32,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
        0.0,
    ])
}

/// Build a partial hue rotation: the identity matrix blended toward
/// [`hue_rotate_matrix`] by `fraction`.
///
/// `fraction = 0.0` yields the identity transform, `fraction = 1.0` the
/// full rotation, and intermediate values interpolate linearly per
/// coefficient. The fraction is not clamped: values outside [0, 1]
/// extrapolate, which animation curves that overshoot rely on.
pub fn partial_hue_rotate_matrix(angle_degrees: f32, fraction: f32) -> ColorMatrix {
    ColorMatrix::identity().lerp(&hue_rotate_matrix(angle_degrees), fraction)
}
