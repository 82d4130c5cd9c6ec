//! Applying a color matrix to RGBA pixel data.
//!
//! Each pixel is normalized to [0, 1], multiplied through the 4x5 matrix
//! (four channel weights plus an offset per row), clamped back into range
//! and re-quantized. This is the CPU fallback for hosts without a native
//! color-filter primitive.

use crate::ColorMatrix;

/// Apply a color matrix to an image's pixel data in place.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `matrix` - The color transform to apply
///
/// A trailing incomplete pixel is left untouched. Output channels are
/// clamped to [0, 255].
///
/// # Example
/// ```
/// use huemat_core::{apply_color_matrix, hue_rotate_matrix};
///
/// let mut pixels = vec![255, 0, 0, 255]; // Single opaque red pixel
/// apply_color_matrix(&mut pixels, &hue_rotate_matrix(120.0));
/// // Hue has swung toward green; alpha is untouched
/// ```
pub fn apply_color_matrix(pixels: &mut [u8], matrix: &ColorMatrix) {
    // Early exit if there is nothing to do
    if matrix.is_identity() {
        return;
    }

    let m = matrix.values();
    for chunk in pixels.chunks_exact_mut(4) {
        let r = chunk[0] as f32 / 255.0;
        let g = chunk[1] as f32 / 255.0;
        let b = chunk[2] as f32 / 255.0;
        let a = chunk[3] as f32 / 255.0;

        let out_r = m[0] * r + m[1] * g + m[2] * b + m[3] * a + m[4];
        let out_g = m[5] * r + m[6] * g + m[7] * b + m[8] * a + m[9];
        let out_b = m[10] * r + m[11] * g + m[12] * b + m[13] * a + m[14];
        let out_a = m[15] * r + m[16] * g + m[17] * b + m[18] * a + m[19];

        chunk[0] = (out_r.clamp(0.0, 1.0) * 255.0).round() as u8;
        chunk[1] = (out_g.clamp(0.0, 1.0) * 255.0).round() as u8;
        chunk[2] = (out_b.clamp(0.0, 1.0) * 255.0).round() as u8;
        chunk[3] = (out_a.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
}
