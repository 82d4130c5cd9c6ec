//! Pixel application WASM bindings.
//!
//! The browser can usually apply a color matrix on the GPU via a canvas or
//! SVG filter; these bindings cover the cases where the pixels themselves
//! are needed back, such as exporting the tinted image.

use crate::matrix::JsColorMatrix;
use crate::types::JsRgbaImage;
use wasm_bindgen::prelude::*;

/// Apply a color matrix to an image.
///
/// Takes an image and a matrix, returning a new transformed image.
/// The original image's pixel data is cloned and modified.
///
/// # Example (TypeScript)
/// ```typescript
/// const matrix = hue_rotate_matrix(180.0);
/// const tinted = apply_color_matrix(sourceImage, matrix);
/// const pixels = tinted.pixels();
/// ```
#[wasm_bindgen]
pub fn apply_color_matrix(image: &JsRgbaImage, matrix: &JsColorMatrix) -> JsRgbaImage {
    // Clone the pixel data so we don't modify the original
    let mut result = JsRgbaImage::new(image.width(), image.height(), image.pixels());
    huemat_core::apply_color_matrix(result.pixels_mut(), matrix.inner());
    result
}

/// Apply a partial hue rotation to an image in one call.
///
/// Convenience wrapper combining matrix construction and application:
/// `fraction = 0` returns the image unchanged, `fraction = 1` applies the
/// full rotation.
#[wasm_bindgen]
pub fn apply_hue_rotation(image: &JsRgbaImage, angle_degrees: f32, fraction: f32) -> JsRgbaImage {
    let matrix = huemat_core::partial_hue_rotate_matrix(angle_degrees, fraction);
    let mut result = JsRgbaImage::new(image.width(), image.height(), image.pixels());
    huemat_core::apply_color_matrix(result.pixels_mut(), &matrix);
    result
}
