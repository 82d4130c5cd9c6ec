//! Color matrix WASM bindings.
//!
//! This module wraps the core `ColorMatrix` type for JavaScript and exposes
//! the hue-rotation constructors, so a web UI can build coefficient arrays
//! and feed them to a canvas or CSS color-filter primitive.

use wasm_bindgen::prelude::*;

/// Color matrix wrapper for JavaScript.
///
/// Holds 20 row-major coefficients describing a 4x5 affine transform over
/// RGBA channels.
#[wasm_bindgen]
pub struct JsColorMatrix {
    inner: huemat_core::ColorMatrix,
}

#[wasm_bindgen]
impl JsColorMatrix {
    /// Create the identity matrix (leaves every color unchanged)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: huemat_core::ColorMatrix::identity(),
        }
    }

    /// Create a matrix from a 20-element coefficient array
    pub fn from_values(values: Vec<f32>) -> Result<JsColorMatrix, JsValue> {
        let inner = huemat_core::ColorMatrix::from_slice(&values)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }

    /// Get the 20 row-major coefficients as a Float32Array
    pub fn values(&self) -> Vec<f32> {
        self.inner.values().to_vec()
    }

    /// Check whether this is exactly the identity transform
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    /// Linearly interpolate toward another matrix.
    ///
    /// `fraction` is not clamped; values outside [0, 1] extrapolate.
    pub fn lerp(&self, target: &JsColorMatrix, fraction: f32) -> JsColorMatrix {
        Self {
            inner: self.inner.lerp(&target.inner, fraction),
        }
    }

    /// Serialize to JSON for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from JSON
    pub fn from_json(value: JsValue) -> Result<JsColorMatrix, JsValue> {
        let inner: huemat_core::ColorMatrix =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Default for JsColorMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl JsColorMatrix {
    /// Get a reference to the inner ColorMatrix for use in apply bindings
    pub(crate) fn inner(&self) -> &huemat_core::ColorMatrix {
        &self.inner
    }

    pub(crate) fn from_inner(inner: huemat_core::ColorMatrix) -> Self {
        Self { inner }
    }
}

/// Build the hue-rotation matrix for `angle_degrees`.
///
/// Any finite angle is accepted; values outside [0, 360) wrap naturally.
///
/// # Example (TypeScript)
/// ```typescript
/// const matrix = hue_rotate_matrix(90.0);
/// ctx.filter = ...; // feed matrix.values() to the platform color filter
/// ```
#[wasm_bindgen]
pub fn hue_rotate_matrix(angle_degrees: f32) -> JsColorMatrix {
    JsColorMatrix::from_inner(huemat_core::hue_rotate_matrix(angle_degrees))
}

/// Build a partial hue rotation: identity blended toward the full rotation
/// by `fraction` (0 = identity, 1 = full rotation, unclamped).
///
/// Drive `fraction` from an animation clock to fade the effect in and out.
#[wasm_bindgen]
pub fn partial_hue_rotate_matrix(angle_degrees: f32, fraction: f32) -> JsColorMatrix {
    JsColorMatrix::from_inner(huemat_core::partial_hue_rotate_matrix(
        angle_degrees,
        fraction,
    ))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_identity() {
        let m = JsColorMatrix::new();
        assert!(m.is_identity());
    }

    #[test]
    fn test_values_length() {
        let m = hue_rotate_matrix(45.0);
        assert_eq!(m.values().len(), 20);
    }

    #[test]
    fn test_from_values_round_trip() {
        let values: Vec<f32> = (0..20).map(|i| i as f32 * 0.05).collect();
        let m = JsColorMatrix::from_values(values.clone()).unwrap();
        assert_eq!(m.values(), values);
    }

    #[test]
    fn test_from_values_rejects_wrong_length() {
        assert!(JsColorMatrix::from_values(vec![1.0; 16]).is_err());
    }

    #[test]
    fn test_partial_fraction_zero_is_identity() {
        let m = partial_hue_rotate_matrix(45.0, 0.0);
        for (i, &v) in m.values().iter().enumerate() {
            let expected = if i == 0 || i == 6 || i == 12 || i == 18 {
                1.0
            } else {
                0.0
            };
            assert!((v - expected).abs() < 1e-3, "Index {} differs", i);
        }
    }

    #[test]
    fn test_lerp_matches_partial() {
        let full = hue_rotate_matrix(60.0);
        let blended = JsColorMatrix::new().lerp(&full, 0.5);
        let partial = partial_hue_rotate_matrix(60.0, 0.5);
        for (a, b) in blended.values().iter().zip(partial.values().iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }
}
