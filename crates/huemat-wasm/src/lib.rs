//! Huemat WASM - WebAssembly bindings for Huemat
//!
//! This crate exposes the huemat-core color-matrix math to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `matrix` - Hue-rotation matrix construction and the JsColorMatrix wrapper
//! - `types` - WASM-compatible wrapper types for RGBA image data
//! - `apply` - Applying a color matrix to image pixels
//!
//! # Usage
//!
//! ```typescript
//! import init, { hue_rotate_matrix, apply_hue_rotation } from '@huemat/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Build a 90-degree hue rotation and hand it to a canvas filter
//! const matrix = hue_rotate_matrix(90.0);
//! console.log(matrix.values());
//! ```

use wasm_bindgen::prelude::*;

mod apply;
mod matrix;
mod types;

// Re-export public types
pub use apply::{apply_color_matrix, apply_hue_rotation};
pub use matrix::{hue_rotate_matrix, partial_hue_rotate_matrix, JsColorMatrix};
pub use types::JsRgbaImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
