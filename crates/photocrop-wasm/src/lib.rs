//! Photocrop WASM - WebAssembly bindings for Photocrop
//!
//! This crate exposes the photocrop-core extraction pipeline to the
//! JavaScript crop UI.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for decoded and extracted images
//! - `decode` - Upload decoding
//! - `extract` - Rotate, crop, resample and encode
//! - `presets` - Output sizes, aspect ratios and rotation steps
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, extract, compute_rotated_bounds } from '@photocrop/wasm';
//!
//! await init();
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const [cw, ch] = compute_rotated_bounds(image.width, image.height, rotation);
//! const out = extract(image, x, y, w, h, rotation, '1000x1500', undefined);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod extract;
mod presets;
mod types;

pub use decode::{decode_image, source_mime_type};
pub use extract::{extract, extract_from_bytes, extract_request};
pub use presets::{
    aspect_ratio_keys, aspect_ratio_value, compute_rotated_bounds, is_output_size_available,
    next_quarter_turn, output_size_presets,
};
pub use types::{JsDecodedImage, JsExtractedImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

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
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
