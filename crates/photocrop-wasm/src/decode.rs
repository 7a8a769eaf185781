//! Image decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode a JPEG, PNG or WebP upload to RGBA pixels
//! - [`source_mime_type`] - Report the container of the uploaded bytes
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@photocrop/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::{to_js_error, JsDecodedImage};
use photocrop_core::decode;
use photocrop_core::encode::OutputFormat;
use photocrop_core::ExtractError;
use wasm_bindgen::prelude::*;

/// Decode an uploaded image.
///
/// EXIF orientation is applied, so the result is upright the way a browser
/// would display it. The pixels are RGBA.
///
/// # Errors
///
/// Returns an error if the bytes are not a supported image or are corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| to_js_error(ExtractError::ImageDecode(e)))
}

/// MIME type of the output format that matches the uploaded container.
///
/// PNG and WebP uploads map to themselves, everything else to JPEG.
#[wasm_bindgen]
pub fn source_mime_type(bytes: &[u8]) -> Result<String, JsValue> {
    decode::detect_format(bytes)
        .map(|source| OutputFormat::matching_source(source).mime_type().to_string())
        .map_err(|e| to_js_error(ExtractError::ImageDecode(e)))
}
