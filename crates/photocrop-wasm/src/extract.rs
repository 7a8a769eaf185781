//! Region extraction WASM bindings.
//!
//! The crop widget reports fractional pixel coordinates of the rotated
//! canvas; they are rounded to whole pixels here. The output size is given
//! as a preset token (`"1000x1500"`, or `"original"`/absent for the region's
//! own size). Options are a plain object:
//!
//! ```typescript
//! const out = extract(image, x, y, w, h, rotation, '1000x1500', {
//!   format: 'png',
//!   quality: 95,
//!   resampleFilter: 'bicubic',
//! });
//! const blob = new Blob([out.bytes()], { type: out.mime_type });
//! link.download = out.file_name('holiday');
//! ```

use crate::types::{to_js_error, JsDecodedImage, JsExtractedImage};
use photocrop_core::extract::{self, ExtractOptions};
use photocrop_core::region::{parse_output_size, CropRegion, OutputSize};
use wasm_bindgen::prelude::*;

/// Rotate, crop and resample a decoded image, then encode it.
///
/// # Errors
///
/// Returns an error for a zero-sized region or output size, a malformed
/// output size token, invalid options, or a surface that is too large.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn extract(
    image: &JsDecodedImage,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rotation_degrees: f64,
    output_size: Option<String>,
    options: JsValue,
) -> Result<JsExtractedImage, JsValue> {
    let source = image.to_decoded()?;
    let output_size = output_size_from_token(output_size.as_deref())?;
    let options = options_from_js(options)?;
    let region = CropRegion::from_f64(x, y, width, height);

    extract::extract(&source, region, rotation_degrees, output_size, &options)
        .map(JsExtractedImage::from)
        .map_err(to_js_error)
}

/// Decode the uploaded bytes and extract in one call.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn extract_from_bytes(
    bytes: &[u8],
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rotation_degrees: f64,
    output_size: Option<String>,
    options: JsValue,
) -> Result<JsExtractedImage, JsValue> {
    let output_size = output_size_from_token(output_size.as_deref())?;
    let options = options_from_js(options)?;
    let region = CropRegion::from_f64(x, y, width, height);

    extract::extract_from_bytes(bytes, region, rotation_degrees, output_size, &options)
        .map(JsExtractedImage::from)
        .map_err(to_js_error)
}

/// Helper struct for deserializing a whole extraction request via serde.
///
/// Field names follow the crop widget's `croppedAreaPixels` object, plus the
/// rotation, output size token and options.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtractRequestJs {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    #[serde(default)]
    rotation: f64,
    #[serde(default)]
    output_size: Option<String>,
    #[serde(default)]
    options: ExtractOptions,
}

impl ExtractRequestJs {
    fn region(&self) -> CropRegion {
        CropRegion::from_f64(self.x, self.y, self.width, self.height)
    }
}

/// Extract using a single request object.
///
/// ```typescript
/// const out = extract_request(image, {
///   ...croppedAreaPixels,
///   rotation,
///   outputSize: '800x1200',
///   options: { format: 'webp' },
/// });
/// ```
///
/// # Errors
///
/// Returns an error if the request cannot be deserialized, plus everything
/// [`extract`] returns.
#[wasm_bindgen]
pub fn extract_request(
    image: &JsDecodedImage,
    request: JsValue,
) -> Result<JsExtractedImage, JsValue> {
    let request: ExtractRequestJs = serde_wasm_bindgen::from_value(request)
        .map_err(|e| JsValue::from_str(&format!("Invalid extract request: {}", e)))?;
    let source = image.to_decoded()?;
    let output_size = output_size_from_token(request.output_size.as_deref())?;

    extract::extract(
        &source,
        request.region(),
        request.rotation,
        output_size,
        &request.options,
    )
    .map(JsExtractedImage::from)
    .map_err(to_js_error)
}

/// Parse an optional output size token. Absent and `"original"` both mean
/// the region's own size.
fn output_size_from_token(token: Option<&str>) -> Result<Option<OutputSize>, JsValue> {
    match token {
        None => Ok(None),
        Some(token) => parse_output_size(token).map_err(|e| JsValue::from_str(&e.to_string())),
    }
}

/// Read `ExtractOptions` from a JS object; `undefined`/`null` give defaults.
fn options_from_js(value: JsValue) -> Result<ExtractOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(ExtractOptions::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid extract options: {}", e)))
}
