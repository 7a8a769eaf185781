//! WASM-compatible wrapper types for image data.
//!
//! These wrap the core Photocrop types and handle the conversion between
//! Rust and JavaScript data representations.

use photocrop_core::decode::DecodedImage;
use photocrop_core::extract::ExtractedImage;
use photocrop_core::ExtractError;
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it out to a
/// `Uint8Array`, so keep the image on the WASM side and pass it back to
/// `extract` rather than round-tripping the pixels.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create a new JsDecodedImage from dimensions and RGBA pixel data
    /// (4 bytes per pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional; wasm-bindgen's finalizer releases it otherwise.
    pub fn free(self) {}
}

impl JsDecodedImage {
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert to a core DecodedImage, checking the buffer length.
    pub(crate) fn to_decoded(&self) -> Result<DecodedImage, JsValue> {
        DecodedImage::from_raw(self.width, self.height, self.pixels.clone())
            .map_err(|e| to_js_error(ExtractError::ImageDecode(e)))
    }
}

/// An encoded extraction result for JavaScript.
#[wasm_bindgen]
pub struct JsExtractedImage {
    inner: ExtractedImage,
}

#[wasm_bindgen]
impl JsExtractedImage {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// MIME type of the encoded bytes, e.g. `image/jpeg`
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.inner.mime_type().to_string()
    }

    /// File extension without the dot, e.g. `jpg`
    #[wasm_bindgen(getter)]
    pub fn extension(&self) -> String {
        self.inner.extension().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.bytes.len()
    }

    /// Encoded bytes as Uint8Array (a copy), ready for a `Blob`.
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }

    /// Download file name, `Cropped.<ext>` for an empty stem.
    pub fn file_name(&self, stem: &str) -> String {
        self.inner.file_name(stem)
    }
}

impl From<ExtractedImage> for JsExtractedImage {
    fn from(inner: ExtractedImage) -> Self {
        Self { inner }
    }
}

/// Convert an extraction failure into a JS error, logging it to the console.
pub(crate) fn to_js_error(err: ExtractError) -> JsValue {
    let message = err.to_string();
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from_str(&format!("photocrop: {}", message)));
    JsValue::from_str(&message)
}
