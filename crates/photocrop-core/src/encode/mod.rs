//! Image encoding for Photocrop.
//!
//! This module provides functionality for:
//! - Encoding extracted rasters to JPEG (default), PNG or WebP
//! - Choosing an output format that matches the source container
//!
//! # Examples
//!
//! ```ignore
//! use photocrop_core::encode::{encode_image, OutputFormat};
//!
//! let bytes = encode_image(&image, OutputFormat::Jpeg, 95).unwrap();
//! println!("Encoded {} bytes", bytes.len());
//! ```

mod format;
mod jpeg;
mod lossless;

pub use format::{EncodeError, OutputFormat, DEFAULT_JPEG_QUALITY};
pub use jpeg::{encode_jpeg, encode_jpeg_rgba};
pub use lossless::{encode_png, encode_webp};

use tracing::debug;

use crate::decode::DecodedImage;

/// Encode an RGBA raster in the given format.
///
/// `quality` (1-100) only affects JPEG; the other formats are lossless.
pub fn encode_image(
    image: &DecodedImage,
    format: OutputFormat,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    let bytes = match format {
        OutputFormat::Jpeg => encode_jpeg_rgba(&image.pixels, image.width, image.height, quality)?,
        OutputFormat::Png => encode_png(&image.pixels, image.width, image.height)?,
        OutputFormat::Webp => encode_webp(&image.pixels, image.width, image.height)?,
    };

    debug!(
        %format,
        width = image.width,
        height = image.height,
        len = bytes.len(),
        "Image encoded"
    );
    Ok(bytes)
}
