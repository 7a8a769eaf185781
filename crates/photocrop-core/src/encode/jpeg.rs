//! JPEG encoding for extracted images.
//!
//! JPEG has no alpha channel. Transparent areas of an extraction (the
//! corners of a rotated canvas, a window hanging over the edge) are
//! composited onto black, matching what a browser canvas exports.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::format::validate;
use super::{EncodeError, OutputFormat};

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Example
///
/// ```
/// use photocrop_core::encode::encode_jpeg;
///
/// let pixels = vec![128u8; 100 * 100 * 3]; // Gray image
/// let jpeg = encode_jpeg(&pixels, 100, 100, 95).unwrap();
/// assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
/// ```
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height, 3)?;

    // Clamp quality to valid range (1-100)
    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: OutputFormat::Jpeg,
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}

/// Encode RGBA pixel data to JPEG bytes, flattening alpha onto black.
pub fn encode_jpeg_rgba(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height, 4)?;
    let rgb = flatten_onto_black(pixels);
    encode_jpeg(&rgb, width, height, quality)
}

/// Composite RGBA over opaque black, dropping the alpha channel.
fn flatten_onto_black(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        let a = px[3] as u32;
        if a == 255 {
            rgb.extend_from_slice(&px[..3]);
        } else {
            for &c in &px[..3] {
                rgb.push(((c as u32 * a + 127) / 255) as u8);
            }
        }
    }
    rgb
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Encoding always produces a well-framed JPEG for valid input.
        #[test]
        fn prop_valid_input_produces_valid_jpeg(
            (width, height) in (1u32..=50, 1u32..=50),
            quality in 1u8..=100,
        ) {
            let pixels = vec![128u8; (width * height * 4) as usize];

            let jpeg_bytes = encode_jpeg_rgba(&pixels, width, height, quality).unwrap();
            let len = jpeg_bytes.len();
            prop_assert!(len >= 4);
            prop_assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8]);
            prop_assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9]);
        }

        /// Property: Same input always produces same output (deterministic).
        #[test]
        fn prop_deterministic_output(
            (width, height) in (1u32..=20, 1u32..=20),
            quality in 1u8..=100,
        ) {
            let pixels: Vec<u8> = (0..(width * height * 4) as usize)
                .map(|i| ((i * 37) % 256) as u8)
                .collect();

            let first = encode_jpeg_rgba(&pixels, width, height, quality).unwrap();
            let second = encode_jpeg_rgba(&pixels, width, height, quality).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Property: Invalid pixel data length always returns error.
        #[test]
        fn prop_invalid_pixel_length_returns_error(
            (width, height) in (1u32..=30, 1u32..=30),
            delta in 1usize..=10,
        ) {
            let pixels = vec![128u8; (width * height * 4) as usize + delta];
            let result = encode_jpeg_rgba(&pixels, width, height, 90);
            let is_invalid = matches!(result, Err(EncodeError::InvalidPixelData { .. }));
            prop_assert!(is_invalid);
        }
    }
}
