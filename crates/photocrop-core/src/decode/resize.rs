//! Exact-size resampling.
//!
//! Wraps the `image` crate's separable filters. Alpha is premultiplied for
//! the duration of the filter so transparent pixels do not bleed their
//! (meaningless) colour into opaque neighbours.

use super::{DecodeError, DecodedImage, FilterType, CHANNELS};

/// Resize an image to exact dimensions.
///
/// Aspect ratio is not preserved: the output is always exactly
/// `width` x `height`.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if either target dimension is zero,
/// and `DecodeError::BufferMismatch` if the source buffer is malformed.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let mut premultiplied = image.clone();
    premultiply(&mut premultiplied.pixels);

    let rgba = premultiplied.to_rgba_image().ok_or(DecodeError::BufferMismatch {
        expected: image.width as usize * image.height as usize * CHANNELS,
        actual: image.pixels.len(),
    })?;

    let resized = image::imageops::resize(&rgba, width, height, filter.to_image_filter());

    let mut output = DecodedImage::from_rgba_image(resized);
    unpremultiply(&mut output.pixels);
    Ok(output)
}

fn premultiply(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(CHANNELS) {
        let a = px[3] as u32;
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u32 * a + 127) / 255) as u8;
        }
    }
}

fn unpremultiply(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(CHANNELS) {
        let a = px[3] as u32;
        if a == 255 || a == 0 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u32 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}
