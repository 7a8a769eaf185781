//! Region copy out of the rotated canvas.
//!
//! The output surface is always exactly `region.width` x `region.height`.
//! No resampling happens here: every output pixel is either a verbatim copy
//! of a canvas pixel or, where the window hangs over the canvas edge,
//! transparent.
//!
//! # Coordinate System
//!
//! - Region coordinates are whole pixels of the rotated canvas
//! - Origin is the canvas's top-left corner
//! - `x`/`y` may be negative or beyond the canvas

use tracing::debug;

use crate::decode::{DecodedImage, CHANNELS};
use crate::error::ExtractError;
use crate::region::CropRegion;
use crate::surface::allocate_surface;

/// Copy the `region` window of `canvas` into a new surface.
///
/// # Errors
///
/// Returns `ExtractError::InvalidRegion` if the region has a zero dimension
/// and `ExtractError::RenderingContextUnavailable` if the output surface
/// cannot be allocated.
pub fn copy_region(
    canvas: &DecodedImage,
    region: &CropRegion,
) -> Result<DecodedImage, ExtractError> {
    if region.is_degenerate() {
        return Err(ExtractError::InvalidRegion {
            width: region.width,
            height: region.height,
        });
    }

    let mut output = allocate_surface(region.width, region.height)?;

    // Overlap of the window with the canvas, in canvas coordinates
    let left = i64::from(region.x).max(0);
    let top = i64::from(region.y).max(0);
    let right = (i64::from(region.x) + i64::from(region.width)).min(i64::from(canvas.width));
    let bottom = (i64::from(region.y) + i64::from(region.height)).min(i64::from(canvas.height));

    if left >= right || top >= bottom {
        debug!(?region, "Crop region lies entirely outside the canvas");
        return Ok(output);
    }

    let row_bytes = (right - left) as usize * CHANNELS;
    let dst_x = (left - i64::from(region.x)) as u32;

    // Copy pixel data row by row
    for src_y in top..bottom {
        let dst_y = (src_y - i64::from(region.y)) as u32;
        let src_start = canvas.offset(left as u32, src_y as u32);
        let dst_start = output.offset(dst_x, dst_y);
        output.pixels[dst_start..dst_start + row_bytes]
            .copy_from_slice(&canvas.pixels[src_start..src_start + row_bytes]);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create an opaque test image where each pixel has a unique value.
    fn test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, x as u8, y as u8, 255]);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_full_region_is_identity() {
        let img = test_image(50, 40);
        let result = copy_region(&img, &CropRegion::new(0, 0, 50, 40)).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_interior_region() {
        let img = test_image(10, 10);
        let result = copy_region(&img, &CropRegion::new(2, 3, 6, 4)).unwrap();

        assert_eq!((result.width, result.height), (6, 4));
        for y in 0..4 {
            for x in 0..6 {
                assert_eq!(result.pixel(x, y), img.pixel(x + 2, y + 3));
            }
        }
    }

    #[test]
    fn test_negative_origin_pads_transparent() {
        let img = test_image(10, 10);
        let result = copy_region(&img, &CropRegion::new(-2, -1, 5, 5)).unwrap();

        assert_eq!((result.width, result.height), (5, 5));
        assert_eq!(result.pixel(0, 0), [0, 0, 0, 0]);
        assert_eq!(result.pixel(1, 4), [0, 0, 0, 0]);
        assert_eq!(result.pixel(4, 0), [0, 0, 0, 0]);
        // Canvas origin lands at (2, 1)
        assert_eq!(result.pixel(2, 1), img.pixel(0, 0));
        assert_eq!(result.pixel(4, 4), img.pixel(2, 3));
    }

    #[test]
    fn test_region_past_far_edge() {
        let img = test_image(10, 10);
        let result = copy_region(&img, &CropRegion::new(8, 8, 4, 4)).unwrap();

        assert_eq!((result.width, result.height), (4, 4));
        assert_eq!(result.pixel(1, 1), img.pixel(9, 9));
        assert_eq!(result.pixel(2, 0), [0, 0, 0, 0]);
        assert_eq!(result.pixel(0, 2), [0, 0, 0, 0]);
    }

    #[test]
    fn test_region_entirely_outside() {
        let img = test_image(10, 10);
        let result = copy_region(&img, &CropRegion::new(100, -50, 3, 2)).unwrap();

        assert_eq!((result.width, result.height), (3, 2));
        assert!(result.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_region_larger_than_canvas() {
        let img = test_image(4, 4);
        let result = copy_region(&img, &CropRegion::new(-1, -1, 6, 6)).unwrap();

        assert_eq!((result.width, result.height), (6, 6));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(result.pixel(x + 1, y + 1), img.pixel(x, y));
            }
        }
        assert_eq!(result.pixel(5, 5), [0, 0, 0, 0]);
    }

    #[test]
    fn test_degenerate_region_rejected() {
        let img = test_image(10, 10);
        assert!(matches!(
            copy_region(&img, &CropRegion::new(0, 0, 0, 5)),
            Err(ExtractError::InvalidRegion { width: 0, height: 5 })
        ));
        assert!(matches!(
            copy_region(&img, &CropRegion::new(0, 0, 5, 0)),
            Err(ExtractError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn test_single_pixel_region() {
        let img = test_image(10, 10);
        let result = copy_region(&img, &CropRegion::new(7, 3, 1, 1)).unwrap();
        assert_eq!(result.pixels, img.pixel(7, 3).to_vec());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
