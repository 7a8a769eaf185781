//! Drawing surface allocation.
//!
//! Every stage of an extraction draws into a freshly allocated surface, the
//! way a browser pipeline allocates one canvas per stage. Allocation enforces
//! the size limits common to browser canvases so a request that would fail
//! there fails here too, with `RenderingContextUnavailable`.

use tracing::warn;

use crate::decode::{DecodedImage, CHANNELS};
use crate::error::ExtractError;

/// Largest width or height a surface may have.
pub const MAX_SURFACE_DIMENSION: u32 = 32_767;

/// Largest pixel area a surface may have (16384 x 16384).
pub const MAX_SURFACE_AREA: u64 = 268_435_456;

/// Allocate a fully transparent RGBA surface.
///
/// # Errors
///
/// Returns `ExtractError::RenderingContextUnavailable` if either dimension
/// is zero or the surface exceeds [`MAX_SURFACE_DIMENSION`] or
/// [`MAX_SURFACE_AREA`].
pub fn allocate_surface(width: u32, height: u32) -> Result<DecodedImage, ExtractError> {
    if !can_allocate(width, height) {
        warn!(width, height, "Surface allocation refused");
        return Err(ExtractError::RenderingContextUnavailable { width, height });
    }

    let len = width as usize * height as usize * CHANNELS;
    Ok(DecodedImage::new(width, height, vec![0u8; len]))
}

/// Whether a surface of this size is within the allocation limits.
pub fn can_allocate(width: u32, height: u32) -> bool {
    width > 0
        && height > 0
        && width <= MAX_SURFACE_DIMENSION
        && height <= MAX_SURFACE_DIMENSION
        && u64::from(width) * u64::from(height) <= MAX_SURFACE_AREA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_is_transparent() {
        let surface = allocate_surface(3, 2).unwrap();
        assert_eq!(surface.width, 3);
        assert_eq!(surface.height, 2);
        assert!(surface.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_dimension_refused() {
        assert!(matches!(
            allocate_surface(0, 10),
            Err(ExtractError::RenderingContextUnavailable {
                width: 0,
                height: 10
            })
        ));
        assert!(allocate_surface(10, 0).is_err());
    }

    #[test]
    fn test_limits() {
        assert!(can_allocate(MAX_SURFACE_DIMENSION, 1));
        assert!(!can_allocate(MAX_SURFACE_DIMENSION + 1, 1));
        assert!(can_allocate(16_384, 16_384));
        assert!(!can_allocate(16_385, 16_384));
    }
}
