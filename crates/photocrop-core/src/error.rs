//! Error taxonomy for region extraction.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Errors that can occur during a single extraction call.
///
/// Every variant is terminal for that call; no partial result is produced.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source image could not be decoded.
    #[error("Image decode failed: {0}")]
    ImageDecode(#[from] DecodeError),

    /// A drawing surface of the requested size could not be allocated.
    #[error("Rendering context unavailable for a {width}x{height} surface")]
    RenderingContextUnavailable { width: u32, height: u32 },

    /// The crop region has a zero dimension.
    #[error("Invalid crop region: width ({width}) and height ({height}) must be non-zero")]
    InvalidRegion { width: u32, height: u32 },

    /// The rotation angle is NaN or infinite.
    #[error("Invalid rotation: {degrees} degrees")]
    InvalidRotation { degrees: f64 },

    /// The requested output size has a zero dimension.
    #[error("Invalid output size: width ({width}) and height ({height}) must be non-zero")]
    InvalidOutputSize { width: u32, height: u32 },

    /// The final raster could not be encoded.
    #[error("Image encode failed: {0}")]
    Encode(#[from] EncodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decode_error() {
        let err: ExtractError = DecodeError::InvalidFormat.into();
        assert!(matches!(err, ExtractError::ImageDecode(DecodeError::InvalidFormat)));
        assert_eq!(
            err.to_string(),
            "Image decode failed: Invalid or unsupported image format"
        );
    }

    #[test]
    fn test_display_messages() {
        let err = ExtractError::RenderingContextUnavailable {
            width: 0,
            height: 10,
        };
        assert_eq!(
            err.to_string(),
            "Rendering context unavailable for a 0x10 surface"
        );

        let err = ExtractError::InvalidRegion {
            width: 0,
            height: 5,
        };
        assert!(err.to_string().contains("width (0)"));
    }
}
