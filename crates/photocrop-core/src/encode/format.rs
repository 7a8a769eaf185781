//! Output formats and encoding errors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::SourceFormat;

/// Default JPEG quality (0.95 on the 0-1 scale browsers use).
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The requested format name is not one of jpeg, png or webp
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    /// The underlying encoder failed
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: OutputFormat,
        message: String,
    },
}

/// Encoding of the extracted image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossy JPEG; transparency is flattened onto black.
    #[default]
    Jpeg,
    /// Lossless PNG with alpha.
    Png,
    /// Lossless WebP with alpha.
    Webp,
}

impl OutputFormat {
    /// MIME type, e.g. for a `Blob` or data URL.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
            OutputFormat::Webp => "image/webp",
        }
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
            OutputFormat::Webp => "webp",
        }
    }

    /// Keep PNG and WebP sources in their own format; everything else
    /// becomes JPEG.
    pub fn matching_source(source: SourceFormat) -> Self {
        match source {
            SourceFormat::Png => OutputFormat::Png,
            SourceFormat::Webp => OutputFormat::Webp,
            SourceFormat::Jpeg | SourceFormat::Other => OutputFormat::Jpeg,
        }
    }

    /// Whether the format can carry transparency.
    pub fn supports_alpha(self) -> bool {
        !matches!(self, OutputFormat::Jpeg)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Png => "PNG",
            OutputFormat::Webp => "WebP",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = EncodeError;

    /// Accepts `jpeg`, `jpg`, `png`, `webp` and their MIME types.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let name = name.strip_prefix("image/").unwrap_or(&name);
        match name {
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "png" => Ok(OutputFormat::Png),
            "webp" => Ok(OutputFormat::Webp),
            _ => Err(EncodeError::UnknownFormat(s.to_string())),
        }
    }
}

/// Check dimensions and buffer length before handing data to an encoder.
pub(super) fn validate(
    pixels: &[u8],
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * channels;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_jpeg() {
        assert_eq!(OutputFormat::default(), OutputFormat::Jpeg);
    }

    #[test]
    fn test_mime_and_extension() {
        assert_eq!(OutputFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
        assert_eq!(OutputFormat::Png.mime_type(), "image/png");
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::Webp.mime_type(), "image/webp");
        assert_eq!(OutputFormat::Webp.extension(), "webp");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("jpeg".parse::<OutputFormat>().unwrap(), OutputFormat::Jpeg);
        assert_eq!("JPG".parse::<OutputFormat>().unwrap(), OutputFormat::Jpeg);
        assert_eq!("png".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!("image/webp".parse::<OutputFormat>().unwrap(), OutputFormat::Webp);
        assert!(matches!(
            "gif".parse::<OutputFormat>(),
            Err(EncodeError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_matching_source() {
        assert_eq!(OutputFormat::matching_source(SourceFormat::Png), OutputFormat::Png);
        assert_eq!(OutputFormat::matching_source(SourceFormat::Webp), OutputFormat::Webp);
        assert_eq!(OutputFormat::matching_source(SourceFormat::Jpeg), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::matching_source(SourceFormat::Other), OutputFormat::Jpeg);
    }

    #[test]
    fn test_validate() {
        assert!(validate(&[0u8; 12], 2, 2, 3).is_ok());
        assert!(matches!(
            validate(&[], 0, 2, 3),
            Err(EncodeError::InvalidDimensions { width: 0, height: 2 })
        ));
        assert!(matches!(
            validate(&[0u8; 10], 2, 2, 3),
            Err(EncodeError::InvalidPixelData {
                expected: 12,
                actual: 10
            })
        ));
    }

    #[test]
    fn test_encoding_failed_display() {
        let err = EncodeError::EncodingFailed {
            format: OutputFormat::Webp,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "WebP encoding failed: boom");
    }
}
