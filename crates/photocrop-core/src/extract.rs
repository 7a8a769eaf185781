//! The region extractor.
//!
//! Turns a source image, a crop window, a rotation and an optional target
//! size into an encoded image of exactly the requested dimensions. Each call
//! allocates its own surfaces and keeps no state, so calls are independent.
//!
//! # Stages
//!
//! 1. Rotate the whole source onto its bounding canvas
//! 2. Copy the crop window out of that canvas (no resampling)
//! 3. Resample to the output size, if one is given and differs
//!
//! The result is then encoded (JPEG at quality 95 unless configured
//! otherwise).

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::decode::{decode_image, detect_format, resize, DecodedImage, FilterType};
use crate::encode::{encode_image, OutputFormat, DEFAULT_JPEG_QUALITY};
use crate::error::ExtractError;
use crate::region::{CropRegion, OutputSize};
use crate::surface::can_allocate;
use crate::transform::{
    copy_region, quarter_turns, rotate_to_bounding_canvas, InterpolationFilter,
};

/// File stem used when the caller does not name the download.
pub const DEFAULT_FILE_STEM: &str = "Cropped";

/// Tunables for an extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractOptions {
    /// Output encoding.
    pub format: OutputFormat,
    /// When extracting from encoded bytes, keep PNG/WebP sources in their
    /// own format instead of `format`.
    pub match_source_format: bool,
    /// JPEG quality, 1-100.
    pub quality: u8,
    /// Filter for the final resampling stage.
    pub resample_filter: FilterType,
    /// Filter for arbitrary-angle rotation.
    pub rotation_filter: InterpolationFilter,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Jpeg,
            match_source_format: false,
            quality: DEFAULT_JPEG_QUALITY,
            resample_filter: FilterType::Bicubic,
            rotation_filter: InterpolationFilter::Bilinear,
        }
    }
}

impl ExtractOptions {
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Encoded result of an extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedImage {
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
    /// Final width in pixels.
    pub width: u32,
    /// Final height in pixels.
    pub height: u32,
    /// Encoding of `bytes`.
    pub format: OutputFormat,
}

impl ExtractedImage {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }

    /// Download file name for this image: `<stem>.<extension>`.
    ///
    /// A blank stem falls back to [`DEFAULT_FILE_STEM`].
    pub fn file_name(&self, stem: &str) -> String {
        crate::presets::file_name(stem, self.format)
    }
}

/// Extract a rotated, cropped and optionally resampled region of `source`.
///
/// `region` is in pixel coordinates of the source after rotation by
/// `rotation_degrees` (clockwise) into its bounding canvas. When
/// `output_size` is `None` the result has the region's dimensions.
///
/// # Errors
///
/// - `ExtractError::InvalidRegion` if the region has a zero dimension
/// - `ExtractError::InvalidOutputSize` if the output size has a zero dimension
/// - `ExtractError::InvalidRotation` if the angle is not finite
/// - `ExtractError::RenderingContextUnavailable` if a surface is too large
/// - `ExtractError::Encode` if encoding fails
///
/// # Example
///
/// ```ignore
/// let region = CropRegion::new(100, 100, 400, 300);
/// let out = extract(&source, region, 0.0, None, &ExtractOptions::default())?;
/// assert_eq!((out.width, out.height), (400, 300));
/// ```
#[instrument(
    skip(source, options),
    fields(src_w = source.width, src_h = source.height)
)]
pub fn extract(
    source: &DecodedImage,
    region: CropRegion,
    rotation_degrees: f64,
    output_size: Option<OutputSize>,
    options: &ExtractOptions,
) -> Result<ExtractedImage, ExtractError> {
    let raster = render(source, region, rotation_degrees, output_size, options)?;
    let bytes = encode_image(&raster, options.format, options.quality)?;

    Ok(ExtractedImage {
        bytes,
        width: raster.width,
        height: raster.height,
        format: options.format,
    })
}

/// Decode `bytes` and extract from the result.
///
/// With `options.match_source_format` set, PNG and WebP sources are
/// re-encoded in their own format.
///
/// # Errors
///
/// Everything [`extract`] returns, plus `ExtractError::ImageDecode` when the
/// bytes cannot be decoded.
#[instrument(skip(bytes, options), fields(len = bytes.len()))]
pub fn extract_from_bytes(
    bytes: &[u8],
    region: CropRegion,
    rotation_degrees: f64,
    output_size: Option<OutputSize>,
    options: &ExtractOptions,
) -> Result<ExtractedImage, ExtractError> {
    let source = decode_image(bytes)?;

    if options.match_source_format {
        let format = OutputFormat::matching_source(detect_format(bytes)?);
        let options = options.clone().with_format(format);
        return extract(&source, region, rotation_degrees, output_size, &options);
    }

    extract(&source, region, rotation_degrees, output_size, options)
}

/// Run the three drawing stages and return the final raster, unencoded.
pub fn render(
    source: &DecodedImage,
    region: CropRegion,
    rotation_degrees: f64,
    output_size: Option<OutputSize>,
    options: &ExtractOptions,
) -> Result<DecodedImage, ExtractError> {
    if !rotation_degrees.is_finite() {
        return Err(ExtractError::InvalidRotation {
            degrees: rotation_degrees,
        });
    }
    if region.is_degenerate() {
        return Err(ExtractError::InvalidRegion {
            width: region.width,
            height: region.height,
        });
    }
    if let Some(size) = output_size.filter(OutputSize::is_degenerate) {
        return Err(ExtractError::InvalidOutputSize {
            width: size.width,
            height: size.height,
        });
    }

    // Stage 1: an unrotated source already is its own bounding canvas
    let rotated;
    let canvas = if quarter_turns(rotation_degrees) == Some(0) {
        source
    } else {
        rotated = rotate_to_bounding_canvas(source, rotation_degrees, options.rotation_filter)?;
        &rotated
    };
    debug!(canvas_w = canvas.width, canvas_h = canvas.height, "Bounding canvas ready");

    // Stage 2
    let cropped = copy_region(canvas, &region)?;
    debug!(?region, "Region copied");

    // Stage 3
    match output_size {
        Some(size) if (size.width, size.height) != region.dimensions() => {
            if !can_allocate(size.width, size.height) {
                return Err(ExtractError::RenderingContextUnavailable {
                    width: size.width,
                    height: size.height,
                });
            }
            let resampled = resize(&cropped, size.width, size.height, options.resample_filter)?;
            debug!(%size, filter = ?options.resample_filter, "Resampled to output size");
            Ok(resampled)
        }
        _ => Ok(cropped),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
