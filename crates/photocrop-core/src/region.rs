//! Crop regions and output sizes.
//!
//! A [`CropRegion`] is expressed in pixel coordinates of the *rotated*
//! bounding canvas, which is how a crop overlay drawn over a rotated preview
//! reports it. Its origin may be negative or lie beyond the canvas; the
//! extractor fills whatever the canvas does not cover with transparency.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token used by output-size selectors to mean "keep the crop's own size".
pub const ORIGINAL_SIZE_TOKEN: &str = "original";

/// Rectangular crop window in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CropRegion {
    /// Left edge (may be negative)
    pub x: i32,
    /// Top edge (may be negative)
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a region from fractional widget coordinates, rounding to whole
    /// pixels. Negative or non-finite sizes become 0 and are rejected later.
    pub fn from_f64(x: f64, y: f64, width: f64, height: f64) -> Self {
        let coord = |v: f64| {
            if v.is_finite() {
                v.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32
            } else {
                0
            }
        };
        let size = |v: f64| {
            if v.is_finite() {
                v.round().clamp(0.0, u32::MAX as f64) as u32
            } else {
                0
            }
        };
        Self::new(coord(x), coord(y), size(width), size(height))
    }

    /// The largest region with the given width/height ratio, centered in a
    /// `canvas_width` x `canvas_height` canvas. `None` spans the whole canvas.
    pub fn largest_centered(canvas_width: u32, canvas_height: u32, ratio: Option<f64>) -> Self {
        let (cw, ch) = (canvas_width as f64, canvas_height as f64);
        let (w, h) = match ratio {
            Some(r) if r.is_finite() && r > 0.0 => {
                if cw / ch > r {
                    (ch * r, ch)
                } else {
                    (cw, cw / r)
                }
            }
            _ => (cw, ch),
        };
        let width = (w.round() as u32).clamp(1.min(canvas_width), canvas_width);
        let height = (h.round() as u32).clamp(1.min(canvas_height), canvas_height);
        Self::new(
            ((canvas_width - width) / 2) as i32,
            ((canvas_height - height) / 2) as i32,
            width,
            height,
        )
    }

    /// True if either dimension is zero.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// `(width, height)` of the region.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Target pixel dimensions of the final resampling stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSize {
    pub width: u32,
    pub height: u32,
}

impl OutputSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Errors parsing an output-size token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputSizeParseError {
    #[error("Expected '<width>x<height>' or 'original', got '{0}'")]
    Malformed(String),

    #[error("Output size must be non-zero, got '{0}'")]
    Zero(String),
}

impl FromStr for OutputSize {
    type Err = OutputSizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let malformed = || OutputSizeParseError::Malformed(s.to_string());

        let (w, h) = token
            .split_once(|c: char| c == 'x' || c == 'X')
            .ok_or_else(malformed)?;
        let width: u32 = w.trim().parse().map_err(|_| malformed())?;
        let height: u32 = h.trim().parse().map_err(|_| malformed())?;

        let size = OutputSize::new(width, height);
        if size.is_degenerate() {
            return Err(OutputSizeParseError::Zero(s.to_string()));
        }
        Ok(size)
    }
}

/// Parse a selector token: `"original"` yields `None`, `"<w>x<h>"` a size.
pub fn parse_output_size(token: &str) -> Result<Option<OutputSize>, OutputSizeParseError> {
    if token.trim().eq_ignore_ascii_case(ORIGINAL_SIZE_TOKEN) {
        return Ok(None);
    }
    token.parse().map(Some)
}

/// Dimensions the extracted image will have: the requested output size if
/// any, otherwise the crop region's own size.
pub fn final_resolution(region: &CropRegion, output: Option<OutputSize>) -> (u32, u32) {
    match output {
        Some(size) => (size.width, size.height),
        None => region.dimensions(),
    }
}
