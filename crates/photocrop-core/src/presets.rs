//! Crop presets: aspect ratios, print-oriented output sizes and the
//! quarter-turn rotation step.

use serde::{Deserialize, Serialize};

use crate::encode::OutputFormat;
use crate::extract::DEFAULT_FILE_STEM;
use crate::region::OutputSize;

/// Aspect ratio constraint for the crop window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    /// 2:3 portrait, the default.
    #[default]
    #[serde(rename = "2:3")]
    Portrait2x3,
    /// No constraint.
    Freeform,
    #[serde(rename = "16:9")]
    Wide16x9,
    #[serde(rename = "4:3")]
    Standard4x3,
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    /// All ratios, in menu order.
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Portrait2x3,
        AspectRatio::Freeform,
        AspectRatio::Wide16x9,
        AspectRatio::Standard4x3,
        AspectRatio::Square,
    ];

    /// Width divided by height, or `None` for freeform.
    pub fn ratio(self) -> Option<f64> {
        match self {
            AspectRatio::Portrait2x3 => Some(2.0 / 3.0),
            AspectRatio::Freeform => None,
            AspectRatio::Wide16x9 => Some(16.0 / 9.0),
            AspectRatio::Standard4x3 => Some(4.0 / 3.0),
            AspectRatio::Square => Some(1.0),
        }
    }

    /// Menu key, the same string the serde form uses.
    pub fn key(self) -> &'static str {
        match self {
            AspectRatio::Portrait2x3 => "2:3",
            AspectRatio::Freeform => "freeform",
            AspectRatio::Wide16x9 => "16:9",
            AspectRatio::Standard4x3 => "4:3",
            AspectRatio::Square => "1:1",
        }
    }

    /// Look up a ratio by its menu key.
    pub fn from_key(key: &str) -> Option<AspectRatio> {
        AspectRatio::ALL.into_iter().find(|ratio| ratio.key() == key.trim())
    }
}

/// Fixed output sizes offered alongside "original".
pub const OUTPUT_SIZE_PRESETS: [OutputSize; 10] = [
    OutputSize::new(1000, 1500),
    OutputSize::new(800, 1200),
    OutputSize::new(667, 1000),
    OutputSize::new(600, 900),
    OutputSize::new(533, 800),
    OutputSize::new(1200, 1800),
    OutputSize::new(1280, 1920),
    OutputSize::new(1333, 2000),
    OutputSize::new(1400, 2100),
    OutputSize::new(1600, 2400),
];

/// Whether a fixed output size may be offered for a source.
///
/// Sizes taller than the source would upscale, and fixed sizes make no
/// sense without a fixed aspect ratio.
pub fn is_output_size_available(size: OutputSize, source_height: u32, freeform: bool) -> bool {
    !freeform && size.height <= source_height
}

/// The presets available for a source of the given height.
pub fn available_output_sizes(source_height: u32, freeform: bool) -> Vec<OutputSize> {
    OUTPUT_SIZE_PRESETS
        .iter()
        .copied()
        .filter(|&size| is_output_size_available(size, source_height, freeform))
        .collect()
}

/// Advance a rotation by a clockwise quarter turn, wrapping into `[0, 360)`.
pub fn next_quarter_turn(rotation_degrees: f64) -> f64 {
    (rotation_degrees + 90.0).rem_euclid(360.0)
}

/// Download file name: `<stem>.<extension>`, defaulting the stem.
pub fn file_name(stem: &str, format: OutputFormat) -> String {
    let stem = stem.trim();
    let stem = if stem.is_empty() { DEFAULT_FILE_STEM } else { stem };
    format!("{}.{}", stem, format.extension())
}
