//! Photocrop Core - crop, rotate and resize library
//!
//! This crate provides the core image processing for Photocrop: decoding
//! uploaded photos, rotating them onto a bounding canvas, cutting out the
//! selected region, resampling it to an exact output size and encoding the
//! result for download.

pub mod decode;
pub mod encode;
pub mod error;
pub mod extract;
pub mod presets;
pub mod region;
pub mod surface;
pub mod transform;

pub use decode::{decode_image, DecodedImage, FilterType};
pub use encode::OutputFormat;
pub use error::ExtractError;
pub use extract::{extract, extract_from_bytes, ExtractOptions, ExtractedImage};
pub use presets::{next_quarter_turn, AspectRatio, OUTPUT_SIZE_PRESETS};
pub use region::{final_resolution, CropRegion, OutputSize};
pub use transform::{compute_rotated_bounds, InterpolationFilter};
