//! Geometric transforms used by the region extractor.
//!
//! # Transform Order
//!
//! An extraction applies, in order:
//! 1. Rotation of the whole source into its bounding canvas
//! 2. Region copy out of that canvas
//! 3. Optional resampling to the output size (see [`crate::decode::resize`])
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = clockwise on screen
//! - Crop coordinates are whole pixels of the rotated canvas
//! - Origin is top-left corner

mod crop;
mod rotation;

pub use crop::copy_region;
pub use rotation::{
    compute_rotated_bounds, quarter_turns, rotate_to_bounding_canvas, InterpolationFilter,
};
