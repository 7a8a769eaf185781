//! Image decoding for Photocrop.
//!
//! This module provides functionality for:
//! - Decoding JPEG, PNG and WebP source images into RGBA rasters
//! - Honouring EXIF orientation the way browsers do on image load
//! - Exact-size resampling used by the final extraction stage
//!
//! # Architecture
//!
//! Decoding is designed to be driven from the browser via WASM bindings.
//! All operations are synchronous and single-threaded within WASM.
//!
//! # Examples
//!
//! ```ignore
//! use photocrop_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod loader;
mod resize;
mod types;

pub use loader::{decode_image, detect_format, get_orientation};
pub use resize::resize;
pub use types::{DecodeError, DecodedImage, FilterType, Orientation, SourceFormat, CHANNELS};
