//! Rotation of a whole image into its bounding canvas.
//!
//! The output surface is the minimal axis-aligned rectangle containing the
//! source after rotation about its center, so nothing is clipped and no
//! space is wasted. Angles are in degrees and positive angles turn the
//! picture clockwise on screen (the y axis points down).
//!
//! # Algorithm
//!
//! Exact quarter turns are pixel permutations and therefore lossless.
//! Every other angle uses inverse mapping: for each pixel center in the
//! output we find the source position that lands there and interpolate.
//!
//! ```text
//! src_x =  (dst_x - cx) * cos(θ) + (dst_y - cy) * sin(θ) + src_cx
//! src_y = -(dst_x - cx) * sin(θ) + (dst_y - cy) * cos(θ) + src_cy
//! ```
//!
//! Interpolation happens on premultiplied alpha. Samples outside the source
//! are transparent, which gives the rotated content anti-aliased edges.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decode::{DecodedImage, CHANNELS};
use crate::error::ExtractError;
use crate::surface::allocate_surface;

/// Angles closer than this (in degrees) to a multiple of 90 are treated as
/// exact quarter turns.
const ANGLE_EPSILON: f64 = 0.001;

/// Interpolation filter for arbitrary-angle rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationFilter {
    /// Fast bilinear interpolation - good for live previews.
    #[default]
    Bilinear,
    /// High-quality Lanczos3 interpolation - good for final output.
    Lanczos3,
}

/// Number of clockwise quarter turns (0-3) if the angle is a multiple of 90.
pub fn quarter_turns(angle_degrees: f64) -> Option<u8> {
    let turns = angle_degrees / 90.0;
    let nearest = turns.round();
    if ((turns - nearest) * 90.0).abs() < ANGLE_EPSILON {
        Some(nearest.rem_euclid(4.0) as u8)
    } else {
        None
    }
}

/// Compute the dimensions of the bounding canvas for a rotated image.
///
/// ```text
/// bound_w = |cos θ · w| + |sin θ · h|
/// bound_h = |sin θ · w| + |cos θ · h|
/// ```
///
/// Quarter turns are exact (identity or swap); other angles are rounded to
/// whole pixels and never drop below 1.
///
/// # Example
///
/// ```
/// use photocrop_core::transform::compute_rotated_bounds;
///
/// let (w, h) = compute_rotated_bounds(800, 600, 90.0);
/// assert_eq!((w, h), (600, 800));
/// ```
pub fn compute_rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    match quarter_turns(angle_degrees) {
        Some(0) | Some(2) => return (width, height),
        Some(_) => return (height, width),
        None => {}
    }

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    let w = width as f64;
    let h = height as f64;

    let new_w = (w * cos + h * sin).round() as u32;
    let new_h = (w * sin + h * cos).round() as u32;

    (new_w.max(1), new_h.max(1))
}

/// Rotate an image about its center onto a canvas sized to bound the result.
///
/// Canvas pixels not covered by the rotated source are transparent.
///
/// # Errors
///
/// Returns `ExtractError::RenderingContextUnavailable` if the bounding canvas
/// cannot be allocated.
pub fn rotate_to_bounding_canvas(
    image: &DecodedImage,
    angle_degrees: f64,
    filter: InterpolationFilter,
) -> Result<DecodedImage, ExtractError> {
    let (dst_w, dst_h) = compute_rotated_bounds(image.width, image.height, angle_degrees);
    let mut canvas = allocate_surface(dst_w, dst_h)?;

    if let Some(turns) = quarter_turns(angle_degrees) {
        debug!(turns, dst_w, dst_h, "Lossless quarter-turn rotation");
        permute_quarter_turns(image, &mut canvas, turns);
        return Ok(canvas);
    }

    debug!(angle_degrees, dst_w, dst_h, ?filter, "Resampled rotation");

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    let src_cx = image.width as f64 / 2.0;
    let src_cy = image.height as f64 / 2.0;
    let dst_cx = dst_w as f64 / 2.0;
    let dst_cy = dst_h as f64 / 2.0;

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            // Pixel centers, relative to the canvas center
            let dx = dst_x as f64 + 0.5 - dst_cx;
            let dy = dst_y as f64 + 0.5 - dst_cy;

            // Back to source pixel-index space (centers at integer coords)
            let src_x = dx * cos + dy * sin + src_cx - 0.5;
            let src_y = -dx * sin + dy * cos + src_cy - 0.5;

            let pixel = match filter {
                InterpolationFilter::Bilinear => sample_bilinear(image, src_x, src_y),
                InterpolationFilter::Lanczos3 => sample_lanczos3(image, src_x, src_y),
            };

            let idx = canvas.offset(dst_x, dst_y);
            canvas.pixels[idx..idx + CHANNELS].copy_from_slice(&pixel);
        }
    }

    Ok(canvas)
}

/// Copy `src` into `dst` turned clockwise by `turns` quarter turns.
///
/// `dst` must already have the rotated dimensions.
fn permute_quarter_turns(src: &DecodedImage, dst: &mut DecodedImage, turns: u8) {
    let (w, h) = (src.width, src.height);
    for y in 0..h {
        for x in 0..w {
            let (tx, ty) = match turns {
                1 => (h - 1 - y, x),
                2 => (w - 1 - x, h - 1 - y),
                3 => (y, w - 1 - x),
                _ => (x, y),
            };
            let s = src.offset(x, y);
            let d = dst.offset(tx, ty);
            dst.pixels[d..d + CHANNELS].copy_from_slice(&src.pixels[s..s + CHANNELS]);
        }
    }
}

/// Premultiplied RGBA of a source pixel, or transparent outside the image.
#[inline]
fn premultiplied_at(image: &DecodedImage, px: i64, py: i64) -> [f64; 4] {
    if px < 0 || py < 0 || px >= image.width as i64 || py >= image.height as i64 {
        return [0.0; 4];
    }
    let [r, g, b, a] = image.pixel(px as u32, py as u32);
    let alpha = a as f64 / 255.0;
    [
        r as f64 * alpha,
        g as f64 * alpha,
        b as f64 * alpha,
        a as f64,
    ]
}

/// Turn an accumulated premultiplied sample back into straight RGBA.
fn unpremultiply(sum: [f64; 4]) -> [u8; 4] {
    let alpha = sum[3].clamp(0.0, 255.0);
    if alpha < 0.5 {
        return [0, 0, 0, 0];
    }
    let scale = 255.0 / alpha;
    [
        (sum[0] * scale).clamp(0.0, 255.0).round() as u8,
        (sum[1] * scale).clamp(0.0, 255.0).round() as u8,
        (sum[2] * scale).clamp(0.0, 255.0).round() as u8,
        alpha.round() as u8,
    ]
}

/// Sample a pixel using bilinear interpolation.
///
/// Considers the 4 nearest pixels; neighbours outside the image count as
/// transparent.
fn sample_bilinear(image: &DecodedImage, x: f64, y: f64) -> [u8; 4] {
    let x0 = x.floor();
    let y0 = y.floor();

    // Entirely outside, including the half-pixel fringe
    if x0 < -1.0 || y0 < -1.0 || x0 >= image.width as f64 || y0 >= image.height as f64 {
        return [0, 0, 0, 0];
    }

    let fx = x - x0;
    let fy = y - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let p00 = premultiplied_at(image, x0, y0);
    let p10 = premultiplied_at(image, x0 + 1, y0);
    let p01 = premultiplied_at(image, x0, y0 + 1);
    let p11 = premultiplied_at(image, x0 + 1, y0 + 1);

    let mut sum = [0.0f64; 4];
    for i in 0..4 {
        sum[i] = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
    }

    unpremultiply(sum)
}

/// Sample a pixel using Lanczos3 interpolation over a 6x6 neighbourhood.
fn sample_lanczos3(image: &DecodedImage, x: f64, y: f64) -> [u8; 4] {
    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;

    if x0 < -3 || y0 < -3 || x0 >= image.width as i64 + 2 || y0 >= image.height as i64 + 2 {
        return [0, 0, 0, 0];
    }

    let mut sum = [0.0f64; 4];
    let mut weight_sum = 0.0;

    for ky in -2..=3 {
        let py = y0 + ky;
        let wy = lanczos_weight(y - py as f64, 3.0);
        for kx in -2..=3 {
            let px = x0 + kx;
            let weight = lanczos_weight(x - px as f64, 3.0) * wy;
            let p = premultiplied_at(image, px, py);
            for i in 0..4 {
                sum[i] += p[i] * weight;
            }
            weight_sum += weight;
        }
    }

    if weight_sum.abs() < f64::EPSILON {
        return [0, 0, 0, 0];
    }
    for v in &mut sum {
        *v /= weight_sum;
    }

    unpremultiply(sum)
}

/// Lanczos kernel weight function.
///
/// ```text
/// L(x) = sinc(x) * sinc(x/a)  for |x| < a
/// L(x) = 0                     for |x| >= a
/// ```
fn lanczos_weight(x: f64, a: f64) -> f64 {
    if x.abs() < f64::EPSILON {
        return 1.0;
    }
    if x.abs() >= a {
        return 0.0;
    }

    let pi_x = std::f64::consts::PI * x;
    let pi_x_a = pi_x / a;

    (a * pi_x.sin() * pi_x_a.sin()) / (pi_x * pi_x)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
