//! Crop preset WASM bindings.
//!
//! Everything the crop controls need to populate their menus: output size
//! tokens, aspect ratios, preset availability and the rotate button step.

use photocrop_core::presets::{self, AspectRatio, OUTPUT_SIZE_PRESETS};
use photocrop_core::region::{parse_output_size, ORIGINAL_SIZE_TOKEN};
use wasm_bindgen::prelude::*;

/// Output size tokens in menu order, starting with `"original"`.
#[wasm_bindgen]
pub fn output_size_presets() -> js_sys::Array {
    output_size_tokens()
        .into_iter()
        .map(JsValue::from)
        .collect()
}

fn output_size_tokens() -> Vec<String> {
    std::iter::once(ORIGINAL_SIZE_TOKEN.to_string())
        .chain(OUTPUT_SIZE_PRESETS.iter().map(ToString::to_string))
        .collect()
}

/// Whether an output size token may be offered for a source of the given
/// height. `"original"` is always available; malformed tokens never are.
#[wasm_bindgen]
pub fn is_output_size_available(token: &str, source_height: u32, freeform: bool) -> bool {
    match parse_output_size(token) {
        Ok(None) => true,
        Ok(Some(size)) => presets::is_output_size_available(size, source_height, freeform),
        Err(_) => false,
    }
}

/// Width / height of an aspect ratio key (`"2:3"`, `"16:9"`, `"4:3"`,
/// `"1:1"`), or `undefined` for `"freeform"` and unknown keys.
#[wasm_bindgen]
pub fn aspect_ratio_value(key: &str) -> Option<f64> {
    AspectRatio::from_key(key).and_then(AspectRatio::ratio)
}

/// Aspect ratio keys in menu order, the default (`"2:3"`) first.
#[wasm_bindgen]
pub fn aspect_ratio_keys() -> js_sys::Array {
    AspectRatio::ALL
        .into_iter()
        .map(|ratio| JsValue::from_str(ratio.key()))
        .collect()
}

/// Rotation after one press of the rotate button.
#[wasm_bindgen]
pub fn next_quarter_turn(rotation_degrees: f64) -> f64 {
    presets::next_quarter_turn(rotation_degrees)
}

/// Size `[width, height]` of the canvas holding the image rotated by
/// `angle_degrees`. Crop coordinates are relative to this canvas.
#[wasm_bindgen]
pub fn compute_rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> Vec<u32> {
    let (w, h) = photocrop_core::compute_rotated_bounds(width, height, angle_degrees);
    vec![w, h]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_size_tokens() {
        let tokens = output_size_tokens();
        assert_eq!(tokens.len(), 11);
        assert_eq!(tokens[0], "original");
        assert_eq!(tokens[1], "1000x1500");
        assert_eq!(tokens[10], "1600x2400");
    }

    #[test]
    fn test_is_output_size_available() {
        assert!(is_output_size_available("original", 10, true));
        assert!(is_output_size_available("800x1200", 1200, false));
        assert!(!is_output_size_available("800x1200", 1199, false));
        assert!(!is_output_size_available("800x1200", 5000, true));
        assert!(!is_output_size_available("garbage", 5000, false));
    }

    #[test]
    fn test_aspect_ratio_value() {
        assert_eq!(aspect_ratio_value("1:1"), Some(1.0));
        assert!((aspect_ratio_value("2:3").unwrap() - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(aspect_ratio_value("freeform"), None);
        assert_eq!(aspect_ratio_value("5:4"), None);
    }

    #[test]
    fn test_next_quarter_turn() {
        assert_eq!(next_quarter_turn(270.0), 0.0);
        assert_eq!(next_quarter_turn(0.0), 90.0);
    }

    #[test]
    fn test_compute_rotated_bounds() {
        assert_eq!(compute_rotated_bounds(400, 300, 90.0), vec![300, 400]);
        assert_eq!(compute_rotated_bounds(400, 300, 0.0), vec![400, 300]);
        let diag = compute_rotated_bounds(100, 100, 45.0);
        assert_eq!(diag, vec![141, 141]);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_output_size_presets_array() {
        let presets = output_size_presets();
        assert_eq!(presets.length(), 11);
        assert_eq!(presets.get(0).as_string().unwrap(), "original");
    }

    #[wasm_bindgen_test]
    fn test_aspect_ratio_keys_array() {
        let keys = aspect_ratio_keys();
        assert_eq!(keys.length(), 5);
        assert_eq!(keys.get(0).as_string().unwrap(), "2:3");
        assert_eq!(keys.get(1).as_string().unwrap(), "freeform");
    }
}
