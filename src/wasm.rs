//! WebAssembly bindings.
//!
//! The scan and the compressor are exposed via wasm-bindgen for wasm32
//! targets, for browser upload flows.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Resolve the EXIF orientation of an image buffer.
///
/// Returns the EXIF value 1-8, or a sentinel: 0 when the scan could not be
/// attempted, -1 for a JPEG without a parseable orientation tag, -2 when
/// the buffer is not a JPEG at all.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn orientation(data: &[u8]) -> i32 {
    use crate::orientation::{OrientationCode, resolve_orientation};

    match resolve_orientation(data) {
        OrientationCode::Default => 0,
        OrientationCode::NotJpeg => -1,
        OrientationCode::NotDefined => -2,
        code => code.to_exif().map_or(0, i32::from),
    }
}

/// Compress an image buffer, auto-resolving its orientation first.
///
/// `ratio` and `quality` are percentages in (0, 100]; `max_width` and
/// `max_height` cap the output in pixels, 0 meaning no cap.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn compress(
    data: &[u8],
    ratio: f64,
    quality: f64,
    max_width: u32,
    max_height: u32,
) -> Result<Vec<u8>, JsValue> {
    crate::pipeline::compress_auto(data, ratio, quality, max_width, max_height)
        .map_err(|e| JsValue::from_str(&format!("Compress error: {e}")))
}
