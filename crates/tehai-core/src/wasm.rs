//! WebAssembly bindings for the hand engine.
//!
//! This module exposes the string-level API to JavaScript through
//! wasm-bindgen, under the names the browser client already uses.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::call::Call;
#[cfg(feature = "wasm")]
use crate::{display, notation};

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[cfg(feature = "wasm")]
fn to_js(e: crate::HandError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Claim a discard into an open meld
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = setFuro)]
pub fn set_furo(tehai: &str, sute: &str, hai_used: &str) -> Result<String, JsValue> {
    notation::set_furo(tehai, sute, hai_used).map_err(to_js)
}

/// Upgrade an open triplet to an added kan
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = setKakan)]
pub fn set_kakan(tehai: &str, kakan_hai: &str) -> Result<String, JsValue> {
    notation::set_kakan(tehai, kakan_hai).map_err(to_js)
}

/// Declare a closed kan
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = setAnkan)]
pub fn set_ankan(tehai: &str, ankan_hai: &str) -> Result<String, JsValue> {
    notation::set_ankan(tehai, ankan_hai).map_err(to_js)
}

/// Apply a call given as JSON, e.g. `{"type":"Ankan","tile":"5p"}`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = applyCall)]
pub fn apply_call(tehai: &str, call_json: &str) -> Result<String, JsValue> {
    let call: Call = serde_json::from_str(call_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid call JSON: {}", e)))?;
    notation::apply_call(tehai, &call).map_err(to_js)
}

#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = canTsumo)]
pub fn can_tsumo(tehai: &str, atari_hai: &str) -> bool {
    notation::can_tsumo(tehai, atari_hai)
}

#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = canAnkan)]
pub fn can_ankan(tehai: &str, tsumo_hai: &str, nokori: u32) -> bool {
    notation::can_ankan(tehai, tsumo_hai, nokori)
}

#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = canKakan)]
pub fn can_kakan(tehai: &str, tsumo_hai: &str, nokori: u32) -> bool {
    notation::can_kakan(tehai, tsumo_hai, nokori)
}

/// Image URL for a tile code or `"back"`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = getEmojiUrl)]
pub fn get_emoji_url(pai: &str) -> Result<String, JsValue> {
    display::emoji_url(pai).map_err(to_js)
}

#[cfg(all(test, feature = "wasm"))]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_forward_to_notation() {
        assert_eq!(set_furo("1m2m3m4m", "5m", "34m").unwrap(), "1m2m<3m4m5m>");
        assert_eq!(
            apply_call("5p5p5p5p", r#"{"type":"Ankan","tile":"5p"}"#).unwrap(),
            "(5p5p5p5p)"
        );
        assert!(!can_tsumo("1m", ""));
    }
}
