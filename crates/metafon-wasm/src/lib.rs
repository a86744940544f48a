// WASM bindings for Russian phonetic fingerprinting.
//
// Provides a `WasmMetafon` class exported via wasm-bindgen that wraps the
// `MetafonHandle` from metafon-ru. Batch results are serialized to
// JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const metafon = new WasmMetafon("ru");
//   metafon.encode("Иванов");              // => "ИФАНАФ"
//   metafon.matches("Пётр", "Петр");       // => true
//   metafon.encodeBatch(["зуб", "ёж"]);    // => [{ word: "зуб", code: "ЗУП" }, ...]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use metafon_ru::{MetafonError, MetafonHandle};

/// Serializable word/fingerprint pair for batch results.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsFingerprint {
    word: String,
    code: String,
}

fn metafon_error_to_js(e: MetafonError) -> JsError {
    JsError::new(&e.to_string())
}

/// Russian phonetic fingerprint encoder for WebAssembly.
///
/// Computes canonical, lossy codes representing how words sound, so spelling
/// variants and inflections collapse to the same key.
#[wasm_bindgen]
pub struct WasmMetafon {
    handle: MetafonHandle,
}

#[wasm_bindgen]
impl WasmMetafon {
    /// Create a new WasmMetafon instance.
    ///
    /// - `language`: BCP 47 language code (currently only "ru" is supported)
    #[wasm_bindgen(constructor)]
    pub fn new(language: &str) -> Result<WasmMetafon, JsError> {
        let handle = MetafonHandle::new(language).map_err(metafon_error_to_js)?;
        Ok(WasmMetafon { handle })
    }

    /// Compute the phonetic fingerprint of a single word token.
    ///
    /// Never throws: non-Cyrillic input yields an empty string.
    pub fn encode(&self, word: &str) -> String {
        self.handle.encode(word)
    }

    /// Check whether two words collapse to the same non-empty fingerprint.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        self.handle.matches(a, b)
    }

    /// Encode a batch of words.
    ///
    /// Returns a JavaScript array of `{ word, code }` objects, in input order.
    #[wasm_bindgen(js_name = "encodeBatch")]
    pub fn encode_batch(&self, words: Vec<String>) -> Result<JsValue, JsError> {
        let fingerprints: Vec<JsFingerprint> = words
            .into_iter()
            .map(|word| {
                let code = self.handle.encode(&word);
                JsFingerprint { word, code }
            })
            .collect();
        serde_wasm_bindgen::to_value(&fingerprints).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        MetafonHandle::get_version().to_string()
    }
}
