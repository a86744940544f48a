// MetafonHandle: the owning API surface for phonetic fingerprinting.
//
// The encoder itself is a free function with no state; the handle exists so
// frontends (CLI, WASM) construct against a language code today and keep a
// stable construction point if further languages are added later.

use crate::encoder::encode;

/// Error type for handle construction failures.
#[derive(Debug, thiserror::Error)]
pub enum MetafonError {
    /// Unsupported language.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Phonetic fingerprint encoder for Russian words.
///
/// Holds no mutable state; one handle may be shared across threads and all
/// methods are safe to call concurrently.
#[derive(Debug)]
pub struct MetafonHandle {
    _private: (),
}

impl MetafonHandle {
    /// Create a handle for the given language.
    ///
    /// - `language`: BCP 47 language code (currently only "ru" is supported)
    pub fn new(language: &str) -> Result<Self, MetafonError> {
        if language != "ru" {
            return Err(MetafonError::UnsupportedLanguage(language.to_string()));
        }
        Ok(Self { _private: () })
    }

    /// Compute the phonetic fingerprint of a single word token.
    ///
    /// Total for any input text; returns the empty string when nothing of
    /// the word survives alphabet filtering.
    pub fn encode(&self, word: &str) -> String {
        encode(word)
    }

    /// Check whether two words sound alike: their fingerprints are equal
    /// and non-empty. Words with no Cyrillic content never match anything,
    /// not even each other.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        let code_a = encode(a);
        !code_a.is_empty() && code_a == encode(b)
    }

    /// Get the library version string.
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
