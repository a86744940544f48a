// metafon-ru: phonetic fingerprints for Russian words.
//
// A fingerprint is a canonical, lossy code representing how a word sounds
// rather than how it is spelled, so spelling variants and morphological
// inflections collapse to the same key. The pipeline lives in [`encoder`];
// [`handle`] provides the owning API surface used by the CLI and WASM
// frontends.

pub mod encoder;
pub mod handle;

pub use encoder::encode;
pub use handle::{MetafonError, MetafonHandle};
