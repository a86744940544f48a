// metafon-core: shared character tables and classification predicates
// for Russian phonetic fingerprinting.

pub mod character;
