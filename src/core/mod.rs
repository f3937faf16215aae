//! Core anagram primitives
//!
//! Pure functions over words with no dependency on the dictionary indexes.

mod signature;

pub use signature::{ALPHABET, extend_signature, sort_letters};
