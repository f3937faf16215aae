//! Anagram dictionary
//!
//! The dictionary is built once from a word sequence and is read-only afterwards,
//! so it can be shared freely across threads.

mod index;
mod query;

pub use index::AnagramDictionary;
pub use query::ExtensionMode;
