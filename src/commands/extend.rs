//! Extension lookup command
//!
//! Lists the words reachable from a base word by adding two letters.

use crate::dictionary::{AnagramDictionary, ExtensionMode};
use rustc_hash::FxHashSet;

/// Result of an extension lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionReport {
    pub word: String,
    pub mode: ExtensionMode,
    pub extensions: Vec<String>,
    /// Number of distinct words among `extensions`
    pub distinct: usize,
}

/// Find the two-letter extensions of `word`
#[must_use]
pub fn extend_word(
    dictionary: &AnagramDictionary,
    word: &str,
    mode: ExtensionMode,
) -> ExtensionReport {
    let extensions = dictionary.extensions(word, mode);
    let distinct = extensions.iter().collect::<FxHashSet<_>>().len();

    ExtensionReport {
        word: word.to_string(),
        mode,
        extensions: extensions.into_iter().map(str::to_string).collect(),
        distinct,
    }
}
