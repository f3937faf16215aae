//! Anagram lookup command

use crate::core::sort_letters;
use crate::dictionary::AnagramDictionary;

/// Result of looking up the anagrams of a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramLookup {
    pub word: String,
    pub signature: String,
    pub in_dictionary: bool,
    pub anagrams: Vec<String>,
}

/// Find every anagram of `word`
#[must_use]
pub fn lookup_anagrams(dictionary: &AnagramDictionary, word: &str) -> AnagramLookup {
    AnagramLookup {
        word: word.to_string(),
        signature: sort_letters(word),
        in_dictionary: dictionary.contains(word),
        anagrams: dictionary
            .anagrams(word)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}
