//! Word validity command

use crate::dictionary::AnagramDictionary;

/// Breakdown of an `is_good_word` check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCheck {
    pub word: String,
    pub base: String,
    pub in_dictionary: bool,
    pub contains_base: bool,
    pub good: bool,
}

/// Check whether `word` is an acceptable answer for `base`
#[must_use]
pub fn check_word(dictionary: &AnagramDictionary, word: &str, base: &str) -> WordCheck {
    WordCheck {
        word: word.to_string(),
        base: base.to_string(),
        in_dictionary: dictionary.contains(word),
        contains_base: word.contains(base),
        good: dictionary.is_good_word(word, base),
    }
}
