//! Anagram queries over a built dictionary
//!
//! All queries are read-only and never fail: unknown or malformed words yield
//! `false` or an empty result.

use super::AnagramDictionary;
use crate::core::{ALPHABET, extend_signature, sort_letters};
use rustc_hash::FxHashSet;

/// How repeated extension results are reported
///
/// Suffix pairs are ordered, so `(s, b)` and `(b, s)` reach the same signature
/// bucket. `Raw` reports every hit, which lists each extension built from two
/// distinct letters twice. `Unique` keeps only the first occurrence of each word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtensionMode {
    #[default]
    Raw,
    Unique,
}

impl AnagramDictionary {
    /// Check that `word` is a dictionary word that does not embed `base`
    ///
    /// Returns `false` when `word` is unknown, or when `base` occurs anywhere in
    /// `word` as a contiguous run. An empty `base` occurs in every word.
    ///
    /// # Examples
    /// ```
    /// use anagram_dictionary::AnagramDictionary;
    ///
    /// let dictionary = AnagramDictionary::new(["acts", "scat"]);
    /// assert!(dictionary.is_good_word("acts", "cat"));
    /// assert!(!dictionary.is_good_word("scat", "cat"));
    /// assert!(!dictionary.is_good_word("tacs", "cat"));
    /// ```
    #[must_use]
    pub fn is_good_word(&self, word: &str, base: &str) -> bool {
        self.contains(word) && !word.contains(base)
    }

    /// Every dictionary word that is an anagram of `target`, in input order
    ///
    /// Includes `target` itself when it is a dictionary word.
    ///
    /// # Examples
    /// ```
    /// use anagram_dictionary::AnagramDictionary;
    ///
    /// let dictionary = AnagramDictionary::new(["eat", "ate", "cat", "tea"]);
    /// assert_eq!(dictionary.anagrams("eat"), ["eat", "ate", "tea"]);
    /// assert!(dictionary.anagrams("dog").is_empty());
    /// ```
    #[must_use]
    pub fn anagrams(&self, target: &str) -> Vec<&str> {
        // Equal signatures imply equal length, and buckets keep input order.
        self.words_with_signature(&sort_letters(target)).collect()
    }

    /// Dictionary words formed from `word` plus two more letters
    ///
    /// Tries all 26 x 26 ordered letter pairs and keeps anagram hits that pass
    /// [`AnagramDictionary::is_good_word`] against `word`. Duplicates are kept;
    /// see [`ExtensionMode`].
    #[must_use]
    pub fn anagrams_with_one_more_letter(&self, word: &str) -> Vec<&str> {
        self.extensions(word, ExtensionMode::Raw)
    }

    /// Extension lookup with explicit duplicate handling
    #[must_use]
    pub fn extensions(&self, word: &str, mode: ExtensionMode) -> Vec<&str> {
        let signature = sort_letters(word);
        let mut result = Vec::new();
        let mut seen: FxHashSet<&str> = FxHashSet::default();

        for &first in &ALPHABET {
            for &second in &ALPHABET {
                let extended = extend_signature(&signature, &[first, second]);
                for &index in self.signature_bucket(&extended) {
                    let candidate = self.word_at(index);
                    if !self.is_good_word(candidate, word) {
                        continue;
                    }
                    if mode == ExtensionMode::Unique && !seen.insert(candidate) {
                        continue;
                    }
                    result.push(candidate);
                }
            }
        }

        result
    }

    /// Number of extensions `extensions(word, mode)` would return
    #[must_use]
    pub fn count_extensions(&self, word: &str, mode: ExtensionMode) -> usize {
        self.extensions(word, mode).len()
    }
}
