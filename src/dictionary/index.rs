//! Dictionary construction and read-only index accessors

use crate::core::sort_letters;
use crate::error::DictionaryError;
use rustc_hash::{FxHashMap, FxHashSet};
use std::io::BufRead;
use tracing::info;

/// In-memory anagram dictionary
///
/// Holds the word list in input order plus three derived indexes, all built in a
/// single pass and never mutated afterwards:
/// - a membership set
/// - signature -> words sharing that signature (input order)
/// - length -> words of that length (input order)
///
/// Buckets store positions into the word list, so every word is kept once.
#[derive(Debug, Clone, Default)]
pub struct AnagramDictionary {
    word_list: Vec<String>,
    word_set: FxHashSet<String>,
    signature_to_words: FxHashMap<String, Vec<usize>>,
    size_to_words: FxHashMap<usize, Vec<usize>>,
}

impl AnagramDictionary {
    /// Build a dictionary from an in-memory word sequence
    ///
    /// Words are indexed verbatim: no trimming, case folding or blank filtering.
    ///
    /// # Examples
    /// ```
    /// use anagram_dictionary::AnagramDictionary;
    ///
    /// let dictionary = AnagramDictionary::new(["eat", "ate", "tea", "cat"]);
    /// assert_eq!(dictionary.len(), 4);
    /// assert!(dictionary.contains("tea"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dictionary = Self::default();
        for word in words {
            dictionary.insert(word.into());
        }
        dictionary.log_summary();
        dictionary
    }

    /// Build a dictionary from a fallible word source
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the source. Words already consumed are
    /// discarded; a partially built dictionary is never returned.
    pub fn try_from_words<I, S, E>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: Into<String>,
        E: Into<DictionaryError>,
    {
        let mut dictionary = Self::default();
        for word in words {
            dictionary.insert(word.map_err(Into::into)?.into());
        }
        dictionary.log_summary();
        Ok(dictionary)
    }

    /// Build a dictionary from a line-oriented reader, one word per line
    ///
    /// Each line is trimmed of surrounding whitespace. Blank lines are kept as
    /// empty words, matching the verbatim indexing of [`AnagramDictionary::new`].
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if the reader fails or yields invalid UTF-8.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        Self::try_from_words(
            reader
                .lines()
                .map(|line| line.map(|text| text.trim().to_string())),
        )
    }

    fn insert(&mut self, word: String) {
        let index = self.word_list.len();

        self.signature_to_words
            .entry(sort_letters(&word))
            .or_default()
            .push(index);
        self.size_to_words
            .entry(word.chars().count())
            .or_default()
            .push(index);
        self.word_set.insert(word.clone());
        self.word_list.push(word);
    }

    fn log_summary(&self) {
        info!(
            words = self.word_list.len(),
            signatures = self.signature_to_words.len(),
            lengths = self.size_to_words.len(),
            "indexed dictionary"
        );
    }

    /// All words in input order, duplicates included
    #[inline]
    #[must_use]
    pub fn word_list(&self) -> &[String] {
        &self.word_list
    }

    /// Number of entries in the word list
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word_list.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_list.is_empty()
    }

    /// Check dictionary membership
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.word_set.contains(word)
    }

    /// Number of distinct signatures
    #[inline]
    #[must_use]
    pub fn signature_count(&self) -> usize {
        self.signature_to_words.len()
    }

    /// Words of the given length (in characters), in input order
    pub fn words_of_length(&self, length: usize) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.resolve(self.length_bucket(length))
    }

    /// Words whose signature equals `signature`, in input order
    ///
    /// `signature` must already be sorted; see [`crate::core::sort_letters`].
    pub fn words_with_signature<'a>(
        &'a self,
        signature: &str,
    ) -> impl ExactSizeIterator<Item = &'a str> + use<'a> {
        self.resolve(self.signature_bucket(signature))
    }

    /// Lengths that have at least one word, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.size_to_words.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    #[inline]
    pub(crate) fn length_bucket(&self, length: usize) -> &[usize] {
        self.size_to_words.get(&length).map_or(&[], Vec::as_slice)
    }

    #[inline]
    pub(crate) fn signature_bucket(&self, signature: &str) -> &[usize] {
        self.signature_to_words
            .get(signature)
            .map_or(&[], Vec::as_slice)
    }

    #[inline]
    pub(crate) fn word_at(&self, index: usize) -> &str {
        &self.word_list[index]
    }

    fn resolve<'a>(&'a self, bucket: &'a [usize]) -> impl ExactSizeIterator<Item = &'a str> + 'a {
        bucket.iter().map(|&index| self.word_at(index))
    }
}
