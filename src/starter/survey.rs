//! Starter viability survey
//!
//! Counts, for each required length a selector can reach, how many words qualify
//! as starters. A length with no qualifying word makes an unbounded pick block
//! forever, so the survey tells ahead of time whether a dictionary is safe.

use super::StarterConfig;
use crate::dictionary::AnagramDictionary;
use rayon::prelude::*;

/// Starter statistics for a single word length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthSurvey {
    pub length: usize,
    pub total_words: usize,
    pub viable: usize,
    /// Word with the most extensions and its count (earliest in input order on ties)
    pub best: Option<(String, usize)>,
}

impl LengthSurvey {
    #[must_use]
    pub const fn is_viable(&self) -> bool {
        self.viable > 0
    }
}

/// Survey over every length from `default_length` to `max_length`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyReport {
    pub min_anagrams: usize,
    pub lengths: Vec<LengthSurvey>,
}

impl SurveyReport {
    /// True when every reachable length has at least one starter, so an
    /// unbounded selector always terminates
    #[must_use]
    pub fn guarantees_termination(&self) -> bool {
        self.lengths.iter().all(LengthSurvey::is_viable)
    }

    /// Number of words the survey examined
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.lengths.iter().map(|l| l.total_words).sum()
    }
}

/// Survey starter viability
///
/// # Examples
/// ```
/// use anagram_dictionary::AnagramDictionary;
/// use anagram_dictionary::starter::{StarterConfig, survey_starters};
///
/// let dictionary = AnagramDictionary::new(["ate", "eat", "treat", "tease", "cheat"]);
/// let report = survey_starters(&dictionary, &StarterConfig::default().with_lengths(3, 3));
///
/// assert_eq!(report.lengths[0].viable, 1);
/// assert!(report.guarantees_termination());
/// ```
#[must_use]
pub fn survey_starters(dictionary: &AnagramDictionary, config: &StarterConfig) -> SurveyReport {
    survey_starters_with_progress(dictionary, config, || {})
}

/// Survey starter viability, calling `on_word` once per examined word
///
/// `on_word` is called from rayon worker threads.
pub fn survey_starters_with_progress<F>(
    dictionary: &AnagramDictionary,
    config: &StarterConfig,
    on_word: F,
) -> SurveyReport
where
    F: Fn() + Sync,
{
    let lengths = (config.default_length..=config.max_length)
        .map(|length| survey_length(dictionary, config, length, &on_word))
        .collect();

    SurveyReport {
        min_anagrams: config.min_anagrams,
        lengths,
    }
}

fn survey_length<F>(
    dictionary: &AnagramDictionary,
    config: &StarterConfig,
    length: usize,
    on_word: &F,
) -> LengthSurvey
where
    F: Fn() + Sync,
{
    let words: Vec<&str> = dictionary.words_of_length(length).collect();

    let counts: Vec<usize> = words
        .par_iter()
        .map(|word| {
            let count = dictionary.count_extensions(word, config.mode);
            on_word();
            count
        })
        .collect();

    let viable = counts.iter().filter(|&&c| c >= config.min_anagrams).count();

    let mut best: Option<(String, usize)> = None;
    for (word, &count) in words.iter().zip(&counts) {
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some(((*word).to_string(), count));
        }
    }

    LengthSurvey {
        length,
        total_words: words.len(),
        viable,
        best,
    }
}
