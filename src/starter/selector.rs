//! Progressive starter-word selection
//!
//! A selector samples words of the current required length until one has enough
//! extensions, then raises the required length by one (up to the maximum).

use crate::dictionary::{AnagramDictionary, ExtensionMode};
use crate::error::StarterError;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Minimum extension count for a starter word
pub const MIN_NUM_ANAGRAMS: usize = 5;

/// Required length of the first starter word
pub const DEFAULT_WORD_LENGTH: usize = 3;

/// Required length stops growing here
pub const MAX_WORD_LENGTH: usize = 7;

/// Starter selection settings
///
/// With neither `max_attempts` nor `time_budget` set, the search blocks until a
/// qualifying word is drawn, which never happens if no word of the required
/// length qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarterConfig {
    /// Extensions a word needs to qualify
    pub min_anagrams: usize,
    /// Required length for the first pick
    pub default_length: usize,
    /// Cap on the required length
    pub max_length: usize,
    /// Give up after this many draws per pick
    pub max_attempts: Option<usize>,
    /// Give up after this much time per pick
    pub time_budget: Option<Duration>,
    /// Whether duplicate extensions count toward `min_anagrams`
    pub mode: ExtensionMode,
}

impl StarterConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_anagrams: MIN_NUM_ANAGRAMS,
            default_length: DEFAULT_WORD_LENGTH,
            max_length: MAX_WORD_LENGTH,
            max_attempts: None,
            time_budget: None,
            mode: ExtensionMode::Raw,
        }
    }

    #[must_use]
    pub const fn with_min_anagrams(mut self, min_anagrams: usize) -> Self {
        self.min_anagrams = min_anagrams;
        self
    }

    /// Set the starting and maximum required lengths
    #[must_use]
    pub const fn with_lengths(mut self, default_length: usize, max_length: usize) -> Self {
        self.default_length = default_length;
        self.max_length = max_length;
        self
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    #[must_use]
    pub const fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: ExtensionMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for StarterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateful starter-word picker for one game session
///
/// Each selector carries its own difficulty, so independent sessions can share
/// one dictionary.
pub struct StarterSelector<'a, R = ThreadRng> {
    dictionary: &'a AnagramDictionary,
    config: StarterConfig,
    required_length: usize,
    rng: R,
}

impl<'a> StarterSelector<'a, ThreadRng> {
    /// Create a selector driven by the thread-local RNG
    #[must_use]
    pub fn new(dictionary: &'a AnagramDictionary, config: StarterConfig) -> Self {
        Self::with_rng(dictionary, config, rand::rng())
    }
}

impl<'a, R: Rng> StarterSelector<'a, R> {
    /// Create a selector with an explicit random source
    ///
    /// # Examples
    /// ```
    /// use anagram_dictionary::AnagramDictionary;
    /// use anagram_dictionary::starter::{StarterConfig, StarterSelector};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let dictionary = AnagramDictionary::new(["ate", "treat", "tease", "cheat"]);
    /// let config = StarterConfig::default().with_lengths(3, 3);
    /// let mut selector = StarterSelector::with_rng(&dictionary, config, StdRng::seed_from_u64(7));
    ///
    /// assert_eq!(selector.pick_good_starter_word().unwrap(), "ate");
    /// ```
    pub const fn with_rng(dictionary: &'a AnagramDictionary, config: StarterConfig, rng: R) -> Self {
        Self {
            dictionary,
            config,
            required_length: config.default_length,
            rng,
        }
    }

    /// Length the next starter word will have
    #[inline]
    #[must_use]
    pub const fn required_length(&self) -> usize {
        self.required_length
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'a AnagramDictionary {
        self.dictionary
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &StarterConfig {
        &self.config
    }

    /// Return to the starting difficulty
    pub const fn reset(&mut self) {
        self.required_length = self.config.default_length;
    }

    /// Draw random words of the required length until one has at least
    /// `min_anagrams` extensions, then raise the required length
    ///
    /// The required length is left unchanged when the search fails.
    ///
    /// # Errors
    ///
    /// - [`StarterError::NoWordsOfLength`] if no word has the required length
    /// - [`StarterError::AttemptsExhausted`] if `max_attempts` draws all failed
    /// - [`StarterError::TimedOut`] if `time_budget` elapsed first
    pub fn pick_good_starter_word(&mut self) -> Result<&'a str, StarterError> {
        let dictionary = self.dictionary;
        let length = self.required_length;
        let bucket = dictionary.length_bucket(length);

        if bucket.is_empty() {
            return Err(StarterError::NoWordsOfLength { length });
        }

        let started = Instant::now();
        let mut attempts = 0;

        loop {
            if self.config.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(StarterError::AttemptsExhausted { length, attempts });
            }
            if let Some(budget) = self.config.time_budget {
                if started.elapsed() >= budget {
                    return Err(StarterError::TimedOut { length, budget });
                }
            }
            attempts += 1;

            let candidate = dictionary.word_at(bucket[self.rng.random_range(0..bucket.len())]);
            let extensions = dictionary.count_extensions(candidate, self.config.mode);

            if extensions >= self.config.min_anagrams {
                debug!(
                    word = candidate,
                    length, extensions, attempts, "picked starter word"
                );
                self.advance();
                return Ok(candidate);
            }
            trace!(word = candidate, extensions, "rejected starter candidate");
        }
    }

    fn advance(&mut self) {
        if self.required_length < self.config.max_length {
            self.required_length += 1;
            debug!(required_length = self.required_length, "raised difficulty");
        }
    }
}

impl AnagramDictionary {
    /// Selector with default settings and the thread-local RNG
    #[must_use]
    pub fn starter_selector(&self) -> StarterSelector<'_> {
        StarterSelector::new(self, StarterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Only "ate" (length 3) and "tale" (length 4) have five or more extensions
    fn game_dictionary() -> AnagramDictionary {
        AnagramDictionary::new([
            "ate", "eat", "tea", "treat", "tease", "cheat", "tale", "latest", "stable", "tablet",
        ])
    }

    fn seeded(
        dictionary: &AnagramDictionary,
        config: StarterConfig,
    ) -> StarterSelector<'_, StdRng> {
        StarterSelector::with_rng(dictionary, config, StdRng::seed_from_u64(42))
    }

    #[test]
    fn default_config_matches_reference_constants() {
        let config = StarterConfig::default();
        assert_eq!(config.min_anagrams, 5);
        assert_eq!(config.default_length, 3);
        assert_eq!(config.max_length, 7);
        assert_eq!(config.max_attempts, None);
        assert_eq!(config.time_budget, None);
        assert_eq!(config.mode, ExtensionMode::Raw);
    }

    #[test]
    fn picks_only_qualifying_words() {
        let dictionary = game_dictionary();
        let mut selector = seeded(&dictionary, StarterConfig::default().with_lengths(3, 4));

        assert_eq!(selector.pick_good_starter_word().unwrap(), "ate");
        assert_eq!(selector.pick_good_starter_word().unwrap(), "tale");
    }

    #[test]
    fn required_length_grows_then_caps() {
        let dictionary = game_dictionary();
        let mut selector = seeded(&dictionary, StarterConfig::default().with_lengths(3, 4));

        assert_eq!(selector.required_length(), 3);
        selector.pick_good_starter_word().unwrap();
        assert_eq!(selector.required_length(), 4);
        selector.pick_good_starter_word().unwrap();
        assert_eq!(selector.required_length(), 4);

        // Still capped
        assert_eq!(selector.pick_good_starter_word().unwrap(), "tale");
        assert_eq!(selector.required_length(), 4);
    }

    #[test]
    fn starter_lengths_never_decrease() {
        let dictionary = game_dictionary();
        let mut selector = seeded(&dictionary, StarterConfig::default().with_lengths(3, 4));

        let mut previous = 0;
        for _ in 0..5 {
            let word = selector.pick_good_starter_word().unwrap();
            assert!(word.len() >= previous);
            previous = word.len();
        }
    }

    #[test]
    fn every_pick_meets_threshold() {
        let dictionary = game_dictionary();
        let mut selector = seeded(&dictionary, StarterConfig::default().with_lengths(3, 4));

        for _ in 0..4 {
            let word = selector.pick_good_starter_word().unwrap();
            assert!(dictionary.anagrams_with_one_more_letter(word).len() >= MIN_NUM_ANAGRAMS);
        }
    }

    #[test]
    fn unique_mode_raises_the_bar() {
        let dictionary = game_dictionary();
        // "ate" has six raw extensions but only three distinct ones
        let config = StarterConfig::default()
            .with_lengths(3, 3)
            .with_mode(ExtensionMode::Unique)
            .with_max_attempts(200);
        let mut selector = seeded(&dictionary, config);

        assert_eq!(
            selector.pick_good_starter_word(),
            Err(StarterError::AttemptsExhausted {
                length: 3,
                attempts: 200
            })
        );
    }

    #[test]
    fn failed_pick_keeps_difficulty() {
        let dictionary = AnagramDictionary::new(["eat", "tea", "treat"]);
        let mut selector = seeded(&dictionary, StarterConfig::default().with_max_attempts(10));

        assert!(selector.pick_good_starter_word().is_err());
        assert_eq!(selector.required_length(), 3);
    }

    #[test]
    fn attempts_bound_stops_hopeless_search() {
        let dictionary = AnagramDictionary::new(["eat", "tea"]);
        let mut selector = seeded(&dictionary, StarterConfig::default().with_max_attempts(25));

        assert_eq!(
            selector.pick_good_starter_word(),
            Err(StarterError::AttemptsExhausted {
                length: 3,
                attempts: 25
            })
        );
    }

    #[test]
    fn time_budget_stops_hopeless_search() {
        let dictionary = AnagramDictionary::new(["eat", "tea"]);
        let budget = Duration::from_millis(20);
        let mut selector = seeded(&dictionary, StarterConfig::default().with_time_budget(budget));

        assert_eq!(
            selector.pick_good_starter_word(),
            Err(StarterError::TimedOut { length: 3, budget })
        );
    }

    #[test]
    fn missing_length_is_reported() {
        let dictionary = AnagramDictionary::new(["cats", "acts"]);
        let mut selector = seeded(&dictionary, StarterConfig::default());

        assert_eq!(
            selector.pick_good_starter_word(),
            Err(StarterError::NoWordsOfLength { length: 3 })
        );
    }

    #[test]
    fn reset_restores_default_length() {
        let dictionary = game_dictionary();
        let mut selector = seeded(&dictionary, StarterConfig::default().with_lengths(3, 4));

        selector.pick_good_starter_word().unwrap();
        assert_eq!(selector.required_length(), 4);
        selector.reset();
        assert_eq!(selector.required_length(), 3);
        assert_eq!(selector.pick_good_starter_word().unwrap(), "ate");
    }

    #[test]
    fn sessions_progress_independently() {
        let dictionary = game_dictionary();
        let config = StarterConfig::default().with_lengths(3, 4);
        let mut first = seeded(&dictionary, config);
        let mut second = seeded(&dictionary, config);

        first.pick_good_starter_word().unwrap();
        assert_eq!(first.required_length(), 4);
        assert_eq!(second.required_length(), 3);
        assert_eq!(second.pick_good_starter_word().unwrap(), "ate");
    }

    #[test]
    fn thread_rng_selector_finds_starter() {
        let dictionary = game_dictionary();
        let mut selector = dictionary.starter_selector();
        assert_eq!(selector.config().max_length, MAX_WORD_LENGTH);
        assert_eq!(selector.pick_good_starter_word().unwrap(), "ate");
    }
}
