//! Starter-word rounds
//!
//! Plays consecutive rounds of starter selection, showing how difficulty grows.

use crate::dictionary::ExtensionMode;
use crate::error::StarterError;
use crate::starter::StarterSelector;
use rand::Rng;
use std::time::{Duration, Instant};

/// One selected starter word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterRound {
    pub round: usize,
    pub word: String,
    /// Distinct extensions of `word`, in lookup order
    pub extensions: Vec<String>,
    pub duration: Duration,
}

/// Rounds played before the session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterSession {
    pub rounds: Vec<StarterRound>,
    /// Set when a pick failed before all requested rounds were played
    pub stopped: Option<StarterError>,
}

/// Pick up to `rounds` starter words with one selector
///
/// Stops at the first failed pick; earlier rounds are still returned.
pub fn run_starter_rounds<R: Rng>(
    selector: &mut StarterSelector<'_, R>,
    rounds: usize,
) -> StarterSession {
    let dictionary = selector.dictionary();
    let mut played = Vec::with_capacity(rounds);

    for round in 1..=rounds {
        let start = Instant::now();
        match selector.pick_good_starter_word() {
            Ok(word) => played.push(StarterRound {
                round,
                word: word.to_string(),
                extensions: dictionary
                    .extensions(word, ExtensionMode::Unique)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                duration: start.elapsed(),
            }),
            Err(err) => {
                return StarterSession {
                    rounds: played,
                    stopped: Some(err),
                };
            }
        }
    }

    StarterSession {
        rounds: played,
        stopped: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::AnagramDictionary;
    use crate::starter::StarterConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game_dictionary() -> AnagramDictionary {
        AnagramDictionary::new([
            "ate", "eat", "tea", "treat", "tease", "cheat", "tale", "latest", "stable", "tablet",
        ])
    }

    #[test]
    fn plays_requested_rounds() {
        let dictionary = game_dictionary();
        let config = StarterConfig::default().with_lengths(3, 4);
        let mut selector = StarterSelector::with_rng(&dictionary, config, StdRng::seed_from_u64(1));

        let session = run_starter_rounds(&mut selector, 3);

        assert_eq!(session.stopped, None);
        let words: Vec<&str> = session.rounds.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, ["ate", "tale", "tale"]);
        assert_eq!(session.rounds[0].round, 1);
        assert_eq!(session.rounds[0].extensions, ["cheat", "tease", "treat"]);
    }

    #[test]
    fn stops_at_first_failure() {
        let dictionary = game_dictionary();
        let config = StarterConfig::default().with_max_attempts(50);
        let mut selector = StarterSelector::with_rng(&dictionary, config, StdRng::seed_from_u64(1));

        let session = run_starter_rounds(&mut selector, 5);

        // Lengths 3 and 4 work, nothing of length 5 has enough extensions
        assert_eq!(session.rounds.len(), 2);
        assert_eq!(
            session.stopped,
            Some(StarterError::AttemptsExhausted {
                length: 5,
                attempts: 50
            })
        );
    }
}
