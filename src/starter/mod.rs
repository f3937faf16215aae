//! Starter-word selection for the anagram game
//!
//! Starter words get longer each round, and every starter has enough
//! two-letter extensions to make a satisfying round.

mod selector;
mod survey;

pub use selector::{
    DEFAULT_WORD_LENGTH, MAX_WORD_LENGTH, MIN_NUM_ANAGRAMS, StarterConfig, StarterSelector,
};
pub use survey::{LengthSurvey, SurveyReport, survey_starters, survey_starters_with_progress};
