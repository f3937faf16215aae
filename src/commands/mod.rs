//! Command implementations
//!
//! Each command computes a plain result struct; rendering lives in `output`.

pub mod check;
pub mod extend;
pub mod lookup;
pub mod starter;
pub mod survey;

pub use check::{WordCheck, check_word};
pub use extend::{ExtensionReport, extend_word};
pub use lookup::{AnagramLookup, lookup_anagrams};
pub use starter::{StarterRound, StarterSession, run_starter_rounds};
pub use survey::{SurveyRun, run_survey};
