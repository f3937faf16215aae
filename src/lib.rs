//! Anagram Dictionary
//!
//! An in-memory anagram dictionary for word games: exact anagram lookup,
//! two-letter extension lookup, and starter-word selection that gets harder
//! each round.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_dictionary::AnagramDictionary;
//!
//! let dictionary = AnagramDictionary::new(["eat", "ate", "tea", "treat", "cheat"]);
//!
//! assert_eq!(dictionary.anagrams("tea"), ["eat", "ate", "tea"]);
//! assert!(dictionary.is_good_word("cheat", "ate"));
//! assert!(dictionary.anagrams_with_one_more_letter("ate").contains(&"treat"));
//! ```

// Signature primitives
pub mod core;

// Dictionary indexes and queries
pub mod dictionary;

// Starter-word selection
pub mod starter;

// Word list loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod error;

pub use dictionary::{AnagramDictionary, ExtensionMode};
pub use error::{DictionaryError, StarterError};
