//! Word list loading utilities
//!
//! Word lists are plain text with one word per line. Lines are trimmed but
//! otherwise kept as-is, including blank lines and capitalisation.

use crate::dictionary::AnagramDictionary;
use crate::error::DictionaryError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Load a dictionary from a word list file
///
/// # Errors
///
/// Returns [`DictionaryError::Open`] if the file cannot be opened, or
/// [`DictionaryError::Io`] if reading fails part way through.
///
/// # Examples
/// ```no_run
/// use anagram_dictionary::wordlists::load_dictionary;
///
/// let dictionary = load_dictionary("words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<AnagramDictionary, DictionaryError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening word list");

    let file = File::open(path).map_err(|source| DictionaryError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    AnagramDictionary::from_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "eat\nate\n tea \ncat").unwrap();

        let dictionary = load_dictionary(file.path()).unwrap();
        assert_eq!(dictionary.word_list(), ["eat", "ate", "tea", "cat"]);
        assert_eq!(dictionary.anagrams("tea"), ["eat", "ate", "tea"]);
    }

    #[test]
    fn load_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let dictionary = load_dictionary(file.path()).unwrap();
        assert!(dictionary.is_empty());
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        match load_dictionary(&path) {
            Err(DictionaryError::Open { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Open error, got {other:?}"),
        }
    }
}
