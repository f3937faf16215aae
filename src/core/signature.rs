//! Canonical anagram signatures
//!
//! Two words are anagrams of each other exactly when their signatures are equal.

/// Letters tried when extending a base word.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Sort the characters of a word into ascending code-point order
///
/// No case folding is applied: `"Tea"` and `"tea"` have different signatures.
///
/// # Examples
/// ```
/// use anagram_dictionary::core::sort_letters;
///
/// assert_eq!(sort_letters("tea"), "aet");
/// assert_eq!(sort_letters("eat"), sort_letters("ate"));
/// ```
#[must_use]
pub fn sort_letters(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Merge extra letters into an already sorted signature
///
/// Equivalent to `sort_letters(&format!("{base}{extra}"))` when `signature` is
/// `sort_letters(base)`, without re-sorting the base letters.
#[must_use]
pub fn extend_signature(signature: &str, extra: &[char]) -> String {
    let mut extra = extra.to_vec();
    extra.sort_unstable();

    let mut merged = String::with_capacity(signature.len() + extra.len() * 4);
    let mut pending = extra.into_iter().peekable();

    for ch in signature.chars() {
        while let Some(&next) = pending.peek() {
            if next > ch {
                break;
            }
            merged.push(next);
            pending.next();
        }
        merged.push(ch);
    }
    merged.extend(pending);

    merged
}
