//! Formatting utilities for terminal output

/// Lay out words in left-aligned columns, `per_row` words per line
#[must_use]
pub fn format_columns(words: &[String], per_row: usize) -> Vec<String> {
    let width = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
    let per_row = per_row.max(1);

    words
        .chunks(per_row)
        .map(|row| {
            row.iter()
                .map(|w| format!("{w:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Mark the occurrence of `base` inside `word` with brackets
///
/// Returns the word unchanged when `base` is empty or absent.
#[must_use]
pub fn mark_base(word: &str, base: &str) -> String {
    if base.is_empty() {
        return word.to_string();
    }
    match word.find(base) {
        Some(at) => format!(
            "{}[{}]{}",
            &word[..at],
            base,
            &word[at + base.len()..]
        ),
        None => word.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn columns_pad_to_longest_word() {
        let rows = format_columns(&words(&["eat", "treat", "tea"]), 2);
        assert_eq!(rows, ["eat    treat", "tea"]);
    }

    #[test]
    fn columns_empty() {
        assert!(format_columns(&[], 4).is_empty());
    }

    #[test]
    fn columns_zero_per_row_treated_as_one() {
        let rows = format_columns(&words(&["a", "b"]), 0);
        assert_eq!(rows, ["a", "b"]);
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn mark_base_brackets_occurrence() {
        assert_eq!(mark_base("scat", "cat"), "s[cat]");
        assert_eq!(mark_base("acts", "cat"), "acts");
        assert_eq!(mark_base("acts", ""), "acts");
    }
}
