//! Starter survey command
//!
//! Runs the parallel viability survey with a progress bar.

use crate::dictionary::AnagramDictionary;
use crate::starter::{StarterConfig, SurveyReport, survey_starters_with_progress};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Survey report plus timing
#[derive(Debug)]
pub struct SurveyRun {
    pub report: SurveyReport,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Survey every length the selector can reach, showing progress on stderr
///
/// # Panics
///
/// Panics if the progress bar template is invalid, which is a constant.
#[must_use]
pub fn run_survey(dictionary: &AnagramDictionary, config: &StarterConfig) -> SurveyRun {
    let total: usize = (config.default_length..=config.max_length)
        .map(|length| dictionary.words_of_length(length).len())
        .sum();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("counting extensions");

    let start = Instant::now();
    let report = survey_starters_with_progress(dictionary, config, || pb.inc(1));
    let duration = start.elapsed();

    pb.finish_and_clear();

    SurveyRun {
        words_per_second: report.total_words() as f64 / duration.as_secs_f64().max(f64::EPSILON),
        report,
        duration,
    }
}
