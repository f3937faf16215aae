//! Display functions for command results

use super::formatters::{create_progress_bar, format_columns, mark_base};
use crate::commands::{AnagramLookup, ExtensionReport, StarterSession, SurveyRun, WordCheck};
use crate::dictionary::ExtensionMode;
use colored::Colorize;

const WORDS_PER_ROW: usize = 6;

fn print_words(words: &[String]) {
    for row in format_columns(words, WORDS_PER_ROW) {
        println!("   {row}");
    }
}

/// Print the anagrams of a word
pub fn print_lookup_result(result: &AnagramLookup) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Anagrams of {} {}",
        result.word.bright_yellow().bold(),
        format!("(signature {})", result.signature).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    if !result.in_dictionary {
        println!("{}", "⚠ not a dictionary word".yellow());
    }

    if result.anagrams.is_empty() {
        println!("\n{}", "No anagrams found".red());
        return;
    }

    println!("\n📖 {} found:", result.anagrams.len());
    print_words(&result.anagrams);
}

/// Print the two-letter extensions of a word
pub fn print_extension_report(report: &ExtensionReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Extensions of {} (+2 letters)",
        report.word.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if report.extensions.is_empty() {
        println!("\n{}", "No extensions found".red());
        return;
    }

    match report.mode {
        ExtensionMode::Raw => println!(
            "\n📖 {} results ({} distinct):",
            report.extensions.len(),
            report.distinct
        ),
        ExtensionMode::Unique => println!("\n📖 {} distinct results:", report.distinct),
    }
    print_words(&report.extensions);
}

/// Print the outcome of a validity check
pub fn print_check_result(check: &WordCheck) {
    let verdict = if check.good {
        "✅ good word".green().bold()
    } else {
        "❌ not a good word".red().bold()
    };

    println!(
        "\n{} for base {}: {}",
        check.word.bright_yellow().bold(),
        check.base.bright_white(),
        verdict
    );
    println!(
        "   In dictionary:   {}",
        if check.in_dictionary { "yes" } else { "no" }
    );
    println!(
        "   Contains base:   {}",
        if check.contains_base {
            mark_base(&check.word, &check.base)
        } else {
            "no".to_string()
        }
    );
}

/// Print the starter words picked in a session
pub fn print_starter_session(session: &StarterSession) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STARTER WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for round in &session.rounds {
        println!(
            "\nRound {}: {} {}",
            round.round,
            round.word.to_uppercase().bright_yellow().bold(),
            format!(
                "({} letters, {} answers, {:.1}ms)",
                round.word.chars().count(),
                round.extensions.len(),
                round.duration.as_secs_f64() * 1000.0
            )
            .bright_black()
        );
        print_words(&round.extensions);
    }

    if let Some(err) = &session.stopped {
        println!("\n{} {}", "❌ Stopped:".red().bold(), err);
    }
}

/// Print starter viability per length
pub fn print_survey_run(run: &SurveyRun) {
    let report = &run.report;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "STARTER SURVEY".bright_cyan().bold(),
        format!("(≥{} extensions)", report.min_anagrams).bright_black()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Viable starters by length:".bright_cyan().bold());
    for survey in &report.lengths {
        let bar = create_progress_bar(survey.viable as f64, survey.total_words as f64, 30);
        let bar = if survey.is_viable() {
            bar.green()
        } else {
            bar.red()
        };
        let best = survey.best.as_ref().map_or_else(String::new, |(word, count)| {
            format!("best: {word} ({count})")
        });

        println!(
            "   {:2}: {} {:6}/{:<6} {}",
            survey.length,
            bar,
            survey.viable,
            survey.total_words,
            best.bright_black()
        );
    }

    println!();
    if report.guarantees_termination() {
        println!(
            "{}",
            "✅ Every length has a starter; unbounded picks terminate"
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            "⚠ Some lengths have no starter; use --max-attempts or --timeout-ms"
                .yellow()
                .bold()
        );
    }
    println!(
        "   Time taken:       {:.2}s ({:.0} words/s)",
        run.duration.as_secs_f64(),
        run.words_per_second
    );
}
