//! Anagram Dictionary - CLI
//!
//! Query anagrams and extensions from a word list, and pick starter words of
//! increasing difficulty.

use anagram_dictionary::{
    AnagramDictionary, ExtensionMode,
    commands::{check_word, extend_word, lookup_anagrams, run_starter_rounds, run_survey},
    output::{
        print_check_result, print_extension_report, print_lookup_result, print_starter_session,
        print_survey_run,
    },
    starter::{
        DEFAULT_WORD_LENGTH, MAX_WORD_LENGTH, MIN_NUM_ANAGRAMS, StarterConfig, StarterSelector,
    },
    wordlists::load_dictionary,
};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "anagrams",
    about = "Anagram dictionary: anagram and extension lookup, progressive starter words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    wordlist: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// List every anagram of a word
    Anagrams {
        /// The word to look up
        word: String,
    },

    /// List words formed by adding two letters to a word
    Extend {
        /// The base word
        word: String,

        /// Report each extension once
        #[arg(short, long)]
        unique: bool,
    },

    /// Check whether a word is a valid answer for a base word
    Check {
        /// Candidate answer
        word: String,

        /// Base word that must not appear inside the answer
        base: String,
    },

    /// Pick starter words for consecutive rounds
    Starter {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "5")]
        rounds: usize,

        /// Seed the random source for repeatable picks
        #[arg(long)]
        seed: Option<u64>,

        /// Give up on a round after this many draws
        #[arg(long)]
        max_attempts: Option<usize>,

        /// Give up on a round after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Count viable starter words at every reachable length
    Survey {
        #[command(flatten)]
        selection: SelectionArgs,
    },
}

#[derive(Args)]
struct SelectionArgs {
    /// Extensions a starter word needs
    #[arg(long, default_value_t = MIN_NUM_ANAGRAMS)]
    min_anagrams: usize,

    /// Length of the first starter word
    #[arg(long, default_value_t = DEFAULT_WORD_LENGTH)]
    start_length: usize,

    /// Length at which starter words stop growing
    #[arg(long, default_value_t = MAX_WORD_LENGTH)]
    max_length: usize,

    /// Count each distinct extension once
    #[arg(short, long)]
    unique: bool,
}

impl SelectionArgs {
    fn config(&self) -> StarterConfig {
        StarterConfig::default()
            .with_min_anagrams(self.min_anagrams)
            .with_lengths(self.start_length, self.max_length)
            .with_mode(extension_mode(self.unique))
    }
}

const fn extension_mode(unique: bool) -> ExtensionMode {
    if unique {
        ExtensionMode::Unique
    } else {
        ExtensionMode::Raw
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)
        .with_context(|| format!("loading word list {}", cli.wordlist.display()))?;

    match cli.command {
        Commands::Anagrams { word } => {
            print_lookup_result(&lookup_anagrams(&dictionary, &word));
        }
        Commands::Extend { word, unique } => {
            print_extension_report(&extend_word(&dictionary, &word, extension_mode(unique)));
        }
        Commands::Check { word, base } => {
            print_check_result(&check_word(&dictionary, &word, &base));
        }
        Commands::Starter {
            rounds,
            seed,
            max_attempts,
            timeout_ms,
            selection,
        } => {
            let mut config = selection.config();
            config.max_attempts = max_attempts;
            config.time_budget = timeout_ms.map(Duration::from_millis);
            run_starter_command(&dictionary, config, rounds, seed);
        }
        Commands::Survey { selection } => {
            print_survey_run(&run_survey(&dictionary, &selection.config()));
        }
    }

    Ok(())
}

fn run_starter_command(
    dictionary: &AnagramDictionary,
    config: StarterConfig,
    rounds: usize,
    seed: Option<u64>,
) {
    let session = if let Some(seed) = seed {
        let mut selector =
            StarterSelector::with_rng(dictionary, config, StdRng::seed_from_u64(seed));
        run_starter_rounds(&mut selector, rounds)
    } else {
        let mut selector = StarterSelector::new(dictionary, config);
        run_starter_rounds(&mut selector, rounds)
    };

    print_starter_session(&session);
}
