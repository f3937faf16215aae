//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_extension_report, print_lookup_result, print_starter_session,
    print_survey_run,
};
