//! Word list sources
//!
//! The dictionary itself does no I/O; this module turns files and readers into
//! dictionaries.

pub mod loader;

pub use loader::load_dictionary;
