//! wordfind CLI library
//!
//! This library provides the command-line interface for screening
//! word-processing documents against word lists.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
