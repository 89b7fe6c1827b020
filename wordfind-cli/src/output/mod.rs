//! Output formatting module

use anyhow::Result;
use clap::ValueEnum;
use std::io::Write;
use wordfind_core::{ResultRow, SearchOutcome};

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values with one row per matching sentence
    Csv,
    /// JSON array with one object per document
    Json,
    /// Markdown table
    Markdown,
    /// Plain text with one matching sentence per line
    Text,
}

impl OutputFormat {
    /// All output formats
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Csv,
        OutputFormat::Json,
        OutputFormat::Markdown,
        OutputFormat::Text,
    ];

    /// Command-line name of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Text => "text",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "One row per matching sentence (default)",
            OutputFormat::Json => "JSON array with one object per document",
            OutputFormat::Markdown => "Markdown table per document",
            OutputFormat::Text => "One line per matching sentence",
        }
    }

    /// Parse a format name from a configuration file
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

/// Search results of one document
#[derive(Debug, Clone)]
pub struct DocumentResult {
    /// Document path as given on the command line
    pub document: String,
    /// Rows or the no-match signal
    pub outcome: SearchOutcome,
}

impl DocumentResult {
    /// Rows of the document, empty when nothing matched
    pub fn rows(&self) -> &[ResultRow] {
        self.outcome.rows()
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the results of one document
    fn format_document(&mut self, result: &DocumentResult) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Options shared by all formatters
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Prefix each row with the document it came from
    pub include_document: bool,
    /// Start CSV output with a UTF-8 byte order mark
    pub bom: bool,
    /// Pretty print JSON
    pub pretty: bool,
}

/// Output writer handed to formatters
pub type OutputWriter = Box<dyn Write + Send + Sync>;

/// Empty cell for a missing certainty
pub(crate) fn certainty_cell(row: &ResultRow) -> String {
    row.match_certainty.map(|c| c.to_string()).unwrap_or_default()
}

pub mod csv;
pub mod json;
pub mod markdown;
pub mod text;

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: OutputWriter,
    options: FormatOptions,
) -> Result<Box<dyn OutputFormatter>> {
    Ok(match format {
        OutputFormat::Csv => Box::new(CsvFormatter::new(writer, options)?),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, options)),
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options)),
    })
}

pub use self::csv::CsvFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
