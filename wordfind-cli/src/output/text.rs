//! Plain text output formatter

use super::{DocumentResult, FormatOptions, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one matching sentence per line
pub struct TextFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self { writer, options }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, result: &DocumentResult) -> Result<()> {
        if self.options.include_document {
            writeln!(self.writer, "==> {} <==", result.document)?;
        }
        for row in result.rows() {
            let certainty = row
                .match_certainty
                .map_or_else(|| "phrase".to_string(), |c| format!("{c}%"));
            writeln!(
                self.writer,
                "[{}] page {} ({}) {}: {}",
                row.sent_id, row.page_at_or_below, certainty, row.list_matches, row.sentence
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
