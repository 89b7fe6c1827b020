//! Markdown output formatter

use super::{certainty_cell, DocumentResult, FormatOptions, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use wordfind_core::RESULT_COLUMNS;

/// Markdown formatter - outputs a table of matching sentences per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    row_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            row_count: 0,
        }
    }
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, result: &DocumentResult) -> Result<()> {
        if self.options.include_document {
            writeln!(self.writer, "## {}", result.document)?;
            writeln!(self.writer)?;
        }

        if !result.outcome.has_matches() {
            writeln!(self.writer, "*No matches found*")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "| {} |", RESULT_COLUMNS.join(" | "))?;
        writeln!(self.writer, "|{}", "---|".repeat(RESULT_COLUMNS.len()))?;
        for row in result.rows() {
            self.row_count += 1;
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                row.sent_id,
                escape(&row.list_matches),
                escape(&row.found_words),
                certainty_cell(row),
                escape(&row.sentence),
                row.page_at_or_below
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Matching sentences: {}*", self.row_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
