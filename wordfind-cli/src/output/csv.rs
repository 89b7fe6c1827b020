//! CSV output formatter

use super::{certainty_cell, DocumentResult, FormatOptions, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use wordfind_core::RESULT_COLUMNS;

const BOM: &[u8] = "\u{feff}".as_bytes();

/// CSV formatter - one record per matching sentence
pub struct CsvFormatter<W: Write> {
    writer: ::csv::Writer<W>,
    include_document: bool,
}

impl<W: Write> CsvFormatter<W> {
    /// Create a CSV formatter and write the header
    pub fn new(mut writer: W, options: FormatOptions) -> Result<Self> {
        if options.bom {
            writer.write_all(BOM)?;
        }

        let mut writer = ::csv::Writer::from_writer(writer);
        if options.include_document {
            writer.write_field("document")?;
        }
        writer.write_record(RESULT_COLUMNS)?;

        Ok(Self {
            writer,
            include_document: options.include_document,
        })
    }
}

impl<W: Write + Send + Sync> OutputFormatter for CsvFormatter<W> {
    fn format_document(&mut self, result: &DocumentResult) -> Result<()> {
        for row in result.rows() {
            if self.include_document {
                self.writer.write_field(&result.document)?;
            }
            self.writer.write_record([
                row.sent_id.to_string(),
                row.list_matches.clone(),
                row.found_words.clone(),
                certainty_cell(row),
                row.sentence.clone(),
                row.page_at_or_below.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::testing::{matched, row, unmatched, SharedBuffer};

    #[test]
    fn test_header_and_rows() {
        let buffer = SharedBuffer::default();
        let mut formatter = CsvFormatter::new(buffer.clone(), FormatOptions::default()).unwrap();
        formatter
            .format_document(&matched(
                "a.docx",
                vec![
                    row(1, Some(100), "Red rods are better than blue ones"),
                    row(4, None, "Quoted, \"with\" commas"),
                ],
            ))
            .unwrap();
        formatter.finish().unwrap();

        let output = buffer.contents();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(
            lines[0],
            "sent_id,list_matchs,found_words,match_certainty,sentence,page_at_or_below"
        );
        assert_eq!(
            lines[1],
            "1,\"blue, red\",\"blue, red\",100,Red rods are better than blue ones,2"
        );
        assert_eq!(
            lines[2],
            "4,\"blue, red\",\"blue, red\",,\"Quoted, \"\"with\"\" commas\",2"
        );
    }

    #[test]
    fn test_bom_and_document_column() {
        let buffer = SharedBuffer::default();
        let options = FormatOptions {
            include_document: true,
            bom: true,
            pretty: false,
        };
        let mut formatter = CsvFormatter::new(buffer.clone(), options).unwrap();
        formatter.format_document(&unmatched("a.docx")).unwrap();
        formatter
            .format_document(&matched("b.docx", vec![row(2, Some(80), "Some sentence here")]))
            .unwrap();
        formatter.finish().unwrap();

        let output = buffer.contents();
        assert!(output.starts_with("\u{feff}document,sent_id,"));
        assert!(output.contains("\nb.docx,2,"));
        assert!(!output.contains("a.docx"));
    }
}
