//! JSON output formatter

use super::{DocumentResult, FormatOptions, OutputFormatter};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use wordfind_core::ResultRow;

/// JSON formatter - outputs one object per document as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DocumentData {
    /// Document path, present when several documents were searched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    /// `matches` or `no_matches`
    pub status: &'static str,
    /// Matching sentences
    pub rows: Vec<ResultRow>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, result: &DocumentResult) -> Result<()> {
        self.documents.push(DocumentData {
            document: self
                .options
                .include_document
                .then(|| result.document.clone()),
            status: if result.outcome.has_matches() {
                "matches"
            } else {
                "no_matches"
            },
            rows: result.rows().to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.options.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::testing::{matched, row, unmatched, SharedBuffer};

    #[test]
    fn test_single_document_has_no_document_field() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), FormatOptions::default());
        formatter
            .format_document(&matched("a.docx", vec![row(1, None, "She is a wilting flower")]))
            .unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        let document = &value[0];
        assert!(document.get("document").is_none());
        assert_eq!(document["status"], "matches");
        assert_eq!(document["rows"][0]["list_matchs"], "blue, red");
        assert!(document["rows"][0]["match_certainty"].is_null());
    }

    #[test]
    fn test_multiple_documents() {
        let buffer = SharedBuffer::default();
        let options = FormatOptions {
            include_document: true,
            pretty: true,
            ..FormatOptions::default()
        };
        let mut formatter = JsonFormatter::new(buffer.clone(), options);
        formatter.format_document(&unmatched("a.docx")).unwrap();
        formatter
            .format_document(&matched("b.docx", vec![row(3, Some(92), "Colours everywhere")]))
            .unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["document"], "a.docx");
        assert_eq!(value[0]["status"], "no_matches");
        assert_eq!(value[1]["rows"][0]["match_certainty"], 92);
    }
}
