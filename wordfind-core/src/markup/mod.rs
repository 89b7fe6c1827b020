//! Word-processing markup: package reading and event extraction
//!
//! A document package is a ZIP archive whose `word/document.xml` entry holds
//! the body markup. Only three element kinds matter for sentence search: text
//! content, paragraphs, and the `lastRenderedPageBreak` markers a renderer
//! leaves behind where it last paginated.
//!
//! Page-break markers are a rendering artifact, not structural page data.
//! They are missing for breaks that fall inside tables and floating text, so
//! page numbers derived from them are a lower bound.

mod extractor;
mod package;

pub use extractor::extract_events;
pub use package::{open_docx, read_document_xml, DOCUMENT_XML_ENTRY};

/// WordprocessingML main namespace
pub const WML_NAMESPACE: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// A markup element relevant to text reconstruction, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEvent {
    /// Literal text content of a run
    TextRun(String),
    /// Start of a paragraph
    ParagraphBreak,
    /// A last-rendered page break marker
    PageBreak,
}

impl MarkupEvent {
    /// Text payload, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            MarkupEvent::TextRun(text) => Some(text),
            _ => None,
        }
    }
}
