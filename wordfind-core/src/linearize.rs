//! Fold markup events into annotated text

use crate::markup::MarkupEvent;
use std::fmt::Write;

/// Sentinel inserted at every paragraph start
pub const PARAGRAPH_MARKER: &str = "[newParagraph]";

/// Prefix of the numbered page-break sentinel, `[lastRenderedPageBreak<n>]`
pub const PAGE_BREAK_PREFIX: &str = "[lastRenderedPageBreak";

/// Document text interleaved with paragraph and numbered page-break sentinels
///
/// Page-break numbers start at 1 and increase by one per marker in document
/// order. Text after marker `n` belongs to page `n + 1` or later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedText {
    text: String,
    page_breaks: u32,
}

impl AnnotatedText {
    /// The annotated string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of page-break sentinels in the text
    pub fn page_breaks(&self) -> u32 {
        self.page_breaks
    }

    /// Consume into the annotated string
    pub fn into_string(self) -> String {
        self.text
    }
}

impl From<String> for AnnotatedText {
    /// Wrap already-annotated text, counting its page-break sentinels
    fn from(text: String) -> Self {
        let page_breaks = text.matches(PAGE_BREAK_PREFIX).count() as u32;
        Self { text, page_breaks }
    }
}

/// Fold the event sequence into one annotated string
pub fn linearize(events: &[MarkupEvent]) -> AnnotatedText {
    let mut text = String::new();
    let mut page_breaks = 0u32;

    for event in events {
        match event {
            MarkupEvent::TextRun(run) => text.push_str(run),
            MarkupEvent::ParagraphBreak => {
                text.push_str(PARAGRAPH_MARKER);
                text.push('\n');
            }
            MarkupEvent::PageBreak => {
                page_breaks += 1;
                let _ = writeln!(text, "{PAGE_BREAK_PREFIX}{page_breaks}]");
            }
        }
    }

    AnnotatedText { text, page_breaks }
}

/// Human-readable dump of the event stream for inspecting page attribution
pub fn render_markup_log(events: &[MarkupEvent]) -> String {
    let mut log = String::new();
    let mut page_breaks = 0u32;

    for event in events {
        match event {
            MarkupEvent::TextRun(run) => log.push_str(run),
            MarkupEvent::ParagraphBreak => log.push('\n'),
            MarkupEvent::PageBreak => {
                page_breaks += 1;
                let _ = write!(
                    log,
                    "\n------------{PAGE_BREAK_PREFIX}{page_breaks}]{}\n\n",
                    "-".repeat(60)
                );
            }
        }
    }

    log
}
