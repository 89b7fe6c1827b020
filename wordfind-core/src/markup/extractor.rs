//! Document body XML to markup events

use super::{MarkupEvent, WML_NAMESPACE};
use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
    Text,
    Paragraph,
    PageBreak,
    Other,
}

fn classify(ns: &ResolveResult, e: &BytesStart) -> Element {
    match ns {
        ResolveResult::Bound(Namespace(ns)) if *ns == WML_NAMESPACE.as_bytes() => {
            match e.local_name().as_ref() {
                b"t" => Element::Text,
                b"p" => Element::Paragraph,
                b"lastRenderedPageBreak" => Element::PageBreak,
                _ => Element::Other,
            }
        }
        _ => Element::Other,
    }
}

fn check_root(ns: &ResolveResult, e: &BytesStart) -> Result<()> {
    let is_document = matches!(ns, ResolveResult::Bound(Namespace(ns)) if *ns == WML_NAMESPACE.as_bytes())
        && e.local_name().as_ref() == b"document";
    if is_document {
        Ok(())
    } else {
        Err(Error::UnexpectedRoot(
            String::from_utf8_lossy(e.name().as_ref()).into_owned(),
        ))
    }
}

fn parse_error(reader: &NsReader<&[u8]>, reason: impl ToString) -> Error {
    Error::Parse {
        position: reader.buffer_position() as usize,
        reason: reason.to_string(),
    }
}

/// Walk the document body in order and keep text runs, paragraphs and page-break markers
pub fn extract_events(xml: &str) -> Result<Vec<MarkupEvent>> {
    let mut reader = NsReader::from_str(xml);
    let mut events = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;
    // Depth of the open text element and the text gathered inside it
    let mut text_run: Option<(usize, String)> = None;

    loop {
        let (ns, event) = match reader.read_resolved_event() {
            Ok(resolved) => resolved,
            Err(e) => return Err(parse_error(&reader, e)),
        };

        match event {
            Event::Start(e) => {
                if !seen_root {
                    check_root(&ns, &e)?;
                    seen_root = true;
                }
                depth += 1;
                match classify(&ns, &e) {
                    Element::Text => text_run = Some((depth, String::new())),
                    Element::Paragraph => events.push(MarkupEvent::ParagraphBreak),
                    Element::PageBreak => events.push(MarkupEvent::PageBreak),
                    Element::Other => {}
                }
            }
            Event::Empty(e) => {
                if !seen_root {
                    check_root(&ns, &e)?;
                    seen_root = true;
                }
                match classify(&ns, &e) {
                    Element::Text => events.push(MarkupEvent::TextRun(String::new())),
                    Element::Paragraph => events.push(MarkupEvent::ParagraphBreak),
                    Element::PageBreak => events.push(MarkupEvent::PageBreak),
                    Element::Other => {}
                }
            }
            Event::Text(t) => {
                if let Some((_, buf)) = text_run.as_mut() {
                    let text = t.unescape().map_err(|e| parse_error(&reader, e))?;
                    buf.push_str(&text);
                }
            }
            Event::CData(c) => {
                if let Some((_, buf)) = text_run.as_mut() {
                    buf.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Event::End(_) => {
                if text_run.as_ref().is_some_and(|(d, _)| *d == depth) {
                    if let Some((_, text)) = text_run.take() {
                        events.push(MarkupEvent::TextRun(text));
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(parse_error(&reader, "document contains no root element"));
    }
    if depth != 0 {
        return Err(parse_error(
            &reader,
            format!("unexpected end of input with {depth} unclosed element(s)"),
        ));
    }

    log::debug!("extracted {} markup events", events.len());
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(inner: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{WML_NAMESPACE}"><w:body>{inner}</w:body></w:document>"#
        )
    }

    #[test]
    fn test_paragraph_precedes_its_runs() {
        let xml = body("<w:p><w:r><w:t>Hello</w:t></w:r><w:r><w:t xml:space=\"preserve\"> world</w:t></w:r></w:p>");
        let events = extract_events(&xml).unwrap();
        assert_eq!(
            events,
            vec![
                MarkupEvent::ParagraphBreak,
                MarkupEvent::TextRun("Hello".into()),
                MarkupEvent::TextRun(" world".into()),
            ]
        );
    }

    #[test]
    fn test_page_break_marker_in_run() {
        let xml = body(
            "<w:p><w:r><w:t>One.</w:t></w:r></w:p><w:p><w:r><w:lastRenderedPageBreak/><w:t>Two.</w:t></w:r></w:p>",
        );
        let events = extract_events(&xml).unwrap();
        assert_eq!(
            events,
            vec![
                MarkupEvent::ParagraphBreak,
                MarkupEvent::TextRun("One.".into()),
                MarkupEvent::ParagraphBreak,
                MarkupEvent::PageBreak,
                MarkupEvent::TextRun("Two.".into()),
            ]
        );
    }

    #[test]
    fn test_empty_text_element() {
        let xml = body("<w:p><w:r><w:t/></w:r></w:p>");
        let events = extract_events(&xml).unwrap();
        assert_eq!(
            events,
            vec![MarkupEvent::ParagraphBreak, MarkupEvent::TextRun(String::new())]
        );
    }

    #[test]
    fn test_entities_are_unescaped() {
        let xml = body("<w:p><w:r><w:t>Fish &amp; chips &lt;hot&gt;</w:t></w:r></w:p>");
        let events = extract_events(&xml).unwrap();
        assert_eq!(events[1].text(), Some("Fish & chips <hot>"));
    }

    #[test]
    fn test_prefix_independent() {
        let xml = format!(
            r#"<doc:document xmlns:doc="{WML_NAMESPACE}"><doc:body><doc:p><doc:r><doc:t>Hi</doc:t></doc:r></doc:p></doc:body></doc:document>"#
        );
        let events = extract_events(&xml).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].text(), Some("Hi"));
    }

    #[test]
    fn test_foreign_namespace_ignored() {
        let xml = body(r#"<w:p><x:t xmlns:x="urn:other">skip</x:t><w:r><w:t>keep</w:t></w:r></w:p>"#);
        let events = extract_events(&xml).unwrap();
        let texts: Vec<_> = events.iter().filter_map(|e| e.text()).collect();
        assert_eq!(texts, vec!["keep"]);
    }

    #[test]
    fn test_wrong_root_rejected() {
        let result = extract_events("<html><body><p>text</p></body></html>");
        assert!(matches!(result, Err(Error::UnexpectedRoot(name)) if name == "html"));
    }

    #[test]
    fn test_mismatched_tags_rejected() {
        let xml = format!(r#"<w:document xmlns:w="{WML_NAMESPACE}"><w:body></w:p></w:document>"#);
        assert!(matches!(extract_events(&xml), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_truncated_document_rejected() {
        let xml = format!(r#"<w:document xmlns:w="{WML_NAMESPACE}"><w:body><w:p>"#);
        assert!(matches!(extract_events(&xml), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(extract_events(""), Err(Error::Parse { .. })));
    }
}
