//! In-memory document packages for tests

use std::io::{Cursor, Write};
use wordfind_core::markup::{DOCUMENT_XML_ENTRY, WML_NAMESPACE};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// A paragraph of a fixture document
pub enum Para<'a> {
    /// Paragraph text, one run per entry
    Text(&'a [&'a str]),
    /// Paragraph whose only run starts with a rendered page break
    AfterBreak(&'a str),
}

pub fn document_xml(paragraphs: &[Para]) -> String {
    let mut body = String::new();
    for paragraph in paragraphs {
        body.push_str("<w:p>");
        match paragraph {
            Para::Text(runs) => {
                for run in runs.iter() {
                    body.push_str(&format!(
                        "<w:r><w:t xml:space=\"preserve\">{run}</w:t></w:r>"
                    ));
                }
            }
            Para::AfterBreak(text) => {
                body.push_str(&format!(
                    "<w:r><w:lastRenderedPageBreak/><w:t>{text}</w:t></w:r>"
                ));
            }
        }
        body.push_str("</w:p>");
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{WML_NAMESPACE}"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    )
}

pub fn docx_bytes(xml: &str) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    writer.start_file("[Content_Types].xml", options).unwrap();
    writer.write_all(b"<Types/>").unwrap();
    writer.start_file(DOCUMENT_XML_ENTRY, options).unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}
