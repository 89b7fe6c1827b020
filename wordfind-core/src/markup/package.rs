//! Document package (ZIP) access

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Archive entry holding the document body
pub const DOCUMENT_XML_ENTRY: &str = "word/document.xml";

/// Read the document body XML out of a package
pub fn read_document_xml<R: Read + Seek>(reader: R) -> Result<String> {
    let mut archive = ZipArchive::new(reader)
        .map_err(|e| Error::Package(format!("failed to open document as ZIP: {e}")))?;

    let mut entry = archive.by_name(DOCUMENT_XML_ENTRY).map_err(|e| match e {
        zip::result::ZipError::FileNotFound => {
            Error::MissingBody(format!("missing {DOCUMENT_XML_ENTRY}"))
        }
        other => Error::from(other),
    })?;

    let mut bytes = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut bytes)?;

    String::from_utf8(bytes)
        .map_err(|e| Error::Package(format!("{DOCUMENT_XML_ENTRY} is not valid UTF-8: {e}")))
}

/// Open a package file and read its document body XML
pub fn open_docx(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    log::debug!("opening document package {}", path.display());
    let file = File::open(path)?;
    read_document_xml(file)
}
