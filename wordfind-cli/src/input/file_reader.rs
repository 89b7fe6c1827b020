//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use wordfind_core::{ExclusionList, Input, PhraseList, WordList};

/// Reads word lists and document bodies
pub struct FileReader;

impl FileReader {
    /// Read a newline-separated word list; the file must be UTF-8
    pub fn read_word_list(path: &Path) -> Result<WordList> {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read word list: {}", path.display()))?;
        WordList::from_bytes(&bytes)
            .with_context(|| format!("Word list is not valid UTF-8: {}", path.display()))
    }

    /// Read and tokenize the target word list, rejecting lists with no phrases
    pub fn read_phrases(path: &Path) -> Result<PhraseList> {
        let phrases = PhraseList::from_word_list(&Self::read_word_list(path)?);
        if phrases.is_empty() {
            return Err(CliError::EmptyWordList(path.display().to_string()).into());
        }
        Ok(phrases)
    }

    /// Read an optional exclusion list
    pub fn read_exclusions(path: Option<&Path>) -> Result<ExclusionList> {
        match path {
            Some(path) => Ok(ExclusionList::from_word_list(&Self::read_word_list(path)?)),
            None => Ok(ExclusionList::empty()),
        }
    }

    /// Extract the body XML of a document package
    pub fn read_document_xml(path: &Path) -> Result<String> {
        Input::from_file(path)
            .into_document_xml()
            .map_err(|e| CliError::SearchError(format!("{}: {e}", path.display())).into())
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_word_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "\u{feff}Red\n\n  wilting flowers  \r\nblue\n").unwrap();

        let list = FileReader::read_word_list(&path).unwrap();
        assert_eq!(list.phrases(), &["red", "wilting flowers", "blue"]);
    }

    #[test]
    fn test_read_word_list_rejects_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, [b'c', b'a', b'f', 0xe9]).unwrap();

        let err = FileReader::read_word_list(&path).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_empty_word_list_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "\n  \n...\n").unwrap();

        let err = FileReader::read_phrases(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::EmptyWordList(_))
        ));
    }

    #[test]
    fn test_missing_exclusions_default_to_empty() {
        assert!(FileReader::read_exclusions(None).unwrap().is_empty());
    }

    #[test]
    fn test_read_document_xml_rejects_non_package() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.docx");
        fs::write(&path, "just text").unwrap();

        let err = FileReader::read_document_xml(&path).unwrap_err();
        assert!(err.to_string().starts_with("Search error:"));
    }

    #[test]
    fn test_file_size_nonexistent() {
        let result = FileReader::file_size(Path::new("/nonexistent/file.docx"));
        assert!(result.unwrap_err().to_string().contains("Failed to get metadata"));
    }
}
