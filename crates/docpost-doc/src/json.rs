//! Document source reading JSON files.

use std::fs;
use std::path::PathBuf;

use crate::model::Document;
use crate::source::{DocumentSource, SourceError};

/// Source loading a document tree from a JSON file.
///
/// The file holds one serialized [`Document`]; image bytes are
/// base64-encoded strings.
#[derive(Clone, Debug)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    /// Create a source for the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for JsonSource {
    fn fetch(&self) -> Result<Document, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::NotFound(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path)?;
        let document = serde_json::from_str(&content)?;
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Node, Paragraph, TextRun};

    #[test]
    fn test_fetch_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        let document = Document {
            name: "notes".to_owned(),
            body: vec![Node::Paragraph(Paragraph::new(vec![Node::Text(
                TextRun::plain("Hello"),
            )]))],
        };
        fs::write(&path, serde_json::to_string(&document).unwrap()).unwrap();

        let fetched = JsonSource::new(&path).fetch().unwrap();
        assert_eq!(fetched, document);
    }

    #[test]
    fn test_fetch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = JsonSource::new(dir.path().join("missing.json")).fetch();
        assert!(matches!(result, Err(SourceError::NotFound(_))));
    }

    #[test]
    fn test_fetch_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, "{not json").unwrap();

        let result = JsonSource::new(&path).fetch();
        assert!(matches!(result, Err(SourceError::Parse(_))));
    }
}
