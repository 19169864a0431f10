//! Document source trait and error types.
//!
//! A [`DocumentSource`] hands out owned [`Document`] trees. Keeping retrieval
//! behind a trait keeps the renderer free of host-platform concerns and lets
//! tests run against an in-memory source.

use std::path::PathBuf;

use crate::model::Document;

/// Source of documents to convert.
pub trait DocumentSource {
    /// Fetch the document from the backing store.
    fn fetch(&self) -> Result<Document, SourceError>;
}

/// Error from fetching a document.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SourceError {
    /// Document file does not exist.
    #[error("document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error reading the document.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// Document file is not a valid document tree.
    #[error("invalid document")]
    Parse(#[from] serde_json::Error),
}
