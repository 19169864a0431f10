//! Mock document source for testing.
//!
//! Provides [`MockSource`] for unit testing without filesystem access.

use crate::model::Document;
use crate::source::{DocumentSource, SourceError};

/// Mock source returning a preconfigured document.
///
/// # Example
///
/// ```
/// use docpost_doc::{Document, DocumentSource, MockSource};
///
/// let source = MockSource::new(Document {
///     name: "fixture".to_owned(),
///     body: Vec::new(),
/// });
/// let document = source.fetch().unwrap();
/// assert_eq!(document.name, "fixture");
/// ```
#[derive(Clone, Debug)]
pub struct MockSource {
    document: Document,
}

impl MockSource {
    /// Create a mock source returning the given document.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl DocumentSource for MockSource {
    fn fetch(&self) -> Result<Document, SourceError> {
        Ok(self.document.clone())
    }
}
