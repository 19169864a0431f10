//! Document tree model and document sources for docpost.
//!
//! This crate defines the node tree that [`docpost-render`] walks, plus the
//! [`DocumentSource`] trait for fetching documents from a backing store.
//! The renderer never reaches into an ambient "active document"; a source is
//! fetched explicitly and the resulting [`Document`] is passed by argument.
//!
//! # Architecture
//!
//! - [`Document`] and [`Node`]: the closed node tree (paragraphs, list items,
//!   styled text runs, inline images, footnotes, generic containers)
//! - [`DocumentSource`] trait with [`JsonSource`] for documents stored as
//!   JSON files
//! - [`MockSource`] for testing (behind the `mock` feature flag)
//!
//! # Example
//!
//! ```
//! use docpost_doc::{Document, Node, Paragraph, TextRun};
//!
//! let document = Document {
//!     name: "notes".to_owned(),
//!     body: vec![Node::Paragraph(Paragraph {
//!         heading: None,
//!         children: vec![Node::Text(TextRun::plain("Hello"))],
//!     })],
//! };
//! assert_eq!(document.body.len(), 1);
//! ```
//!
//! [`docpost-render`]: https://docs.rs/docpost-render

mod json;
#[cfg(feature = "mock")]
mod mock;
mod model;
mod source;

pub use json::JsonSource;
#[cfg(feature = "mock")]
pub use mock::MockSource;
pub use model::{
    Breakpoint, Container, Document, Footnote, GlyphType, HeadingLevel, InlineImage, ListItem,
    Node, Paragraph, TextRun, TextStyle,
};
pub use source::{DocumentSource, SourceError};
