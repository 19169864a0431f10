//! Recursive document-to-HTML renderer.
//!
//! This crate converts a [`docpost_doc::Document`] tree into the semantic
//! HTML flavor expected by the Drupal footnotes module: heading and paragraph
//! wrappers, `<ul>`/`<ol>` grouping of adjacent list items, per-segment
//! inline styling, `<fn>`-wrapped footnotes, and `cid:`-referenced inline
//! images extracted alongside the HTML.
//!
//! Output is deliberately not escaped or sanitized; the conversion is a
//! byte-for-byte contract with the downstream consumer, so raw text passes
//! through untouched.
//!
//! # Example
//!
//! ```
//! use docpost_doc::{Document, HeadingLevel, Node, Paragraph, TextRun};
//! use docpost_render::DocumentRenderer;
//!
//! let document = Document {
//!     name: "notes".to_owned(),
//!     body: vec![Node::Paragraph(Paragraph::heading(
//!         HeadingLevel::H1,
//!         vec![Node::Text(TextRun::plain("Title"))],
//!     ))],
//! };
//! let result = DocumentRenderer::new().render(&document)?;
//! assert_eq!(result.html, "<h1>Title</h1>");
//! # Ok::<(), docpost_render::RenderError>(())
//! ```

mod error;
mod footnote;
mod image;
mod inline;
mod renderer;
mod state;

pub use error::RenderError;
pub use image::ExtractedImage;
pub use renderer::{DocumentRenderer, RenderResult};
