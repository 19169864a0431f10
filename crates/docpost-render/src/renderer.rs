//! Depth-first document traversal and block dispatch.

use docpost_doc::{Document, HeadingLevel, ListItem, Node};

use crate::error::RenderError;
use crate::footnote::render_footnote;
use crate::image::{ExtractedImage, ImageRegistry};
use crate::inline::render_run;
use crate::state::ListState;

/// Result of rendering a document.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML: one fragment per top-level block, joined by `\r`.
    /// No `<html>`/`<body>` wrapping is added.
    pub html: String,
    /// Images extracted during traversal, in document order. Each `cid:`
    /// reference in the HTML matches one entry's name.
    pub images: Vec<ExtractedImage>,
}

/// Depth-first renderer producing footnote-flavored HTML.
///
/// Traversal is a single synchronous pre-order walk. List counters and the
/// image registry are scoped to one conversion: [`render`](Self::render)
/// consumes the renderer, so state can never leak into a second document.
#[derive(Debug, Default)]
pub struct DocumentRenderer {
    lists: ListState,
    images: ImageRegistry,
}

impl DocumentRenderer {
    /// Create a renderer with empty traversal state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the document to HTML, extracting inline images.
    ///
    /// Fails on the first image with an unsupported content type; no partial
    /// output is produced.
    pub fn render(mut self, document: &Document) -> Result<RenderResult, RenderError> {
        tracing::debug!(
            "rendering document {:?} ({} top-level blocks)",
            document.name,
            document.body.len()
        );
        let mut fragments = Vec::with_capacity(document.body.len());
        for (i, node) in document.body.iter().enumerate() {
            let next = document.body.get(i + 1);
            let at_end = i + 1 == document.body.len();
            fragments.push(self.render_node(node, next, at_end)?);
        }
        Ok(RenderResult {
            html: fragments.join("\r"),
            images: self.images.into_images(),
        })
    }

    /// Render one node to a fragment.
    ///
    /// `next` is the node's immediate next sibling; `at_document_end` is true
    /// when the node is the last along the trailing edge of the whole tree.
    /// Both feed the list-group boundary check.
    fn render_node(
        &mut self,
        node: &Node,
        next: Option<&Node>,
        at_document_end: bool,
    ) -> Result<String, RenderError> {
        match node {
            Node::Paragraph(paragraph) => {
                // A childless paragraph is a blank line, not an empty tag pair.
                if paragraph.children.is_empty() {
                    return Ok(String::new());
                }
                let tag = paragraph.heading.map_or("p", HeadingLevel::tag);
                let content = self.render_children(&paragraph.children, at_document_end)?;
                Ok(format!("<{tag}>{content}</{tag}>"))
            }
            Node::ListItem(item) => {
                let (prefix, suffix) = self.list_tags(item, next, at_document_end);
                let content = self.render_children(&item.children, at_document_end)?;
                Ok(format!("{prefix}{content}{suffix}"))
            }
            Node::Text(run) => {
                let mut out = String::new();
                render_run(run, &mut out);
                Ok(out)
            }
            Node::InlineImage(image) => {
                let mut out = String::new();
                self.images.extract(image, &mut out)?;
                Ok(out)
            }
            Node::Footnote(note) => {
                let mut out = String::new();
                render_footnote(note, &mut out);
                Ok(out)
            }
            Node::Container(container) => self.render_children(&container.children, at_document_end),
        }
    }

    /// Render a sibling slice, concatenating fragments with no separator.
    ///
    /// A child is at the document end only if it is the last of this slice
    /// and the parent was itself at the document end.
    fn render_children(
        &mut self,
        children: &[Node],
        parent_at_end: bool,
    ) -> Result<String, RenderError> {
        let mut out = String::new();
        for (i, child) in children.iter().enumerate() {
            let next = children.get(i + 1);
            let at_end = parent_at_end && i + 1 == children.len();
            out.push_str(&self.render_node(child, next, at_end)?);
        }
        Ok(out)
    }

    /// Wrapper tags for one list item.
    ///
    /// The first item seen for a (list id, nesting level) key opens the
    /// surrounding `<ul>`/`<ol>`; later items continue with a bare `<li>`.
    /// The group closes when the item is the document's last node or its next
    /// sibling is not a list item. Only immediate next-sibling adjacency is
    /// checked, so interleaved nesting levels can close a group prematurely
    /// or leave it open.
    fn list_tags(
        &mut self,
        item: &ListItem,
        next: Option<&Node>,
        at_document_end: bool,
    ) -> (&'static str, String) {
        let bullet = item.glyph.is_bullet();
        let first = self.lists.count(&item.list_id, item.nesting_level) == 0;
        let prefix = match (first, bullet) {
            (true, true) => "<ul><li>",
            (true, false) => "<ol><li>",
            (false, _) => "<li>",
        };

        let mut suffix = String::from("</li>");
        let group_ends = at_document_end || next.is_some_and(|sibling| !sibling.is_list_item());
        if group_ends {
            suffix.push_str(if bullet { "</ul>" } else { "</ol>" });
        }

        self.lists.advance(&item.list_id, item.nesting_level);
        (prefix, suffix)
    }
}
