//! Footnote rendering.
//!
//! Footnote bodies render with a reduced style subset: italic and bold
//! survive, underline is dropped, and URLs stay plain text. The result is
//! wrapped in the `<fn>` tag pair recognized by the Drupal footnotes module;
//! that pair is a compatibility contract, not a style choice.

use std::fmt::Write;

use docpost_doc::{Footnote, Node, TextRun};

use crate::inline::is_reference;

/// Tag pair recognized by the Drupal footnotes module.
const FOOTNOTE_OPEN: &str = "<fn>";
const FOOTNOTE_CLOSE: &str = "</fn>";

/// Render a footnote, wrapping its body in the footnote tag pair.
pub(crate) fn render_footnote(footnote: &Footnote, out: &mut String) {
    out.push_str(FOOTNOTE_OPEN);
    for paragraph in &footnote.body {
        for child in &paragraph.children {
            if let Node::Text(run) = child {
                render_footnote_run(run, out);
            }
        }
    }
    out.push_str(FOOTNOTE_CLOSE);
}

/// Render one text run of a footnote body.
fn render_footnote_run(run: &TextRun, out: &mut String) {
    if run.breakpoints.is_empty() {
        out.push_str(&run.text);
        return;
    }
    for (segment, style) in run.segments() {
        if style.italic {
            out.push_str("<i>");
        }
        if style.bold {
            out.push_str("<strong>");
        }

        if is_reference(segment) {
            write!(out, "<sup>{segment}</sup>").unwrap();
        } else {
            out.push_str(segment);
        }

        if style.bold {
            out.push_str("</strong>");
        }
        if style.italic {
            out.push_str("</i>");
        }
    }
}
