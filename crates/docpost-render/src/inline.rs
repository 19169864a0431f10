//! Inline rendering of styled text runs.
//!
//! A run with zero or one breakpoints is uniformly styled and gets
//! whole-run treatment; a run with more breakpoints is rendered segment by
//! segment with nested inline tags. Text is emitted verbatim — escaping
//! would break the byte-for-byte contract with the downstream consumer.

use std::fmt::Write;

use docpost_doc::TextRun;

/// Render one text run.
pub(crate) fn render_run(run: &TextRun, out: &mut String) {
    if run.breakpoints.len() <= 1 {
        render_uniform(run, out);
    } else {
        render_segments(run, out);
    }
}

/// Whole-run rendering for uniformly styled text.
fn render_uniform(run: &TextRun, out: &mut String) {
    let style = run.uniform_style();
    let text = &run.text;
    if style.bold {
        write!(out, "<strong>{text}</strong>").unwrap();
    } else if style.italic {
        // A fully italicized run is treated as a quotation.
        write!(out, "<blockquote>{text}</blockquote>").unwrap();
    } else if is_link(text) {
        push_anchor(text, out);
    } else {
        out.push_str(text);
    }
}

/// Segment-by-segment rendering for mixed-style runs.
///
/// Inline tags nest in the fixed order italic, bold, underline and close in
/// reverse, whichever of the three are set.
fn render_segments(run: &TextRun, out: &mut String) {
    for (segment, style) in run.segments() {
        if style.italic {
            out.push_str("<i>");
        }
        if style.bold {
            out.push_str("<strong>");
        }
        if style.underline {
            out.push_str("<u>");
        }

        if is_reference(segment) {
            write!(out, "<sup>{segment}</sup>").unwrap();
        } else if is_link(segment) {
            push_anchor(segment, out);
        } else {
            out.push_str(segment);
        }

        if style.underline {
            out.push_str("</u>");
        }
        if style.bold {
            out.push_str("</strong>");
        }
        if style.italic {
            out.push_str("</i>");
        }
    }
}

/// Whether the text reads as a plain URL.
///
/// Leading whitespace is ignored for detection, but the href keeps the
/// original text untouched.
fn is_link(text: &str) -> bool {
    let trimmed = text.trim_start();
    trimmed.starts_with("http://") || trimmed.starts_with("https://")
}

/// Whether a segment reads as a bracketed reference marker like `[3]`.
///
/// The source format cannot represent true superscript, so a fully
/// bracketed styled segment stands in for one.
pub(crate) fn is_reference(segment: &str) -> bool {
    segment.starts_with('[') && segment.ends_with(']')
}

/// Emit a `nofollow` anchor whose href and label are the raw text.
fn push_anchor(text: &str, out: &mut String) {
    write!(out, r#"<a href="{text}" rel="nofollow">{text}</a>"#).unwrap();
}

#[cfg(test)]
mod tests {
    use docpost_doc::{Breakpoint, TextStyle};
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(run: &TextRun) -> String {
        let mut out = String::new();
        render_run(run, &mut out);
        out
    }

    fn bold() -> TextStyle {
        TextStyle {
            bold: true,
            ..TextStyle::default()
        }
    }

    fn italic() -> TextStyle {
        TextStyle {
            italic: true,
            ..TextStyle::default()
        }
    }

    #[test]
    fn test_uniform_bold() {
        let run = TextRun::styled("important", bold());
        assert_eq!(render(&run), "<strong>important</strong>");
    }

    #[test]
    fn test_uniform_bold_wins_over_italic() {
        let run = TextRun::styled(
            "both",
            TextStyle {
                bold: true,
                italic: true,
                underline: false,
            },
        );
        assert_eq!(render(&run), "<strong>both</strong>");
    }

    #[test]
    fn test_uniform_italic_becomes_blockquote() {
        let run = TextRun::styled("a full quotation", italic());
        assert_eq!(render(&run), "<blockquote>a full quotation</blockquote>");
    }

    #[test]
    fn test_uniform_link() {
        let run = TextRun::plain("https://example.com/a");
        assert_eq!(
            render(&run),
            r#"<a href="https://example.com/a" rel="nofollow">https://example.com/a</a>"#
        );
    }

    #[test]
    fn test_uniform_link_href_keeps_leading_whitespace() {
        let run = TextRun::plain("  http://example.com");
        assert_eq!(
            render(&run),
            r#"<a href="  http://example.com" rel="nofollow">  http://example.com</a>"#
        );
    }

    #[test]
    fn test_uniform_plain_text_verbatim() {
        let run = TextRun::plain("no markup & <raw> text");
        assert_eq!(render(&run), "no markup & <raw> text");
    }

    #[test]
    fn test_segments_nest_italic_bold_underline() {
        let run = TextRun {
            text: "all three".to_owned(),
            breakpoints: vec![
                Breakpoint {
                    offset: 0,
                    style: TextStyle {
                        bold: true,
                        italic: true,
                        underline: true,
                    },
                },
                Breakpoint {
                    offset: 4,
                    style: TextStyle::default(),
                },
            ],
        };
        assert_eq!(
            render(&run),
            "<i><strong><u>all </u></strong></i>three"
        );
    }

    #[test]
    fn test_segment_styles_are_independent() {
        let run = TextRun {
            text: "plain bold".to_owned(),
            breakpoints: vec![
                Breakpoint {
                    offset: 0,
                    style: TextStyle::default(),
                },
                Breakpoint {
                    offset: 6,
                    style: bold(),
                },
            ],
        };
        assert_eq!(render(&run), "plain <strong>bold</strong>");
    }

    #[test]
    fn test_bracketed_segment_becomes_superscript() {
        let run = TextRun {
            text: "see[3]".to_owned(),
            breakpoints: vec![
                Breakpoint {
                    offset: 0,
                    style: TextStyle::default(),
                },
                Breakpoint {
                    offset: 3,
                    style: TextStyle::default(),
                },
            ],
        };
        assert_eq!(render(&run), "see<sup>[3]</sup>");
    }

    #[test]
    fn test_bracketed_segment_keeps_style_wrappers() {
        let run = TextRun {
            text: "x[12]".to_owned(),
            breakpoints: vec![
                Breakpoint {
                    offset: 0,
                    style: TextStyle::default(),
                },
                Breakpoint {
                    offset: 1,
                    style: italic(),
                },
            ],
        };
        assert_eq!(render(&run), "x<i><sup>[12]</sup></i>");
    }

    #[test]
    fn test_link_segment() {
        let run = TextRun {
            text: "see http://example.com".to_owned(),
            breakpoints: vec![
                Breakpoint {
                    offset: 0,
                    style: TextStyle::default(),
                },
                Breakpoint {
                    offset: 4,
                    style: TextStyle::default(),
                },
            ],
        };
        assert_eq!(
            render(&run),
            r#"see <a href="http://example.com" rel="nofollow">http://example.com</a>"#
        );
    }

    #[test]
    fn test_lone_bracket_is_not_a_reference() {
        assert!(!is_reference("["));
        assert!(!is_reference("]"));
        assert!(!is_reference(""));
        assert!(is_reference("[]"));
        assert!(is_reference("[note 4]"));
    }

    #[test]
    fn test_link_detection() {
        assert!(is_link("http://a"));
        assert!(is_link("https://a"));
        assert!(is_link("   https://a"));
        assert!(!is_link("ftp://a"));
        assert!(!is_link("see https://a"));
    }
}
