//! Document tree model.
//!
//! A [`Document`] is an ordered sequence of [`Node`]s. The node kinds form a
//! closed sum type so rendering code can match exhaustively; there is no
//! dynamic attribute bag. Style information is the fixed
//! {bold, italic, underline} record consulted by the renderer.
//!
//! The model is read-only from the renderer's point of view: rendering
//! borrows the tree and owns its own traversal state.

use serde::{Deserialize, Serialize};

/// A named document with an ordered body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document name, used for output file names and email subjects.
    pub name: String,
    /// Top-level blocks in document order.
    pub body: Vec<Node>,
}

/// One element of the document tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Block paragraph, optionally a heading.
    Paragraph(Paragraph),
    /// Item of a bulleted or ordered list.
    ListItem(ListItem),
    /// Styled text run (leaf).
    Text(TextRun),
    /// Embedded image (leaf).
    InlineImage(InlineImage),
    /// Footnote with its own body of paragraphs.
    Footnote(Footnote),
    /// Any other container element.
    Container(Container),
}

impl Node {
    /// Whether this node is a list item.
    ///
    /// List grouping closes a run of items when the next sibling is not one.
    #[must_use]
    pub fn is_list_item(&self) -> bool {
        matches!(self, Node::ListItem(_))
    }
}

/// Block paragraph, optionally a heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Heading level, or `None` for a plain paragraph.
    #[serde(default)]
    pub heading: Option<HeadingLevel>,
    /// Child nodes in order.
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Paragraph {
    /// Create a plain paragraph with the given children.
    #[must_use]
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            heading: None,
            children,
        }
    }

    /// Create a heading paragraph with the given children.
    #[must_use]
    pub fn heading(level: HeadingLevel, children: Vec<Node>) -> Self {
        Self {
            heading: Some(level),
            children,
        }
    }
}

/// Heading level of a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// HTML tag name for this level.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

/// Item of a bulleted or ordered list.
///
/// Items carry their group identity themselves; the tree has no list
/// container node. A run of siblings sharing (`list_id`, `nesting_level`)
/// forms one rendered list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Bullet glyph of this item.
    pub glyph: GlyphType,
    /// Identifier of the list this item belongs to.
    pub list_id: String,
    /// Nesting level, starting at 0.
    #[serde(default)]
    pub nesting_level: u32,
    /// Child nodes in order.
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Bullet glyph of a list item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphType {
    Bullet,
    HollowBullet,
    SquareBullet,
    Number,
    LatinLower,
    LatinUpper,
    RomanLower,
    RomanUpper,
}

impl GlyphType {
    /// Whether this glyph belongs to the bullet family (`<ul>`).
    ///
    /// Every other glyph renders as an ordered list (`<ol>`).
    #[must_use]
    pub fn is_bullet(self) -> bool {
        matches!(
            self,
            GlyphType::Bullet | GlyphType::HollowBullet | GlyphType::SquareBullet
        )
    }
}

/// Styled text run.
///
/// Breakpoints partition the text into style-homogeneous segments. A run
/// with zero or one breakpoints is uniformly styled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The raw text of the run.
    pub text: String,
    /// Offsets at which the style changes, in ascending order.
    #[serde(default)]
    pub breakpoints: Vec<Breakpoint>,
}

impl TextRun {
    /// Create an unstyled run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            breakpoints: Vec::new(),
        }
    }

    /// Create a uniformly styled run.
    #[must_use]
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            breakpoints: vec![Breakpoint { offset: 0, style }],
        }
    }

    /// Style of a uniformly styled run.
    ///
    /// With zero breakpoints every attribute is off; with one or more the
    /// first breakpoint's style applies.
    #[must_use]
    pub fn uniform_style(&self) -> TextStyle {
        self.breakpoints
            .first()
            .map_or_else(TextStyle::default, |breakpoint| breakpoint.style)
    }

    /// Iterate style-homogeneous segments as `(text, style)` pairs.
    ///
    /// Segment `i` spans from breakpoint `i` to breakpoint `i + 1`, or to the
    /// end of the text for the last segment. Offsets that fall outside the
    /// text or off a UTF-8 boundary yield an empty segment; breakpoints are
    /// not otherwise validated.
    pub fn segments(&self) -> impl Iterator<Item = (&str, TextStyle)> {
        self.breakpoints.iter().enumerate().map(|(i, breakpoint)| {
            let end = self
                .breakpoints
                .get(i + 1)
                .map_or(self.text.len(), |next| next.offset);
            let segment = self.text.get(breakpoint.offset..end).unwrap_or("");
            (segment, breakpoint.style)
        })
    }
}

/// Offset at which the text style changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Byte offset into the run's text.
    pub offset: usize,
    /// Style in effect from this offset.
    #[serde(default)]
    pub style: TextStyle,
}

/// Fixed style record of a text segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
}

/// Embedded image with its declared content type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineImage {
    /// Declared MIME type (e.g. `image/png`).
    pub content_type: String,
    /// Raw image bytes, base64-encoded in JSON.
    #[serde(with = "base64_bytes")]
    pub bytes: Vec<u8>,
}

/// Footnote owning its own body of paragraphs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footnote {
    /// Footnote body paragraphs in order.
    #[serde(default)]
    pub body: Vec<Paragraph>,
}

/// Generic container element with no markup of its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Child nodes in order.
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Serde adapter encoding byte vectors as base64 strings.
mod base64_bytes {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}
