//! Block and inline node types.
//!
//! The persisted shape is the editor-style JSON tree: every node is an
//! object with a `type` discriminator, block nodes carry a `content` array,
//! and text runs carry the literal string payload. The enums here are the
//! closed set of kinds this crate understands; everything else decodes to
//! [`ContentNode::Unknown`] and is skipped by consumers instead of raising.

use serde::Serialize;
use serde_json::Value;

/// Heading level used when `attrs.level` is absent or unusable.
pub const DEFAULT_HEADING_LEVEL: u8 = 2;

/// A block-level node in a content document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentNode {
    /// A paragraph of inline runs.
    Paragraph {
        /// Inline runs in display order
        content: Vec<Inline>,
    },

    /// A heading with an optional level attribute.
    Heading {
        /// Heading attributes (level)
        attrs: HeadingAttrs,
        /// Inline runs in display order
        content: Vec<Inline>,
    },

    /// An unordered list.
    BulletList {
        /// List items in display order
        content: Vec<ListItem>,
    },

    /// An ordered list.
    OrderedList {
        /// List items in display order
        content: Vec<ListItem>,
    },

    /// A quote block holding paragraph-like children.
    Blockquote {
        /// Child nodes; only paragraphs render inside a quote
        content: Vec<ContentNode>,
    },

    /// A node kind this model does not know. Carried so documents with
    /// newer or foreign node types keep their overall block order; renders
    /// and extracts to nothing.
    Unknown,
}

impl ContentNode {
    /// Build a paragraph holding a single text run.
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentNode::Paragraph {
            content: vec![Inline::text(text)],
        }
    }

    /// Build a heading holding a single text run.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        ContentNode::Heading {
            attrs: HeadingAttrs { level: Some(level) },
            content: vec![Inline::text(text)],
        }
    }

    /// Build an unordered list with one single-paragraph item per entry.
    pub fn bullet_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentNode::BulletList {
            content: items.into_iter().map(ListItem::with_text).collect(),
        }
    }

    /// Build an ordered list with one single-paragraph item per entry.
    pub fn ordered_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentNode::OrderedList {
            content: items.into_iter().map(ListItem::with_text).collect(),
        }
    }

    /// Build a blockquote with one paragraph per entry.
    pub fn quote<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentNode::Blockquote {
            content: paragraphs.into_iter().map(ContentNode::paragraph).collect(),
        }
    }

    /// Decode a single node from a stored value.
    ///
    /// Total: a value that is not an object, has no `type` string, or has a
    /// `type` outside the known set becomes [`ContentNode::Unknown`].
    pub fn from_value(value: &Value) -> ContentNode {
        let Some(kind) = value.get("type").and_then(Value::as_str) else {
            return ContentNode::Unknown;
        };

        match kind {
            "paragraph" => ContentNode::Paragraph {
                content: inline_seq(value.get("content")),
            },
            "heading" => ContentNode::Heading {
                attrs: HeadingAttrs::from_value(value.get("attrs")),
                content: inline_seq(value.get("content")),
            },
            "bulletList" => ContentNode::BulletList {
                content: item_seq(value.get("content")),
            },
            "orderedList" => ContentNode::OrderedList {
                content: item_seq(value.get("content")),
            },
            "blockquote" => ContentNode::Blockquote {
                content: node_seq(value.get("content")),
            },
            _ => ContentNode::Unknown,
        }
    }

    /// Plain text of this block, or `None` for kinds carrying no child
    /// sequence at all.
    ///
    /// List and quote text lives one level deeper than the runs this reads,
    /// so those kinds yield an empty string: flat extraction keeps only
    /// paragraph and heading text. That asymmetry is the documented editing
    /// behavior, not an oversight.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            ContentNode::Paragraph { content } | ContentNode::Heading { content, .. } => {
                Some(concat_runs(content))
            }
            ContentNode::BulletList { .. }
            | ContentNode::OrderedList { .. }
            | ContentNode::Blockquote { .. } => Some(String::new()),
            ContentNode::Unknown => None,
        }
    }

    /// Check if this node is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, ContentNode::Paragraph { .. })
    }

    /// Check if this node decoded as an unknown kind.
    pub fn is_unknown(&self) -> bool {
        matches!(self, ContentNode::Unknown)
    }
}

/// Concatenate the text of a run sequence, in order, with no separator.
pub(crate) fn concat_runs(runs: &[Inline]) -> String {
    let mut out = String::new();
    for run in runs {
        if let Inline::Text(run) = run {
            out.push_str(&run.text);
        }
    }
    out
}

fn inline_seq(value: Option<&Value>) -> Vec<Inline> {
    match value.and_then(Value::as_array) {
        Some(items) => items.iter().map(Inline::from_value).collect(),
        None => Vec::new(),
    }
}

fn item_seq(value: Option<&Value>) -> Vec<ListItem> {
    match value.and_then(Value::as_array) {
        Some(items) => items.iter().map(ListItem::from_value).collect(),
        None => Vec::new(),
    }
}

fn node_seq(value: Option<&Value>) -> Vec<ContentNode> {
    match value.and_then(Value::as_array) {
        Some(items) => items.iter().map(ContentNode::from_value).collect(),
        None => Vec::new(),
    }
}

/// Inline content within a paragraph-like node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Inline {
    /// A literal text run; the only inline kind modeled. Marks (bold,
    /// italic, links) are deliberately not represented.
    Text(TextRun),

    /// An unrecognized inline kind; contributes nothing when rendered.
    Unknown,
}

impl Inline {
    /// Build a text run.
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(TextRun::new(text))
    }

    /// Decode an inline node from a stored value.
    ///
    /// A `text` node with no `text` field (or a non-string one) decodes to
    /// an empty run; anything else becomes [`Inline::Unknown`].
    pub fn from_value(value: &Value) -> Inline {
        match value.get("type").and_then(Value::as_str) {
            Some("text") => Inline::Text(TextRun::new(
                value.get("text").and_then(Value::as_str).unwrap_or_default(),
            )),
            _ => Inline::Unknown,
        }
    }
}

/// A run of literal text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextRun {
    /// The text content
    pub text: String,
}

impl TextRun {
    /// Create a new text run.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Heading attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeadingAttrs {
    /// Heading level; `None` falls back to [`DEFAULT_HEADING_LEVEL`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
}

impl HeadingAttrs {
    /// Decode from a stored `attrs` value; any shape trouble reads as
    /// "no level set".
    pub fn from_value(value: Option<&Value>) -> Self {
        let level = value
            .and_then(|attrs| attrs.get("level"))
            .and_then(Value::as_u64)
            .and_then(|level| u8::try_from(level).ok());
        Self { level }
    }

    /// The level to render at. Absent or zero falls back to
    /// [`DEFAULT_HEADING_LEVEL`]; values above six pass through untouched,
    /// capping is a presentation decision.
    pub fn effective_level(&self) -> u8 {
        match self.level {
            Some(level) if level >= 1 => level,
            _ => DEFAULT_HEADING_LEVEL,
        }
    }
}

/// An item inside a bullet or ordered list.
///
/// Items wrap paragraph-like children; an item with several children is a
/// multi-paragraph list entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(rename = "type")]
    kind: &'static str,

    /// Paragraph-like wrappers, each holding the item's runs
    pub content: Vec<ItemParagraph>,
}

impl ListItem {
    /// Create an empty list item.
    pub fn new() -> Self {
        Self {
            kind: "listItem",
            content: Vec::new(),
        }
    }

    /// Create a list item holding a single paragraph of plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            kind: "listItem",
            content: vec![ItemParagraph::with_text(text)],
        }
    }

    /// Decode from a stored value. The child's own `type` is not checked:
    /// whatever sits in the item slot is read as an item.
    pub fn from_value(value: &Value) -> ListItem {
        let content = match value.get("content").and_then(Value::as_array) {
            Some(items) => items.iter().map(ItemParagraph::from_value).collect(),
            None => Vec::new(),
        };
        ListItem {
            kind: "listItem",
            content,
        }
    }

    /// Plain text of the item: each wrapper's runs concatenated, one entry
    /// per wrapper.
    pub fn paragraph_texts(&self) -> Vec<String> {
        self.content
            .iter()
            .map(|wrapper| concat_runs(&wrapper.content))
            .collect()
    }
}

impl Default for ListItem {
    fn default() -> Self {
        Self::new()
    }
}

/// A paragraph-like wrapper inside a list item.
///
/// Read structurally: the wrapper's stored `type` is never dispatched on,
/// only its runs are used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemParagraph {
    #[serde(rename = "type")]
    kind: &'static str,

    /// Inline runs in display order
    pub content: Vec<Inline>,
}

impl ItemParagraph {
    /// Create a wrapper holding a single text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            kind: "paragraph",
            content: vec![Inline::text(text)],
        }
    }

    /// Decode from a stored value, reading only the nested runs.
    pub fn from_value(value: &Value) -> ItemParagraph {
        ItemParagraph {
            kind: "paragraph",
            content: inline_seq(value.get("content")),
        }
    }
}
