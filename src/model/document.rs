//! The content document root.

use serde::Serialize;
use serde_json::Value;

use super::node::ContentNode;

/// The root of an editor content tree: a `doc` node holding a flat
/// sequence of blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentDocument {
    #[serde(rename = "type")]
    kind: &'static str,

    /// Top-level blocks in display order
    pub content: Vec<ContentNode>,
}

impl ContentDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            kind: "doc",
            content: Vec::new(),
        }
    }

    /// Wrap a plain string as a minimal document: one paragraph holding one
    /// text run with the body verbatim, newlines included.
    ///
    /// This is the only path by which free-form text enters the stored
    /// format, so loose strings get structured exactly once, at write time.
    ///
    /// # Example
    ///
    /// ```
    /// use pagedoc::ContentDocument;
    ///
    /// let doc = ContentDocument::from_plain_text("Hello.\nSecond line.");
    /// assert_eq!(doc.plain_text(), "Hello.\nSecond line.");
    /// ```
    pub fn from_plain_text(body: impl Into<String>) -> Self {
        Self {
            kind: "doc",
            content: vec![ContentNode::Paragraph {
                content: vec![super::node::Inline::text(body)],
            }],
        }
    }

    /// Decode a stored value as a document.
    ///
    /// Any object with a `content` array qualifies; the root `type` field is
    /// not consulted, matching how readers have always treated the root.
    /// Returns `None` for values without that shape (null, strings, objects
    /// missing `content`).
    pub fn from_value(value: &Value) -> Option<Self> {
        let blocks = value.get("content")?.as_array()?;
        Some(Self {
            kind: "doc",
            content: blocks.iter().map(ContentNode::from_value).collect(),
        })
    }

    /// Serialize back to the stored JSON shape.
    pub fn to_value(&self) -> Value {
        // Plain structs of strings and integers; serialization cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Flat plain text: one entry per block carrying a child sequence,
    /// joined with newlines. Matches what the text extractor produces for
    /// documents built by this crate.
    pub fn plain_text(&self) -> String {
        let lines: Vec<String> = self
            .content
            .iter()
            .filter_map(ContentNode::plain_text)
            .collect();
        lines.join("\n")
    }

    /// Append a block.
    pub fn push(&mut self, node: ContentNode) {
        self.content.push(node);
    }

    /// Number of top-level blocks.
    pub fn block_count(&self) -> usize {
        self.content.len()
    }

    /// Check if the document holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Default for ContentDocument {
    fn default() -> Self {
        Self::new()
    }
}
