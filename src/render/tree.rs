//! Display-tree construction from stored content.

use log::warn;
use serde_json::Value;

use crate::detect::detect_shape;
use crate::model::{ContentDocument, ContentNode};

/// A block in the display tree, ready for serialization.
///
/// Text here is raw; escaping happens in the output stage.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderBlock {
    /// Heading text at a stored level (not clamped to the `h1`..`h6` range)
    Heading { level: u8, text: String },

    /// Paragraph text
    Paragraph { text: String },

    /// A list; each item is one or more paragraph strings
    List { ordered: bool, items: Vec<Vec<String>> },

    /// Quoted paragraph strings
    Quote { paragraphs: Vec<String> },

    /// Compact JSON dump of content that is not a document, shown instead
    /// of hiding the page body
    Fallback { raw: String },
}

impl RenderBlock {
    /// Check if this block is the raw-dump fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self, RenderBlock::Fallback { .. })
    }
}

/// Build the display tree for a stored content value.
///
/// Dispatches every known block kind to its [`RenderBlock`]; unknown kinds
/// produce no block. Null content produces an empty tree so pages saved
/// without a body render as nothing. Any other non-document shape produces
/// a single [`RenderBlock::Fallback`] holding the compact JSON dump and
/// logs a warning, surfacing bad rows instead of swallowing them.
///
/// Total: no input shape panics or errors.
pub fn render_tree(content: &Value) -> Vec<RenderBlock> {
    if content.is_null() {
        return Vec::new();
    }

    let Some(document) = ContentDocument::from_value(content) else {
        warn!(
            "content is not a document (shape: {}), rendering raw dump",
            detect_shape(content)
        );
        let raw = serde_json::to_string(content).unwrap_or_else(|_| String::from("null"));
        return vec![RenderBlock::Fallback { raw }];
    };

    document.content.iter().filter_map(block_for).collect()
}

fn block_for(node: &ContentNode) -> Option<RenderBlock> {
    match node {
        ContentNode::Paragraph { content } => Some(RenderBlock::Paragraph {
            text: crate::model::concat_runs(content),
        }),
        ContentNode::Heading { attrs, content } => Some(RenderBlock::Heading {
            level: attrs.effective_level(),
            text: crate::model::concat_runs(content),
        }),
        ContentNode::BulletList { content } => Some(RenderBlock::List {
            ordered: false,
            items: content.iter().map(|item| item.paragraph_texts()).collect(),
        }),
        ContentNode::OrderedList { content } => Some(RenderBlock::List {
            ordered: true,
            items: content.iter().map(|item| item.paragraph_texts()).collect(),
        }),
        ContentNode::Blockquote { content } => {
            // Only paragraph children render inside a quote.
            let paragraphs = content
                .iter()
                .filter(|child| child.is_paragraph())
                .filter_map(ContentNode::plain_text)
                .collect();
            Some(RenderBlock::Quote { paragraphs })
        }
        ContentNode::Unknown => None,
    }
}
