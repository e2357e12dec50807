//! # pagedoc
//!
//! Structured page content for a small CMS: decode editor-style content
//! documents, extract editable plain text, and render public HTML.
//!
//! Stored content is the editor JSON tree (a `doc` root holding blocks
//! that hold text runs). The crate keeps that value opaque in storage,
//! judges its shape at read time, and degrades instead of failing:
//! unknown node kinds are skipped, malformed content renders as a visible
//! raw dump, and plain-text editing round-trips exactly.
//!
//! ## Quick Start
//!
//! ```
//! use pagedoc::PageContent;
//! use serde_json::json;
//!
//! let content = json!({
//!     "type": "doc",
//!     "content": [
//!         {"type": "heading", "attrs": {"level": 2}, "content": [{"type": "text", "text": "Hours"}]},
//!         {"type": "paragraph", "content": [{"type": "text", "text": "Open 9 to 5."}]}
//!     ]
//! });
//!
//! let page = PageContent::new(content);
//! assert_eq!(page.to_text(), "Hours\nOpen 9 to 5.");
//! assert_eq!(page.to_html(), "<h2>Hours</h2><p>Open 9 to 5.</p>");
//! ```
//!
//! ## Components
//!
//! - [`model`] - document, node, and page record types
//! - [`detect`] - content shape classification
//! - [`render`] - plain-text extraction, display-tree dispatch, HTML output
//! - [`store`] - page storage (in-memory, JSON file, sample fallback)
//! - [`admin`] - edit-form boundary (extract on read, wrap on save)
//! - [`site`] - public page views and batch HTML export

pub mod admin;
pub mod detect;
pub mod error;
pub mod model;
pub mod render;
pub mod site;
pub mod slug;
pub mod store;

pub use admin::{apply_edit, EditForm, EditSubmission};
pub use detect::{detect_shape, is_document, ContentShape};
pub use error::{Error, Result};
pub use model::{
    ContentDocument, ContentNode, HeadingAttrs, Inline, ItemParagraph, ListItem, PageDraft,
    PageRecord, TextRun, DEFAULT_HEADING_LEVEL,
};
pub use render::{
    escape_html, extract_text, render_tree, tree_to_json, HtmlRenderer, RenderBlock, RenderOptions,
};
pub use site::{page_view, Crumb, ExportSummary, PageView, RelatedPage, SiteExporter};
pub use slug::{is_valid_slug, slugify};
pub use store::{sample_pages, JsonStore, MemoryStore, PageStore, PageUpdate, WithFallback};

use serde_json::Value;

/// One stored content value with all of its consumers in one place.
///
/// Thin sugar over [`extract_text`], [`render_tree`], and
/// [`HtmlRenderer`] for callers that hold a bare value rather than a full
/// page record.
pub struct PageContent {
    content: Value,
    options: RenderOptions,
}

impl PageContent {
    /// Wrap a stored content value with default render options.
    pub fn new(content: Value) -> Self {
        Self {
            content,
            options: RenderOptions::default(),
        }
    }

    /// Wrap a stored content value with explicit render options.
    pub fn with_options(content: Value, options: RenderOptions) -> Self {
        Self { content, options }
    }

    /// Build content from plain text, the same way saves do.
    pub fn from_plain_text(body: &str) -> Self {
        Self::new(ContentDocument::from_plain_text(body).to_value())
    }

    /// Classify the underlying value.
    pub fn shape(&self) -> ContentShape {
        detect_shape(&self.content)
    }

    /// Editable plain text.
    pub fn to_text(&self) -> String {
        extract_text(&self.content)
    }

    /// The display tree.
    pub fn tree(&self) -> Vec<RenderBlock> {
        render_tree(&self.content)
    }

    /// Rendered HTML.
    pub fn to_html(&self) -> String {
        HtmlRenderer::with_options(self.options.clone()).render(&self.content)
    }

    /// The display tree as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        tree_to_json(&self.tree(), pretty)
    }

    /// Borrow the underlying value.
    pub fn value(&self) -> &Value {
        &self.content
    }

    /// Take the underlying value back.
    pub fn into_value(self) -> Value {
        self.content
    }
}

/// Render a stored content value to HTML with default options.
pub fn render_html(content: &Value) -> String {
    HtmlRenderer::new().render(content)
}

/// Wrap plain text as a stored content value, the sole write path for
/// content.
pub fn wrap_plain_text(body: &str) -> Value {
    ContentDocument::from_plain_text(body).to_value()
}
