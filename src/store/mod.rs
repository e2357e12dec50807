//! Page storage.
//!
//! Stores hold [`PageRecord`]s keyed by slug and treat the content value as
//! opaque: shape is judged by the consumers that read it, never on the way
//! in or out of storage. All content writes go through plain-text bodies
//! that are wrapped at the boundary, so a caller cannot hand a store a raw
//! string (or any other unwrapped value) for the content column.

mod fallback;
mod json;
mod memory;

pub use fallback::{sample_pages, WithFallback};
pub use json::JsonStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::model::{PageDraft, PageRecord};
use crate::render::extract_text;

/// Full replacement payload for an existing page.
///
/// Carries every editable field; saves are wholesale, there is no partial
/// update path. The body is plain text and becomes the page's entire
/// content document.
#[derive(Debug, Clone)]
pub struct PageUpdate {
    /// Display title
    pub title: String,
    /// Short summary, `None` clears it
    pub excerpt: Option<String>,
    /// Image URL, `None` clears it
    pub featured_image: Option<String>,
    /// Parent page slug, `None` detaches the page
    pub parent: Option<String>,
    /// Public visibility
    pub published: bool,
    /// Plain-text body; wrapped into a content document on save
    pub body: String,
}

impl PageUpdate {
    /// Build an update that would store the record unchanged, with the body
    /// read back through the extractor.
    ///
    /// Because the body round-trips as plain text, applying this update to
    /// a page with rich content flattens that content. Structure survives
    /// only until the first re-save; that is the editing model, not an
    /// accident of this helper.
    pub fn from_record(record: &PageRecord) -> Self {
        Self {
            title: record.title.clone(),
            excerpt: record.excerpt.clone(),
            featured_image: record.featured_image.clone(),
            parent: record.parent.clone(),
            published: record.published,
            body: extract_text(&record.content),
        }
    }

    /// Replace the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// Storage boundary for page records.
pub trait PageStore {
    /// Fetch a page by slug.
    fn get(&self, slug: &str) -> Result<PageRecord>;

    /// All pages, ordered by id.
    fn list(&self) -> Result<Vec<PageRecord>>;

    /// Create a page from a draft, deriving the slug from the title when
    /// the draft has none.
    fn insert(&mut self, draft: PageDraft) -> Result<PageRecord>;

    /// Replace a page wholesale and bump its modification time. Last write
    /// wins: there is no version check and no merge.
    fn update(&mut self, slug: &str, update: PageUpdate) -> Result<PageRecord>;

    /// Delete a page and its content.
    fn delete(&mut self, slug: &str) -> Result<()>;

    /// Fetch a page by numeric id.
    fn get_by_id(&self, id: u64) -> Result<PageRecord> {
        self.list()?
            .into_iter()
            .find(|page| page.id == id)
            .ok_or_else(|| crate::Error::PageNotFound(format!("id {}", id)))
    }

    /// Pages whose parent is the given slug, ordered by id.
    fn children_of(&self, slug: &str) -> Result<Vec<PageRecord>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|page| page.parent.as_deref() == Some(slug))
            .collect())
    }

    /// Replace only the content with a wrapped plain-text body, leaving
    /// metadata as it stands.
    fn save_content(&mut self, slug: &str, body: &str) -> Result<PageRecord> {
        let update = PageUpdate::from_record(&self.get(slug)?).with_body(body);
        self.update(slug, update)
    }
}
