//! In-memory page store.

use log::debug;

use crate::error::{Error, Result};
use crate::model::{ContentDocument, PageDraft, PageRecord};
use crate::slug::is_valid_slug;

use super::{PageStore, PageUpdate};

/// A page store backed by a plain vector, for tests, seeds, and tooling.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pages: Vec<PageRecord>,
    next_id: u64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding the given records.
    ///
    /// Seeding is the one path that accepts full records, so pages with
    /// rich structured content enter here; the edit path only ever writes
    /// wrapped plain text.
    pub fn with_pages(mut pages: Vec<PageRecord>) -> Self {
        pages.sort_by_key(|page| page.id);
        let next_id = pages.iter().map(|page| page.id).max().unwrap_or(0) + 1;
        Self { pages, next_id }
    }

    /// All records, ordered by id.
    pub fn pages(&self) -> &[PageRecord] {
        &self.pages
    }

    /// Number of stored pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if the store holds no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageStore for MemoryStore {
    fn get(&self, slug: &str) -> Result<PageRecord> {
        self.pages
            .iter()
            .find(|page| page.slug == slug)
            .cloned()
            .ok_or_else(|| Error::PageNotFound(slug.to_string()))
    }

    fn list(&self) -> Result<Vec<PageRecord>> {
        Ok(self.pages.clone())
    }

    fn insert(&mut self, draft: PageDraft) -> Result<PageRecord> {
        let slug = draft.effective_slug();
        if !is_valid_slug(&slug) {
            let detail = if slug.is_empty() {
                format!("empty slug derived from title {:?}", draft.title)
            } else {
                slug
            };
            return Err(Error::InvalidSlug(detail));
        }
        if self.pages.iter().any(|page| page.slug == slug) {
            return Err(Error::DuplicateSlug(slug));
        }

        let record = draft.into_record(self.next_id);
        self.next_id += 1;
        debug!("created page '{}' (id {})", record.slug, record.id);
        self.pages.push(record.clone());
        Ok(record)
    }

    fn update(&mut self, slug: &str, update: PageUpdate) -> Result<PageRecord> {
        let page = self
            .pages
            .iter_mut()
            .find(|page| page.slug == slug)
            .ok_or_else(|| Error::PageNotFound(slug.to_string()))?;

        page.title = update.title;
        page.excerpt = update.excerpt;
        page.featured_image = update.featured_image;
        page.parent = update.parent;
        page.published = update.published;
        page.content = ContentDocument::from_plain_text(update.body).to_value();
        page.touch();
        debug!("updated page '{}'", slug);
        Ok(page.clone())
    }

    fn delete(&mut self, slug: &str) -> Result<()> {
        let position = self
            .pages
            .iter()
            .position(|page| page.slug == slug)
            .ok_or_else(|| Error::PageNotFound(slug.to_string()))?;
        self.pages.remove(position);
        debug!("deleted page '{}'", slug);
        Ok(())
    }
}
