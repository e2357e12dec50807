//! File-backed page store.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::model::{PageDraft, PageRecord};

use super::{MemoryStore, PageStore, PageUpdate};

/// A page store persisted as a single JSON file.
///
/// The whole page set loads at open and the file is rewritten after every
/// mutation. Suited to the page counts of a marketing site; it stands in
/// for a database without changing any boundary semantics.
pub struct JsonStore {
    path: PathBuf,
    memory: MemoryStore,
}

impl JsonStore {
    /// Open a store at the given path, loading existing pages.
    ///
    /// A missing file opens as an empty store; the file is created on the
    /// first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let memory = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            let pages: Vec<PageRecord> = serde_json::from_str(&raw)?;
            debug!("loaded {} pages from {}", pages.len(), path.display());
            MemoryStore::with_pages(pages)
        } else {
            MemoryStore::new()
        };
        Ok(Self { path, memory })
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add records whose slugs are not already present, reassigning their
    /// ids past the existing ones, then persist. Returns how many were
    /// added.
    pub fn seed(&mut self, pages: Vec<PageRecord>) -> Result<usize> {
        let mut all = self.memory.pages().to_vec();
        let mut next_id = all.iter().map(|page| page.id).max().unwrap_or(0) + 1;
        let mut added = 0;

        for mut page in pages {
            if all.iter().any(|existing| existing.slug == page.slug) {
                continue;
            }
            page.id = next_id;
            next_id += 1;
            all.push(page);
            added += 1;
        }

        if added > 0 {
            self.memory = MemoryStore::with_pages(all);
            self.persist()?;
            debug!("seeded {} pages into {}", added, self.path.display());
        }
        Ok(added)
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(self.memory.pages())?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl PageStore for JsonStore {
    fn get(&self, slug: &str) -> Result<PageRecord> {
        self.memory.get(slug)
    }

    fn list(&self) -> Result<Vec<PageRecord>> {
        self.memory.list()
    }

    fn insert(&mut self, draft: PageDraft) -> Result<PageRecord> {
        let record = self.memory.insert(draft)?;
        self.persist()?;
        Ok(record)
    }

    fn update(&mut self, slug: &str, update: PageUpdate) -> Result<PageRecord> {
        let record = self.memory.update(slug, update)?;
        self.persist()?;
        Ok(record)
    }

    fn delete(&mut self, slug: &str) -> Result<()> {
        self.memory.delete(slug)?;
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::render::extract_text;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pages.json");

        let created = {
            let mut store = JsonStore::open(&path).unwrap();
            store
                .insert(
                    PageDraft::new("About Us")
                        .with_body("We build things.")
                        .with_excerpt("A short intro")
                        .with_published(true),
                )
                .unwrap()
        };
        assert!(path.exists());

        let store = JsonStore::open(&path).unwrap();
        let loaded = store.get("about-us").unwrap();
        assert_eq!(loaded.title, created.title);
        assert_eq!(loaded.excerpt, created.excerpt);
        assert_eq!(loaded.content, created.content);
        assert_eq!(loaded.created_at, created.created_at);
        assert_eq!(loaded.updated_at, created.updated_at);
    }

    #[test]
    fn test_save_bumps_updated_at_and_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pages.json");

        let mut store = JsonStore::open(&path).unwrap();
        let created = store.insert(PageDraft::new("News").with_body("old")).unwrap();
        store.save_content("news", "new body").unwrap();

        let reloaded = JsonStore::open(&path).unwrap();
        let page = reloaded.get("news").unwrap();
        assert_eq!(extract_text(&page.content), "new body");
        assert!(page.updated_at >= created.updated_at);
        assert_eq!(page.created_at, created.created_at);
    }

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let store = JsonStore::open(&path).unwrap();
        assert!(store.list().unwrap().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pages.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(matches!(JsonStore::open(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_parent_links_survive_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pages.json");

        {
            let mut store = JsonStore::open(&path).unwrap();
            store.insert(PageDraft::new("Company")).unwrap();
            store
                .insert(PageDraft::new("Team").with_parent("company"))
                .unwrap();
        }

        let store = JsonStore::open(&path).unwrap();
        let children = store.children_of("company").unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].slug, "team");
    }

    #[test]
    fn test_seed_skips_existing_slugs_and_reassigns_ids() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pages.json");

        let mut store = JsonStore::open(&path).unwrap();
        store.insert(PageDraft::new("Home")).unwrap();

        let added = store
            .seed(vec![
                PageRecord::new(1, "home", "Sample Home"),
                PageRecord::new(2, "about", "Sample About"),
            ])
            .unwrap();
        assert_eq!(added, 1);

        let home = store.get("home").unwrap();
        assert_eq!(home.title, "Home");
        let about = store.get("about").unwrap();
        assert_eq!(about.id, 2);

        let added_again = store.seed(vec![PageRecord::new(9, "about", "X")]).unwrap();
        assert_eq!(added_again, 0);
    }
}
