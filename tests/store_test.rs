//! Integration tests for page storage and the editing boundaries.

use pagedoc::admin::{apply_edit, EditForm, EditSubmission};
use pagedoc::store::{sample_pages, JsonStore, MemoryStore, PageStore, PageUpdate, WithFallback};
use pagedoc::{
    extract_text, page_view, Error, PageDraft, PageRecord, RenderOptions, Result, SiteExporter,
};
use tempfile::tempdir;

/// Mock store whose backend is unreachable, for exercising fallback paths.
struct FailingStore;

impl PageStore for FailingStore {
    fn get(&self, slug: &str) -> Result<PageRecord> {
        Err(Error::Store(format!("backend offline: {}", slug)))
    }

    fn list(&self) -> Result<Vec<PageRecord>> {
        Err(Error::Store("backend offline".to_string()))
    }

    fn insert(&mut self, _draft: PageDraft) -> Result<PageRecord> {
        Err(Error::Store("backend offline".to_string()))
    }

    fn update(&mut self, _slug: &str, _update: PageUpdate) -> Result<PageRecord> {
        Err(Error::Store("backend offline".to_string()))
    }

    fn delete(&mut self, _slug: &str) -> Result<()> {
        Err(Error::Store("backend offline".to_string()))
    }
}

#[test]
fn test_fallback_covers_a_failing_backend() {
    let store = WithFallback::new(FailingStore);

    let pages = store.list().unwrap();
    assert!(!pages.is_empty());
    assert_eq!(store.get("home").unwrap().slug, "home");

    // No sample for the slug: the backend's own error comes through.
    assert!(matches!(store.get("no-such-page"), Err(Error::Store(_))));
}

#[test]
fn test_site_renders_from_a_failing_backend() {
    let store = WithFallback::new(FailingStore);

    let view = page_view(&store, "team", &RenderOptions::default()).unwrap();
    let crumbs: Vec<&str> = view.breadcrumb.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(crumbs, vec!["about"]);
    assert!(view.body_html.contains("<ol>"));
}

#[test]
fn test_edit_cycle_through_the_file_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pages.json");

    let mut store = JsonStore::open(&path).unwrap();
    store.seed(sample_pages()).unwrap();

    // The form shows the structured page flattened to plain text.
    let form = EditForm::from_record(&store.get("about").unwrap());
    assert!(form.body.starts_with("Who We Are\n"));

    let mut submission = EditSubmission::from_form(&form);
    submission.body = "About us, rewritten from the form.".to_string();
    submission.excerpt = "Rewritten".to_string();
    apply_edit(&mut store, "about", submission).unwrap();

    // Reload from disk: the save is wholesale and survives the round trip.
    let reloaded = JsonStore::open(&path).unwrap();
    let page = reloaded.get("about").unwrap();
    assert_eq!(extract_text(&page.content), "About us, rewritten from the form.");
    assert_eq!(page.excerpt.as_deref(), Some("Rewritten"));
    assert_eq!(page.content["content"].as_array().unwrap().len(), 1);
}

#[test]
fn test_content_is_always_a_document_after_writes() {
    let mut store = MemoryStore::new();
    let record = store
        .insert(PageDraft::new("Plain Page").with_body("just words"))
        .unwrap();
    assert_eq!(record.content["type"], "doc");

    let updated = store.save_content("plain-page", "still just words").unwrap();
    assert_eq!(updated.content["type"], "doc");
    assert_eq!(extract_text(&updated.content), "still just words");
}

#[test]
fn test_two_handles_last_write_wins() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pages.json");

    {
        let mut store = JsonStore::open(&path).unwrap();
        store.seed(sample_pages()).unwrap();
    }

    // Two editors load the same state, then save one after the other.
    let mut first = JsonStore::open(&path).unwrap();
    let mut second = JsonStore::open(&path).unwrap();

    first.save_content("home", "written by the first editor").unwrap();
    second.save_content("home", "written by the second editor").unwrap();

    let final_state = JsonStore::open(&path).unwrap();
    assert_eq!(
        extract_text(&final_state.get("home").unwrap().content),
        "written by the second editor"
    );
}

#[test]
fn test_export_site_from_file_store() {
    let store_dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();

    let mut store = JsonStore::open(store_dir.path().join("pages.json")).unwrap();
    store.seed(sample_pages()).unwrap();

    let summary = SiteExporter::new(out_dir.path())
        .with_parallel(true)
        .export(&store)
        .unwrap();

    assert_eq!(summary.written, 4);
    assert_eq!(summary.skipped, 1);

    let about = std::fs::read_to_string(out_dir.path().join("about.html")).unwrap();
    assert!(about.contains("<blockquote>"));
    assert!(about.contains("team.html"), "related link to the child page");
    assert!(!out_dir.path().join("launch-checklist.html").exists());
}

#[test]
fn test_legacy_string_content_flows_through_boundaries() {
    let mut legacy = PageRecord::new(1, "old-page", "Old Page");
    legacy.content = serde_json::json!("body saved by the previous system");
    legacy.published = true;
    let mut store = MemoryStore::with_pages(vec![legacy]);

    // The editor sees the raw string.
    let form = EditForm::from_record(&store.get("old-page").unwrap());
    assert_eq!(form.body, "body saved by the previous system");

    // The public site shows the dump rather than hiding the page.
    let view = page_view(&store, "old-page", &RenderOptions::default()).unwrap();
    assert!(view.body_html.contains("previous system"));

    // One save through the form migrates it to a document.
    apply_edit(&mut store, "old-page", EditSubmission::from_form(&form)).unwrap();
    let migrated = store.get("old-page").unwrap();
    assert_eq!(migrated.content["type"], "doc");
    assert_eq!(
        extract_text(&migrated.content),
        "body saved by the previous system"
    );
}
