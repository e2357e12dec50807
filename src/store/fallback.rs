//! Sample-data fallback wrapper.

use log::debug;

use crate::error::Result;
use crate::model::{ContentDocument, ContentNode, PageDraft, PageRecord};

use super::{PageStore, PageUpdate};

/// Built-in sample pages: a small site that exercises every block kind.
///
/// Served by [`WithFallback`] while a real store is still empty, and used
/// to seed demo stores.
pub fn sample_pages() -> Vec<PageRecord> {
    let mut home = PageRecord::new(1, "home", "Welcome");
    home.excerpt = Some("A small marketing site, rendered from structured content.".to_string());
    home.published = true;
    home.created_by = Some("sample".to_string());
    home.content = {
        let mut doc = ContentDocument::new();
        doc.push(ContentNode::heading("Welcome", 1));
        doc.push(ContentNode::paragraph(
            "Everything on this site is stored as a structured content document \
             and rendered to HTML on the way out.",
        ));
        doc.push(ContentNode::heading("Where to look", 2));
        doc.push(ContentNode::bullet_list([
            "About: who is behind the site",
            "Services: what we offer",
            "Contact: how to reach us",
        ]));
        doc.to_value()
    };

    let mut about = PageRecord::new(2, "about", "About");
    about.excerpt = Some("Who we are and why we keep things simple.".to_string());
    about.published = true;
    about.created_by = Some("sample".to_string());
    about.content = {
        let mut doc = ContentDocument::new();
        doc.push(ContentNode::heading("Who We Are", 2));
        doc.push(ContentNode::paragraph(
            "A small team that prefers boring, dependable tools.",
        ));
        doc.push(ContentNode::quote([
            "Plain text is the interface; structure is the storage.",
        ]));
        doc.to_value()
    };

    let mut team = PageRecord::new(3, "team", "Team");
    team.parent = Some("about".to_string());
    team.published = true;
    team.created_by = Some("sample".to_string());
    team.featured_image = Some("/images/team.jpg".to_string());
    team.content = {
        let mut doc = ContentDocument::new();
        doc.push(ContentNode::paragraph("In order of appearance:"));
        doc.push(ContentNode::ordered_list([
            "Alex, content",
            "Sam, design",
            "Robin, everything else",
        ]));
        doc.to_value()
    };

    let mut services = PageRecord::new(4, "services", "Services");
    services.excerpt = Some("What we actually do all day.".to_string());
    services.published = true;
    services.created_by = Some("sample".to_string());
    services.content = {
        let mut doc = ContentDocument::new();
        doc.push(ContentNode::heading("Services", 2));
        doc.push(ContentNode::bullet_list([
            "Content modeling",
            "Site rendering",
            "Migrations from legacy pages",
        ]));
        doc.push(ContentNode::paragraph("Get in touch for anything else."));
        doc.to_value()
    };

    // Unpublished on purpose: exercises visibility filtering downstream.
    let mut checklist = PageRecord::new(5, "launch-checklist", "Launch Checklist");
    checklist.created_by = Some("sample".to_string());
    checklist.content = ContentDocument::from_plain_text(
        "Draft notes before launch.\nNot ready for the public site.",
    )
    .to_value();

    vec![home, about, team, services, checklist]
}

/// Wraps a store and serves sample pages when the inner store cannot.
///
/// A read that hits the inner store passes through untouched; a miss or
/// failure falls back to the samples. Writes always go to the inner store,
/// so the samples fade out slug by slug as real pages appear.
pub struct WithFallback<S> {
    inner: S,
    samples: Vec<PageRecord>,
}

impl<S: PageStore> WithFallback<S> {
    /// Wrap a store with the built-in sample pages.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            samples: sample_pages(),
        }
    }

    /// Wrap a store with a custom sample set.
    pub fn with_samples(inner: S, samples: Vec<PageRecord>) -> Self {
        Self { inner, samples }
    }

    /// Unwrap the inner store.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn sample(&self, slug: &str) -> Option<PageRecord> {
        self.samples.iter().find(|page| page.slug == slug).cloned()
    }

    fn inner_is_blank(&self) -> bool {
        self.inner.list().map(|pages| pages.is_empty()).unwrap_or(true)
    }
}

impl<S: PageStore> PageStore for WithFallback<S> {
    fn get(&self, slug: &str) -> Result<PageRecord> {
        match self.inner.get(slug) {
            Ok(page) => Ok(page),
            Err(err) => match self.sample(slug) {
                Some(page) => {
                    debug!("serving sample page '{}' ({})", slug, err);
                    Ok(page)
                }
                None => Err(err),
            },
        }
    }

    fn list(&self) -> Result<Vec<PageRecord>> {
        match self.inner.list() {
            Ok(pages) if !pages.is_empty() => Ok(pages),
            Ok(_) => {
                debug!("inner store is empty, listing sample pages");
                Ok(self.samples.clone())
            }
            Err(err) => {
                debug!("inner store failed ({}), listing sample pages", err);
                Ok(self.samples.clone())
            }
        }
    }

    fn children_of(&self, slug: &str) -> Result<Vec<PageRecord>> {
        if self.inner_is_blank() {
            Ok(self
                .samples
                .iter()
                .filter(|page| page.parent.as_deref() == Some(slug))
                .cloned()
                .collect())
        } else {
            self.inner.children_of(slug)
        }
    }

    fn insert(&mut self, draft: PageDraft) -> Result<PageRecord> {
        self.inner.insert(draft)
    }

    fn update(&mut self, slug: &str, update: PageUpdate) -> Result<PageRecord> {
        self.inner.update(slug, update)
    }

    fn delete(&mut self, slug: &str) -> Result<()> {
        self.inner.delete(slug)
    }
}
