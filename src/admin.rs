//! Admin edit-form boundary.
//!
//! The form never sees structured content. Reads go through the plain-text
//! extractor into a textarea; submits carry strings that are wrapped back
//! into a document at save time. Rich structure therefore survives until a
//! page is re-saved from the form, and no longer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::PageRecord;
use crate::render::extract_text;
use crate::store::{PageStore, PageUpdate};

/// What the edit form displays.
///
/// Optional metadata appears as empty strings, matching form-field
/// semantics; the body is the extractor's view of the stored content.
#[derive(Debug, Clone, Serialize)]
pub struct EditForm {
    /// Slug, shown read-only
    pub slug: String,
    /// Display title
    pub title: String,
    /// Excerpt, empty when unset
    pub excerpt: String,
    /// Featured image URL, empty when unset
    pub featured_image: String,
    /// Parent slug, empty when unset
    pub parent: String,
    /// Public visibility
    pub published: bool,
    /// Plain-text body for the textarea
    pub body: String,
    /// Last save time, shown to the editor
    pub updated_at: DateTime<Utc>,
}

impl EditForm {
    /// Build the form for a stored page.
    pub fn from_record(record: &PageRecord) -> Self {
        Self {
            slug: record.slug.clone(),
            title: record.title.clone(),
            excerpt: record.excerpt.clone().unwrap_or_default(),
            featured_image: record.featured_image.clone().unwrap_or_default(),
            parent: record.parent.clone().unwrap_or_default(),
            published: record.published,
            body: extract_text(&record.content),
            updated_at: record.updated_at,
        }
    }
}

/// What the form posts back: plain strings, empty meaning unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditSubmission {
    /// Display title
    pub title: String,
    /// Excerpt, empty clears it
    #[serde(default)]
    pub excerpt: String,
    /// Featured image URL, empty clears it
    #[serde(default)]
    pub featured_image: String,
    /// Parent slug, empty detaches the page
    #[serde(default)]
    pub parent: String,
    /// Public visibility
    #[serde(default)]
    pub published: bool,
    /// Plain-text body from the textarea
    #[serde(default)]
    pub body: String,
}

impl EditSubmission {
    /// Resubmit a form unchanged.
    pub fn from_form(form: &EditForm) -> Self {
        Self {
            title: form.title.clone(),
            excerpt: form.excerpt.clone(),
            featured_image: form.featured_image.clone(),
            parent: form.parent.clone(),
            published: form.published,
            body: form.body.clone(),
        }
    }
}

/// Apply a submitted edit: wrap the body, replace the page wholesale, bump
/// the modification time.
///
/// Last write wins; concurrent editors are not detected, the later submit
/// simply overwrites.
pub fn apply_edit<S: PageStore>(
    store: &mut S,
    slug: &str,
    submission: EditSubmission,
) -> Result<PageRecord> {
    let update = PageUpdate {
        title: submission.title,
        excerpt: none_if_empty(submission.excerpt),
        featured_image: none_if_empty(submission.featured_image),
        parent: none_if_empty(submission.parent),
        published: submission.published,
        body: submission.body,
    };
    store.update(slug, update)
}

fn none_if_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
