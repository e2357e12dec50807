//! Page records and drafts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::detect::{detect_shape, ContentShape};
use crate::slug::slugify;

use super::document::ContentDocument;

/// A stored page, metadata plus its content value.
///
/// `content` stays an opaque [`Value`] on purpose: rows written by older
/// tooling may hold plain strings, nulls, or foreign trees, and the record
/// must load regardless. Shape is judged at read time via
/// [`PageRecord::content_shape`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    /// Numeric identifier, assigned by the store
    pub id: u64,

    /// URL-safe identifier, unique within a store
    pub slug: String,

    /// Display title
    pub title: String,

    /// Short summary used in listings and link cards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Image URL shown on cards and page headers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,

    /// Stored content, ideally a content document
    #[serde(default)]
    pub content: Value,

    /// Slug of the parent page, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Whether the page is publicly visible
    #[serde(default)]
    pub published: bool,

    /// Author attribution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl PageRecord {
    /// Create a bare record with empty content and current timestamps.
    pub fn new(id: u64, slug: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            slug: slug.into(),
            title: title.into(),
            excerpt: None,
            featured_image: None,
            content: Value::Null,
            parent: None,
            published: false,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Classify the stored content value.
    pub fn content_shape(&self) -> ContentShape {
        detect_shape(&self.content)
    }

    /// Bump the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Input for creating a page.
///
/// The body is plain text by type; it is wrapped into a content document
/// when the draft becomes a record, so drafts can never smuggle raw strings
/// into the content column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageDraft {
    /// Display title
    pub title: String,
    /// Explicit slug; derived from the title when absent
    pub slug: Option<String>,
    /// Plain-text body
    pub body: String,
    /// Short summary
    pub excerpt: Option<String>,
    /// Image URL
    pub featured_image: Option<String>,
    /// Parent page slug
    pub parent: Option<String>,
    /// Publish immediately
    pub published: bool,
    /// Author attribution
    pub created_by: Option<String>,
}

impl PageDraft {
    /// Create a draft with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set an explicit slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Set the plain-text body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the excerpt.
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    /// Set the featured image URL.
    pub fn with_featured_image(mut self, url: impl Into<String>) -> Self {
        self.featured_image = Some(url.into());
        self
    }

    /// Set the parent page slug.
    pub fn with_parent(mut self, slug: impl Into<String>) -> Self {
        self.parent = Some(slug.into());
        self
    }

    /// Set the published flag.
    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// Set the author attribution.
    pub fn with_created_by(mut self, author: impl Into<String>) -> Self {
        self.created_by = Some(author.into());
        self
    }

    /// The slug this draft will be stored under.
    pub fn effective_slug(&self) -> String {
        match &self.slug {
            Some(slug) => slug.clone(),
            None => slugify(&self.title),
        }
    }

    /// Turn the draft into a record, wrapping the body and stamping
    /// timestamps.
    pub fn into_record(self, id: u64) -> PageRecord {
        let slug = self.effective_slug();
        let now = Utc::now();
        PageRecord {
            id,
            slug,
            title: self.title,
            excerpt: self.excerpt,
            featured_image: self.featured_image,
            content: ContentDocument::from_plain_text(self.body).to_value(),
            parent: self.parent,
            published: self.published,
            created_by: self.created_by,
            created_at: now,
            updated_at: now,
        }
    }
}
