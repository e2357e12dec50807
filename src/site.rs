//! Public render boundary.
//!
//! Assembles everything a public page needs around the rendered body: the
//! breadcrumb trail from parent references, a related list from child
//! pages, and metadata for the chrome. The batch exporter writes the whole
//! published site to disk, one HTML file per page.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::PageRecord;
use crate::render::{escape_html, HtmlRenderer, RenderOptions};
use crate::store::PageStore;

/// One ancestor link in a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Crumb {
    /// Ancestor slug
    pub slug: String,
    /// Ancestor title
    pub title: String,
}

/// A link card for a related page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedPage {
    /// Page slug
    pub slug: String,
    /// Page title
    pub title: String,
    /// Card text, when the page has an excerpt
    pub excerpt: Option<String>,
}

/// Everything the public page template needs.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    /// Page slug
    pub slug: String,
    /// Page title
    pub title: String,
    /// Meta description text
    pub excerpt: Option<String>,
    /// Header image URL
    pub featured_image: Option<String>,
    /// Last save time
    pub updated_at: DateTime<Utc>,
    /// Ancestors, root first; the page itself is not included
    pub breadcrumb: Vec<Crumb>,
    /// Published children, in id order
    pub related: Vec<RelatedPage>,
    /// Rendered body HTML
    pub body_html: String,
}

/// Assemble the public view of a page.
///
/// Unpublished pages are invisible here and surface as
/// [`Error::PageNotFound`], the same answer a missing page gives.
pub fn page_view<S: PageStore>(
    store: &S,
    slug: &str,
    options: &RenderOptions,
) -> Result<PageView> {
    let record = store.get(slug)?;
    if !record.published {
        return Err(Error::PageNotFound(slug.to_string()));
    }

    let breadcrumb = breadcrumb_for(store, &record);
    let related = store
        .children_of(slug)?
        .into_iter()
        .filter(|child| child.published)
        .map(|child| RelatedPage {
            slug: child.slug,
            title: child.title,
            excerpt: child.excerpt,
        })
        .collect();
    let body_html = HtmlRenderer::with_options(options.clone()).render(&record.content);

    Ok(PageView {
        slug: record.slug,
        title: record.title,
        excerpt: record.excerpt,
        featured_image: record.featured_image,
        updated_at: record.updated_at,
        breadcrumb,
        related,
        body_html,
    })
}

/// Walk parent references to the root.
///
/// The walk is bounded by the set of slugs already visited, so cyclic
/// parent data terminates instead of looping; a dangling reference simply
/// ends the trail. Unpublished ancestors are walked through but not shown.
fn breadcrumb_for<S: PageStore>(store: &S, record: &PageRecord) -> Vec<Crumb> {
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(record.slug.clone());

    let mut trail = Vec::new();
    let mut cursor = record.parent.clone();

    while let Some(parent_slug) = cursor {
        if !seen.insert(parent_slug.clone()) {
            warn!(
                "parent cycle at '{}' while building breadcrumb for '{}'",
                parent_slug, record.slug
            );
            break;
        }
        match store.get(&parent_slug) {
            Ok(parent) => {
                cursor = parent.parent.clone();
                if parent.published {
                    trail.push(Crumb {
                        slug: parent.slug,
                        title: parent.title,
                    });
                }
            }
            Err(_) => break,
        }
    }

    trail.reverse();
    trail
}

impl PageView {
    /// Serialize as a complete standalone HTML document.
    pub fn to_html_document(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        if let Some(excerpt) = &self.excerpt {
            out.push_str(&format!(
                "<meta name=\"description\" content=\"{}\">\n",
                escape_html(excerpt)
            ));
        }
        out.push_str("</head>\n<body>\n");

        if !self.breadcrumb.is_empty() {
            out.push_str("<nav class=\"breadcrumb\">");
            for (index, crumb) in self.breadcrumb.iter().enumerate() {
                if index > 0 {
                    out.push_str(" / ");
                }
                out.push_str(&format!(
                    "<a href=\"{}.html\">{}</a>",
                    crumb.slug,
                    escape_html(&crumb.title)
                ));
            }
            out.push_str("</nav>\n");
        }

        out.push_str("<article>\n");
        out.push_str(&format!("<h1>{}</h1>\n", escape_html(&self.title)));
        if let Some(image) = &self.featured_image {
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">\n",
                escape_html(image),
                escape_html(&self.title)
            ));
        }
        out.push_str(&self.body_html);
        out.push_str("\n</article>\n");

        if !self.related.is_empty() {
            out.push_str("<aside class=\"related\">\n<ul>\n");
            for related in &self.related {
                out.push_str(&format!(
                    "<li><a href=\"{}.html\">{}</a>",
                    related.slug,
                    escape_html(&related.title)
                ));
                if let Some(excerpt) = &related.excerpt {
                    out.push_str(&format!(" <span>{}</span>", escape_html(excerpt)));
                }
                out.push_str("</li>\n");
            }
            out.push_str("</ul>\n</aside>\n");
        }

        out.push_str(&format!(
            "<footer>Updated {}</footer>\n",
            self.updated_at.format("%Y-%m-%d")
        ));
        out.push_str("</body>\n</html>\n");
        out
    }
}

/// What an export run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    /// Pages written
    pub written: usize,
    /// Unpublished pages left out
    pub skipped: usize,
}

/// Batch HTML export of every published page.
///
/// # Example
///
/// ```no_run
/// use pagedoc::store::{MemoryStore, sample_pages};
/// use pagedoc::SiteExporter;
///
/// let store = MemoryStore::with_pages(sample_pages());
/// let summary = SiteExporter::new("public").with_parallel(true).export(&store)?;
/// println!("wrote {} pages", summary.written);
/// # Ok::<(), pagedoc::Error>(())
/// ```
pub struct SiteExporter {
    out_dir: PathBuf,
    parallel: bool,
    options: RenderOptions,
}

impl SiteExporter {
    /// Create an exporter writing into the given directory.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            parallel: false,
            options: RenderOptions::default(),
        }
    }

    /// Render pages in parallel. Pages are independent, so this only
    /// changes wall-clock time, never output.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the render options used for page bodies.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Export every published page as `<out_dir>/<slug>.html`.
    pub fn export<S: PageStore + Sync>(&self, store: &S) -> Result<ExportSummary> {
        fs::create_dir_all(&self.out_dir)?;

        let pages = store.list()?;
        let (published, unpublished): (Vec<_>, Vec<_>) =
            pages.into_iter().partition(|page| page.published);

        if self.parallel {
            published
                .par_iter()
                .try_for_each(|page| self.export_page(store, page))?;
        } else {
            for page in &published {
                self.export_page(store, page)?;
            }
        }

        debug!(
            "exported {} pages to {} ({} unpublished skipped)",
            published.len(),
            self.out_dir.display(),
            unpublished.len()
        );
        Ok(ExportSummary {
            written: published.len(),
            skipped: unpublished.len(),
        })
    }

    fn export_page<S: PageStore>(&self, store: &S, page: &PageRecord) -> Result<()> {
        let view = page_view(store, &page.slug, &self.options)?;
        let path = self.out_dir.join(format!("{}.html", page.slug));
        fs::write(&path, view.to_html_document())?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}
