//! Content document data model.

mod document;
mod node;
mod page;

pub(crate) use node::concat_runs;

pub use document::ContentDocument;
pub use node::{
    ContentNode, HeadingAttrs, Inline, ItemParagraph, ListItem, TextRun, DEFAULT_HEADING_LEVEL,
};
pub use page::{PageDraft, PageRecord};
