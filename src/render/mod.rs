//! Content rendering: plain-text extraction, display-tree dispatch, and
//! HTML/JSON output.

mod html;
mod json;
mod options;
mod text;
mod tree;

pub use html::{escape_html, HtmlRenderer};
pub use json::tree_to_json;
pub use options::RenderOptions;
pub use text::extract_text;
pub use tree::{render_tree, RenderBlock};
