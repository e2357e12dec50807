//! JSON serialization of display trees.

use crate::error::Result;

use super::tree::RenderBlock;

/// Serialize a display tree to JSON, for tooling and debugging the
/// dispatch stage without going through HTML.
pub fn tree_to_json(blocks: &[RenderBlock], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(blocks)?
    } else {
        serde_json::to_string(blocks)?
    };
    Ok(json)
}
