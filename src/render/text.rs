//! Plain-text extraction from stored content.

use serde_json::Value;

/// Extract editable plain text from a stored content value.
///
/// Total over any JSON input:
///
/// - `null` and other non-document shapes yield an empty string
/// - a plain string is returned unchanged (legacy rows stored raw text)
/// - a document yields one entry per top-level node carrying a `content`
///   array: the `text` of every child, concatenated in order, with entries
///   joined by single newlines. Nodes without a `content` array contribute
///   nothing, not even an empty entry.
///
/// Flattening is one level deep, so heading levels disappear and list or
/// quote text (which sits two levels down) is reduced to an empty entry.
/// That loss is the accepted editing model: structure survives until the
/// first re-edit, plain paragraphs round-trip exactly.
///
/// # Example
///
/// ```
/// use pagedoc::extract_text;
/// use serde_json::json;
///
/// let content = json!({
///     "type": "doc",
///     "content": [
///         {"type": "heading", "attrs": {"level": 2}, "content": [{"type": "text", "text": "Team"}]},
///         {"type": "paragraph", "content": [{"type": "text", "text": "We are small."}]}
///     ]
/// });
/// assert_eq!(extract_text(&content), "Team\nWe are small.");
/// ```
pub fn extract_text(content: &Value) -> String {
    if let Some(text) = content.as_str() {
        return text.to_string();
    }

    let Some(blocks) = content.get("content").and_then(Value::as_array) else {
        return String::new();
    };

    let mut lines: Vec<String> = Vec::with_capacity(blocks.len());
    for block in blocks {
        let Some(children) = block.get("content").and_then(Value::as_array) else {
            continue;
        };
        let mut line = String::new();
        for child in children {
            if let Some(text) = child.get("text").and_then(Value::as_str) {
                line.push_str(text);
            }
        }
        lines.push(line);
    }
    lines.join("\n")
}
