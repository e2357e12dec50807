//! Stored-content shape detection.
//!
//! The `content` field of a page is opaque to the storage layer, so nothing
//! guarantees it holds a well-formed content document. Both consumers (the
//! plain-text extractor and the page renderer) classify the value through
//! this module before touching it, and degrade instead of failing when the
//! shape is off.

use serde_json::Value;

/// Shape of an arbitrary stored `content` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentShape {
    /// Null: content was never set.
    Empty,
    /// A bare string: legacy plain-text content.
    PlainText,
    /// An object carrying a `content` array: a content document.
    Document,
    /// Anything else: numbers, arrays, objects without a `content` array.
    Unrecognized,
}

impl ContentShape {
    /// Check whether this shape can be walked as a document.
    pub fn is_document(&self) -> bool {
        matches!(self, ContentShape::Document)
    }

    /// Check whether this shape carries any content at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, ContentShape::Empty)
    }
}

impl std::fmt::Display for ContentShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ContentShape::Empty => "empty",
            ContentShape::PlainText => "plain text",
            ContentShape::Document => "document",
            ContentShape::Unrecognized => "unrecognized",
        };
        write!(f, "{}", name)
    }
}

/// Classify a stored content value.
///
/// Never fails; every JSON value maps to one of the four shapes.
///
/// # Example
/// ```
/// use pagedoc::detect::{detect_shape, ContentShape};
/// use serde_json::json;
///
/// let doc = json!({"type": "doc", "content": []});
/// assert_eq!(detect_shape(&doc), ContentShape::Document);
/// assert_eq!(detect_shape(&json!("plain body")), ContentShape::PlainText);
/// assert_eq!(detect_shape(&json!({"foo": "bar"})), ContentShape::Unrecognized);
/// ```
pub fn detect_shape(value: &Value) -> ContentShape {
    match value {
        Value::Null => ContentShape::Empty,
        Value::String(_) => ContentShape::PlainText,
        Value::Object(map) => match map.get("content") {
            Some(Value::Array(_)) => ContentShape::Document,
            _ => ContentShape::Unrecognized,
        },
        _ => ContentShape::Unrecognized,
    }
}

/// Check if a stored value is a walkable content document.
pub fn is_document(value: &Value) -> bool {
    detect_shape(value).is_document()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_document() {
        let value = json!({"type": "doc", "content": [{"type": "paragraph"}]});
        assert_eq!(detect_shape(&value), ContentShape::Document);
        assert!(is_document(&value));
    }

    #[test]
    fn test_detect_document_without_doc_tag() {
        // The `content` array is what makes a document walkable; the root
        // discriminator is not consulted on read.
        let value = json!({"content": []});
        assert_eq!(detect_shape(&value), ContentShape::Document);
    }

    #[test]
    fn test_detect_plain_text() {
        assert_eq!(detect_shape(&json!("hello")), ContentShape::PlainText);
        assert_eq!(detect_shape(&json!("")), ContentShape::PlainText);
    }

    #[test]
    fn test_detect_empty() {
        assert_eq!(detect_shape(&Value::Null), ContentShape::Empty);
        assert!(detect_shape(&Value::Null).is_empty());
    }

    #[test]
    fn test_detect_unrecognized() {
        assert_eq!(detect_shape(&json!(42)), ContentShape::Unrecognized);
        assert_eq!(detect_shape(&json!([])), ContentShape::Unrecognized);
        assert_eq!(detect_shape(&json!({})), ContentShape::Unrecognized);
        assert_eq!(
            detect_shape(&json!({"content": "not-an-array"})),
            ContentShape::Unrecognized
        );
        assert_eq!(detect_shape(&json!(true)), ContentShape::Unrecognized);
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(ContentShape::Document.to_string(), "document");
        assert_eq!(ContentShape::PlainText.to_string(), "plain text");
    }
}
