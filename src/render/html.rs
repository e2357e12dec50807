//! HTML output.

use serde_json::Value;

use super::options::RenderOptions;
use super::tree::{render_tree, RenderBlock};

/// Escape text for safe inclusion in HTML element content or attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders display trees to HTML strings.
///
/// # Example
///
/// ```
/// use pagedoc::{HtmlRenderer, RenderOptions};
/// use serde_json::json;
///
/// let content = json!({
///     "type": "doc",
///     "content": [{"type": "paragraph", "content": [{"type": "text", "text": "Hi"}]}]
/// });
/// let html = HtmlRenderer::new().render(&content);
/// assert_eq!(html, "<p>Hi</p>");
/// ```
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a renderer with default options.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
        }
    }

    /// Create a renderer with the given options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a stored content value to HTML.
    pub fn render(&self, content: &Value) -> String {
        self.render_blocks(&render_tree(content))
    }

    /// Render an already-built display tree to HTML.
    pub fn render_blocks(&self, blocks: &[RenderBlock]) -> String {
        let mut out = String::new();
        for block in blocks {
            self.write_block(&mut out, block);
            if self.options.pretty {
                out.push('\n');
            }
        }
        out
    }

    fn write_block(&self, out: &mut String, block: &RenderBlock) {
        match block {
            RenderBlock::Heading { level, text } => self.write_heading(out, *level, text),
            RenderBlock::Paragraph { text } => {
                out.push_str(&format!("<p{}>", self.class_attr("paragraph")));
                out.push_str(&escape_html(text));
                out.push_str("</p>");
            }
            RenderBlock::List { ordered, items } => self.write_list(out, *ordered, items),
            RenderBlock::Quote { paragraphs } => self.write_quote(out, paragraphs),
            RenderBlock::Fallback { raw } => {
                out.push_str(&format!("<p{}>", self.class_attr("fallback")));
                out.push_str(&escape_html(raw));
                out.push_str("</p>");
            }
        }
    }

    fn write_heading(&self, out: &mut String, level: u8, text: &str) {
        // Stored levels pass through the tree untouched; the tag is capped
        // here so output stays inside h1..h6.
        let tag_level = level.clamp(1, self.options.heading_ceiling);
        out.push_str(&format!("<h{}{}>", tag_level, self.class_attr("heading")));
        out.push_str(&escape_html(text));
        out.push_str(&format!("</h{}>", tag_level));
    }

    fn write_list(&self, out: &mut String, ordered: bool, items: &[Vec<String>]) {
        let tag = if ordered { "ol" } else { "ul" };
        out.push_str(&format!("<{}{}>", tag, self.class_attr("list")));
        for paragraphs in items {
            if self.options.pretty {
                out.push_str("\n  ");
            }
            out.push_str("<li>");
            for text in paragraphs {
                out.push_str("<p>");
                out.push_str(&escape_html(text));
                out.push_str("</p>");
            }
            out.push_str("</li>");
        }
        if self.options.pretty && !items.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("</{}>", tag));
    }

    fn write_quote(&self, out: &mut String, paragraphs: &[String]) {
        out.push_str(&format!("<blockquote{}>", self.class_attr("quote")));
        for text in paragraphs {
            if self.options.pretty {
                out.push_str("\n  ");
            }
            out.push_str("<p>");
            out.push_str(&escape_html(text));
            out.push_str("</p>");
        }
        if self.options.pretty && !paragraphs.is_empty() {
            out.push('\n');
        }
        out.push_str("</blockquote>");
    }

    fn class_attr(&self, kind: &str) -> String {
        match &self.options.class_prefix {
            Some(prefix) => format!(" class=\"{}-{}\"", prefix, kind),
            None => String::new(),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(blocks: Value) -> Value {
        json!({"type": "doc", "content": blocks})
    }

    #[test]
    fn test_render_basic_blocks() {
        let content = doc(json!([
            {"type": "heading", "attrs": {"level": 1}, "content": [{"type": "text", "text": "Welcome"}]},
            {"type": "paragraph", "content": [{"type": "text", "text": "Intro."}]},
            {"type": "bulletList", "content": [
                {"type": "listItem", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "one"}]}]},
                {"type": "listItem", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "two"}]}]}
            ]},
            {"type": "blockquote", "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": "quoted"}]}
            ]}
        ]));

        let html = HtmlRenderer::new().render(&content);
        assert_eq!(
            html,
            "<h1>Welcome</h1><p>Intro.</p>\
             <ul><li><p>one</p></li><li><p>two</p></li></ul>\
             <blockquote><p>quoted</p></blockquote>"
        );
    }

    #[test]
    fn test_escapes_special_characters() {
        let content = doc(json!([
            {"type": "paragraph", "content": [{"type": "text", "text": "a < b & \"c\" > 'd'"}]}
        ]));
        let html = HtmlRenderer::new().render(&content);
        assert_eq!(html, "<p>a &lt; b &amp; &quot;c&quot; &gt; &#39;d&#39;</p>");
    }

    #[test]
    fn test_fallback_dump_is_escaped() {
        let html = HtmlRenderer::new().render(&json!({"foo": "<script>"}));
        assert!(html.starts_with("<p>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_heading_tag_capped_at_ceiling() {
        let content = doc(json!([
            {"type": "heading", "attrs": {"level": 9}, "content": [{"type": "text", "text": "deep"}]}
        ]));

        let html = HtmlRenderer::new().render(&content);
        assert_eq!(html, "<h6>deep</h6>");

        let html = HtmlRenderer::with_options(RenderOptions::new().with_heading_ceiling(3))
            .render(&content);
        assert_eq!(html, "<h3>deep</h3>");
    }

    #[test]
    fn test_class_prefix() {
        let content = doc(json!([
            {"type": "heading", "attrs": {"level": 2}, "content": [{"type": "text", "text": "T"}]},
            {"type": "paragraph", "content": [{"type": "text", "text": "p"}]}
        ]));
        let html = HtmlRenderer::with_options(RenderOptions::new().with_class_prefix("page"))
            .render(&content);
        assert_eq!(
            html,
            "<h2 class=\"page-heading\">T</h2><p class=\"page-paragraph\">p</p>"
        );
    }

    #[test]
    fn test_pretty_output() {
        let content = doc(json!([
            {"type": "paragraph", "content": [{"type": "text", "text": "a"}]},
            {"type": "bulletList", "content": [
                {"type": "listItem", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "x"}]}]}
            ]}
        ]));
        let html = HtmlRenderer::with_options(RenderOptions::new().with_pretty(true))
            .render(&content);
        assert_eq!(html, "<p>a</p>\n<ul>\n  <li><p>x</p></li>\n</ul>\n");
    }

    #[test]
    fn test_null_and_empty_render_empty() {
        assert_eq!(HtmlRenderer::new().render(&Value::Null), "");
        assert_eq!(HtmlRenderer::new().render(&doc(json!([]))), "");
    }

    #[test]
    fn test_empty_list_and_quote_still_emit_elements() {
        let content = doc(json!([
            {"type": "bulletList", "content": []},
            {"type": "blockquote", "content": []}
        ]));
        let html = HtmlRenderer::new().render(&content);
        assert_eq!(html, "<ul></ul><blockquote></blockquote>");
    }
}
