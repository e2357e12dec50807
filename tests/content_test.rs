//! Integration tests for the content pipeline: wrap, extract, render.

use pagedoc::{
    extract_text, render_html, render_tree, wrap_plain_text, ContentShape, HtmlRenderer,
    PageContent, RenderBlock, RenderOptions,
};
use serde_json::{json, Value};

fn malformed_inputs() -> Vec<Value> {
    vec![
        Value::Null,
        json!(""),
        json!({}),
        json!({"content": "not-an-array"}),
        json!({"content": [{"type": "paragraph"}]}),
        json!(42),
        json!([]),
    ]
}

#[test]
fn test_wrap_then_extract_identity() {
    for body in [
        "",
        "single line",
        "first\nsecond\nthird",
        "embedded\n\nblank lines\n",
        "unicode: caffè, 東京, ☕",
        "markup-ish: <p>&amp;</p>",
    ] {
        assert_eq!(extract_text(&wrap_plain_text(body)), body);
    }
}

#[test]
fn test_wrap_produces_single_paragraph() {
    let wrapped = wrap_plain_text("line one\nline two");
    let blocks = wrapped["content"].as_array().unwrap();
    assert_eq!(blocks.len(), 1, "newlines never split into extra paragraphs");
    assert_eq!(blocks[0]["type"], "paragraph");
    assert_eq!(blocks[0]["content"].as_array().unwrap().len(), 1);
}

#[test]
fn test_extractor_total_over_malformed_input() {
    for value in malformed_inputs() {
        let text = extract_text(&value);
        // Only the legacy string case carries text out of a non-document.
        if !value.is_string() {
            assert_eq!(text, "", "input {:?} should extract to nothing", value);
        }
    }
}

#[test]
fn test_renderer_total_over_malformed_input() {
    for value in malformed_inputs() {
        let _ = render_tree(&value);
        let _ = render_html(&value);
    }
}

#[test]
fn test_renderer_fallback_dump_carries_the_value() {
    let html = render_html(&json!({"foo": "bar"}));
    assert!(html.contains("foo"));
    assert!(html.contains("bar"));

    let tree = render_tree(&json!({"foo": "bar"}));
    assert!(tree[0].is_fallback());
}

#[test]
fn test_order_preserved_in_both_consumers() {
    let words = ["north", "east", "south", "west"];
    let blocks: Vec<Value> = words
        .iter()
        .map(|word| json!({"type": "paragraph", "content": [{"type": "text", "text": word}]}))
        .collect();
    let content = json!({"type": "doc", "content": blocks});

    assert_eq!(extract_text(&content), words.join("\n"));

    let html = render_html(&content);
    assert_eq!(html, "<p>north</p><p>east</p><p>south</p><p>west</p>");
}

#[test]
fn test_unknown_node_kinds_skipped_everywhere() {
    let content = json!({
        "type": "doc",
        "content": [
            {"type": "paragraph", "content": [{"type": "text", "text": "first"}]},
            {"type": "tableOfContents"},
            {"type": "paragraph", "content": [{"type": "text", "text": "second"}]}
        ]
    });

    assert_eq!(extract_text(&content), "first\nsecond");
    assert_eq!(render_html(&content), "<p>first</p><p>second</p>");
}

#[test]
fn test_heading_level_defaults() {
    let content = json!({
        "type": "doc",
        "content": [
            {"type": "heading", "content": [{"type": "text", "text": "no attrs"}]},
            {"type": "heading", "attrs": {"level": 4}, "content": [{"type": "text", "text": "four"}]}
        ]
    });
    assert_eq!(render_html(&content), "<h2>no attrs</h2><h4>four</h4>");
}

#[test]
fn test_end_to_end_hello_world() {
    let content = json!({
        "type": "doc",
        "content": [
            {"type": "heading", "attrs": {"level": 1}, "content": [{"type": "text", "text": "Hello"}]},
            {"type": "paragraph", "content": [{"type": "text", "text": "World"}]}
        ]
    });

    assert_eq!(extract_text(&content), "Hello\nWorld");

    let tree = render_tree(&content);
    assert_eq!(
        tree,
        vec![
            RenderBlock::Heading { level: 1, text: "Hello".to_string() },
            RenderBlock::Paragraph { text: "World".to_string() },
        ]
    );
    assert_eq!(render_html(&content), "<h1>Hello</h1><p>World</p>");
}

#[test]
fn test_full_document_through_facade() {
    let content = json!({
        "type": "doc",
        "content": [
            {"type": "heading", "attrs": {"level": 1}, "content": [{"type": "text", "text": "Welcome"}]},
            {"type": "paragraph", "content": [{"type": "text", "text": "Intro paragraph."}]},
            {"type": "bulletList", "content": [
                {"type": "listItem", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "point one"}]}]},
                {"type": "listItem", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "point two"}]}]}
            ]},
            {"type": "blockquote", "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": "a quote"}]}
            ]},
            {"type": "paragraph", "content": [{"type": "text", "text": "Outro."}]}
        ]
    });

    let page = PageContent::new(content);
    assert_eq!(page.shape(), ContentShape::Document);
    assert_eq!(page.tree().len(), 5);
    assert_eq!(page.to_text(), "Welcome\nIntro paragraph.\n\n\nOutro.");
    assert_eq!(
        page.to_html(),
        "<h1>Welcome</h1><p>Intro paragraph.</p>\
         <ul><li><p>point one</p></li><li><p>point two</p></li></ul>\
         <blockquote><p>a quote</p></blockquote><p>Outro.</p>"
    );

    let json = page.to_json(false).unwrap();
    assert!(json.contains("\"kind\":\"list\""));
}

#[test]
fn test_render_options_apply_end_to_end() {
    let content = json!({
        "type": "doc",
        "content": [
            {"type": "heading", "attrs": {"level": 5}, "content": [{"type": "text", "text": "Deep"}]}
        ]
    });

    let options = RenderOptions::new()
        .with_heading_ceiling(3)
        .with_class_prefix("site");
    let html = HtmlRenderer::with_options(options).render(&content);
    assert_eq!(html, "<h3 class=\"site-heading\">Deep</h3>");
}

#[test]
fn test_escaping_is_never_skipped() {
    let content = json!({
        "type": "doc",
        "content": [
            {"type": "paragraph", "content": [{"type": "text", "text": "<b>bold?</b> & more"}]},
            {"type": "bulletList", "content": [
                {"type": "listItem", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "\"quoted\""}]}]}
            ]}
        ]
    });

    let html = render_html(&content);
    assert!(!html.contains("<b>"));
    assert!(html.contains("&lt;b&gt;bold?&lt;/b&gt; &amp; more"));
    assert!(html.contains("&quot;quoted&quot;"));
}
