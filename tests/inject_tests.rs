mod common;

use common::read_fixture;
use epii_render::{Document, get_inject_copy, render_to_string};
use serde::Serialize;
use serde::ser::{Error as _, Serializer};
use serde_json::{Value, json};

const PREFIX: &str = "if(!window.epii)window.epii={};window.epii.state=";

fn sections() -> Document {
    Document::from_value(&json!({ "head": {}, "body": {} }))
}

fn injected_raw(document: &Document) -> &str {
    document
        .body
        .as_ref()
        .and_then(|body| body.inject.as_ref())
        .map(|inject| inject.raw.as_str())
        .expect("document carries an inject script")
}

/// Reverses the escapes applied to embedded state.
fn unescape(literal: &str) -> String {
    literal
        .replace("\\u003C", "<")
        .replace("\\u003E", ">")
        .replace("\\u002F", "/")
        .replace("\\u2028", "\u{2028}")
        .replace("\\u2029", "\u{2029}")
}

#[test]
fn test_plain_state_is_embedded_unescaped() {
    let copy = get_inject_copy(&sections(), Some(&json!({ "text": "hello world" })));
    assert_eq!(
        injected_raw(&copy),
        r#"if(!window.epii)window.epii={};window.epii.state={"text":"hello world"};"#
    );
}

#[test]
fn test_script_close_tag_cannot_escape() {
    let hostile = "</script><script>alert(1)</script>\u{2028}";
    let copy = get_inject_copy(&sections(), Some(&json!({ "text": hostile })));
    let raw = injected_raw(&copy);

    assert!(!raw.contains("</script>"));
    assert!(!raw.contains('<'));
    assert!(!raw.contains('\u{2028}'));

    let literal = raw
        .strip_prefix(PREFIX)
        .and_then(|rest| rest.strip_suffix(';'))
        .expect("initializer shape");
    let decoded: Value = serde_json::from_str(&unescape(literal)).expect("valid JSON after unescape");
    assert_eq!(decoded["text"], hostile);

    // The escaped form is itself valid JSON for the same value.
    let direct: Value = serde_json::from_str(literal).expect("valid JSON as embedded");
    assert_eq!(direct, decoded);
}

#[test]
fn test_missing_state_is_undefined() {
    let copy = get_inject_copy::<Value>(&sections(), None);
    assert_eq!(injected_raw(&copy), format!("{PREFIX}undefined;"));
}

struct Callback;

impl Serialize for Callback {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom("functions cannot be serialized"))
    }
}

#[test]
fn test_unserializable_state_is_undefined() {
    let copy = get_inject_copy(&sections(), Some(&Callback));
    assert_eq!(injected_raw(&copy), format!("{PREFIX}undefined;"));
}

#[test]
fn test_falsy_state_is_undefined() {
    for state in [json!(0), json!(false), json!(""), Value::Null] {
        let copy = get_inject_copy(&sections(), Some(&state));
        assert_eq!(injected_raw(&copy), format!("{PREFIX}undefined;"));
    }
}

#[test]
fn test_empty_containers_are_serialized() {
    for (state, literal) in [(json!({}), "{}"), (json!([]), "[]")] {
        let copy = get_inject_copy(&sections(), Some(&state));
        assert_eq!(injected_raw(&copy), format!("{PREFIX}{literal};"));
    }
}

#[test]
fn test_no_pair_no_script() {
    for input in [json!({}), json!({ "html": "a.html" })] {
        let document = Document::from_value(&input);
        let copy = get_inject_copy(&document, Some(&json!({ "a": 1 })));
        assert_eq!(copy, document);
    }
}

#[test]
fn test_lone_section_is_left_out_of_copy() {
    for input in [
        json!({ "name": "page", "head": { "title": "x" } }),
        json!({ "name": "page", "html": "a.html", "body": {} }),
    ] {
        let document = Document::from_value(&input);
        let copy = get_inject_copy(&document, Some(&json!({ "a": 1 })));
        assert_eq!(copy.name, "page");
        assert_eq!(copy.html, document.html);
        assert!(copy.head.is_none());
        assert!(copy.body.is_none());
    }
}

#[test]
fn test_injected_copy_renders_script_after_content() {
    let mut document = sections();
    if let Some(body) = document.body.as_mut() {
        body.content.raw = "<main></main>".to_string();
    }
    let copy = get_inject_copy(&document, Some(&json!({ "n": 1 })));
    let html = render_to_string(&copy);

    let expected_tail = format!("<main></main>\n<script>\n{PREFIX}{{\"n\":1}};\n</script>\n</body>\n</html>");
    assert!(html.ends_with(&expected_tail), "{html}");
    assert_eq!(render_to_string(&document), read_fixture("null.html").replace("<body>\n", "<body>\n<main></main>\n"));
}
