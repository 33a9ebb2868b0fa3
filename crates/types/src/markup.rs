//! Small string helpers shared by loaders, the injector and the renderer.

use crate::content_type::{APPLICATION_JAVASCRIPT, TEXT_CSS, TEXT_HTML};

/// Marker written into placeholder comments.
pub const COMMENT_TAG: &str = "epii";

/// Placeholder text for inline assets that no loader claimed.
pub const LOADERS_NOT_FOUND: &str = "loaders not found";

/// Placeholder text for inline assets whose file could not be read.
pub const FILE_SYSTEM_ERROR: &str = "file system error";

/// Wraps `info` in a comment appropriate for `content_type`.
///
/// Content types without a comment syntax get the bare text.
pub fn placeholder_comment(content_type: &str, info: &str) -> String {
    match content_type {
        TEXT_HTML => format!("<!-- {COMMENT_TAG} = {info} -->"),
        TEXT_CSS => format!("/* {COMMENT_TAG} = {info} */"),
        APPLICATION_JAVASCRIPT => format!("// {COMMENT_TAG} = {info}"),
        _ => info.to_string(),
    }
}

/// Escapes characters that would let serialized data break out of a
/// `<script>` element or act as a line terminator inside JavaScript source.
///
/// `<`, `>`, `/`, U+2028 and U+2029 become their `\uXXXX` escapes. The result
/// is still valid JSON that decodes to the same value.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("\\u003C"),
            '>' => out.push_str("\\u003E"),
            '/' => out.push_str("\\u002F"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}

/// Returns the URI scheme of `src`, if it has one.
///
/// Protocol-relative locators (`//host/path`) report `https`.
pub fn uri_scheme(src: &str) -> Option<&str> {
    if src.starts_with("//") {
        return Some("https");
    }
    let (scheme, _) = src.split_once("://")?;
    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_valid = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    (starts_alpha && rest_valid).then_some(scheme)
}

/// Escapes text for use inside a double-quoted HTML attribute or element text.
pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
