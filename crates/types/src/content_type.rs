//! Extension-based content type lookup.
//!
//! Only the file extension of a locator is inspected; query strings and
//! fragments are not stripped, so `app.js?v=1` resolves to nothing.

/// Content type used for HTML assets.
pub const TEXT_HTML: &str = "text/html";
/// Content type used for stylesheets.
pub const TEXT_CSS: &str = "text/css";
/// Content type used for scripts.
pub const APPLICATION_JAVASCRIPT: &str = "application/javascript";
/// Returned by [`content_type_for`] when nothing else matches.
pub const TEXT_PLAIN: &str = "text/plain";

const TABLE: &[(&str, &str)] = &[
    ("html", TEXT_HTML),
    ("htm", TEXT_HTML),
    ("shtml", TEXT_HTML),
    ("css", TEXT_CSS),
    ("js", APPLICATION_JAVASCRIPT),
    ("mjs", APPLICATION_JAVASCRIPT),
    ("cjs", APPLICATION_JAVASCRIPT),
    ("json", "application/json"),
    ("map", "application/json"),
    ("xml", "application/xml"),
    ("wasm", "application/wasm"),
    ("txt", TEXT_PLAIN),
    ("md", "text/markdown"),
    ("csv", "text/csv"),
    ("png", "image/png"),
    ("apng", "image/apng"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("avif", "image/avif"),
    ("bmp", "image/bmp"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("ttf", "font/ttf"),
    ("otf", "font/otf"),
    ("eot", "application/vnd.ms-fontobject"),
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
    ("mp3", "audio/mpeg"),
    ("ogg", "audio/ogg"),
    ("wav", "audio/wav"),
    ("pdf", "application/pdf"),
];

/// Extracts the lowercase extension of `path`.
///
/// A path without any dot is treated as a bare extension (`"css"` yields
/// `"css"`). A dot that only starts the last segment (`"dir/.hidden"`) does not
/// count as an extension separator.
fn extension(path: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    let segment = path.rsplit(['/', '\\']).next().unwrap_or(path);
    if !path.contains('.') {
        return (!segment.is_empty()).then(|| segment.to_ascii_lowercase());
    }
    match segment.rfind('.') {
        Some(0) | None => None,
        Some(idx) => {
            let ext = &segment[idx + 1..];
            (!ext.is_empty()).then(|| ext.to_ascii_lowercase())
        }
    }
}

/// Looks up the content type registered for the extension of `path`.
pub fn lookup(path: &str) -> Option<&'static str> {
    let ext = extension(path)?;
    TABLE
        .iter()
        .find(|(candidate, _)| *candidate == ext)
        .map(|(_, content_type)| *content_type)
}

/// Resolves the content type of `path`, falling back to `text/plain`.
pub fn content_type_for(path: &str) -> String {
    lookup(path).unwrap_or(TEXT_PLAIN).to_string()
}
