//! Rendering of a normalized document to an HTML string.
//!
//! Rendering is pure: no I/O, no mutation. Raw asset content is embedded
//! verbatim; making it safe is the job of whoever produced it.

mod markup;

use epii_types::Document;
use markup::{render_icon, render_meta, render_script, render_style, render_title};

const DOCTYPE: &str = "<!DOCTYPE html>";
const CHARSET: &str = r#"<meta charset="utf8" />"#;

/// Renders `document` to HTML.
///
/// - a raw `html` asset wins and is returned as is;
/// - otherwise a head/body pair renders the full page skeleton;
/// - anything else renders to an empty string.
pub fn render_to_string(document: &Document) -> String {
    if let Some(html) = &document.html {
        return html.raw.clone();
    }
    let (Some(head), Some(body)) = (&document.head, &document.body) else {
        return String::new();
    };

    let mut lines: Vec<String> = vec![
        DOCTYPE.to_string(),
        "<html>".to_string(),
        "<head>".to_string(),
        CHARSET.to_string(),
    ];
    lines.extend(head.metas.iter().map(render_meta));
    lines.extend(head.styles.iter().map(render_style));
    lines.extend(head.scripts.iter().map(render_script));
    lines.push(render_title(&head.title));
    lines.extend(head.icons.iter().map(render_icon));
    lines.push("</head>".to_string());
    lines.push("<body>".to_string());
    lines.push(body.content.raw.clone());
    if let Some(inject) = &body.inject {
        lines.push(render_script(inject));
    }
    lines.extend(body.scripts.iter().map(render_script));
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());

    lines.retain(|line| !line.is_empty());
    lines.join("\n")
}
