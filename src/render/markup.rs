//! Per-element HTML fragments.

use epii_types::markup::escape_attr;
use epii_types::{Asset, Meta};

/// `http-equiv` is never rendered; a meta without a name renders to nothing.
pub(crate) fn render_meta(meta: &Meta) -> String {
    if meta.name.is_empty() {
        return String::new();
    }
    format!(
        r#"<meta name="{}" content="{}" />"#,
        escape_attr(&meta.name),
        escape_attr(&meta.content)
    )
}

pub(crate) fn render_style(style: &Asset) -> String {
    if !style.raw.is_empty() {
        return format!("<style>\n{}\n</style>", style.raw);
    }
    format!(r#"<link rel="stylesheet" href="{}" />"#, escape_attr(&style.src))
}

pub(crate) fn render_script(script: &Asset) -> String {
    if !script.raw.is_empty() {
        return format!("<script>\n{}\n</script>", script.raw);
    }
    format!(
        r#"<script type="{}" src="{}"></script>"#,
        escape_attr(&script.content_type),
        escape_attr(&script.src)
    )
}

/// Icons are always referenced, never embedded.
pub(crate) fn render_icon(icon: &Asset) -> String {
    format!(
        r#"<link rel="icon" type="{}" href="{}" />"#,
        escape_attr(&icon.content_type),
        escape_attr(&icon.src)
    )
}

pub(crate) fn render_title(title: &str) -> String {
    format!("<title>{}</title>", escape_attr(title))
}
