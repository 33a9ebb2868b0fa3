//! The asset record shared by every stage of the pipeline.

use crate::content_type::{APPLICATION_JAVASCRIPT, TEXT_HTML, content_type_for};
use crate::loose::{bool_field, str_field};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One fetchable or embeddable resource of a document.
///
/// `content_type` is always derived from `src` when the asset is built from
/// input; a `type` supplied by the caller is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Set once a loader chain finished processing the asset.
    pub loaded: bool,
    /// Embed `raw` instead of referencing `src`.
    pub inline: bool,
    #[serde(rename = "type")]
    pub content_type: String,
    pub src: String,
    pub raw: String,
}

impl Asset {
    /// Creates a referenced (non-inline) asset for `src`.
    pub fn new(src: impl Into<String>) -> Self {
        let src = src.into();
        Self {
            content_type: content_type_for(&src),
            src,
            ..Default::default()
        }
    }

    /// Creates an inline asset for `src`; the content is filled in by a loader.
    pub fn inline(src: impl Into<String>) -> Self {
        Self {
            inline: true,
            ..Self::new(src)
        }
    }

    /// Normalizes a loosely-typed asset description.
    ///
    /// A string is taken as `src`. An object contributes `loaded` and `inline`
    /// when they are booleans and `src`/`raw` when they are strings. Anything
    /// else yields an empty asset.
    pub fn from_value(value: &Value) -> Self {
        let mut asset = Asset::default();
        match value {
            Value::String(src) => asset.src = src.clone(),
            Value::Object(_) => {
                if let Some(loaded) = bool_field(value, "loaded") {
                    asset.loaded = loaded;
                }
                if let Some(inline) = bool_field(value, "inline") {
                    asset.inline = inline;
                }
                asset.src = str_field(value, "src").unwrap_or_default().to_string();
                asset.raw = str_field(value, "raw").unwrap_or_default().to_string();
            }
            _ => {}
        }
        asset.content_type = content_type_for(&asset.src);
        asset
    }

    /// Normalizes an HTML asset: always inline and always `text/html`.
    pub fn html_from_value(value: &Value) -> Self {
        let mut asset = Self::from_value(value);
        asset.inline = true;
        asset.content_type = TEXT_HTML.to_string();
        asset
    }

    /// Builds an already-loaded inline script carrying `raw` as its body.
    pub fn inline_script(raw: impl Into<String>) -> Self {
        Self {
            loaded: true,
            inline: true,
            content_type: APPLICATION_JAVASCRIPT.to_string(),
            src: String::new(),
            raw: raw.into(),
        }
    }

    /// Sets `raw`, returning the asset for chaining.
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = raw.into();
        self
    }

    pub fn is_html(&self) -> bool {
        self.content_type == TEXT_HTML
    }
}
