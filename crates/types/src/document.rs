//! The normalized page model and the normalizer that builds it.

use crate::asset::Asset;
use crate::error::DocumentError;
use crate::loose::{arrayify, is_record, is_truthy, str_field};
use crate::meta::Meta;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `<head>` section of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Head {
    pub metas: Vec<Meta>,
    pub styles: Vec<Asset>,
    pub scripts: Vec<Asset>,
    pub title: String,
    pub icons: Vec<Asset>,
}

/// The `<body>` section of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    /// Inline HTML placed at the top of the body.
    pub content: Asset,
    /// Generated state script; only set on injected copies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inject: Option<Asset>,
    pub scripts: Vec<Asset>,
}

/// A normalized page.
///
/// When `html` is present the page is that raw HTML and nothing else; `head`
/// and `body` may still be populated but are ignored by loaders and the
/// renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<Asset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Head>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

impl Head {
    fn from_value(value: &Value) -> Self {
        Self {
            metas: arrayify(value.get("metas"))
                .into_iter()
                .filter_map(|meta| Meta::try_from(meta).ok())
                .collect(),
            styles: assets_from(value.get("styles")),
            scripts: assets_from(value.get("scripts")),
            title: str_field(value, "title").unwrap_or_default().to_string(),
            icons: assets_from(value.get("icons")),
        }
    }
}

impl Body {
    fn from_value(value: &Value) -> Self {
        Self {
            content: Asset::html_from_value(value.get("content").unwrap_or(&Value::Null)),
            inject: None,
            scripts: assets_from(value.get("scripts")),
        }
    }
}

fn assets_from(value: Option<&Value>) -> Vec<Asset> {
    arrayify(value).into_iter().map(Asset::from_value).collect()
}

impl Document {
    /// Normalizes arbitrary input into a document. Never fails: anything that
    /// is not a record yields an empty, unnamed document.
    pub fn from_value(input: &Value) -> Self {
        let mut document = Document::default();
        if !is_record(input) {
            return document;
        }
        document.name = str_field(input, "name").unwrap_or_default().to_string();
        if let Some(html) = input.get("html").filter(|v| is_truthy(v)) {
            document.html = Some(Asset::html_from_value(html));
        }
        if let Some(head) = input.get("head").filter(|v| is_record(v)) {
            document.head = Some(Head::from_value(head));
        }
        if let Some(body) = input.get("body").filter(|v| is_record(v)) {
            document.body = Some(Body::from_value(body));
        }
        document
    }

    /// Parses JSON text and normalizes it. Fails only on malformed JSON.
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// True when both page sections exist, i.e. the page renders as a full
    /// HTML skeleton.
    pub fn has_sections(&self) -> bool {
        self.head.is_some() && self.body.is_some()
    }

    /// Every asset loaders should consider, in a stable order.
    ///
    /// A raw `html` asset shadows everything else. The injected script is
    /// never included.
    pub fn assets(&self) -> Vec<&Asset> {
        if let Some(html) = &self.html {
            return vec![html];
        }
        let mut assets = Vec::new();
        if let Some(head) = &self.head {
            assets.extend(head.styles.iter());
            assets.extend(head.scripts.iter());
            assets.extend(head.icons.iter());
        }
        if let Some(body) = &self.body {
            assets.extend(body.scripts.iter());
            assets.push(&body.content);
        }
        assets
    }

    /// Mutable counterpart of [`Document::assets`], same order.
    pub fn assets_mut(&mut self) -> Vec<&mut Asset> {
        if let Some(html) = self.html.as_mut() {
            return vec![html];
        }
        let mut assets = Vec::new();
        if let Some(head) = self.head.as_mut() {
            assets.extend(head.styles.iter_mut());
            assets.extend(head.scripts.iter_mut());
            assets.extend(head.icons.iter_mut());
        }
        if let Some(body) = self.body.as_mut() {
            assets.extend(body.scripts.iter_mut());
            assets.push(&mut body.content);
        }
        assets
    }
}

impl From<&Value> for Document {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}
