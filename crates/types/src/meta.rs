use crate::error::DocumentError;
use crate::loose::str_field;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A `<meta name=... content=...>` entry.
///
/// `http-equiv` metas are not modelled and never rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub name: String,
    pub content: String,
}

impl Meta {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl TryFrom<&Value> for Meta {
    type Error = DocumentError;

    /// Fails on `null`: the normalizer never passes one, so receiving it is a
    /// caller bug. Non-string fields read as empty.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        if value.is_null() {
            return Err(DocumentError::NullMeta);
        }
        Ok(Self {
            name: str_field(value, "name").unwrap_or_default().to_string(),
            content: str_field(value, "content").unwrap_or_default().to_string(),
        })
    }
}
