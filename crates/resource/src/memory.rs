//! An in-memory loader.
//!
//! Contents must be registered before the pipeline runs. Works anywhere,
//! including environments without filesystem access.

use async_trait::async_trait;
use epii_traits::{Loader, LoaderError};
use epii_types::Asset;
use epii_types::markup::placeholder_comment;
use log::warn;
use std::collections::HashMap;
use std::sync::RwLock;

/// Serves inline assets whose `src` was registered with [`MemoryLoader::add`].
///
/// Referenced (non-inline) assets and unknown locators are not matched, so
/// other loaders or the fallback handle them.
#[derive(Debug, Default)]
pub struct MemoryLoader {
    contents: RwLock<HashMap<String, String>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `content` under `src`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `LoaderError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, src: impl Into<String>, content: impl Into<String>) -> Result<(), LoaderError> {
        let src = src.into();
        let mut contents = self.contents.write().map_err(|_| LoaderError::LoadFailed {
            path: src.clone(),
            message: "memory store lock poisoned".to_string(),
        })?;
        contents.insert(src, content.into());
        Ok(())
    }

    /// Returns `None` if the lock is poisoned or nothing is stored under `src`.
    pub fn remove(&self, src: &str) -> Option<String> {
        self.contents.write().ok()?.remove(src)
    }

    pub fn contains(&self, src: &str) -> bool {
        self.contents
            .read()
            .map(|c| c.contains_key(src))
            .unwrap_or(false)
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.contents.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.contents.read().map(|c| c.is_empty()).unwrap_or(true)
    }

    fn get(&self, src: &str) -> Result<String, LoaderError> {
        let contents = self.contents.read().map_err(|_| LoaderError::LoadFailed {
            path: src.to_string(),
            message: "memory store lock poisoned".to_string(),
        })?;
        contents
            .get(src)
            .cloned()
            .ok_or_else(|| LoaderError::NotFound(src.to_string()))
    }
}

#[async_trait]
impl Loader for MemoryLoader {
    fn match_asset(&self, asset: &Asset) -> bool {
        asset.inline && self.contains(&asset.src)
    }

    async fn try_process(&self, asset: &mut Asset) {
        match self.get(&asset.src) {
            Ok(content) => asset.raw = content,
            Err(e) => {
                // Removed between matching and processing.
                warn!("[MemoryLoader] {}", e);
                asset.raw = placeholder_comment(&asset.content_type, "resource not found");
            }
        }
    }

    fn name(&self) -> &'static str {
        "MemoryLoader"
    }
}
