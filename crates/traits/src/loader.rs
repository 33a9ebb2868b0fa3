//! Loader trait for resolving document assets.
//!
//! A loader decides which assets it applies to and then resolves them in
//! place: reading inline content, rewriting locators, transforming raw text.

use async_trait::async_trait;
use epii_types::Asset;
use epii_types::markup::{LOADERS_NOT_FOUND, placeholder_comment};
use std::fmt::Debug;
use thiserror::Error;

/// Error type for loader construction and internal resolution failures.
///
/// Resolution errors never leave [`Loader::try_process`]; implementations
/// turn them into a placeholder comment inside the asset.
#[derive(Error, Debug, Clone)]
pub enum LoaderError {
    #[error("Loader option `source` is required")]
    MissingSource,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

/// A strategy for resolving assets.
///
/// Several loaders may match the same asset; the pipeline then runs them one
/// after another in the order they were registered, so a later loader sees
/// the changes of an earlier one.
///
/// # Implementations
///
/// - `FileLoader`: reads inline assets from disk, prefixes referenced ones
/// - `MemoryLoader`: serves inline assets from a pre-populated store
/// - [`NullLoader`]: the fallback used when nothing else matches
///
/// # Example
///
/// ```ignore
/// #[derive(Debug)]
/// struct Minify;
///
/// #[async_trait]
/// impl Loader for Minify {
///     fn match_asset(&self, asset: &Asset) -> bool {
///         asset.inline && asset.content_type == "text/css"
///     }
///
///     async fn try_process(&self, asset: &mut Asset) {
///         asset.raw = asset.raw.split_whitespace().collect::<Vec<_>>().join(" ");
///     }
///
///     fn name(&self) -> &'static str {
///         "Minify"
///     }
/// }
/// ```
#[async_trait]
pub trait Loader: Send + Sync + Debug {
    /// Whether this loader applies to `asset`. Must not have side effects.
    fn match_asset(&self, asset: &Asset) -> bool;

    /// Resolves `asset` in place.
    ///
    /// There is no error channel: failures must be reported inside the asset,
    /// typically as a placeholder comment in `raw`.
    async fn try_process(&self, asset: &mut Asset);

    /// Returns a human-readable name for this loader (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// The fallback loader.
///
/// Matches everything. Referenced assets are left untouched; inline assets
/// get a "loaders not found" placeholder so they never render empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLoader;

impl NullLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Loader for NullLoader {
    fn match_asset(&self, _asset: &Asset) -> bool {
        true
    }

    async fn try_process(&self, asset: &mut Asset) {
        if asset.inline {
            asset.raw = placeholder_comment(&asset.content_type, LOADERS_NOT_FOUND);
        }
    }

    fn name(&self) -> &'static str {
        "NullLoader"
    }
}
