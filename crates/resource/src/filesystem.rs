//! Filesystem-based loader for native platforms.
//!
//! Inline assets are read from a source directory; referenced assets get
//! their locator rewritten under a public URL prefix.
//!
//! # Security
//!
//! Locators containing `..` are never read, so an inline asset cannot pull in
//! files from outside the source directory.

use async_trait::async_trait;
use epii_traits::{Loader, LoaderError};
use epii_types::Asset;
use epii_types::markup::{FILE_SYSTEM_ERROR, placeholder_comment, uri_scheme};
use log::{debug, error};
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

/// Options for [`FileLoader`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileLoaderOptions {
    /// URL prefix prepended to referenced assets. Always starts with `/`.
    pub prefix: String,
    /// Directory inline assets are read from. Required.
    pub source: PathBuf,
}

impl Default for FileLoaderOptions {
    fn default() -> Self {
        Self {
            prefix: "/".to_string(),
            source: PathBuf::new(),
        }
    }
}

impl FileLoaderOptions {
    pub fn new<P: AsRef<Path>>(source: P) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

/// A loader for assets that live on the local filesystem.
///
/// Matches every asset whose `src` has no URI scheme. Inline assets are read
/// from `source`; a failed read leaves a "file system error" placeholder and
/// the asset still counts as processed. Referenced assets have `src` rewritten
/// to `prefix` joined with the original locator.
#[derive(Debug, Clone)]
pub struct FileLoader {
    prefix: String,
    source: PathBuf,
}

impl FileLoader {
    /// Creates a loader, normalizing the prefix to start with `/`.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::MissingSource`] when `source` is empty.
    pub fn new(options: FileLoaderOptions) -> Result<Self, LoaderError> {
        let FileLoaderOptions { mut prefix, source } = options;
        if !prefix.starts_with('/') {
            prefix.insert(0, '/');
        }
        if source.as_os_str().is_empty() {
            return Err(LoaderError::MissingSource);
        }
        Ok(Self { prefix, source })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Resolves `src` below the source directory.
    ///
    /// Leading slashes are treated as relative to `source`. Returns `None`
    /// for locators that would escape it.
    fn resolve_path_safe(&self, src: &str) -> Option<PathBuf> {
        let relative = Path::new(src.trim_start_matches('/'));
        for component in relative.components() {
            match component {
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
                Component::CurDir | Component::Normal(_) => {}
            }
        }
        Some(self.source.join(relative))
    }

    async fn read_inline(&self, src: &str) -> Result<String, LoaderError> {
        let path = self
            .resolve_path_safe(src)
            .ok_or_else(|| LoaderError::NotFound(format!("{} (path traversal blocked)", src)))?;
        debug!("[FileLoader] reading {}", path.display());
        match tokio::fs::read_to_string(&path).await {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(LoaderError::NotFound(path.display().to_string()))
            }
            result => Ok(result?),
        }
    }
}

/// Joins URL path segments the way a POSIX path join does: empty and `.`
/// segments vanish and `..` removes the previous segment without climbing
/// above the root.
pub(crate) fn join_url_path(prefix: &str, src: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in prefix.split('/').chain(src.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    let mut joined = format!("/{}", segments.join("/"));
    if src.ends_with('/') && joined.len() > 1 {
        joined.push('/');
    }
    joined
}

#[async_trait]
impl Loader for FileLoader {
    fn match_asset(&self, asset: &Asset) -> bool {
        uri_scheme(&asset.src).is_none()
    }

    async fn try_process(&self, asset: &mut Asset) {
        if !asset.inline {
            asset.src = join_url_path(&self.prefix, &asset.src);
            return;
        }
        if !asset.raw.is_empty() && asset.src.is_empty() {
            return;
        }
        match self.read_inline(&asset.src).await {
            Ok(content) => asset.raw = content,
            Err(e) => {
                error!("[FileLoader] {}", e);
                asset.raw = placeholder_comment(&asset.content_type, FILE_SYSTEM_ERROR);
            }
        }
    }

    fn name(&self) -> &'static str {
        "FileLoader"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_requires_source() {
        let result = FileLoader::new(FileLoaderOptions::default());
        assert!(matches!(result, Err(LoaderError::MissingSource)));
    }

    #[test]
    fn test_prefix_gets_leading_slash() {
        let loader = FileLoader::new(FileLoaderOptions::new("fixtures").with_prefix("__file")).unwrap();
        assert_eq!(loader.prefix(), "/__file");

        let loader = FileLoader::new(FileLoaderOptions::new("fixtures")).unwrap();
        assert_eq!(loader.prefix(), "/");
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: FileLoaderOptions = serde_json::from_str(r#"{ "source": "dist" }"#).unwrap();
        assert_eq!(options.prefix, "/");
        assert_eq!(options.source, PathBuf::from("dist"));
    }

    #[test]
    fn test_matches_only_schemeless_sources() {
        let loader = FileLoader::new(FileLoaderOptions::new("fixtures")).unwrap();
        assert!(loader.match_asset(&Asset::new("test.css")));
        assert!(loader.match_asset(&Asset::new("/abs/test.css")));
        assert!(loader.match_asset(&Asset::new("http.css")));
        assert!(!loader.match_asset(&Asset::new("http://example.com/a.css")));
        assert!(!loader.match_asset(&Asset::new("//cdn.example.com/a.js")));
    }

    #[test]
    fn test_join_url_path() {
        assert_eq!(join_url_path("/__file", "http.css"), "/__file/http.css");
        assert_eq!(join_url_path("/", "a.js"), "/a.js");
        assert_eq!(join_url_path("/static/", "/css/a.css"), "/static/css/a.css");
        assert_eq!(join_url_path("/static", "./a/../b.js"), "/static/b.js");
        assert_eq!(join_url_path("/", "../../x.js"), "/x.js");
        assert_eq!(join_url_path("/", ""), "/");
        assert_eq!(join_url_path("/pub", "dir/"), "/pub/dir/");
    }

    #[tokio::test]
    async fn test_reads_inline_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("test.css"), "body { margin: 0; }").unwrap();

        let loader = FileLoader::new(FileLoaderOptions::new(dir.path())).unwrap();
        let mut asset = Asset::inline("test.css");
        loader.try_process(&mut asset).await;
        assert_eq!(asset.raw, "body { margin: 0; }");
    }

    #[tokio::test]
    async fn test_missing_file_becomes_placeholder() {
        let dir = tempdir().unwrap();
        let loader = FileLoader::new(FileLoaderOptions::new(dir.path())).unwrap();

        let mut style = Asset::inline("null.css");
        loader.try_process(&mut style).await;
        assert_eq!(style.raw, "/* epii = file system error */");

        let mut script = Asset::inline("null.js");
        loader.try_process(&mut script).await;
        assert_eq!(script.raw, "// epii = file system error");
    }

    #[tokio::test]
    async fn test_read_errors_are_classified() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("styles.css")).unwrap();
        let loader = FileLoader::new(FileLoaderOptions::new(dir.path())).unwrap();

        let missing = loader.read_inline("absent.css").await;
        assert!(matches!(missing, Err(LoaderError::NotFound(_))));

        let directory = loader.read_inline("styles.css").await;
        assert!(matches!(directory, Err(LoaderError::Io(_))));

        let mut asset = Asset::inline("styles.css");
        loader.try_process(&mut asset).await;
        assert_eq!(asset.raw, "/* epii = file system error */");
    }

    #[tokio::test]
    async fn test_blocks_path_traversal() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("public");
        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("secret.js"), "secret").unwrap();

        let loader = FileLoader::new(FileLoaderOptions::new(&nested)).unwrap();
        let mut asset = Asset::inline("../secret.js");
        loader.try_process(&mut asset).await;
        assert_eq!(asset.raw, "// epii = file system error");
    }

    #[tokio::test]
    async fn test_leading_slash_stays_inside_source() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("app.js"), "run();").unwrap();

        let loader = FileLoader::new(FileLoaderOptions::new(dir.path())).unwrap();
        let mut asset = Asset::inline("/app.js");
        loader.try_process(&mut asset).await;
        assert_eq!(asset.raw, "run();");
    }

    #[tokio::test]
    async fn test_keeps_raw_without_src() {
        let dir = tempdir().unwrap();
        let loader = FileLoader::new(FileLoaderOptions::new(dir.path())).unwrap();
        let mut asset = Asset::inline("").with_raw("<div id=\"app\"></div>");
        loader.try_process(&mut asset).await;
        assert_eq!(asset.raw, "<div id=\"app\"></div>");
    }

    #[tokio::test]
    async fn test_prefixes_referenced_assets() {
        let dir = tempdir().unwrap();
        let loader =
            FileLoader::new(FileLoaderOptions::new(dir.path()).with_prefix("__file")).unwrap();
        let mut asset = Asset::new("http.css");
        loader.try_process(&mut asset).await;
        assert_eq!(asset.src, "/__file/http.css");
        assert_eq!(asset.raw, "");
        assert_eq!(asset.content_type, "text/css");
    }
}
