#![allow(dead_code)]

use epii_render::{Document, FileLoader, FileLoaderOptions, Loader};
use std::path::PathBuf;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Directory holding the HTML/CSS/JS fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Reads a fixture, ignoring the trailing newline editors add.
pub fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
        .trim_end()
        .to_string()
}

/// Loads a JSON page description from the fixtures.
pub fn fixture_document(name: &str) -> Document {
    Document::from_json_str(&read_fixture(name)).expect("fixture is valid JSON")
}

/// A file loader over the fixtures directory.
pub fn file_loader(prefix: &str) -> Arc<dyn Loader> {
    let options = FileLoaderOptions::new(fixtures_dir()).with_prefix(prefix);
    Arc::new(FileLoader::new(options).expect("fixtures dir is a valid source"))
}
