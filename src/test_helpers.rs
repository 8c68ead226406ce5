//! Shared test utilities.
//!
//! Builds throwaway works trees and looks records up by title with a clear
//! panic message on a miss.
//!
//! ```rust
//! let tmp = setup_works(&["STREET/a.jpg", "WILD LIFE/b.png"]);
//! let manifest = scan(tmp.path(), "../assets/images/works/").unwrap();
//! assert_eq!(find_record(&manifest, "b").category, "wild life");
//! ```

use std::fs;
use tempfile::TempDir;

use crate::types::{ImageRecord, Manifest};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp directory holding one placeholder file per relative path.
///
/// Scanning only looks at names, so the file bodies are dummy bytes.
pub fn setup_works(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for rel in files {
        let path = tmp.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "fake image").unwrap();
    }
    tmp
}

/// Build a record the way the generator would for `<original>/<file>`.
pub fn record(original: &str, file: &str) -> ImageRecord {
    ImageRecord {
        src: format!(
            "../assets/images/works/{}/{}",
            crate::naming::encode_uri(original),
            crate::naming::encode_uri(file)
        ),
        category: crate::naming::category_key(original),
        title: crate::naming::title_from_filename(file),
        original_category: original.to_string(),
    }
}

/// The manifest from the canonical example tree, without touching disk.
pub fn example_manifest() -> Manifest {
    Manifest::new(vec![
        record("STREET", "a.jpg"),
        record("WILD LIFE", "b.png"),
    ])
}

// =========================================================================
// Lookups
// =========================================================================

/// Find a record by title. Panics if not found.
pub fn find_record<'a>(manifest: &'a Manifest, title: &str) -> &'a ImageRecord {
    manifest
        .iter()
        .find(|r| r.title == title)
        .unwrap_or_else(|| {
            let titles = record_titles(manifest);
            panic!("record '{title}' not found. Available: {titles:?}")
        })
}

/// All titles in manifest order.
pub fn record_titles(manifest: &Manifest) -> Vec<&str> {
    manifest.iter().map(|r| r.title.as_str()).collect()
}

/// All titles, sorted. For assertions that must not depend on listing order.
pub fn sorted_titles(manifest: &Manifest) -> Vec<&str> {
    let mut titles = record_titles(manifest);
    titles.sort();
    titles
}
