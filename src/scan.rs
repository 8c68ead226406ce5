//! Filesystem scanning.
//!
//! Walks the works directory and produces one [`ImageRecord`] per image file.
//!
//! ## Directory Structure
//!
//! ```text
//! assets/images/works/             # Scan root
//! ├── STREET/                      # Category "street"
//! │   ├── a.jpg
//! │   └── night/                   # Nesting keeps the parent category
//! │       └── neon_sign.webp
//! ├── WILD LIFE/                   # Category "wild life"
//! │   ├── b.png
//! │   └── thumbs/                  # Skipped entirely, at any depth
//! │       └── c.jpg
//! └── notes.txt                    # Not an image, ignored
//! ```
//!
//! ## Rules
//!
//! - The category is the first path component below the root. It is threaded
//!   down unchanged through deeper folders.
//! - Directories named exactly `thumbs` (case-sensitive) are pruned with their
//!   whole subtree.
//! - Only `webp`, `jpg`, `jpeg`, `png` and `gif` files become records,
//!   compared case-insensitively.
//! - Records come out in directory listing order. Nothing is sorted, so two
//!   runs over the same tree produce the same set but possibly a different
//!   order on some filesystems.

use crate::naming;
use crate::types::{ImageRecord, Manifest};
use std::path::Path;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read {path}: {source}")]
    Walk {
        path: String,
        #[source]
        source: walkdir::Error,
    },
    #[error("Works root is not a directory: {0}")]
    NotADirectory(String),
}

/// Extensions accepted as images, lowercase.
pub const IMAGE_EXTENSIONS: &[&str] = &["webp", "jpg", "jpeg", "png", "gif"];

/// Directory name excluded from the manifest at any depth.
pub const EXCLUDED_DIR: &str = "thumbs";

/// Scan `root` and build the manifest.
///
/// `src_prefix` is prepended verbatim to each record's encoded relative path,
/// e.g. `"../assets/images/works/"`. Any unreadable entry aborts the scan.
pub fn scan(root: &Path, src_prefix: &str) -> Result<Manifest, ScanError> {
    let mut images = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e));

    for entry in walker {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: source
                .path()
                .unwrap_or(root)
                .display()
                .to_string(),
            source,
        })?;

        if entry.depth() == 0 && !entry.file_type().is_dir() {
            return Err(ScanError::NotADirectory(root.display().to_string()));
        }
        if entry.file_type().is_dir() || !is_image(entry.path()) {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| entry.path());
        images.push(build_record(rel, src_prefix));
    }

    tracing::debug!(count = images.len(), root = %root.display(), "scan complete");
    Ok(Manifest::new(images))
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    let excluded =
        entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == EXCLUDED_DIR;
    if excluded {
        tracing::debug!(path = %entry.path().display(), "skipping thumbs directory");
    }
    excluded
}

/// Whether a path carries an allowed image extension.
pub fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// Build a record from a path relative to the scan root.
///
/// The first component is the category folder. An image sitting directly in
/// the root has no folder above it, so its own filename fills that slot.
fn build_record(rel: &Path, src_prefix: &str) -> ImageRecord {
    let url_path = naming::to_url_path(rel);
    let top_level = url_path.split('/').next().unwrap_or_default().to_string();
    let filename = rel
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    ImageRecord {
        src: format!("{}{}", src_prefix, naming::encode_uri(&url_path)),
        category: naming::category_key(&top_level),
        title: naming::title_from_filename(&filename),
        original_category: top_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::fs;
    use tempfile::TempDir;

    const PREFIX: &str = "../assets/images/works/";

    #[test]
    fn example_tree_yields_two_records() {
        let tmp = setup_works(&["STREET/a.jpg", "WILD LIFE/b.png", "WILD LIFE/thumbs/c.jpg"]);
        let manifest = scan(tmp.path(), PREFIX).unwrap();

        assert_eq!(manifest.len(), 2);

        let a = find_record(&manifest, "a");
        assert_eq!(a.category, "street");
        assert_eq!(a.original_category, "STREET");
        assert_eq!(a.src, "../assets/images/works/STREET/a.jpg");

        let b = find_record(&manifest, "b");
        assert_eq!(b.category, "wild life");
        assert_eq!(b.original_category, "WILD LIFE");
        assert_eq!(b.src, "../assets/images/works/WILD%20LIFE/b.png");

        assert!(record_titles(&manifest).iter().all(|t| *t != "c"));
    }

    #[test]
    fn thumbs_excluded_at_any_depth() {
        let tmp = setup_works(&[
            "STREET/night/thumbs/x.jpg",
            "STREET/night/thumbs/deeper/y.jpg",
            "STREET/night/z.jpg",
        ]);
        let manifest = scan(tmp.path(), PREFIX).unwrap();
        assert_eq!(sorted_titles(&manifest), vec!["z"]);
    }

    #[test]
    fn thumbs_match_is_case_sensitive() {
        let tmp = setup_works(&["STREET/Thumbs/x.jpg", "MACRO/thumbs/y.jpg"]);
        let manifest = scan(tmp.path(), PREFIX).unwrap();
        assert_eq!(sorted_titles(&manifest), vec!["x"]);
    }

    #[test]
    fn top_level_thumbs_folder_is_excluded() {
        let tmp = setup_works(&["thumbs/a.jpg", "STREET/b.jpg"]);
        let manifest = scan(tmp.path(), PREFIX).unwrap();
        assert_eq!(sorted_titles(&manifest), vec!["b"]);
    }

    #[test]
    fn nested_folders_keep_top_level_category() {
        let tmp = setup_works(&["Travel/Japan/Kyoto/temple.jpg"]);
        let manifest = scan(tmp.path(), PREFIX).unwrap();

        let temple = find_record(&manifest, "temple");
        assert_eq!(temple.category, "travel");
        assert_eq!(temple.original_category, "Travel");
        assert_eq!(temple.src, "../assets/images/works/Travel/Japan/Kyoto/temple.jpg");
    }

    #[test]
    fn only_allowed_extensions_become_records() {
        let tmp = setup_works(&[
            "MIX/a.webp",
            "MIX/b.JPG",
            "MIX/c.jpeg",
            "MIX/d.Png",
            "MIX/e.gif",
            "MIX/f.tiff",
            "MIX/g.txt",
            "MIX/h",
        ]);
        let manifest = scan(tmp.path(), PREFIX).unwrap();
        assert_eq!(sorted_titles(&manifest), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn titles_replace_separators() {
        let tmp = setup_works(&["PORTRAIT/old_man-smiling.jpg"]);
        let manifest = scan(tmp.path(), PREFIX).unwrap();
        assert_eq!(manifest.images[0].title, "old man smiling");
    }

    #[test]
    fn every_category_is_lowercased_folder_name() {
        let tmp = setup_works(&["Street/a.jpg", "MACRO/b.jpg", "wild life/c.jpg"]);
        let manifest = scan(tmp.path(), PREFIX).unwrap();
        for record in &manifest {
            assert_eq!(record.category, record.original_category.to_lowercase());
        }
    }

    #[test]
    fn root_level_image_uses_filename_as_category() {
        let tmp = setup_works(&["Cover.jpg"]);
        let manifest = scan(tmp.path(), PREFIX).unwrap();
        let cover = &manifest.images[0];
        assert_eq!(cover.original_category, "Cover.jpg");
        assert_eq!(cover.category, "cover.jpg");
        assert_eq!(cover.title, "Cover");
    }

    #[test]
    fn empty_root_yields_empty_manifest() {
        let tmp = TempDir::new().unwrap();
        let manifest = scan(tmp.path(), PREFIX).unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn missing_root_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = scan(&tmp.path().join("nope"), PREFIX);
        assert!(matches!(result, Err(ScanError::Walk { .. })));
    }

    #[test]
    fn file_as_root_is_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("works.jpg");
        fs::write(&file, "fake image").unwrap();

        let result = scan(&file, PREFIX);
        assert!(matches!(result, Err(ScanError::NotADirectory(_))));
    }

    #[test]
    fn rescanning_yields_same_set() {
        let tmp = setup_works(&["STREET/a.jpg", "STREET/b.jpg", "MACRO/c.png"]);
        let first = scan(tmp.path(), PREFIX).unwrap();
        let second = scan(tmp.path(), PREFIX).unwrap();

        let mut first_srcs: Vec<_> = first.iter().map(|r| r.src.clone()).collect();
        let mut second_srcs: Vec<_> = second.iter().map(|r| r.src.clone()).collect();
        first_srcs.sort();
        second_srcs.sort();
        assert_eq!(first_srcs, second_srcs);
    }

    #[test]
    fn file_named_thumbs_is_not_a_directory_exclusion() {
        let tmp = setup_works(&["STREET/thumbs.jpg"]);
        let manifest = scan(tmp.path(), PREFIX).unwrap();
        assert_eq!(sorted_titles(&manifest), vec!["thumbs"]);
    }

    #[test]
    fn is_image_is_case_insensitive() {
        assert!(is_image(Path::new("x/a.JPEG")));
        assert!(is_image(Path::new("a.WebP")));
        assert!(!is_image(Path::new("a.bmp")));
        assert!(!is_image(Path::new("jpg")));
    }

    #[test]
    fn prefix_applied_verbatim() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("B W")).unwrap();
        fs::write(tmp.path().join("B W/x y.jpg"), "fake image").unwrap();
        let manifest = scan(tmp.path(), "/works/").unwrap();
        assert_eq!(manifest.images[0].src, "/works/B%20W/x%20y.jpg");
    }
}
