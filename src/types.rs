//! Shared types between the generator and the presenter.
//!
//! The generator serializes these into the `gallery-data.js` data file; the
//! presenter parses them back. Field names on the wire follow the data file's
//! camelCase convention (`originalCategory`).

use serde::{Deserialize, Serialize};

/// One discovered image file.
///
/// ```json
/// {
///     "src": "../assets/images/works/WILD%20LIFE/heron.jpg",
///     "category": "wild life",
///     "title": "heron",
///     "originalCategory": "WILD LIFE"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Image URL under the presentation prefix, percent-encoded.
    pub src: String,
    /// Lowercased top-level folder name; the filter key.
    pub category: String,
    /// File stem with `_` and `-` turned into spaces.
    pub title: String,
    /// Top-level folder name as it appears on disk.
    #[serde(rename = "originalCategory")]
    pub original_category: String,
}

/// Ordered list of image records, in traversal order.
///
/// Serialized as a bare JSON array. Records are not deduplicated and the list
/// may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub images: Vec<ImageRecord>,
}

impl Manifest {
    pub fn new(images: Vec<ImageRecord>) -> Self {
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRecord> {
        self.images.iter()
    }

    /// Distinct categories in first-seen order, paired with their on-disk name
    /// and record count.
    pub fn categories(&self) -> Vec<CategorySummary> {
        let mut out: Vec<CategorySummary> = Vec::new();
        for record in &self.images {
            match out.iter_mut().find(|c| c.category == record.category) {
                Some(summary) => summary.count += 1,
                None => out.push(CategorySummary {
                    category: record.category.clone(),
                    original: record.original_category.clone(),
                    count: 1,
                }),
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a ImageRecord;
    type IntoIter = std::slice::Iter<'a, ImageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

/// Per-category tally used by CLI output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: String,
    pub original: String,
    pub count: usize,
}
