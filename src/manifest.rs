//! The `gallery-data.js` data file.
//!
//! The manifest is shipped to the browser as a static script that binds one
//! global value:
//!
//! ```text
//! // Auto-generated gallery data
//! const galleryData = [
//!     {
//!         "src": "../assets/images/works/STREET/a.jpg",
//!         "category": "street",
//!         "title": "a",
//!         "originalCategory": "STREET"
//!     }
//! ];
//! ```
//!
//! Writing goes through a sibling temp file and a rename, so a failed run
//! never leaves a truncated data file behind; the previous one stays intact.

use crate::scan::{self, ScanError};
use crate::types::Manifest;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("No `{0} = ...` assignment found in data file")]
    MissingBinding(String),
}

/// First line of every generated data file.
pub const HEADER: &str = "// Auto-generated gallery data";

/// Result of a generator run, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub output: PathBuf,
}

/// Render the manifest as a script assigning it to `binding`.
pub fn to_data_file(manifest: &Manifest, binding: &str) -> Result<String, ManifestError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    manifest.serialize(&mut ser)?;
    let json = String::from_utf8_lossy(&buf);
    Ok(format!("{HEADER}\nconst {binding} = {json};\n"))
}

/// Parse a data file produced by [`to_data_file`] back into a manifest.
///
/// Accepts `const`, `let`, `var` or a bare assignment to `binding`. Mentions
/// of `binding` inside `//` or `/* */` comments are skipped.
pub fn parse_data_file(content: &str, binding: &str) -> Result<Manifest, ManifestError> {
    let value = find_assignment(content, binding)
        .ok_or_else(|| ManifestError::MissingBinding(binding.to_string()))?;
    let json = value.trim_end();
    let json = json.strip_suffix(';').unwrap_or(json);
    Ok(serde_json::from_str(json)?)
}

fn find_assignment<'a>(content: &'a str, binding: &str) -> Option<&'a str> {
    let mut pos = 0;
    while pos < content.len() {
        let rest = &content[pos..];
        if rest.starts_with("//") {
            pos += rest.find('\n').unwrap_or(rest.len());
            continue;
        }
        if let Some(body) = rest.strip_prefix("/*") {
            pos += body.find("*/").map_or(rest.len(), |end| end + 4);
            continue;
        }
        let boundary_ok = content[..pos]
            .chars()
            .next_back()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_' || c == '$'));
        if boundary_ok
            && let Some(after) = rest.strip_prefix(binding)
            && let Some(value) = after.trim_start().strip_prefix('=')
            && !value.starts_with('=')
        {
            return Some(value);
        }
        pos += rest.chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// Write the data file, replacing any previous one.
pub fn write(manifest: &Manifest, path: &Path, binding: &str) -> Result<(), ManifestError> {
    let content = to_data_file(manifest, binding)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path);
    let result = fs::write(&tmp, content).and_then(|_| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    Ok(result?)
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "gallery-data.js".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}

/// Load a data file for the presenter.
///
/// A missing file is `Ok(None)`: the presenter treats that as "no manifest"
/// rather than an error. A file that exists but cannot be parsed is an error.
pub fn load(path: &Path, binding: &str) -> Result<Option<Manifest>, ManifestError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    parse_data_file(&content, binding).map(Some)
}

/// Scan `works_dir` and write the data file to `output`.
///
/// Nothing is written unless the whole scan succeeds.
pub fn generate(
    works_dir: &Path,
    output: &Path,
    src_prefix: &str,
    binding: &str,
) -> Result<Summary, ManifestError> {
    let manifest = scan::scan(works_dir, src_prefix)?;
    write(&manifest, output, binding)?;
    tracing::info!(count = manifest.len(), output = %output.display(), "manifest written");
    Ok(Summary {
        count: manifest.len(),
        output: output.to_path_buf(),
    })
}
