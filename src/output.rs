//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! Success! Found 12 images.
//! Data saved to: assets/js/gallery-data.js
//! ```
//!
//! ## Check
//!
//! ```text
//! Categories
//! 001 street (5 photos)
//!     Source: STREET/
//! 002 wild life (7 photos)
//!     Source: WILD LIFE/
//!
//! 12 images in assets/images/works
//! ```

use crate::manifest::Summary;
use crate::types::Manifest;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Category header: index, key and count.
fn category_header(index: usize, category: &str, count: usize) -> String {
    let noun = if count == 1 { "photo" } else { "photos" };
    format!("{} {} ({} {})", format_index(index), category, count, noun)
}

/// Success summary of a generator run.
pub fn format_generate_output(summary: &Summary) -> Vec<String> {
    vec![
        format!("Success! Found {} images.", summary.count),
        format!("Data saved to: {}", summary.output.display()),
    ]
}

pub fn print_generate_output(summary: &Summary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}

/// Category inventory of a scan, without writing anything.
pub fn format_check_output(manifest: &Manifest, works_dir: &Path) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];
    let categories = manifest.categories();
    if categories.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, summary) in categories.iter().enumerate() {
        lines.push(category_header(i + 1, &summary.category, summary.count));
        lines.push(format!("    Source: {}/", summary.original));
    }
    lines.push(String::new());
    lines.push(format!(
        "{} images in {}",
        manifest.len(),
        works_dir.display()
    ));
    lines
}

pub fn print_check_output(manifest: &Manifest, works_dir: &Path) {
    for line in format_check_output(manifest, works_dir) {
        println!("{}", line);
    }
}

/// Header for `show`: the selection and how many records it matched.
pub fn format_show_header(token: &str, shown: usize, manifest_loaded: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if !manifest_loaded {
        lines.push("Warning: gallery data file not found; showing empty gallery".to_string());
    }
    lines.push(format!("{} ({} matched)", token.to_uppercase(), shown));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::path::PathBuf;

    #[test]
    fn generate_output_reports_count_and_path() {
        let summary = Summary {
            count: 2,
            output: PathBuf::from("assets/js/gallery-data.js"),
        };
        assert_eq!(
            format_generate_output(&summary),
            vec![
                "Success! Found 2 images.",
                "Data saved to: assets/js/gallery-data.js"
            ]
        );
    }

    #[test]
    fn check_output_lists_categories() {
        let lines = format_check_output(&example_manifest(), Path::new("works"));
        assert_eq!(lines[0], "Categories");
        assert_eq!(lines[1], "001 street (1 photo)");
        assert_eq!(lines[2], "    Source: STREET/");
        assert_eq!(lines[3], "002 wild life (1 photo)");
        assert_eq!(lines[4], "    Source: WILD LIFE/");
        assert_eq!(lines.last().unwrap(), "2 images in works");
    }

    #[test]
    fn check_output_for_empty_manifest() {
        let lines = format_check_output(&Manifest::default(), Path::new("works"));
        assert!(lines.contains(&"    (none)".to_string()));
        assert_eq!(lines.last().unwrap(), "0 images in works");
    }

    #[test]
    fn category_header_pluralizes() {
        assert_eq!(category_header(3, "macro", 5), "003 macro (5 photos)");
    }

    #[test]
    fn show_header_warns_without_manifest() {
        let lines = format_show_header("street", 0, false);
        assert!(lines[0].starts_with("Warning"));
        assert_eq!(lines[1], "STREET (0 matched)");
    }
}
