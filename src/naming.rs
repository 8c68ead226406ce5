//! Name handling shared by the generator and the presenter.
//!
//! Folder and file names on disk are turned into three things:
//!
//! - a **category key**: the top-level folder name, lowercased
//!   (`WILD LIFE/` → `"wild life"`)
//! - a **display title**: the file stem with `_` and `-` turned into spaces
//!   (`misty_morning-2.jpg` → `"misty morning 2"`)
//! - a **URL path**: the relative path with reserved bytes percent-encoded
//!   (`WILD LIFE/b.png` → `WILD%20LIFE/b.png`)

use std::path::Path;

const TITLE_SEPARATORS: &[char] = &['_', '-'];

/// Category key for a top-level folder name.
pub fn category_key(folder: &str) -> String {
    folder.to_lowercase()
}

/// Display title from a filename: extension stripped, separators to spaces.
///
/// - `"a.jpg"` → `"a"`
/// - `"misty_morning-2.jpg"` → `"misty morning 2"`
/// - `"pier.at.dusk.png"` → `"pier.at.dusk"` (only the last extension goes)
pub fn title_from_filename(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());
    stem.replace(TITLE_SEPARATORS, " ")
}

/// Percent-encode a URL path the way browsers' `encodeURI` does.
///
/// Path structure (`/`) and the other URI-reserved characters pass through;
/// spaces, non-ASCII and the remaining bytes become `%XX`.
pub fn encode_uri(path: &str) -> String {
    let mut out = String::with_capacity(path.len() * 2);
    for b in path.bytes() {
        if is_uri_safe(b) {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }
    out
}

fn is_uri_safe(b: u8) -> bool {
    matches!(b,
        b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9'
        | b';' | b',' | b'/' | b'?' | b':' | b'@' | b'&' | b'=' | b'+' | b'$'
        | b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' | b'#')
}

/// Join relative path components with forward slashes regardless of platform.
pub fn to_url_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_lowercased() {
        assert_eq!(category_key("WILD LIFE"), "wild life");
        assert_eq!(category_key("Street"), "street");
    }

    #[test]
    fn title_strips_extension() {
        assert_eq!(title_from_filename("a.jpg"), "a");
    }

    #[test]
    fn title_replaces_underscores_and_dashes() {
        assert_eq!(title_from_filename("misty_morning-2.jpg"), "misty morning 2");
    }

    #[test]
    fn title_keeps_inner_dots() {
        assert_eq!(title_from_filename("pier.at.dusk.png"), "pier.at.dusk");
    }

    #[test]
    fn title_without_extension() {
        assert_eq!(title_from_filename("old-roll"), "old roll");
    }

    #[test]
    fn encode_uri_escapes_spaces() {
        assert_eq!(encode_uri("WILD LIFE/b.png"), "WILD%20LIFE/b.png");
    }

    #[test]
    fn encode_uri_keeps_reserved_characters() {
        assert_eq!(encode_uri("a/b;c,d?e:f@g&h=i+j$k#l"), "a/b;c,d?e:f@g&h=i+j$k#l");
        assert_eq!(encode_uri("x-y_z.!~*'()"), "x-y_z.!~*'()");
    }

    #[test]
    fn encode_uri_escapes_percent_and_brackets() {
        assert_eq!(encode_uri("100%[1]"), "100%25%5B1%5D");
    }

    #[test]
    fn encode_uri_escapes_utf8_bytes() {
        assert_eq!(encode_uri("café.jpg"), "caf%C3%A9.jpg");
    }

    #[test]
    fn url_path_uses_forward_slashes() {
        let rel = Path::new("STREET").join("night").join("a.jpg");
        assert_eq!(to_url_path(&rel), "STREET/night/a.jpg");
    }
}
