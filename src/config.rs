//! Site configuration.
//!
//! An optional `folio.toml` at the site root overrides stock defaults. The
//! file is sparse: only the keys being changed need to appear.
//!
//! ```toml
//! [generator]
//! works_dir = "assets/images/works"        # Scan root, relative to the site root
//! output_file = "assets/js/gallery-data.js" # Data file, relative to the site root
//! src_prefix = "../assets/images/works/"   # Prepended to every image src
//! binding = "galleryData"                  # Global the data file assigns
//!
//! [site]
//! brand = "ISHAAN NEEL"
//! tagline = "Photography Portfolio"
//! owner = "Ishaan Neel Photography"
//! copyright_year = 2024
//! instagram = "https://instagram.com/vagabond.nef"
//! facebook = "https://www.facebook.com/profile.php?id=100088930056390"
//! email = "ishaankphotography@gmail.com"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file name looked up in the site root.
pub const CONFIG_FILE: &str = "folio.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Everything configurable about the site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    /// Manifest generator paths and naming.
    pub generator: GeneratorConfig,
    /// Text and links used by the nav and footer.
    pub site: SiteIdentity,
}

impl FolioConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let generator = &self.generator;
        if generator.works_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "generator.works_dir must not be empty".into(),
            ));
        }
        if generator.output_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "generator.output_file must not be empty".into(),
            ));
        }
        if !generator.src_prefix.ends_with('/') {
            return Err(ConfigError::Validation(
                "generator.src_prefix must end with '/'".into(),
            ));
        }
        if !is_js_identifier(&generator.binding) {
            return Err(ConfigError::Validation(format!(
                "generator.binding '{}' is not a valid JavaScript identifier",
                generator.binding
            )));
        }
        Ok(())
    }
}

fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Generator settings. Paths are relative to the site root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub works_dir: String,
    pub output_file: String,
    pub src_prefix: String,
    pub binding: String,
}

impl GeneratorConfig {
    pub fn works_path(&self, site_root: &Path) -> PathBuf {
        site_root.join(&self.works_dir)
    }

    pub fn output_path(&self, site_root: &Path) -> PathBuf {
        site_root.join(&self.output_file)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            works_dir: "assets/images/works".to_string(),
            output_file: "assets/js/gallery-data.js".to_string(),
            src_prefix: "../assets/images/works/".to_string(),
            binding: "galleryData".to_string(),
        }
    }
}

/// Branding and social links for the page chrome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteIdentity {
    /// Logo text; the first word is rendered plain, the rest highlighted.
    pub brand: String,
    pub tagline: String,
    /// Copyright holder shown in the footer.
    pub owner: String,
    pub copyright_year: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            brand: "ISHAAN NEEL".to_string(),
            tagline: "Photography Portfolio".to_string(),
            owner: "Ishaan Neel Photography".to_string(),
            copyright_year: 2024,
            instagram: Some("https://instagram.com/vagabond.nef".to_string()),
            facebook: Some("https://www.facebook.com/profile.php?id=100088930056390".to_string()),
            email: Some("ishaankphotography@gmail.com".to_string()),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(FolioConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `folio.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<FolioConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: FolioConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config for a site root: stock defaults with `folio.toml` on top.
pub fn load_config(site_root: &Path) -> Result<FolioConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(site_root)?)
}

/// A fully-commented stock `folio.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Gallery Configuration
# ===========================
# All settings are optional. Values shown below are the defaults.
# Place this file at the site root as folio.toml.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Manifest generator
# ---------------------------------------------------------------------------
[generator]
# Directory scanned for images. Each first-level folder is a category.
works_dir = "assets/images/works"

# Where the generated data file is written.
output_file = "assets/js/gallery-data.js"

# Prepended to each image path in the manifest. Must end with '/'.
src_prefix = "../assets/images/works/"

# Name of the global the data file assigns.
binding = "galleryData"

# ---------------------------------------------------------------------------
# Navigation and footer
# ---------------------------------------------------------------------------
[site]
brand = "ISHAAN NEEL"
tagline = "Photography Portfolio"
owner = "Ishaan Neel Photography"
copyright_year = 2024
instagram = "https://instagram.com/vagabond.nef"
facebook = "https://www.facebook.com/profile.php?id=100088930056390"
email = "ishaankphotography@gmail.com"
"##
}
