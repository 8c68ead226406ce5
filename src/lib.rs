//! # Folio Gallery
//!
//! Gallery tooling for a static photography portfolio site. The site is plain
//! HTML; this crate owns the two pieces with actual logic in them:
//!
//! ```text
//! 1. Generate  assets/images/works/  →  assets/js/gallery-data.js
//! 2. Present   gallery-data.js + category click  →  gallery grid markup
//! ```
//!
//! The two halves only share the data file format. The generator is run by
//! hand after photos are added; nothing watches the works directory, so the
//! data file goes stale until the next run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the works directory into a [`types::Manifest`] |
//! | [`manifest`] | Writes and reads the `gallery-data.js` data file |
//! | [`gallery`] | Category filtering, grid rendering, modal state |
//! | [`chrome`] | Nav/footer markup, mount point resolution, burger menu, scroll reveal |
//! | [`config`] | `folio.toml` loading over stock defaults |
//! | [`types`] | `ImageRecord` and `Manifest` shared by both halves |
//! | [`naming`] | Category keys, titles from filenames, URI encoding |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Explicit Manifest Injection
//!
//! The presenter never reaches for a global. [`gallery::Gallery::new`] takes
//! `Option<Manifest>`; `None` means the data file was never generated, and
//! every selection then renders the "no images" notice instead of failing.
//!
//! ## Presentation Base Instead of Path Patching
//!
//! Manifest image paths are written for pages under `others/`. Other pages
//! pass their own base path to the renderer ([`gallery::rebase_src`]), so
//! supporting a new page location is a parameter, not a new string rule.
//!
//! ## Maud for Markup
//!
//! Grid, modal, nav and footer markup is built with [Maud](https://maud.lambda.xyz/):
//! checked at compile time and escaped by default, which matters because
//! titles come straight from filenames.

pub mod chrome;
pub mod config;
pub mod gallery;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
