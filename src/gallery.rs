//! Gallery presenter: category filtering and grid rendering.
//!
//! The presenter is handed the manifest explicitly (`Option<Manifest>`, `None`
//! when the data file was never generated) and answers category selections
//! with rendered markup for the `gallery-modal` overlay.
//!
//! ## Matching
//!
//! A selection token matches a record when it equals the record's category.
//! The one exception is the `"wildlife"` card, which also matches records from
//! a `WILD LIFE/` folder (category `"wild life"`). That alias is kept as-is and
//! is not extended to other spellings.
//!
//! ## Image paths
//!
//! Manifest `src` values carry the generator's `src_prefix`, written for pages
//! one level down (`others/`), e.g. `../assets/images/works/`. Rendering for
//! another page swaps that authored prefix for the caller's base path; see
//! [`rebase_src`]. Both prefixes come from [`GeneratorConfig`], so a
//! `folio.toml` that moves the works directory moves the rendered paths too.
//!
//! ## Modal lifecycle
//!
//! ```text
//! closed ──open(token)──▶ open (scroll locked)
//!   ▲                         │
//!   └── CloseControl ─────────┤
//!   └── Click { on_backdrop } ┘   (clicks inside the content are ignored)
//! ```

use crate::config::GeneratorConfig;
use crate::types::{ImageRecord, Manifest};
use maud::{Markup, html};

/// Category token with the legacy alias.
const WILDLIFE_TOKEN: &str = "wildlife";
const WILDLIFE_ALIAS: &str = "wild life";

/// Notice rendered when a selection has nothing to show.
pub const EMPTY_NOTICE: &str = "No images found. Run the gallery generator if you added new photos.";

/// The pages the gallery is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationContext {
    /// `index.html` at the site root.
    Root,
    /// A page under `others/` (`works.html`, `about.html`, ...).
    Subpage,
}

impl PresentationContext {
    /// Resolve from a page URL path: anything under `/others/` is a subpage.
    pub fn from_page_path(path: &str) -> Self {
        if path.contains("/others/") {
            Self::Subpage
        } else {
            Self::Root
        }
    }

    /// Base path for works images as seen from this page.
    ///
    /// The root page reaches the works directory directly; subpages use the
    /// prefix the generator authored.
    pub fn works_base(self, generator: &GeneratorConfig) -> String {
        match self {
            Self::Root => format!("{}/", generator.works_dir.trim_end_matches('/')),
            Self::Subpage => generator.src_prefix.clone(),
        }
    }

    /// Link prefix for the site root (`index.html`).
    pub fn root_prefix(self) -> &'static str {
        match self {
            Self::Root => "./",
            Self::Subpage => "../",
        }
    }

    /// Link prefix for pages under `others/`.
    pub fn others_prefix(self) -> &'static str {
        match self {
            Self::Root => "others/",
            Self::Subpage => "./",
        }
    }
}

/// Whether a selection token selects records of `category`.
pub fn matches_category(token: &str, category: &str) -> bool {
    category == token || (token == WILDLIFE_TOKEN && category == WILDLIFE_ALIAS)
}

/// Records matching `token`, in manifest order.
///
/// A missing manifest is reported and yields an empty selection.
pub fn filter<'a>(manifest: Option<&'a Manifest>, token: &str) -> Vec<&'a ImageRecord> {
    let Some(manifest) = manifest else {
        tracing::error!(category = token, "gallery manifest missing");
        return Vec::new();
    };
    manifest
        .iter()
        .filter(|record| matches_category(token, &record.category))
        .collect()
}

/// Swap the authored prefix of `src` for `base`.
///
/// `src` values that do not start with `authored_base` are returned unchanged.
pub fn rebase_src(src: &str, authored_base: &str, base: &str) -> String {
    match src.strip_prefix(authored_base) {
        Some(rest) => format!("{base}{rest}"),
        None => src.to_string(),
    }
}

/// Render the grid contents for a selection.
///
/// Output replaces whatever the grid held before; an empty selection renders
/// [`EMPTY_NOTICE`].
pub fn render_grid(records: &[&ImageRecord], authored_base: &str, base: &str) -> Markup {
    html! {
        @if records.is_empty() {
            p.gallery-empty { (EMPTY_NOTICE) }
        } @else {
            @for record in records {
                img src=(rebase_src(&record.src, authored_base, base)) alt=(record.title) loading="lazy";
            }
        }
    }
}

/// Presenter options: where images are served from on the current page.
#[derive(Debug, Clone)]
pub struct GalleryOptions {
    /// Prefix the manifest's `src` values were written with.
    pub authored_base: String,
    /// Prefix to use on the current page.
    pub base: String,
}

impl GalleryOptions {
    pub fn for_context(context: PresentationContext, generator: &GeneratorConfig) -> Self {
        Self {
            authored_base: generator.src_prefix.clone(),
            base: context.works_base(generator),
        }
    }
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self::for_context(PresentationContext::Subpage, &GeneratorConfig::default())
    }
}

/// How the user asked to close the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The `.close-modal` control.
    CloseControl,
    /// A click anywhere; only closes when it landed on the backdrop.
    Click { on_backdrop: bool },
}

/// State of the `gallery-modal` overlay.
#[derive(Debug, Clone, Default)]
pub struct GalleryModal {
    pub open: bool,
    /// Page scrolling is disabled while the modal is open.
    pub scroll_locked: bool,
    /// Text of `modal-category-title`.
    pub title: String,
    /// Inner markup of `gallery-grid`.
    pub grid: String,
    /// Number of images in the current selection.
    pub shown: usize,
}

/// A presenter bound to one manifest and one page.
#[derive(Debug, Clone)]
pub struct Gallery {
    manifest: Option<Manifest>,
    options: GalleryOptions,
    modal: GalleryModal,
}

impl Gallery {
    pub fn new(manifest: Option<Manifest>, options: GalleryOptions) -> Self {
        Self {
            manifest,
            options,
            modal: GalleryModal::default(),
        }
    }

    pub fn manifest(&self) -> Option<&Manifest> {
        self.manifest.as_ref()
    }

    pub fn modal(&self) -> &GalleryModal {
        &self.modal
    }

    /// Records for a selection, without touching the modal.
    pub fn select(&self, token: &str) -> Vec<&ImageRecord> {
        filter(self.manifest.as_ref(), token)
    }

    /// Handle a click on a `data-category` card.
    pub fn open(&mut self, token: &str) -> &GalleryModal {
        let records = filter(self.manifest.as_ref(), token);
        let grid = render_grid(&records, &self.options.authored_base, &self.options.base);
        self.modal = GalleryModal {
            open: true,
            scroll_locked: true,
            title: token.to_uppercase(),
            grid: grid.into_string(),
            shown: records.len(),
        };
        &self.modal
    }

    /// Handle a close request. Returns whether the modal closed.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        let closes = match trigger {
            CloseTrigger::CloseControl => true,
            CloseTrigger::Click { on_backdrop } => on_backdrop,
        };
        if closes && self.modal.open {
            self.modal.open = false;
            self.modal.scroll_locked = false;
            return true;
        }
        false
    }
}

/// Render the modal overlay for the current state.
pub fn render_modal(modal: &GalleryModal) -> Markup {
    let style = if modal.open { "display: block;" } else { "display: none;" };
    html! {
        div.modal #gallery-modal style=(style) {
            div.modal-content {
                span.close-modal { "×" }
                h2 #modal-category-title { (modal.title) }
                div.gallery-grid #gallery-grid {
                    (maud::PreEscaped(&modal.grid))
                }
            }
        }
    }
}

/// Category card that opens the modal for `token`.
pub fn render_category_card(token: &str, label: &str, cover: Option<&str>) -> Markup {
    html! {
        div.category-card data-category=(token) {
            @if let Some(src) = cover {
                img src=(src) alt=(label) loading="lazy";
            }
            h3 { (label) }
        }
    }
}
