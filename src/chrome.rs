//! Page chrome shared by every page: navigation bar, footer, burger menu and
//! scroll reveal.
//!
//! Nav and footer markup is injected into the `dynamic-nav` / `dynamic-footer`
//! placeholders. Pages without a placeholder get the nav at the start of
//! `<body>` and the footer at the end; [`MountPoint::resolve`] makes that
//! choice once so rendering never has to.

use crate::config::SiteIdentity;
use crate::gallery::PresentationContext;
use maud::{Markup, html};

/// Placeholder id for the navigation bar.
pub const NAV_PLACEHOLDER: &str = "dynamic-nav";
/// Placeholder id for the footer.
pub const FOOTER_PLACEHOLDER: &str = "dynamic-footer";

/// Which piece of chrome is being mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Nav,
    Footer,
}

impl Slot {
    pub fn placeholder_id(self) -> &'static str {
        match self {
            Self::Nav => NAV_PLACEHOLDER,
            Self::Footer => FOOTER_PLACEHOLDER,
        }
    }
}

/// Where chrome markup ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountPoint {
    /// Replace the contents of the element with this id.
    Placeholder(&'static str),
    /// Insert before the first child of `<body>`.
    BodyStart,
    /// Append after the last child of `<body>`.
    BodyEnd,
}

impl MountPoint {
    /// Pick the mount point for `slot` given whether the page has its placeholder.
    pub fn resolve(slot: Slot, placeholder_present: bool) -> Self {
        match (slot, placeholder_present) {
            (_, true) => Self::Placeholder(slot.placeholder_id()),
            (Slot::Nav, false) => Self::BodyStart,
            (Slot::Footer, false) => Self::BodyEnd,
        }
    }
}

/// Navigation entries: label and target relative to the site layout.
const NAV_LINKS: &[(&str, NavTarget)] = &[
    ("Home", NavTarget::Root("index.html")),
    ("Story", NavTarget::Others("about.html")),
    ("Portfolio", NavTarget::Others("works.html")),
    ("Contact", NavTarget::Others("contact.html")),
];

#[derive(Debug, Clone, Copy)]
enum NavTarget {
    Root(&'static str),
    Others(&'static str),
}

impl NavTarget {
    fn href(self, context: PresentationContext) -> String {
        match self {
            Self::Root(page) => format!("{}{}", context.root_prefix(), page),
            Self::Others(page) => format!("{}{}", context.others_prefix(), page),
        }
    }
}

/// Render the navigation bar for a page in `context`.
pub fn render_nav(context: PresentationContext, site: &SiteIdentity) -> Markup {
    let (first, rest) = split_brand(&site.brand);
    html! {
        nav.glass-nav {
            div.logo-text { (first) span.highlight { (rest) } }
            ul.nav-links {
                @for (label, target) in NAV_LINKS {
                    li { a.nav-item href=(target.href(context)) { (label) } }
                }
            }
            div.burger {
                div.line1 {}
                div.line2 {}
                div.line3 {}
            }
        }
        div.background-blobs {
            div.blob."blob-1" {}
            div.blob."blob-2" {}
            div.blob."blob-3" {}
        }
    }
}

/// Split `"ISHAAN NEEL"` into `("ISHAAN", "NEEL")` for the two-tone logo.
fn split_brand(brand: &str) -> (&str, &str) {
    match brand.split_once(' ') {
        Some((first, rest)) => (first, rest.trim_start()),
        None => (brand, ""),
    }
}

/// Render the footer.
pub fn render_footer(site: &SiteIdentity) -> Markup {
    html! {
        footer.glass-footer {
            div.footer-content {
                div.footer-brand {
                    h2 { (site.brand) }
                    p { (site.tagline) }
                }
                div.footer-socials {
                    h4 { "Follow Me" }
                    div.social-links {
                        @if let Some(url) = &site.instagram {
                            a href=(url) target="_blank" aria-label="Instagram" { i.fab.fa-instagram {} }
                        }
                        @if let Some(url) = &site.facebook {
                            a href=(url) target="_blank" aria-label="Facebook" { i.fab.fa-facebook {} }
                        }
                        @if let Some(email) = &site.email {
                            a href={ "mailto:" (email) } aria-label="Email" { i.fas.fa-envelope {} }
                        }
                    }
                }
            }
            div.footer-bottom {
                "© " (site.copyright_year) " " (site.owner) ". All rights reserved."
            }
        }
    }
}

/// Burger menu state. Toggling flips the `nav-active`/`toggle` classes and
/// staggers the link fade-in.
#[derive(Debug, Clone, Default)]
pub struct BurgerMenu {
    active: bool,
    items: usize,
}

impl BurgerMenu {
    pub fn new(items: usize) -> Self {
        Self {
            active: false,
            items,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    /// Class on the link list, if any.
    pub fn nav_class(&self) -> Option<&'static str> {
        self.active.then_some("nav-active")
    }

    /// Class on the burger icon, if any.
    pub fn burger_class(&self) -> Option<&'static str> {
        self.active.then_some("toggle")
    }

    /// Animation delay per link in seconds: `index / 7 + 0.3`. Empty while closed.
    pub fn item_delays(&self) -> Vec<f64> {
        if !self.active {
            return Vec::new();
        }
        (0..self.items).map(|i| i as f64 / 7.0 + 0.3).collect()
    }

    /// CSS `animation` values for each link, matching [`Self::item_delays`].
    pub fn item_animations(&self) -> Vec<String> {
        self.item_delays()
            .into_iter()
            .map(|delay| format!("navLinkFade 0.5s ease forwards {delay}s"))
            .collect()
    }
}

/// Scroll-driven reveal: elements get `show` once their top edge is more than
/// `offset` pixels above the bottom of the viewport, and lose it otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollReveal {
    pub offset: f64,
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self { offset: 150.0 }
    }
}

impl ScrollReveal {
    pub fn new(offset: f64) -> Self {
        Self { offset }
    }

    pub fn is_revealed(&self, element_top: f64, viewport_height: f64) -> bool {
        element_top < viewport_height - self.offset
    }

    /// Recompute every element for one scroll event.
    pub fn apply(&self, element_tops: &[f64], viewport_height: f64) -> Vec<bool> {
        element_tops
            .iter()
            .map(|&top| self.is_revealed(top, viewport_height))
            .collect()
    }
}
