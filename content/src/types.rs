//! Content record types.
//!
//! Every record here is built from `&'static str` data in [`crate::catalog`]
//! and never mutated, so they are all `Copy` and can be handed to components
//! without cloning strings.

use serde::Serialize;

/// Icons used by the site (Lucide set). The front-end maps each to SVG.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Lightning bolt
    Zap,
    /// Angle brackets
    Code2,
    /// Desktop monitor
    Monitor,
    /// Phone outline
    Smartphone,
    /// Shield with check mark
    ShieldCheck,
    /// Rocket
    Rocket,
    /// Hamburger menu
    Menu,
    /// Close cross
    X,
}

/// How much room a feature card takes in the bento grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureSize {
    /// One column
    #[default]
    Regular,
    /// Two columns on desktop, one on mobile
    Wide,
}

impl FeatureSize {
    /// CSS class list for a card of this size.
    pub fn class(self) -> &'static str {
        match self {
            FeatureSize::Regular => "feature-card",
            FeatureSize::Wide => "feature-card feature-card--wide",
        }
    }
}

/// One card in the feature showcase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureEntry {
    /// Icon shown above the title
    pub icon: Icon,
    /// Card title
    pub title: &'static str,
    /// One-sentence description
    pub description: &'static str,
    /// Grid span hint
    pub size: FeatureSize,
}

/// One image in the screenshot gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Screenshot {
    /// Path under the site root
    pub src: &'static str,
    /// Alt text
    pub alt: &'static str,
}

/// A headline number in the stats row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    /// Big value, e.g. `60FPS`
    pub value: &'static str,
    /// Caption under the value
    pub label: &'static str,
}

/// A numbered section of a legal page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LegalSection {
    /// Heading including its number, e.g. `1. Zero Data Collection`
    pub heading: &'static str,
    /// Paragraph text
    pub body: &'static str,
    /// Address rendered as a `mailto:` link right after the body
    pub contact_email: Option<&'static str>,
}

/// A static legal page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LegalDocument {
    /// Page title
    pub title: &'static str,
    /// Sections in display order
    pub sections: &'static [LegalSection],
}
