//! # codex-content
//!
//! Everything the CodeX landing site displays, plus the handful of UI rules
//! that decide how it is displayed.
//!
//! The crate has no browser dependency. The Leptos front-end (`codex-landing`)
//! and the build-time generator (`codex-theme`) both read from here, so the
//! content and the behavior rules can be unit-tested natively.
//!
//! ## Modules
//!
//! - [`catalog`] - the hardcoded feature, screenshot, stat and legal records
//! - [`types`] - the record types themselves
//! - [`route`] - client-side routes and path resolution
//! - [`ui`] - navigation style, mobile menu and gallery playback rules
//! - [`gallery`] - the duplicated marquee sequence
//! - [`links`] - navigation bar link tables
//! - [`structured_data`] - schema.org JSON-LD for the home page
//! - [`theme`] - color tokens and their CSS rendering
//! - [`site`] - product name, outbound links, version
//!
//! ---
//!
//! Developed with 💀 by The CodeX Team (c)2025

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod gallery;
pub mod links;
pub mod route;
pub mod site;
pub mod structured_data;
pub mod theme;
pub mod types;
pub mod ui;

pub use error::{Error, Result};
pub use gallery::marquee_sequence;
pub use route::Route;
pub use theme::ThemeTokens;
pub use ui::{MenuState, NavStyle, Playback, RouteWatcher, SCROLL_THRESHOLD_PX, ScrollReset};
