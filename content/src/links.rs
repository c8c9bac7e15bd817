//! Navigation bar link tables.
//!
//! `Nav` renders the desktop row and the mobile overlay straight from these
//! tables, so which links close the menu is decided here.

use crate::route::Route;
use crate::site::{PLAY_STORE_URL, PRODUCT_NAME};
use crate::ui::MenuState;

/// Where a link points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// A page of the site, handled by the client router
    Page(Route),
    /// Another origin
    External(&'static str),
}

impl LinkTarget {
    /// Value for `href`.
    pub fn href(self) -> &'static str {
        match self {
            LinkTarget::Page(route) => route.path(),
            LinkTarget::External(url) => url,
        }
    }
}

/// One link in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Visible text
    pub label: &'static str,
    /// Destination
    pub target: LinkTarget,
    /// Rendered as the call-to-action button
    pub cta: bool,
    /// Opens in a new browsing context (`target="_blank"`, `rel="noopener noreferrer"`)
    pub new_tab: bool,
    /// Clicking it also closes the mobile menu
    pub closes_menu: bool,
}

impl NavLink {
    const fn page(label: &'static str, route: Route) -> NavLink {
        NavLink {
            label,
            target: LinkTarget::Page(route),
            cta: false,
            new_tab: false,
            closes_menu: true,
        }
    }

    const fn download(label: &'static str, new_tab: bool) -> NavLink {
        NavLink {
            label,
            target: LinkTarget::External(PLAY_STORE_URL),
            cta: true,
            new_tab,
            closes_menu: true,
        }
    }

    /// Menu side effect of clicking the link. Navigation itself is left to
    /// the browser or router.
    pub fn on_click(self, menu: &mut MenuState) {
        if self.closes_menu {
            menu.close();
        }
    }

    /// `target` attribute, if any.
    pub fn target_attr(self) -> Option<&'static str> {
        self.new_tab.then_some("_blank")
    }

    /// `rel` attribute, if any.
    pub fn rel_attr(self) -> Option<&'static str> {
        self.new_tab.then_some("noopener noreferrer")
    }
}

/// Brand link at the left of the bar.
pub const BRAND_LINK: NavLink = NavLink::page(PRODUCT_NAME, Route::Home);

/// Desktop row; home reads as the product page.
pub const DESKTOP_LINKS: &[NavLink] = &[
    NavLink::page("Product", Route::Home),
    NavLink::page("Privacy", Route::Privacy),
    NavLink::page("Terms", Route::Terms),
    NavLink::download("DOWNLOAD", true),
];

/// Mobile overlay.
pub const OVERLAY_LINKS: &[NavLink] = &[
    NavLink::page("Home", Route::Home),
    NavLink::page("Privacy", Route::Privacy),
    NavLink::page("Terms", Route::Terms),
    NavLink::download("Get App", false),
];
