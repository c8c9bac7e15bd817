//! Product identity and outbound links (single source of truth).

/// Short product name shown in the navigation bar.
pub const PRODUCT_NAME: &str = "CodeX";

/// Full product name used in the footer and structured data.
pub const PRODUCT_FULL_NAME: &str = "CodeX Mobile IDE";

/// Version string printed in the console banner.
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Google Play listing.
pub const PLAY_STORE_URL: &str = "https://play.google.com/store/apps/details?id=com.nexera.codex";

/// Support address.
pub const SUPPORT_EMAIL: &str = "karthi.nexgen.dev@gmail.com";

/// Logo path, served from the site root.
pub const LOGO_SRC: &str = "/logo.png";

/// Footer copyright line.
pub const COPYRIGHT: &str =
    "© 2025 CodeX Team. Crafted for professional developers. Licensed under MIT.";

/// `mailto:` href for [`SUPPORT_EMAIL`].
pub fn support_mailto() -> String {
    mailto(SUPPORT_EMAIL)
}

/// Build a `mailto:` href.
pub fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_link_is_mailto() {
        assert_eq!(support_mailto(), "mailto:karthi.nexgen.dev@gmail.com");
    }

    #[test]
    fn version_has_prefix() {
        assert!(VERSION.starts_with('v'));
        assert!(VERSION.len() > 1);
    }
}
