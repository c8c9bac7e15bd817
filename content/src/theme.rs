//! Color tokens and their CSS rendering.
//!
//! The tokens are build-time configuration: `codex-theme css` renders them to
//! `landing/style/theme.css` as custom properties, and the stylesheet refers
//! to them through `var(--codex-*)`. An override file may set any subset of
//! the tokens; missing ones keep their defaults.
//!
//! ```toml
//! accent = "#00A3FF"
//! card = "#141414"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Named colors of the site palette.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeTokens {
    /// Page background
    pub dark: String,
    /// Card / panel background
    pub card: String,
    /// Accent (links, highlights)
    pub accent: String,
    /// Secondary text
    pub secondary: String,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        ThemeTokens {
            dark: "#0A0A0A".into(),
            card: "#141414".into(),
            accent: "#00A3FF".into(),
            secondary: "#71717A".into(),
        }
    }
}

impl ThemeTokens {
    /// `(name, value)` pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("dark", self.dark.as_str()),
            ("card", self.card.as_str()),
            ("accent", self.accent.as_str()),
            ("secondary", self.secondary.as_str()),
        ]
    }

    /// Reject anything that is not `#RRGGBB`.
    pub fn validate(&self) -> Result<()> {
        for (token, value) in self.entries() {
            if !is_hex_color(value) {
                return Err(Error::InvalidColor {
                    token,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Render a `:root` block of `--codex-<name>` custom properties.
    pub fn to_css(&self) -> Result<String> {
        self.validate()?;
        let mut css = String::from(":root {\n");
        for (name, value) in self.entries() {
            css.push_str(&format!("    --codex-{name}: {value};\n"));
        }
        css.push_str("}\n");
        Ok(css)
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_palette_renders() {
        let css = ThemeTokens::default().to_css().unwrap();
        assert_eq!(
            css,
            ":root {\n    --codex-dark: #0A0A0A;\n    --codex-card: #141414;\n    --codex-accent: #00A3FF;\n    --codex-secondary: #71717A;\n}\n"
        );
    }

    #[test]
    fn bad_color_names_the_token() {
        let tokens = ThemeTokens {
            accent: "blue".into(),
            ..Default::default()
        };
        match tokens.to_css() {
            Err(Error::InvalidColor { token, value }) => {
                assert_eq!(token, "accent");
                assert_eq!(value, "blue");
            }
            other => panic!("expected InvalidColor, got {other:?}"),
        }
    }

    #[test]
    fn short_and_non_hex_forms_rejected() {
        assert!(!is_hex_color("#FFF"));
        assert!(!is_hex_color("#GGGGGG"));
        assert!(!is_hex_color("00A3FF"));
        assert!(is_hex_color("#00a3ff"));
    }
}
