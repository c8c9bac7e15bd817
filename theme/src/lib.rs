//! Build-time generator for the CodeX landing site.
//!
//! Trunk runs `codex-theme css` as a pre-build hook so `landing/style/theme.css`
//! always reflects [`ThemeTokens`]. The other subcommands produce files a
//! static host needs next to the wasm bundle.
//!
//! Developed with 💀 by The CodeX Team (c)2025

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use codex_content::structured_data::SoftwareApplication;
use codex_content::{Route, ThemeTokens};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "codex-theme")]
#[command(about = "Generate theme CSS, JSON-LD and sitemap for the CodeX landing site")]
#[command(version)]
pub struct Cli {
    /// TOML file overriding some or all theme tokens
    #[arg(long, global = true)]
    pub theme: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the palette as CSS custom properties
    Css {
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the home page JSON-LD
    JsonLd,
    /// Write sitemap.xml for every route
    Sitemap {
        /// Public origin, e.g. https://codex.example
        #[arg(long)]
        base_url: String,
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List routes
    Routes,
}

/// Execute a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Css { out } => {
            let tokens = load_theme(cli.theme.as_deref())?;
            let css = tokens.to_css()?;
            write_output(out.as_deref(), &css)?;
        }
        Command::JsonLd => {
            let json = SoftwareApplication::default().to_json_ld_pretty()?;
            write_output(None, &format!("{json}\n"))?;
        }
        Command::Sitemap { base_url, out } => {
            let xml = render_sitemap(&base_url)?;
            write_output(out.as_deref(), &xml)?;
        }
        Command::Routes => {
            write_output(None, &render_routes())?;
        }
    }
    Ok(())
}

/// Default palette, with any tokens from `path` laid over it.
pub fn load_theme(path: Option<&Path>) -> Result<ThemeTokens> {
    let Some(path) = path else {
        debug!("no theme override, using default palette");
        return Ok(ThemeTokens::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read theme file {}", path.display()))?;
    let tokens: ThemeTokens = toml::from_str(&raw)
        .with_context(|| format!("failed to parse theme file {}", path.display()))?;
    tokens.validate()?;
    info!(path = %path.display(), "loaded theme override");
    Ok(tokens)
}

/// sitemap.xml listing every route under `base_url`.
pub fn render_sitemap(base_url: &str) -> Result<String> {
    if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
        bail!("base URL must start with http:// or https://, got `{base_url}`");
    }
    let base = base_url.trim_end_matches('/');

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for route in Route::ALL {
        let loc = xml_escape(&format!("{base}{}", route.path()));
        xml.push_str(&format!("  <url><loc>{loc}</loc></url>\n"));
    }
    xml.push_str("</urlset>\n");
    Ok(xml)
}

/// One `path<TAB>title` line per route.
pub fn render_routes() -> String {
    Route::ALL
        .iter()
        .map(|route| format!("{}\t{}\n", route.path(), route.title()))
        .collect()
}

/// Write `contents` to `out` (or stdout). Returns `false` when the file
/// already held exactly `contents` and was left untouched.
fn write_output(out: Option<&Path>, contents: &str) -> Result<bool> {
    let Some(path) = out else {
        print!("{contents}");
        return Ok(true);
    };
    if fs::read_to_string(path).is_ok_and(|existing| existing == contents) {
        debug!(path = %path.display(), "output unchanged, skipping write");
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(true)
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn sitemap_lists_every_route() {
        let xml = render_sitemap("https://codex.example/").unwrap();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://codex.example/</loc>"));
        assert!(xml.contains("<loc>https://codex.example/privacy</loc>"));
        assert!(xml.contains("<loc>https://codex.example/terms</loc>"));
        assert_eq!(xml.matches("<url>").count(), Route::ALL.len());
    }

    #[test]
    fn sitemap_escapes_and_validates_base() {
        let xml = render_sitemap("https://codex.example/?a=1&b=2").unwrap();
        assert!(xml.contains("&amp;b=2"));
        assert!(render_sitemap("codex.example").is_err());
    }

    #[test]
    fn routes_table() {
        assert_eq!(render_routes(), "/\tHome\n/privacy\tPrivacy\n/terms\tTerms\n");
    }

    #[test]
    fn theme_override_keeps_missing_tokens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(&path, "accent = \"#FF5500\"\n").unwrap();

        let tokens = load_theme(Some(&path)).unwrap();
        assert_eq!(
            tokens,
            ThemeTokens {
                accent: "#FF5500".into(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn theme_override_rejects_bad_input() {
        let dir = TempDir::new().unwrap();

        let unknown = dir.path().join("unknown.toml");
        fs::write(&unknown, "primary = \"#FFFFFF\"\n").unwrap();
        assert!(load_theme(Some(&unknown)).is_err());

        let bad_color = dir.path().join("bad.toml");
        fs::write(&bad_color, "dark = \"black\"\n").unwrap();
        let err = load_theme(Some(&bad_color)).unwrap_err();
        assert!(err.to_string().contains("dark"));

        let missing = dir.path().join("missing.toml");
        let err = load_theme(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("failed to read theme file"));
    }

    #[test]
    fn css_command_writes_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("style").join("theme.css");
        let cli = Cli::parse_from(["codex-theme", "css", "--out", out.to_str().unwrap()]);

        run(cli).unwrap();

        let css = fs::read_to_string(&out).unwrap();
        assert_eq!(css, ThemeTokens::default().to_css().unwrap());
    }

    #[test]
    fn unchanged_output_is_not_rewritten() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("theme.css");
        let css = ThemeTokens::default().to_css().unwrap();

        assert!(write_output(Some(&out), &css).unwrap());
        assert!(!write_output(Some(&out), &css).unwrap());

        let other = ThemeTokens {
            card: "#202020".into(),
            ..Default::default()
        }
        .to_css()
        .unwrap();
        assert!(write_output(Some(&out), &other).unwrap());
        assert_eq!(fs::read_to_string(&out).unwrap(), other);
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from(["codex-theme", "routes", "--log-level", "debug"]);
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Command::Routes));
    }
}
