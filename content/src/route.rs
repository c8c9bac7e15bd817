//! Client-side routes.
//!
//! The router in `codex-landing` matches on [`Route::segment`]; everything
//! else (links, the sitemap, the console log) goes through [`Route::path`] so
//! the two can't drift apart.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A page the site can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/privacy`
    Privacy,
    /// `/terms`
    Terms,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 3] = [Route::Home, Route::Privacy, Route::Terms];

    /// Absolute path, as used in `href`.
    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Privacy => "/privacy",
            Route::Terms => "/terms",
        }
    }

    /// Path segment without the leading slash (empty for home).
    pub const fn segment(self) -> &'static str {
        match self {
            Route::Home => "",
            Route::Privacy => "privacy",
            Route::Terms => "terms",
        }
    }

    /// Human-readable page name.
    pub const fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Privacy => "Privacy",
            Route::Terms => "Terms",
        }
    }

    /// Whether the page embeds the JSON-LD product description.
    pub const fn emits_structured_data(self) -> bool {
        matches!(self, Route::Home)
    }

    /// Resolve a location pathname. A single trailing slash after a named
    /// segment is ignored; `//` is not the home page.
    pub fn from_path(path: &str) -> Result<Route> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() && rest != "/" => rest,
            _ => path,
        };
        let route = Route::ALL.into_iter().find(|r| r.path() == trimmed);
        match route {
            Some(route) => {
                tracing::debug!(path, route = route.title(), "resolved route");
                Ok(route)
            }
            None => {
                tracing::warn!(path, "no page for path");
                Err(Error::UnknownRoute(path.to_string()))
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Route::from_path(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_to_their_route() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()).unwrap(), route);
        }
    }

    #[test]
    fn segment_matches_path() {
        for route in Route::ALL {
            assert_eq!(format!("/{}", route.segment()), route.path());
        }
    }

    #[test]
    fn trailing_slash_is_accepted() {
        assert_eq!(Route::from_path("/privacy/").unwrap(), Route::Privacy);
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home);
    }

    #[test]
    fn unknown_paths_are_rejected() {
        for path in ["/blog", "", "privacy", "/terms/extra", "//", "///"] {
            let err = Route::from_path(path).unwrap_err();
            assert!(matches!(err, Error::UnknownRoute(ref p) if p == path));
        }
    }

    #[test]
    fn doubled_slash_is_not_home() {
        assert!(matches!(Route::from_path("//"), Err(Error::UnknownRoute(_))));
        assert!(matches!(Route::from_path("/terms//"), Err(Error::UnknownRoute(_))));
    }

    #[test]
    fn only_home_emits_structured_data() {
        let emitting: Vec<_> = Route::ALL
            .into_iter()
            .filter(|r| r.emits_structured_data())
            .collect();
        assert_eq!(emitting, vec![Route::Home]);
    }
}
