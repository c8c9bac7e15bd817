//! UI state rules.
//!
//! The components own the signals; this module owns what the values mean.

/// Scroll offset (px) past which the navigation bar turns to glass.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Visual state of the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavStyle {
    /// Transparent background, roomy padding. Used at the top of the page.
    #[default]
    Transparent,
    /// Translucent blurred background, bottom border, tight padding.
    Glass,
}

impl NavStyle {
    /// Style for a vertical scroll offset. No hysteresis: the threshold is
    /// the same in both directions.
    pub fn from_offset(offset_px: f64) -> NavStyle {
        if offset_px > SCROLL_THRESHOLD_PX {
            NavStyle::Glass
        } else {
            NavStyle::Transparent
        }
    }

    /// CSS class list for the `<nav>` element.
    pub fn class(self) -> &'static str {
        match self {
            NavStyle::Transparent => "nav nav--transparent",
            NavStyle::Glass => "nav nav--glass glass",
        }
    }
}

/// Where the viewport goes after a navigation, and the nav style that goes
/// with it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollReset {
    /// Horizontal offset (px)
    pub x: f64,
    /// Vertical offset (px)
    pub y: f64,
    /// Style for the bar once the viewport is at `(x, y)`
    pub nav_style: NavStyle,
}

impl ScrollReset {
    /// Top-left corner of the page.
    pub fn top() -> ScrollReset {
        ScrollReset {
            x: 0.0,
            y: 0.0,
            nav_style: NavStyle::from_offset(0.0),
        }
    }
}

/// Decides when the viewport must be reset: once for the first pathname and
/// once for every change after it, whatever the current scroll depth.
#[derive(Clone, Debug, Default)]
pub struct RouteWatcher {
    current: Option<String>,
}

impl RouteWatcher {
    /// Record the pathname the router now shows. Returns the reset to apply
    /// when it differs from the previous one.
    pub fn observe(&mut self, pathname: &str) -> Option<ScrollReset> {
        if self.current.as_deref() == Some(pathname) {
            return None;
        }
        self.current = Some(pathname.to_owned());
        Some(ScrollReset::top())
    }

    /// Last pathname seen.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

/// Mobile overlay menu visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    /// Overlay hidden
    #[default]
    Closed,
    /// Overlay shown
    Open,
}

impl MenuState {
    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    /// Close, whatever the current state. Every navigation link calls this.
    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    /// Whether the overlay is visible.
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Accessible label for the toggle button.
    pub fn toggle_label(self) -> &'static str {
        match self {
            MenuState::Closed => "Open menu",
            MenuState::Open => "Close menu",
        }
    }
}

/// Screenshot marquee animation state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Playback {
    /// Track is scrolling
    #[default]
    Playing,
    /// Pointer is over the gallery
    Paused,
}

impl Playback {
    /// State for a hover change: hovering pauses, leaving resumes.
    pub fn from_hover(hovered: bool) -> Playback {
        if hovered {
            Playback::Paused
        } else {
            Playback::Playing
        }
    }

    /// CSS class list for the marquee track.
    pub fn class(self) -> &'static str {
        match self {
            Playback::Playing => "marquee-track",
            Playback::Paused => "marquee-track marquee-track--paused",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_up_to_threshold() {
        for offset in [0.0, 1.0, 25.5, 49.99, 50.0] {
            assert_eq!(NavStyle::from_offset(offset), NavStyle::Transparent, "{offset}");
        }
    }

    #[test]
    fn glass_past_threshold() {
        for offset in [50.01, 51.0, 800.0, 1e6] {
            assert_eq!(NavStyle::from_offset(offset), NavStyle::Glass, "{offset}");
        }
    }

    #[test]
    fn crossing_back_reverts_immediately() {
        let offsets = [0.0, 60.0, 49.0, 51.0, 50.0];
        let styles: Vec<_> = offsets.into_iter().map(NavStyle::from_offset).collect();
        assert_eq!(
            styles,
            vec![
                NavStyle::Transparent,
                NavStyle::Glass,
                NavStyle::Transparent,
                NavStyle::Glass,
                NavStyle::Transparent,
            ]
        );
    }

    #[test]
    fn overscroll_and_nan_are_transparent() {
        assert_eq!(NavStyle::from_offset(-120.0), NavStyle::Transparent);
        assert_eq!(NavStyle::from_offset(f64::NAN), NavStyle::Transparent);
    }

    #[test]
    fn glass_class_marks_glass() {
        assert!(NavStyle::Glass.class().split(' ').any(|c| c == "glass"));
        assert!(!NavStyle::Transparent.class().split(' ').any(|c| c == "glass"));
    }

    #[test]
    fn toggle_parity() {
        for n in 0..7 {
            let mut menu = MenuState::default();
            for _ in 0..n {
                menu.toggle();
            }
            assert_eq!(menu.is_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn close_always_closes() {
        for start in [MenuState::Open, MenuState::Closed] {
            let mut menu = start;
            menu.close();
            assert_eq!(menu, MenuState::Closed);
        }
    }

    #[test]
    fn navigation_after_deep_scroll_reverts_to_transparent() {
        let mut watcher = RouteWatcher::default();
        let mut offset = watcher.observe("/").map_or(f64::NAN, |reset| reset.y);
        assert_eq!(offset, 0.0);

        offset = 800.0;
        assert_eq!(NavStyle::from_offset(offset), NavStyle::Glass);

        let reset = watcher.observe("/terms").expect("route change resets the viewport");
        offset = reset.y;
        assert_eq!((reset.x, offset), (0.0, 0.0));
        assert_eq!(reset.nav_style, NavStyle::Transparent);
        assert_eq!(NavStyle::from_offset(offset), reset.nav_style);
        assert_eq!(watcher.current(), Some("/terms"));
    }

    #[test]
    fn every_transition_resets_regardless_of_depth() {
        let mut watcher = RouteWatcher::default();
        for (path, depth) in [("/", 0.0), ("/privacy", 1200.0), ("/terms", 51.0), ("/", 5.0)] {
            assert_eq!(NavStyle::from_offset(depth) == NavStyle::Glass, depth > 50.0);
            assert_eq!(watcher.observe(path), Some(ScrollReset::top()), "{path}");
        }
    }

    #[test]
    fn same_pathname_does_not_reset_again() {
        let mut watcher = RouteWatcher::default();
        assert!(watcher.observe("/privacy").is_some());
        assert_eq!(watcher.observe("/privacy"), None);
        assert!(watcher.observe("/terms").is_some());
    }

    #[test]
    fn hover_pauses_gallery() {
        assert_eq!(Playback::from_hover(true), Playback::Paused);
        assert_eq!(Playback::from_hover(false), Playback::Playing);
        assert!(Playback::Paused.class().contains("--paused"));
    }
}
