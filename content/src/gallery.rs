//! Marquee sequence for the screenshot gallery.
//!
//! The track holds the source images twice, back to back, and the CSS
//! animation translates it by exactly half its width. When the animation
//! wraps, the second copy sits where the first started, so the loop has no
//! visible jump.

use crate::catalog::SCREENSHOTS;
use crate::types::Screenshot;

/// `items` followed by `items` again.
pub fn marquee_sequence<T: Clone>(items: &[T]) -> Vec<T> {
    let mut track = Vec::with_capacity(items.len() * 2);
    track.extend_from_slice(items);
    track.extend_from_slice(items);
    track
}

/// The gallery track for the site's screenshots.
pub fn screenshot_track() -> Vec<Screenshot> {
    marquee_sequence(SCREENSHOTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn track_is_twice_the_source() {
        let track = screenshot_track();
        assert_eq!(track.len(), 2 * SCREENSHOTS.len());
        let (first, second) = track.split_at(SCREENSHOTS.len());
        assert_eq!(first, second);
        assert_eq!(first, SCREENSHOTS);
    }

    #[test]
    fn empty_source_gives_empty_track() {
        let track: Vec<u8> = marquee_sequence(&[]);
        assert!(track.is_empty());
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(marquee_sequence(&[1, 2, 3]), vec![1, 2, 3, 1, 2, 3]);
    }
}
