//! SVG icon components using Lucide Icons.
//!
//! Lucide icons are 24x24 stroke drawings. Every shape is stored as path data
//! (rects converted to paths) so one `<path>` loop renders any of them.

use codex_content::types::Icon;
use leptos::prelude::*;

/// Renders an inline Lucide icon.
///
/// ```rust,ignore
/// view! { <LucideIcon icon=Icon::Zap size="28" /> }
/// ```
#[component]
pub fn LucideIcon(
    /// Which icon
    icon: Icon,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {icon_paths(icon).iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

fn icon_paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Zap => ICON_ZAP,
        Icon::Code2 => ICON_CODE_XML,
        Icon::Monitor => ICON_MONITOR,
        Icon::Smartphone => ICON_SMARTPHONE,
        Icon::ShieldCheck => ICON_SHIELD_CHECK,
        Icon::Rocket => ICON_ROCKET,
        Icon::Menu => ICON_MENU,
        Icon::X => ICON_X,
    }
}

// =============================================================================
// Lucide Icons - https://lucide.dev/
// =============================================================================

const ICON_ZAP: &[&str] = &[
    "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
];

const ICON_CODE_XML: &[&str] = &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"];

const ICON_MONITOR: &[&str] = &[
    "M4 3h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
    "M8 21h8",
    "M12 17v4",
];

const ICON_SMARTPHONE: &[&str] = &[
    "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
    "M12 18h.01",
];

const ICON_SHIELD_CHECK: &[&str] = &[
    "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
    "m9 12 2 2 4-4",
];

const ICON_ROCKET: &[&str] = &[
    "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
    "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
    "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
    "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
];

const ICON_MENU: &[&str] = &["M4 12h16", "M4 6h16", "M4 18h16"];

const ICON_X: &[&str] = &["M18 6 6 18", "m6 6 12 12"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_paths() {
        let all = [
            Icon::Zap,
            Icon::Code2,
            Icon::Monitor,
            Icon::Smartphone,
            Icon::ShieldCheck,
            Icon::Rocket,
            Icon::Menu,
            Icon::X,
        ];
        for icon in all {
            let paths = icon_paths(icon);
            assert!(!paths.is_empty(), "{icon:?}");
            assert!(paths.iter().all(|d| d.starts_with(['M', 'm'])), "{icon:?}");
        }
    }
}
