// CodeX Landing Page — Leptos 0.8 Edition
// Developed with 💀 by The CodeX Team (c)2025

mod console;
mod pages;
mod sections;

use codex_content::{MenuState, NavStyle, Route as SiteRoute};
use leptos::prelude::*;
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};
use pages::{HomePage, PrivacyPage, TermsPage};
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    console::banner();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Current vertical scroll offset of the window, in CSS pixels.
pub(crate) fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

#[component]
fn App() -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());
    let (nav_style, set_nav_style) = signal(NavStyle::default());

    // Re-evaluated on every scroll event, no debounce
    let scroll_listener = window_event_listener(leptos::ev::scroll, move |_| {
        set_nav_style.set(NavStyle::from_offset(scroll_offset()));
    });
    on_cleanup(move || scroll_listener.remove());

    view! {
        <Router>
            <ScrollToTop on_reset=move |style: NavStyle| set_nav_style.set(style) />
            <div class="shell">
                <Nav style=nav_style menu=menu set_menu=set_menu />
                <Routes fallback=|| ()>
                    <Route path=StaticSegment(SiteRoute::Home.segment()) view=HomePage />
                    <Route path=StaticSegment(SiteRoute::Privacy.segment()) view=PrivacyPage />
                    <Route path=StaticSegment(SiteRoute::Terms.segment()) view=TermsPage />
                </Routes>
                <Footer />
            </div>
        </Router>
    }
}
