use codex_content::{NavStyle, RouteWatcher};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::console;

/// Resets the viewport to (0, 0) whenever the pathname changes.
///
/// Must sit inside `<Router>`. `on_reset` receives the nav style for the
/// reset position right after the scroll.
#[component]
pub fn ScrollToTop(#[prop(into)] on_reset: Callback<NavStyle>) -> impl IntoView {
    let location = use_location();
    let mut watcher = RouteWatcher::default();

    Effect::new(move |_| {
        let path = location.pathname.get();
        if let Some(reset) = watcher.observe(&path) {
            window().scroll_to_with_x_and_y(reset.x, reset.y);
            on_reset.run(reset.nav_style);
            console::route_changed(&path);
        }
    });
}
