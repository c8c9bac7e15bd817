use codex_content::site::PLAY_STORE_URL;
use codex_content::types::Icon;
use leptos::prelude::*;

use super::LucideIcon;

/// Id of the section the "Explore Features" button scrolls to.
pub const FEATURES_ANCHOR: &str = "features";

#[component]
pub fn Hero() -> impl IntoView {
    let explore = move |_| {
        if let Some(target) = document().get_element_by_id(FEATURES_ANCHOR) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    };

    view! {
        <section class="hero">
            <div class="hero-glow">
                <div class="hero-glow-a"></div>
                <div class="hero-glow-b"></div>
            </div>

            <div class="container hero-content">
                <div class="hero-badge glass animate-fade-in">
                    <LucideIcon icon=Icon::Rocket size="14" />
                    <span>"The Power of VS Code on Android"</span>
                </div>

                <h1 class="hero-title animate-float">
                    "The IDE That "
                    <br />
                    <span class="text-gradient">"Travels With You."</span>
                </h1>

                <p class="hero-lede">
                    "Stop compromising on mobile development. CodeX brings desktop-grade performance, "
                    "professional syntax highlighting, and instant live previews to your pocket."
                </p>

                <div class="hero-actions">
                    <a
                        href=PLAY_STORE_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-primary"
                    >
                        "Get it on Play Store"
                    </a>
                    <button class="btn btn-glass glass" on:click=explore>
                        "Explore Features"
                    </button>
                </div>
            </div>
        </section>
    }
}
