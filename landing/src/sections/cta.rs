use codex_content::site::PLAY_STORE_URL;
use codex_content::types::Icon;
use leptos::prelude::*;

use super::LucideIcon;

#[component]
pub fn FinalCta() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="cta-glow"></div>
            <div class="cta-card">
                <h2 class="cta-title">"Start building " <br /> "on the go."</h2>
                <p class="cta-text">
                    "Ready to experience the future of mobile development? Download CodeX today."
                </p>
                <a
                    href=PLAY_STORE_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn-accent"
                >
                    "FREE DOWNLOAD"
                    <LucideIcon icon=Icon::Rocket class="btn-icon" />
                </a>
            </div>
        </section>
    }
}
