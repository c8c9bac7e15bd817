use codex_content::catalog::FEATURES;
use codex_content::types::FeatureEntry;
use leptos::prelude::*;

use super::LucideIcon;
use super::hero::FEATURES_ANCHOR;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=FEATURES_ANCHOR class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "Everything you need, " <br /> "built in natively."
                    </h2>
                    <p class="section-description">
                        "Standard web technologies. Professional results."
                    </p>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=*feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: FeatureEntry) -> impl IntoView {
    view! {
        <div class=format!("{} glass", feature.size.class())>
            <div class="feature-icon">
                <LucideIcon icon=feature.icon />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </div>
    }
}
