// Home page - hero, gallery, features, stats, call to action
use crate::console;
use crate::sections::{Features, FinalCta, Gallery, Hero, Stats};
use codex_content::Route;
use codex_content::structured_data::home_json_ld;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <StructuredData route=Route::Home />
            <Hero />
            <Gallery />
            <Features />
            <Stats />
            <FinalCta />
        </div>
    }
}

/// JSON-LD `<script>` for routes that carry structured data.
#[component]
fn StructuredData(route: Route) -> impl IntoView {
    if !route.emits_structured_data() {
        return None;
    }
    match home_json_ld() {
        Ok(json) => Some(view! { <script type="application/ld+json" inner_html=json></script> }),
        Err(err) => {
            console::error(&err.to_string());
            None
        }
    }
}
