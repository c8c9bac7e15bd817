use codex_content::catalog::STATS;
use leptos::prelude::*;

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="container stats-grid">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="stat">
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
