use codex_content::Playback;
use codex_content::gallery::screenshot_track;
use leptos::prelude::*;

/// Auto-scrolling screenshot marquee. Hover pauses, leaving resumes.
#[component]
pub fn Gallery() -> impl IntoView {
    let (playback, set_playback) = signal(Playback::default());
    let track = screenshot_track();
    // Second half repeats the first; hide it from assistive tech
    let visible = track.len() / 2;

    view! {
        <section class="gallery">
            <div class="section-header section-header--center">
                <h2 class="section-eyebrow">"Sneak Peek"</h2>
                <p class="section-title section-title--sm">"Crafted for Professionals."</p>
            </div>

            <div
                class="gallery-viewport"
                on:mouseenter=move |_| set_playback.set(Playback::from_hover(true))
                on:mouseleave=move |_| set_playback.set(Playback::from_hover(false))
            >
                <div class=move || playback.get().class()>
                    {track
                        .into_iter()
                        .enumerate()
                        .map(|(i, shot)| {
                            view! {
                                <div class="phone-frame" aria-hidden=(i >= visible).then_some("true")>
                                    <img src=shot.src alt=shot.alt class="phone-shot" />
                                    <div class="phone-shade"></div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="gallery-fade gallery-fade--left"></div>
                <div class="gallery-fade gallery-fade--right"></div>
            </div>
        </section>
    }
}
