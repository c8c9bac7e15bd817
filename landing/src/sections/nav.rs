use codex_content::links::{BRAND_LINK, DESKTOP_LINKS, NavLink, OVERLAY_LINKS};
use codex_content::site::LOGO_SRC;
use codex_content::types::Icon;
use codex_content::{MenuState, NavStyle};
use leptos::prelude::*;

use super::LucideIcon;

#[component]
pub fn Nav(
    style: ReadSignal<NavStyle>,
    menu: ReadSignal<MenuState>,
    set_menu: WriteSignal<MenuState>,
) -> impl IntoView {
    let toggle_menu = move |_| set_menu.update(MenuState::toggle);

    view! {
        <nav class=move || style.get().class()>
            <div class="nav-inner">
                <a
                    href=BRAND_LINK.target.href()
                    class="nav-brand"
                    on:click=move |_| follow(BRAND_LINK, set_menu)
                >
                    <div class="nav-logo">
                        <div class="nav-logo-glow"></div>
                        <img src=LOGO_SRC alt=BRAND_LINK.label />
                    </div>
                    <span class="nav-title">{BRAND_LINK.label}</span>
                </a>

                <div class="nav-links">
                    {DESKTOP_LINKS
                        .iter()
                        .map(|link| {
                            let class = if link.cta { "nav-cta" } else { "nav-link" };
                            view! { <NavAnchor link=*link class=class set_menu=set_menu /> }
                        })
                        .collect_view()}
                </div>

                <button
                    class="nav-toggle"
                    aria-label=move || menu.get().toggle_label()
                    aria-expanded=move || if menu.get().is_open() { "true" } else { "false" }
                    on:click=toggle_menu
                >
                    {move || {
                        let icon = if menu.get().is_open() { Icon::X } else { Icon::Menu };
                        view! { <LucideIcon icon=icon size="28" /> }
                    }}
                </button>
            </div>

            // Mobile overlay
            <Show when=move || menu.get().is_open()>
                <div class="nav-overlay">
                    {OVERLAY_LINKS
                        .iter()
                        .map(|link| {
                            let class = if link.cta { "nav-overlay-cta" } else { "nav-overlay-link" };
                            view! { <NavAnchor link=*link class=class set_menu=set_menu /> }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavAnchor(link: NavLink, class: &'static str, set_menu: WriteSignal<MenuState>) -> impl IntoView {
    view! {
        <a
            href=link.target.href()
            class=class
            target=link.target_attr()
            rel=link.rel_attr()
            on:click=move |_| follow(link, set_menu)
        >
            {link.label}
        </a>
    }
}

fn follow(link: NavLink, set_menu: WriteSignal<MenuState>) {
    set_menu.update(|menu| link.on_click(menu));
}
