use codex_content::Route;
use codex_content::site::{COPYRIGHT, LOGO_SRC, PRODUCT_FULL_NAME, PRODUCT_NAME, support_mailto};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-top">
                    <div class="footer-brand">
                        <img src=LOGO_SRC alt=PRODUCT_NAME class="footer-logo" />
                        <span class="footer-title">{PRODUCT_FULL_NAME}</span>
                    </div>
                    <div class="footer-links">
                        <a href=Route::Privacy.path() class="footer-link">"Privacy"</a>
                        <a href=Route::Terms.path() class="footer-link">"Terms"</a>
                        <a href=support_mailto() class="footer-link">"Support"</a>
                    </div>
                </div>
                <p class="footer-copyright">{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
