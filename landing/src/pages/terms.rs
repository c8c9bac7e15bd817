use codex_content::catalog::TERMS_OF_SERVICE;
use leptos::prelude::*;

use super::legal::LegalPage;

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalPage document=TERMS_OF_SERVICE /> }
}
