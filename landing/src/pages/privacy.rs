use codex_content::catalog::PRIVACY_POLICY;
use leptos::prelude::*;

use super::legal::LegalPage;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! { <LegalPage document=PRIVACY_POLICY /> }
}
