use codex_content::site::mailto;
use codex_content::types::{LegalDocument, LegalSection};
use leptos::prelude::*;

/// Shared layout for the privacy and terms pages.
#[component]
pub fn LegalPage(document: LegalDocument) -> impl IntoView {
    view! {
        <div class="page page--legal">
            <main class="legal">
                <h1 class="legal-title">{document.title}</h1>
                <div class="legal-body">
                    {document
                        .sections
                        .iter()
                        .map(|section| view! { <LegalBlock section=*section /> })
                        .collect_view()}
                </div>
            </main>
        </div>
    }
}

#[component]
fn LegalBlock(section: LegalSection) -> impl IntoView {
    view! {
        <section class="legal-section">
            <h2 class="legal-heading">{section.heading}</h2>
            <p>
                {section.body}
                {section
                    .contact_email
                    .map(|email| {
                        view! {
                            " "
                            <a href=mailto(email) class="legal-link">{email}</a>
                            "."
                        }
                    })}
            </p>
        </section>
    }
}
