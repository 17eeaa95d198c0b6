pub mod footer;
pub mod global_context;
pub mod header;
pub mod section;

use crate::pages::{AboutPage, CatalogPage, ContactsPage, SpecsPage};
use global_context::use_site_context;
use leptos::prelude::*;
use section::Section;

/// Page shell: sticky header with navigation, the active section, footer.
///
/// ```text
/// +------------------------------------------+
/// |  Header (brand + nav)                    |
/// +------------------------------------------+
/// |  active section                          |
/// +------------------------------------------+
/// |  Footer                                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_site_context();

    view! {
        <div class="site-layout">
            <header::Header />

            <main class="site-main">
                {move || match ctx.section.get() {
                    Section::Catalog => view! { <CatalogPage /> }.into_any(),
                    Section::Specs => view! { <SpecsPage /> }.into_any(),
                    Section::About => view! { <AboutPage /> }.into_any(),
                    Section::Contacts => view! { <ContactsPage /> }.into_any(),
                }}
            </main>

            <footer::Footer />
        </div>
    }
}
