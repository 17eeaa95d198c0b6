//! Header component - brand and section navigation.

use crate::layout::global_context::use_site_context;
use crate::layout::section::Section;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_site_context();

    view! {
        <header class="site-header">
            <div class="container site-header__inner">
                <div class="site-header__brand">
                    <span class="site-header__logo">{icon("network")}</span>
                    <h1 class="site-header__title">"SwitchPro"</h1>
                </div>

                <nav class="site-header__nav">
                    {Section::all()
                        .into_iter()
                        .map(|section| {
                            let nav_class = move || {
                                if ctx.section.get() == section {
                                    "site-header__nav-item site-header__nav-item--active"
                                } else {
                                    "site-header__nav-item"
                                }
                            };
                            view! {
                                <button
                                    class=nav_class
                                    on:click=move |_| ctx.set_section(section)
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
