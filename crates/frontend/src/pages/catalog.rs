use crate::domain::a001_network_switch::ui::list::RESULTS_ANCHOR_ID;
use crate::domain::a001_network_switch::ui::{SwitchFilters, SwitchList};
use crate::layout::global_context::use_site_context;
use crate::layout::section::Section;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

fn scroll_to_results() {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(RESULTS_ANCHOR_ID))
    {
        el.scroll_into_view();
    }
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let ctx = use_site_context();

    view! {
        <section class="hero">
            <div class="container hero__inner animate-fade-in">
                <h2 class="hero__title">"Профессиональные сетевые коммутаторы"</h2>
                <p class="hero__subtitle">
                    "Надежное оборудование для построения корпоративных сетей любой сложности"
                </p>
                <div class="hero__actions">
                    <Button size="lg" on_click=Callback::new(move |_| scroll_to_results())>
                        {icon("shopping-cart")}
                        "Перейти к каталогу"
                    </Button>
                    <Button
                        size="lg"
                        variant="outline"
                        on_click=Callback::new(move |_| ctx.set_section(Section::Specs))
                    >
                        {icon("file-text")}
                        "Документация"
                    </Button>
                </div>
            </div>
        </section>

        <section class="catalog">
            <div class="container catalog__grid">
                <aside class="catalog__sidebar animate-scale-in">
                    <SwitchFilters />
                </aside>
                <div class="catalog__results">
                    <SwitchList />
                </div>
            </div>
        </section>
    }
}
