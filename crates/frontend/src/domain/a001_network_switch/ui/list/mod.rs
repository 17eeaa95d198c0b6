use super::card::SwitchCard;
use crate::layout::global_context::use_site_context;
use crate::shared::number_format::plural_ru;
use leptos::prelude::*;

/// DOM id of the results grid, target of the hero "go to catalog" button
pub const RESULTS_ANCHOR_ID: &str = "catalog-results";

/// Counter and card grid for the switches that pass the current filter
#[component]
pub fn SwitchList() -> impl IntoView {
    let ctx = use_site_context();
    let visible = Memo::new(move |_| ctx.visible_switches());

    view! {
        <div class="switch-list" id=RESULTS_ANCHOR_ID>
            <div class="switch-list__header">
                <p class="text-muted">
                    "Найдено: "
                    <span class="switch-list__count">{move || visible.with(|v| v.len())}</span>
                    {move || format!(" {}", visible.with(|v| plural_ru(v.len(), "модель", "модели", "моделей")))}
                </p>
            </div>

            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| view! {
                    <div class="switch-list__empty">
                        "Нет моделей, подходящих под выбранные фильтры"
                    </div>
                }
            >
                <div class="switch-list__grid">
                    {move || visible
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, sw)| view! { <SwitchCard sw=sw index=index /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
