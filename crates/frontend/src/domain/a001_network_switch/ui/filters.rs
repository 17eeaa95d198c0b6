//! Боковая панель фильтров каталога

use crate::layout::global_context::use_site_context;
use crate::shared::components::filter_panel::{FilterGroup, FilterPanel, FilterTag};
use crate::shared::components::price_range_slider::PriceRangeSlider;
use crate::shared::components::ui::{Button, Checkbox};
use crate::shared::icons::icon;
use crate::shared::number_format::format_price;
use contracts::domain::a001_network_switch::filter::PriceRange;
use contracts::enums::Manufacturer;
use leptos::prelude::*;

#[component]
pub fn SwitchFilters() -> impl IntoView {
    let ctx = use_site_context();
    let filter = ctx.filter;
    let is_expanded = RwSignal::new(true);

    let active_filters_count = Signal::derive(move || filter.with(|f| f.active_filters_count()));
    let price_range = Signal::derive(move || filter.with(|f| f.price_range));
    let poe_only = Signal::derive(move || filter.with(|f| f.poe_only));

    let on_price_change = Callback::new(move |range: PriceRange| ctx.set_price_range(range));
    let on_poe_change = Callback::new(move |checked: bool| ctx.set_poe_only(checked));
    let on_reset = Callback::new(move |_| ctx.reset_filters());

    view! {
        <FilterPanel
            is_expanded=is_expanded
            active_filters_count=active_filters_count
            filter_tags=move || view! { <ActiveFilterTags /> }
        >
            <FilterGroup title="Производитель" icon_name="building">
                <div class="filter-group__options">
                    {Manufacturer::all()
                        .into_iter()
                        .map(|m| view! {
                            <Checkbox
                                id=format!("manufacturer-{}", m.code())
                                label=m.display_name().to_string()
                                checked=Signal::derive(move || filter.with(|f| f.is_manufacturer_selected(m)))
                                on_change=Callback::new(move |_| ctx.toggle_manufacturer(m))
                            />
                        })
                        .collect_view()}
                </div>
            </FilterGroup>

            <hr class="separator" />

            <FilterGroup title="Цена" icon_name="banknote">
                <PriceRangeSlider value=price_range on_change=on_price_change />
            </FilterGroup>

            <hr class="separator" />

            <FilterGroup title="Функции" icon_name="zap">
                <Checkbox
                    id="poe"
                    label="Только с PoE".to_string()
                    checked=poe_only
                    on_change=on_poe_change
                />
            </FilterGroup>

            <Button variant="outline" class="button--block" on_click=on_reset>
                {icon("rotate-ccw")}
                "Сбросить фильтры"
            </Button>
        </FilterPanel>
    }
}

/// Чипы активных фильтров; крестик снимает одно условие
#[component]
fn ActiveFilterTags() -> impl IntoView {
    let ctx = use_site_context();
    let filter = ctx.filter;

    move || {
        let f = filter.get();
        let mut tags = Vec::new();

        for m in f.manufacturers.iter().copied() {
            tags.push(view! {
                <FilterTag
                    label=m.display_name()
                    on_remove=Callback::new(move |_| ctx.toggle_manufacturer(m))
                />
            }.into_any());
        }

        if !f.price_range.is_full() {
            let label = format!(
                "{} – {}",
                format_price(f.price_range.min()),
                format_price(f.price_range.max())
            );
            tags.push(view! {
                <FilterTag
                    label=label
                    on_remove=Callback::new(move |_| ctx.set_price_range(PriceRange::full()))
                />
            }.into_any());
        }

        if f.poe_only {
            tags.push(view! {
                <FilterTag
                    label="PoE"
                    on_remove=Callback::new(move |_| ctx.set_poe_only(false))
                />
            }.into_any());
        }

        tags
    }
}
