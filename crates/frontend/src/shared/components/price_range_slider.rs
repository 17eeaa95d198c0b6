use crate::shared::number_format::format_price;
use contracts::domain::a001_network_switch::filter::{PriceRange, PRICE_MAX, PRICE_MIN, PRICE_STEP};
use leptos::prelude::*;

/// Two-thumb price slider built from a pair of range inputs.
///
/// The thumbs never cross: moving one past the other pins it to the other's value.
#[component]
pub fn PriceRangeSlider(
    /// Current range
    #[prop(into)]
    value: Signal<PriceRange>,
    /// Called with the new range on every thumb move
    on_change: Callback<PriceRange>,
) -> impl IntoView {
    let parse = |ev: &leptos::ev::Event| event_target_value(ev).parse::<u32>().ok();

    view! {
        <div class="price-slider">
            <div class="price-slider__track">
                <input
                    type="range"
                    class="price-slider__input price-slider__input--min"
                    aria-label="Минимальная цена"
                    min=PRICE_MIN.to_string()
                    max=PRICE_MAX.to_string()
                    step=PRICE_STEP.to_string()
                    prop:value=move || value.get().min().to_string()
                    on:input=move |ev| {
                        if let Some(v) = parse(&ev) {
                            on_change.run(value.get_untracked().with_min(v));
                        }
                    }
                />
                <input
                    type="range"
                    class="price-slider__input price-slider__input--max"
                    aria-label="Максимальная цена"
                    min=PRICE_MIN.to_string()
                    max=PRICE_MAX.to_string()
                    step=PRICE_STEP.to_string()
                    prop:value=move || value.get().max().to_string()
                    on:input=move |ev| {
                        if let Some(v) = parse(&ev) {
                            on_change.run(value.get_untracked().with_max(v));
                        }
                    }
                />
            </div>
            <div class="price-slider__labels">
                <span>{move || format_price(value.get().min())}</span>
                <span>{move || format_price(value.get().max())}</span>
            </div>
        </div>
    }
}
