use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;
use crate::shared::number_format::format_price;
use contracts::domain::a001_network_switch::aggregate::NetworkSwitch;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Карточка коммутатора в сетке каталога
#[component]
pub fn SwitchCard(
    sw: NetworkSwitch,
    /// Позиция в выдаче, задаёт задержку анимации появления
    index: usize,
) -> impl IntoView {
    let style = format!("animation-delay: {:.2}s", index as f64 * 0.05);
    let features = sw.visible_features().to_vec();
    let on_buy = {
        let name = sw.name.clone();
        Callback::new(move |_| log::info!("buy clicked: {}", name))
    };

    view! {
        <div class="card switch-card animate-fade-in" id=format!("switch-{}", sw.id.as_string()) style=style>
            <div class="switch-card__glyph">{sw.glyph.clone()}</div>
            <Badge>{sw.manufacturer.display_name()}</Badge>
            <h3 class="switch-card__name">{sw.name.clone()}</h3>

            <div class="switch-card__specs">
                <div class="switch-card__spec">
                    {icon("boxes")}
                    {format!("{} портов", sw.ports)}
                </div>
                <div class="switch-card__spec">
                    {icon("gauge")}
                    {sw.speed.clone()}
                </div>
                {sw.poe.then(|| view! {
                    <div class="switch-card__spec switch-card__spec--poe">
                        {icon("zap")}
                        "PoE"
                    </div>
                })}
            </div>

            <div class="switch-card__features">
                {features
                    .into_iter()
                    .map(|f| view! { <Badge variant="outline" class="badge--xs">{f}</Badge> })
                    .collect_view()}
            </div>

            <hr class="separator" />

            <div class="switch-card__footer">
                <div class="switch-card__price">{format_price(sw.price)}</div>
                <Button size="sm" on_click=on_buy>
                    {icon("shopping-cart")}
                    "Купить"
                </Button>
            </div>
        </div>
    }
}
