use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use leptos::prelude::*;

const STATS: [(&str, &str); 3] = [
    ("500+", "Реализованных проектов"),
    ("15", "Лет на рынке"),
    ("24/7", "Техническая поддержка"),
];

const ADVANTAGES: [(&str, &str); 3] = [
    (
        "Официальная гарантия",
        "Все оборудование поставляется с официальной гарантией производителя от 1 до 5 лет",
    ),
    (
        "Техническая поддержка",
        "Круглосуточная поддержка от сертифицированных специалистов",
    ),
    (
        "Услуги внедрения",
        "Проектирование, настройка и ввод в эксплуатацию под ключ",
    ),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page-section animate-fade-in">
            <div class="container container--narrow">
                <h2 class="page-section__title">"О компании"</h2>

                <div class="card card--padded about__intro">
                    <p class="text-muted text-lg">
                        "SwitchPro — ведущий поставщик сетевого оборудования для корпоративного сегмента. "
                        "Мы работаем с 2010 года и помогаем компаниям строить надежные сетевые инфраструктуры."
                    </p>
                    <p class="text-muted text-lg">
                        "Наша команда состоит из сертифицированных инженеров с опытом внедрения проектов "
                        "для компаний различного масштаба — от малого бизнеса до крупных корпораций."
                    </p>
                </div>

                <div class="about__stats">
                    {STATS
                        .iter()
                        .map(|(value, label)| view! { <StatCard value=*value label=*label /> })
                        .collect_view()}
                </div>

                <div class="card card--padded">
                    <h3 class="about__subtitle">"Наши преимущества"</h3>
                    <div class="about__advantages">
                        {ADVANTAGES
                            .iter()
                            .map(|(title, text)| view! {
                                <div class="advantage">
                                    <span class="advantage__icon">{icon("check-circle")}</span>
                                    <div>
                                        <h4 class="advantage__title">{*title}</h4>
                                        <p class="text-muted">{*text}</p>
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
