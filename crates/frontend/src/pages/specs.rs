//! Раздел "Технические характеристики": карточки преимуществ и сравнение серий

use leptos::prelude::*;

struct Highlight {
    glyph: &'static str,
    title: &'static str,
    text: &'static str,
}

const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        glyph: "⚡",
        title: "Производительность",
        text: "От 1 до 40 Гбит/с на порт. Коммутация без блокировки для максимальной пропускной способности.",
    },
    Highlight {
        glyph: "🔒",
        title: "Безопасность",
        text: "802.1X аутентификация, ACL, port security, защита от DDoS атак и storm control.",
    },
    Highlight {
        glyph: "🌐",
        title: "Управление",
        text: "Web-интерфейс, CLI, SNMP, centralised management. Поддержка стекирования и резервирования.",
    },
];

const SERIES: [&str; 3] = ["Access", "Distribution", "Core"];

/// Строки таблицы сравнения: параметр и значения для Access / Distribution / Core
const COMPARISON: [(&str, [&str; 3]); 5] = [
    ("Количество портов", ["8-24", "24-48", "48+"]),
    ("Скорость портов", ["1 Гбит/с", "1-10 Гбит/с", "10-40 Гбит/с"]),
    ("Layer", ["Layer 2", "Layer 2/3", "Layer 3"]),
    ("PoE", ["Опционально", "PoE+", "Нет"]),
    ("Стекирование", ["Нет", "Да", "Да"]),
];

#[component]
pub fn SpecsPage() -> impl IntoView {
    view! {
        <section class="page-section animate-fade-in">
            <div class="container">
                <h2 class="page-section__title">"Технические характеристики"</h2>

                <div class="highlights">
                    {HIGHLIGHTS
                        .iter()
                        .map(|h| view! {
                            <div class="card highlight-card">
                                <div class="highlight-card__glyph">{h.glyph}</div>
                                <h3 class="highlight-card__title">{h.title}</h3>
                                <p class="text-muted">{h.text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>

                <div class="card comparison">
                    <h3 class="comparison__title">"Сравнение серий"</h3>
                    <div class="comparison__scroll">
                        <table class="comparison__table">
                            <thead>
                                <tr>
                                    <th>"Параметр"</th>
                                    {SERIES.iter().map(|s| view! { <th>{*s}</th> }).collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {COMPARISON
                                    .iter()
                                    .map(|(param, values)| view! {
                                        <tr>
                                            <td class="text-muted">{*param}</td>
                                            {values.iter().map(|v| view! { <td>{*v}</td> }).collect_view()}
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </section>
    }
}
