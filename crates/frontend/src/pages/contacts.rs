use crate::domain::a002_contact_request::ui::ContactForm;
use crate::shared::icons::icon;
use leptos::prelude::*;

struct ContactItem {
    icon_name: &'static str,
    title: &'static str,
    lines: &'static [&'static str],
    note: Option<&'static str>,
}

const CONTACTS: [ContactItem; 4] = [
    ContactItem {
        icon_name: "map-pin",
        title: "Адрес",
        lines: &["Москва, ул. Профсоюзная, 65"],
        note: None,
    },
    ContactItem {
        icon_name: "phone",
        title: "Телефон",
        lines: &["+7 (495) 123-45-67"],
        note: Some("Пн-Пт: 9:00 - 18:00"),
    },
    ContactItem {
        icon_name: "mail",
        title: "Email",
        lines: &["info@switchpro.ru", "sales@switchpro.ru"],
        note: None,
    },
    ContactItem {
        icon_name: "clock",
        title: "Техподдержка 24/7",
        lines: &["support@switchpro.ru", "+7 (495) 123-45-68"],
        note: None,
    },
];

#[component]
pub fn ContactsPage() -> impl IntoView {
    view! {
        <section class="page-section animate-fade-in">
            <div class="container container--narrow">
                <h2 class="page-section__title">"Контакты"</h2>

                <div class="contacts__grid">
                    <div class="card card--padded">
                        <h3 class="contacts__subtitle">"Свяжитесь с нами"</h3>
                        <div class="contacts__list">
                            {CONTACTS
                                .iter()
                                .map(|item| view! {
                                    <div class="contact-item">
                                        <span class="contact-item__icon">{icon(item.icon_name)}</span>
                                        <div>
                                            <h4 class="contact-item__title">{item.title}</h4>
                                            {item.lines
                                                .iter()
                                                .map(|line| view! { <p class="text-muted">{*line}</p> })
                                                .collect_view()}
                                            {item.note.map(|note| view! {
                                                <p class="text-muted text-sm">{note}</p>
                                            })}
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="card card--padded">
                        <h3 class="contacts__subtitle">"Отправить запрос"</h3>
                        <ContactForm />
                    </div>
                </div>
            </div>
        </section>
    }
}
