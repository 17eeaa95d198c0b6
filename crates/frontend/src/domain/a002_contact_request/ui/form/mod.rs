//! Форма "Отправить запрос" в разделе контактов

mod view_model;

pub use view_model::ContactFormVm;

use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ContactForm() -> impl IntoView {
    let vm = ContactFormVm::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="contact-form" on:submit=on_submit novalidate=true>
            <Input
                id="contact-name"
                label="Имя"
                placeholder="Ваше имя"
                autocomplete="name"
                value=vm.name
                on_input=Callback::new(move |v| vm.name.set(v))
            />
            <Input
                id="contact-email"
                label="Email"
                input_type="email"
                placeholder="your@email.com"
                autocomplete="email"
                value=vm.email
                on_input=Callback::new(move |v| vm.email.set(v))
            />
            <Input
                id="contact-phone"
                label="Телефон"
                input_type="tel"
                placeholder="+7 (___) ___-__-__"
                autocomplete="tel"
                value=vm.phone
                on_input=Callback::new(move |v| vm.phone.set(v))
            />
            <Textarea
                id="contact-message"
                label="Сообщение"
                placeholder="Ваш вопрос или комментарий"
                rows=4
                value=vm.message
                on_input=Callback::new(move |v| vm.message.set(v))
            />

            {move || vm.error.get().map(|e| view! {
                <div class="form__message form__message--error">{e}</div>
            })}
            {move || vm.success.get().map(|s| view! {
                <div class="form__message form__message--success">{s}</div>
            })}

            <Button button_type="submit" class="button--block" disabled=Signal::derive(move || vm.submitting.get())>
                {icon("send")}
                {move || if vm.submitting.get() { "Отправка..." } else { "Отправить" }}
            </Button>
        </form>
    }
}
