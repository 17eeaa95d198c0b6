use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="container site-footer__inner">
                <div class="site-footer__brand">
                    {icon("network")}
                    <span>"SwitchPro"</span>
                </div>
                <p class="site-footer__copyright">
                    {format!("© {} SwitchPro. Все права защищены.", year)}
                </p>
            </div>
        </footer>
    }
}
