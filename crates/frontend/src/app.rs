use crate::layout::global_context::SiteContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Section and filter state for the whole page, shared via context.
    let ctx = SiteContext::new();
    ctx.init_router_integration();
    provide_context(ctx);

    view! {
        <Shell />
    }
}
