use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - collapsible sidebar panel holding filter controls
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Filter tags (active filter chips) - optional
    #[prop(optional, into)]
    filter_tags: Option<ViewFn>,

    /// Filter content (form fields)
    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header" on:click=toggle_expanded>
                <span class=move || {
                    if is_expanded.get() {
                        "filter-panel__chevron filter-panel__chevron--expanded"
                    } else {
                        "filter-panel__chevron"
                    }
                }>
                    {icon("chevron-down")}
                </span>
                {icon("filter")}
                <h3 class="filter-panel__title">"Фильтры"</h3>
                {move || {
                    let count = active_filters_count.get();
                    if count > 0 {
                        view! {
                            <span class="badge badge--primary">{count}</span>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                {filter_tags.map(|tags| view! {
                    <div class="filter-panel__tags">{tags.run()}</div>
                })}
                <div class="filter-panel-content">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <svg
                width="12"
                height="12"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                <line x1="18" y1="6" x2="6" y2="18"></line>
                <line x1="6" y1="6" x2="18" y2="18"></line>
            </svg>
        </div>
    }
}

/// Section inside the filter panel: icon + heading + controls
#[component]
pub fn FilterGroup(
    #[prop(into)] title: String,
    #[prop(into)] icon_name: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="filter-group">
            <h4 class="filter-group__title">
                {icon(&icon_name)}
                <span>{title}</span>
            </h4>
            {children()}
        </div>
    }
}
