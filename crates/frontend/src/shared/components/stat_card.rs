use leptos::prelude::*;

/// Large accent figure with a caption ("500+ / Реализованных проектов")
#[component]
pub fn StatCard(
    /// Figure shown in accent colour, already formatted
    #[prop(into)]
    value: String,
    /// Caption under the figure
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-card__value">{value}</div>
            <p class="stat-card__label">{label}</p>
        </div>
    }
}
