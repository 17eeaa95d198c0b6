use leptos::prelude::*;

/// Badge component: "secondary" (manufacturer), "outline" (feature tag), "primary"
#[component]
pub fn Badge(
    /// Badge variant: "primary", "outline", "secondary" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("secondary") {
        "primary" => "badge--primary",
        "outline" => "badge--outline",
        _ => "badge--secondary",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}
