use leptos::prelude::*;

/// Labelled textarea bound to a signal
#[component]
pub fn Textarea(
    /// Label text
    #[prop(into)]
    label: String,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    on_input: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let label_for = id.clone();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(4).to_string();

    view! {
        <div class="form__group">
            <label class="form__label" for=label_for>
                {label}
            </label>
            <textarea
                id=id
                class="form__textarea"
                placeholder=textarea_placeholder
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
