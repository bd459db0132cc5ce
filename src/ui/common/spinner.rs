use leptos::prelude::*;

/// Inline spinner for buttons or text
#[component]
pub fn InlineSpinner(
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("loading {}", class) role="status" aria-hidden="true"></span>
    }
}

/// Submit button that swaps its label for a spinner while loading
#[component]
pub fn LoadingButton(
    /// Whether button is in loading state
    #[prop(into)]
    loading: Signal<bool>,
    /// Button text when not loading
    text: String,
    /// Button text when loading
    loading_text: String,
    /// Id of the form this button submits
    form: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            form=form
            class=format!("btn btn-primary {}", class)
            disabled=move || loading.get()
        >
            <Show
                when=move || loading.get()
                fallback=move || view! { <span>{text.clone()}</span> }
            >
                <InlineSpinner class="me-2"/>
                <span>{loading_text.clone()}</span>
            </Show>
        </button>
    }
}
