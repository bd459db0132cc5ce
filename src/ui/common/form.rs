use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Inline error shown under an invalid control
#[component]
fn InvalidFeedback(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.as_ref().and_then(|e| e.get()).map(|err| {
            view! {
                <div class="invalid-feedback">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                    <span>{err}</span>
                </div>
            }
        })
    }
}

#[component]
fn FieldLabel(id: &'static str, label: String, required: bool) -> impl IntoView {
    view! {
        <label class="form-label" for=id>
            {label}
            {required.then(|| view! { <span class="required-mark">"*"</span> })}
        </label>
    }
}

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// DOM id of the input
    id: &'static str,
    /// Field label text
    label: String,
    /// Whether field is required (shows asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, number)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Blur event callback
    on_blur: Callback<()>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <FieldLabel id=id label=label required=required/>
            <input
                id=id
                name=id
                type=input_type
                class="form-control"
                class:is-invalid=move || error.as_ref().and_then(|e| e.get()).is_some()
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
                disabled=move || disabled.get()
            />
            <InvalidFeedback error=error/>
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    /// DOM id of the text area
    id: &'static str,
    /// Field label text
    label: String,
    /// Whether field is required (shows asterisk)
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Blur event callback
    on_blur: Callback<()>,
    /// Number of rows
    #[prop(default = 3)]
    rows: u32,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <FieldLabel id=id label=label required=required/>
            <textarea
                id=id
                name=id
                class="form-control"
                class:is-invalid=move || error.as_ref().and_then(|e| e.get()).is_some()
                required=required
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
                disabled=move || disabled.get()
            />
            <InvalidFeedback error=error/>
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    /// DOM id of the select
    id: &'static str,
    /// Field label text
    label: String,
    /// Whether field is required (shows asterisk)
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Blur event callback
    on_blur: Callback<()>,
    /// Text of the empty first option
    placeholder: String,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <FieldLabel id=id label=label required=required/>
            <select
                id=id
                name=id
                class="form-select"
                class:is-invalid=move || error.as_ref().and_then(|e| e.get()).is_some()
                required=required
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
                disabled=move || disabled.get()
            >
                <option value="">{placeholder}</option>
                {options.into_iter().map(|(val, text)| {
                    view! {
                        <option value=val>{text}</option>
                    }
                }).collect_view()}
            </select>
            <InvalidFeedback error=error/>
        </div>
    }
}
