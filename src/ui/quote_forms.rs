//! Order, quote and contact forms hosted in modals

use std::collections::HashMap;

use leptos::prelude::*;

use crate::core::{
    Banner, Control, FieldError, FieldSpec, FormKind, FormSurface, Locale, ModalController,
    SubmissionPhase, check_field, i18n,
};
use crate::ui::app_context::use_site_config;
use crate::ui::common::{
    BannerMessage, BaseModal, FormField, LoadingButton, SelectField, TextAreaField,
    use_modal_context,
};

/// Reactive state of one form
#[derive(Clone, Copy)]
pub struct FormState {
    kind: FormKind,
    values: RwSignal<HashMap<&'static str, String>>,
    errors: RwSignal<HashMap<&'static str, FieldError>>,
    phase: RwSignal<SubmissionPhase>,
    banner: RwSignal<Option<Banner>>,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: RwSignal::new(HashMap::new()),
            errors: RwSignal::new(HashMap::new()),
            phase: RwSignal::new(SubmissionPhase::Idle),
            banner: RwSignal::new(None),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn value_signal(&self, field: &'static FieldSpec) -> Signal<String> {
        let values = self.values;
        Signal::derive(move || values.with(|v| v.get(field.id).cloned().unwrap_or_default()))
    }

    /// Localized error text of a field, if it is marked invalid
    pub fn error_signal(&self, field: &'static FieldSpec, locale: Locale) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || {
            errors.with(|e| e.get(field.id).map(|err| err.message(locale).to_string()))
        })
    }

    pub fn submitting_signal(&self) -> Signal<bool> {
        let phase = self.phase;
        Signal::derive(move || phase.get().disables_submit())
    }

    pub fn banner_signal(&self) -> Signal<Option<Banner>> {
        self.banner.into()
    }

    /// Store typed input; editing a field clears its error
    pub fn set_value(&self, field: &'static FieldSpec, value: String) {
        self.values.update(|v| {
            v.insert(field.id, value);
        });
        if self.errors.with_untracked(|e| e.contains_key(field.id)) {
            self.annotate(field, None);
        }
    }
}

impl FormSurface for FormState {
    fn value(&self, field: &FieldSpec) -> String {
        self.values
            .with_untracked(|v| v.get(field.id).cloned().unwrap_or_default())
    }

    fn annotate(&self, field: &'static FieldSpec, error: Option<FieldError>) {
        self.errors.update(|e| match error {
            Some(error) => {
                e.insert(field.id, error);
            }
            None => {
                e.remove(field.id);
            }
        });
    }

    fn phase(&self) -> SubmissionPhase {
        self.phase.get_untracked()
    }

    fn set_phase(&self, phase: SubmissionPhase) {
        tracing::trace!(form = %self.kind, ?phase, "phase change");
        self.phase.set(phase);
    }

    fn show_banner(&self, banner: Banner) {
        self.banner.set(Some(banner));
    }

    fn clear_banners(&self) {
        self.banner.set(None);
    }

    fn reset(&self) {
        self.values.update(HashMap::clear);
        self.errors.update(HashMap::clear);
    }
}

#[cfg(feature = "csr")]
mod browser {
    use std::future::Future;
    use std::time::Duration;

    use gloo_timers::future::TimeoutFuture;

    use crate::core::Timer;

    /// Timer backed by `setTimeout`
    #[derive(Clone, Copy, Default)]
    pub struct GlooTimer;

    impl Timer for GlooTimer {
        fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
            let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
            TimeoutFuture::new(millis)
        }
    }
}

#[cfg(feature = "csr")]
pub use browser::GlooTimer;

/// Renders a schema field with the matching control
#[component]
fn SchemaField(state: FormState, field: &'static FieldSpec, locale: Locale) -> impl IntoView {
    let value = state.value_signal(field);
    let error = state.error_signal(field, locale);
    let on_input = Callback::new(move |value: String| state.set_value(field, value));
    let on_blur = Callback::new(move |_: ()| {
        let _ = check_field(&state, field);
    });
    let disabled = state.submitting_signal();
    let label = field.label.get(locale).to_string();

    match field.control {
        Control::Input | Control::Number => {
            let input_type = match field.control {
                Control::Number => "number",
                _ => field.kind.input_type(),
            };
            view! {
                <FormField
                    id=field.id
                    label=label
                    required=field.required
                    input_type=input_type
                    value=value
                    on_input=on_input
                    on_blur=on_blur
                    disabled=disabled
                    error=error
                />
            }
            .into_any()
        }
        Control::Select(options) => {
            let options: Vec<(String, String)> = options
                .iter()
                .map(|(val, text)| (val.to_string(), text.get(locale).to_string()))
                .collect();
            view! {
                <SelectField
                    id=field.id
                    label=label
                    required=field.required
                    value=value
                    on_change=on_input
                    on_blur=on_blur
                    placeholder=i18n::SELECT_PLACEHOLDER.get(locale).to_string()
                    options=options
                    disabled=disabled
                    error=error
                />
            }
            .into_any()
        }
        Control::TextArea => view! {
            <TextAreaField
                id=field.id
                label=label
                required=field.required
                value=value
                on_input=on_input
                on_blur=on_blur
                disabled=disabled
                error=error
            />
        }
        .into_any(),
    }
}

/// Form body and footer for one form kind
#[component]
pub fn QuoteForm(kind: FormKind) -> impl IntoView {
    let config = use_site_config();
    let modals = use_modal_context();
    let locale = config.locale;
    let state = FormState::new(kind);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            use crate::core::{SimulatedTransport, SubmissionFlow};

            let flow = SubmissionFlow::new(
                kind,
                state,
                SimulatedTransport::new(GlooTimer, config.submit_latency),
                modals,
                GlooTimer,
            )
            .with_settle_delay(config.settle_delay)
            .with_locale(locale);

            leptos::task::spawn_local(async move {
                let outcome = flow.submit().await;
                tracing::debug!(form = %kind, ?outcome, "submit finished");
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (state, modals);
        }
    };

    view! {
        <div class="modal-body">
            <BannerMessage banner=state.banner_signal()/>
            <form id=kind.form_id() novalidate=true on:submit=on_submit>
                {kind
                    .fields()
                    .iter()
                    .map(|field| view! { <SchemaField state=state field=field locale=locale/> })
                    .collect_view()}
            </form>
        </div>
        <div class="modal-footer">
            <button
                type="button"
                class="btn btn-secondary"
                on:click=move |_| modals.close(kind.modal_id())
            >
                {i18n::CANCEL.get(locale)}
            </button>
            <LoadingButton
                loading=state.submitting_signal()
                text=i18n::SUBMIT.get(locale).to_string()
                loading_text=i18n::SENDING.get(locale).to_string()
                form=kind.form_id()
            />
        </div>
    }
}

/// Modal hosting the form of one kind
#[component]
pub fn QuoteModal(kind: FormKind) -> impl IntoView {
    let locale = use_site_config().locale;
    view! {
        <BaseModal id=kind.modal_id() title=kind.title().get(locale).to_string()>
            <QuoteForm kind=kind/>
        </BaseModal>
    }
}

/// All three modals, mounted once per page
#[component]
pub fn QuoteModals() -> impl IntoView {
    FormKind::ALL
        .into_iter()
        .map(|kind| view! { <QuoteModal kind=kind/> })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(kind: FormKind, id: &str) -> &'static FieldSpec {
        kind.field(id).expect("field exists")
    }

    #[test]
    fn test_typing_clears_field_error() {
        let owner = Owner::new();
        owner.with(|| {
            let state = FormState::new(FormKind::B2b);
            let email = field(FormKind::B2b, "b2b-email");

            state.set_value(email, "not-an-email".to_string());
            assert_eq!(check_field(&state, email), Err(FieldError::InvalidEmail));
            assert!(state.error_signal(email, Locale::English).get_untracked().is_some());

            state.set_value(email, "buyer@example.com".to_string());
            assert!(state.error_signal(email, Locale::English).get_untracked().is_none());
            assert_eq!(state.value(email), "buyer@example.com");
        });
    }

    #[test]
    fn test_reset_clears_values_and_errors() {
        let owner = Owner::new();
        owner.with(|| {
            let state = FormState::new(FormKind::Contact);
            let name = field(FormKind::Contact, "contact-name");
            let phone = field(FormKind::Contact, "contact-phone");

            state.set_value(name, "Omar".to_string());
            state.annotate(phone, Some(FieldError::Required));
            state.show_banner(Banner::Error("fix".to_string()));

            state.reset();
            assert_eq!(state.value(name), "");
            assert!(state.error_signal(phone, Locale::Arabic).get_untracked().is_none());
            // Banners are cleared separately
            assert!(state.banner_signal().get_untracked().is_some());
            state.clear_banners();
            assert!(state.banner_signal().get_untracked().is_none());
        });
    }

    #[test]
    fn test_submit_disabled_only_while_submitting() {
        let owner = Owner::new();
        owner.with(|| {
            let state = FormState::new(FormKind::B2c);
            let disabled = state.submitting_signal();
            assert!(!disabled.get_untracked());
            state.set_phase(SubmissionPhase::Submitting);
            assert!(disabled.get_untracked());
            state.set_phase(SubmissionPhase::Succeeded);
            assert!(!disabled.get_untracked());
        });
    }
}
