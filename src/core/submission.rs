//! Submission flow for the modal forms
//!
//! One flow runs per submit and walks the form through
//! `Idle → Validating → (Invalid → Idle) | (Submitting → Succeeded → Idle)`.
//! A transport error takes `Submitting → Failed → Idle` instead.
//!
//! The flow never touches the DOM. It talks to four capabilities:
//! - [`FormSurface`]: field values, annotations, banner and phase of one form
//! - [`SubmitTransport`]: where the record goes
//! - [`ModalController`]: closes the hosting modal after success
//! - [`Timer`]: the settle delay between the success banner and the reset

use std::future::Future;
use std::time::Duration;

use super::forms::{FieldSpec, FormKind, SubmissionRecord, validate_form};
use super::i18n::{self, Locale};
use super::modal::ModalController;
use super::validation::FieldError;

/// Lifecycle phase of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    /// A submit started earlier has not finished yet
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionPhase::Submitting | SubmissionPhase::Succeeded)
    }

    /// Whether the submit control is disabled
    pub fn disables_submit(&self) -> bool {
        matches!(self, SubmissionPhase::Submitting)
    }
}

/// Form-level message shown at the top of the modal body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

impl Banner {
    pub fn class(&self) -> &'static str {
        match self {
            Banner::Success(_) => "success-message",
            Banner::Error(_) => "error-message",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Banner::Success(text) | Banner::Error(text) => text,
        }
    }
}

/// Transport failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Submission rejected: {0}")]
    Rejected(String),
    #[error("Transport unavailable: {0}")]
    Unavailable(String),
}

/// Visual state of one form as seen by the submission flow
pub trait FormSurface {
    /// Current raw value of a field
    fn value(&self, field: &FieldSpec) -> String;

    /// Mark a field invalid with an error, or clear its annotation
    fn annotate(&self, field: &'static FieldSpec, error: Option<FieldError>);

    fn phase(&self) -> SubmissionPhase;

    fn set_phase(&self, phase: SubmissionPhase);

    /// Replace any banner with this one
    fn show_banner(&self, banner: Banner);

    fn clear_banners(&self);

    /// Empty every field and drop all annotations
    fn reset(&self);
}

/// Destination of submission records
pub trait SubmitTransport {
    fn submit(&self, record: &SubmissionRecord) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Source of delays
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Stand-in transport that acknowledges every record after a fixed latency
#[derive(Debug, Clone)]
pub struct SimulatedTransport<T> {
    timer: T,
    latency: Duration,
}

impl<T: Timer> SimulatedTransport<T> {
    pub fn new(timer: T, latency: Duration) -> Self {
        Self { timer, latency }
    }
}

impl<T: Timer> SubmitTransport for SimulatedTransport<T> {
    async fn submit(&self, record: &SubmissionRecord) -> Result<(), SubmitError> {
        tracing::debug!(form = %record.kind, latency_ms = self.latency.as_millis() as u64, "simulating submission");
        self.timer.sleep(self.latency).await;
        Ok(())
    }
}

/// Validate a single field against its current value and annotate it
pub fn check_field<S: FormSurface>(surface: &S, field: &'static FieldSpec) -> Result<(), FieldError> {
    let result = field.validate(&surface.value(field));
    surface.annotate(field, result.err());
    result
}

/// How a submit ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// A previous submit of the same form was still in flight
    Ignored,
    /// Validation failed; nothing was sent
    Rejected,
    /// The transport acknowledged the record and the form was reset
    Submitted(SubmissionRecord),
    /// The transport failed; values were kept
    Failed(SubmitError),
}

/// Drives one form through validation and submission
pub struct SubmissionFlow<S, T, M, C> {
    kind: FormKind,
    surface: S,
    transport: T,
    modals: M,
    timer: C,
    settle_delay: Duration,
    locale: Locale,
}

impl<S, T, M, C> SubmissionFlow<S, T, M, C>
where
    S: FormSurface,
    T: SubmitTransport,
    M: ModalController,
    C: Timer,
{
    pub fn new(kind: FormKind, surface: S, transport: T, modals: M, timer: C) -> Self {
        Self {
            kind,
            surface,
            transport,
            modals,
            timer,
            settle_delay: Duration::from_millis(super::config::DEFAULT_SETTLE_DELAY_MS),
            locale: Locale::default(),
        }
    }

    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Validate every field, annotating each one
    pub fn validate(&self) -> bool {
        let validation = validate_form(self.kind, |field| self.surface.value(field));
        for &(field, result) in &validation.fields {
            self.surface.annotate(field, result.err());
        }
        validation.is_valid()
    }

    /// Run a full submit
    pub async fn submit(&self) -> SubmissionOutcome {
        let phase = self.surface.phase();
        if phase.is_in_flight() {
            tracing::debug!(form = %self.kind, ?phase, "submit ignored, previous submission in flight");
            return SubmissionOutcome::Ignored;
        }

        self.surface.set_phase(SubmissionPhase::Validating);
        if !self.validate() {
            self.surface.set_phase(SubmissionPhase::Invalid);
            self.surface
                .show_banner(Banner::Error(i18n::FIX_FORM_ERRORS.get(self.locale).to_string()));
            self.surface.set_phase(SubmissionPhase::Idle);
            tracing::debug!(form = %self.kind, "submit rejected by validation");
            return SubmissionOutcome::Rejected;
        }

        let record = SubmissionRecord::collect(self.kind, |field| self.surface.value(field));
        self.surface.set_phase(SubmissionPhase::Submitting);

        match self.transport.submit(&record).await {
            Ok(()) => {
                match record.to_json() {
                    Ok(json) => tracing::info!(form = %self.kind, record = %json, "submission acknowledged"),
                    Err(error) => tracing::info!(form = %self.kind, %error, "submission acknowledged, record not serialisable"),
                }

                self.surface.set_phase(SubmissionPhase::Succeeded);
                self.surface.show_banner(Banner::Success(
                    self.kind.success_message().get(self.locale).to_string(),
                ));

                self.timer.sleep(self.settle_delay).await;

                self.surface.reset();
                self.modals.close(self.kind.modal_id());
                self.surface.clear_banners();
                self.surface.set_phase(SubmissionPhase::Idle);
                SubmissionOutcome::Submitted(record)
            }
            Err(error) => {
                tracing::warn!(form = %self.kind, %error, "submission failed");
                self.surface.set_phase(SubmissionPhase::Failed);
                self.surface
                    .show_banner(Banner::Error(i18n::SUBMIT_FAILED.get(self.locale).to_string()));
                self.surface.set_phase(SubmissionPhase::Idle);
                SubmissionOutcome::Failed(error)
            }
        }
    }
}
