//! Browser-free domain logic for the site: validation, form schemas, the
//! submission flow and the math behind scroll and hover effects

pub mod config;
pub mod forms;
pub mod hover;
pub mod i18n;
pub mod modal;
pub mod scroll;
pub mod submission;
pub mod validation;

pub use config::SiteConfig;
pub use forms::{
    Control, FieldSpec, FormKind, FormValidation, SubmissionRecord, validate_form,
};
pub use hover::CardHover;
pub use i18n::{Locale, LocalizedText};
pub use modal::{ModalController, ModalId, ModalSet};
pub use scroll::{NavbarState, RevealState};
pub use submission::{
    Banner, FormSurface, SimulatedTransport, SubmissionFlow, SubmissionOutcome, SubmissionPhase,
    SubmitError, SubmitTransport, Timer, check_field,
};
pub use validation::{FieldError, FieldKind, validate_field};
