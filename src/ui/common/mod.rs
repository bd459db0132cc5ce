//! Common reusable UI components
//!
//! Form controls, banners, spinners and the modal host shared by the
//! page sections and the quote forms.

pub mod form;
pub mod message;
pub mod modal;
pub mod spinner;

pub use form::{FormField, SelectField, TextAreaField};
pub use message::BannerMessage;
pub use modal::{
    BaseModal, ModalBackdrop, ModalContext, ModalTrigger, provide_modal_context,
    use_modal_context,
};
pub use spinner::{InlineSpinner, LoadingButton};
