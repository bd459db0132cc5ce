pub mod app_context;
pub mod common;
pub mod icon;
pub mod navbar;
pub mod pages;
pub mod quote_forms;
pub mod registry;
pub mod service_card;

pub use app_context::{provide_site_config, use_site_config};
pub use icon::{Icon, icons};
pub use navbar::Navbar;
pub use quote_forms::{FormState, QuoteForm, QuoteModal, QuoteModals};
pub use registry::{
    AnchorLink, PageRegistry, ScrollEffects, ScrollReveal, provide_page_registry,
    use_page_registry,
};
pub use service_card::ServiceCard;
