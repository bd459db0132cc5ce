use crate::core::SiteConfig;
use leptos::prelude::*;

pub fn provide_site_config(config: SiteConfig) {
    tracing::debug!(?config, "site config loaded");
    provide_context(config);
}

pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().expect("SiteConfig should be provided")
}
