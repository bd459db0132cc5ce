use leptos::prelude::*;
use leptos_meta::{Meta, Stylesheet, provide_meta_context};

use crate::core::SiteConfig;
use crate::ui::common::provide_modal_context;
use crate::ui::pages::HomePage;
use crate::ui::{provide_page_registry, provide_site_config};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_site_config(SiteConfig::from_env());
    provide_page_registry();
    provide_modal_context();

    view! {
        <Stylesheet id="site" href="/style/main.css"/>
        <Meta charset="utf-8"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1"/>

        <HomePage/>
    }
}
