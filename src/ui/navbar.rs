use leptos::prelude::*;

use crate::core::LocalizedText;
use crate::ui::app_context::use_site_config;
use crate::ui::icon::{Icon, icons};
use crate::ui::registry::{AnchorLink, use_page_registry};

/// In-page navigation entry
struct NavLink {
    href: &'static str,
    label: LocalizedText,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink {
        href: "#home",
        label: LocalizedText::new("الرئيسية", "Home"),
    },
    NavLink {
        href: "#about",
        label: LocalizedText::new("من نحن", "About"),
    },
    NavLink {
        href: "#services",
        label: LocalizedText::new("خدماتنا", "Services"),
    },
    NavLink {
        href: "#faq",
        label: LocalizedText::new("الأسئلة الشائعة", "FAQ"),
    },
    NavLink {
        href: "#contact",
        label: LocalizedText::new("اتصل بنا", "Contact"),
    },
];

const TOGGLE_LABEL: LocalizedText = LocalizedText::new("القائمة", "Toggle navigation");

/// Fixed top navbar; turns compact once the page is scrolled
#[component]
pub fn Navbar() -> impl IntoView {
    let registry = use_page_registry();
    let locale = use_site_config().locale;
    let navbar_state = registry.navbar_state;
    let menu_open = registry.menu_open;

    view! {
        <nav
            node_ref=registry.navbar
            class="navbar navbar-expand-lg fixed-top"
            class:shadow=move || navbar_state.get().has_shadow()
            style:padding=move || navbar_state.get().padding()
        >
            <div class="container">
                <AnchorLink href="#home" class="navbar-brand">
                    <Icon name=icons::RECYCLE class="brand-icon"/>
                    <span>"Fibre Reborn"</span>
                </AnchorLink>
                <button
                    node_ref=registry.nav_toggler
                    type="button"
                    class="navbar-toggler"
                    aria-label=TOGGLE_LABEL.get(locale)
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <Icon name=icons::MENU class="navbar-toggler-icon"/>
                </button>
                <div class="collapse navbar-collapse" class:show=move || menu_open.get()>
                    <ul class="navbar-nav ms-auto">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! {
                                <li class="nav-item">
                                    <AnchorLink href=link.href class="nav-link">
                                        {link.label.get(locale)}
                                    </AnchorLink>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </nav>
    }
}
