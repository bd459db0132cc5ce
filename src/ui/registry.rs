//! Page registry and scroll-driven effects
//!
//! Components register the elements that scroll effects act on (navbar,
//! mobile menu toggler, hero, reveal targets) when they mount. The scroll
//! and resize listeners only ever touch what is registered here, so a page
//! that lacks one of these elements simply skips the matching effect.

use leptos::html;
use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos::wasm_bindgen::JsCast;

use crate::core::SiteConfig;
use crate::core::scroll::{self, NavbarState, RevealState};
use crate::ui::app_context::use_site_config;

#[derive(Clone, Copy)]
struct RevealTarget {
    node: NodeRef<html::Div>,
    state: RwSignal<RevealState>,
}

/// Elements and derived state shared by the scroll effects
#[derive(Clone, Copy)]
pub struct PageRegistry {
    pub navbar: NodeRef<html::Nav>,
    pub nav_toggler: NodeRef<html::Button>,
    pub hero: NodeRef<html::Section>,
    reveal_targets: StoredValue<Vec<RevealTarget>>,
    /// Compact once the page is scrolled past the configured offset
    pub navbar_state: RwSignal<NavbarState>,
    /// Hero translation in pixels
    pub hero_offset: RwSignal<f64>,
    /// Mobile menu expanded
    pub menu_open: RwSignal<bool>,
}

impl PageRegistry {
    fn new() -> Self {
        Self {
            navbar: NodeRef::new(),
            nav_toggler: NodeRef::new(),
            hero: NodeRef::new(),
            reveal_targets: StoredValue::new(Vec::new()),
            navbar_state: RwSignal::new(NavbarState::Default),
            hero_offset: RwSignal::new(0.0),
            menu_open: RwSignal::new(false),
        }
    }

    /// Track an element for scroll reveal and return its state
    pub fn register_reveal(&self, node: NodeRef<html::Div>) -> RwSignal<RevealState> {
        let state = RwSignal::new(RevealState::Hidden);
        self.reveal_targets
            .update_value(|targets| targets.push(RevealTarget { node, state }));
        state
    }

    pub fn reveal_count(&self) -> usize {
        self.reveal_targets.with_value(Vec::len)
    }

    /// Navbar state and hero offset for a scroll position
    pub fn apply_scroll_offset(&self, scroll_y: f64, config: &SiteConfig) {
        let navbar = NavbarState::for_offset(scroll_y, config.compact_navbar_offset_px);
        if self.navbar_state.get_untracked() != navbar {
            self.navbar_state.set(navbar);
        }
        self.hero_offset
            .set(scroll::parallax_offset(scroll_y, config.parallax_factor));
    }

    /// Reveal targets whose top has entered the viewport
    ///
    /// `element_top` yields the viewport-relative top of a mounted target,
    /// or `None` if the element is not in the DOM.
    fn refresh_reveals_with(
        &self,
        viewport_height: f64,
        threshold: f64,
        element_top: impl Fn(&NodeRef<html::Div>) -> Option<f64>,
    ) {
        self.reveal_targets.with_value(|targets| {
            for target in targets {
                let current = target.state.get_untracked();
                if current.is_revealed() {
                    continue;
                }
                let Some(top) = element_top(&target.node) else {
                    continue;
                };
                let next = current.advance(top, viewport_height, threshold);
                if next != current {
                    target.state.set(next);
                }
            }
        });
    }
}

#[cfg(feature = "csr")]
impl PageRegistry {
    /// Re-evaluate reveal targets against the live viewport
    pub fn refresh_reveals(&self, config: &SiteConfig) {
        let Some(viewport_height) = web_sys::window()
            .and_then(|window| window.inner_height().ok())
            .and_then(|height| height.as_f64())
        else {
            tracing::debug!("viewport height unavailable, skipping reveal pass");
            return;
        };

        self.refresh_reveals_with(viewport_height, config.reveal_threshold_px, |node| {
            node.get_untracked()
                .map(|element| element.get_bounding_client_rect().top())
        });
    }

    /// Full scroll pass: reveals, navbar and parallax
    pub fn on_scroll(&self, config: &SiteConfig) {
        let scroll_y = web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or_default();
        self.refresh_reveals(config);
        self.apply_scroll_offset(scroll_y, config);
    }

    /// Rendered navbar height, zero when the navbar is absent
    pub fn navbar_height(&self) -> f64 {
        self.navbar
            .get_untracked()
            .map(|nav| f64::from(nav.offset_height()))
            .unwrap_or_default()
    }

    /// Collapse the mobile menu, but only while the toggler is visible
    pub fn collapse_menu_if_mobile(&self) {
        let Some(toggler) = self.nav_toggler.get_untracked() else {
            return;
        };
        let toggler_visible = web_sys::window()
            .and_then(|window| window.get_computed_style(&toggler).ok().flatten())
            .and_then(|style| style.get_property_value("display").ok())
            .is_some_and(|display| display != "none");

        if toggler_visible && self.menu_open.get_untracked() {
            self.menu_open.set(false);
        }
    }

    /// Smoothly scroll to the element an in-page link points at
    ///
    /// Returns `false` when the link has no usable target.
    pub fn scroll_to_anchor(&self, href: &str) -> bool {
        let Some(id) = scroll::anchor_target(href) else {
            return false;
        };
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(target) = window
            .document()
            .and_then(|document| document.get_element_by_id(id))
        else {
            tracing::debug!(%href, "anchor target not found");
            return false;
        };
        let Some(target) = target.dyn_ref::<web_sys::HtmlElement>() else {
            return false;
        };

        let top = scroll::scroll_target_top(f64::from(target.offset_top()), self.navbar_height());
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);

        self.collapse_menu_if_mobile();
        true
    }
}

pub fn provide_page_registry() -> PageRegistry {
    let registry = PageRegistry::new();
    provide_context(registry);
    registry
}

pub fn use_page_registry() -> PageRegistry {
    use_context::<PageRegistry>().expect("PageRegistry should be provided")
}

/// Install the window scroll and resize listeners driving the registry
pub fn install_scroll_effects(registry: PageRegistry, config: SiteConfig) {
    #[cfg(feature = "csr")]
    {
        use leptos::ev::{resize, scroll as scroll_event};

        let handle_scroll = window_event_listener(scroll_event, move |_| registry.on_scroll(&config));
        let handle_resize =
            window_event_listener(resize, move |_| registry.refresh_reveals(&config));

        // Content already in view at load time
        Effect::new(move |_| {
            tracing::debug!(targets = registry.reveal_count(), "initial scroll pass");
            registry.on_scroll(&config);
        });

        on_cleanup(move || {
            drop(handle_scroll);
            drop(handle_resize);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (registry, config);
    }
}

/// Wrapper that fades its children in once scrolled into view
#[component]
pub fn ScrollReveal(
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let registry = use_page_registry();
    let node = NodeRef::<html::Div>::new();
    let state = registry.register_reveal(node);

    view! {
        <div
            node_ref=node
            class=format!("scroll-animate {}", class)
            class:animate=move || state.get().is_revealed()
        >
            {children()}
        </div>
    }
}

/// In-page link that scrolls smoothly to its target
#[component]
pub fn AnchorLink(
    href: &'static str,
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let registry = use_page_registry();

    view! {
        <a
            href=href
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                #[cfg(feature = "csr")]
                {
                    registry.scroll_to_anchor(href);
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = registry;
                }
            }
        >
            {children()}
        </a>
    }
}

/// Run the scroll effects for the current page
#[component]
pub fn ScrollEffects() -> impl IntoView {
    install_scroll_effects(use_page_registry(), use_site_config());
}
