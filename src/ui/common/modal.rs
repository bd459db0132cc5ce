use std::collections::BTreeSet;

use crate::core::{ModalController, ModalId, i18n};
use crate::ui::app_context::use_site_config;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(feature = "csr")]
use leptos::wasm_bindgen::JsCast;

/// Which modals are open, shared by every modal on the page
#[derive(Clone, Copy)]
pub struct ModalContext {
    open: RwSignal<BTreeSet<ModalId>>,
}

impl ModalContext {
    fn new() -> Self {
        Self {
            open: RwSignal::new(BTreeSet::new()),
        }
    }

    /// Reactive open flag for one modal
    pub fn is_open_signal(&self, id: ModalId) -> Signal<bool> {
        let open = self.open;
        Signal::derive(move || open.with(|ids| ids.contains(&id)))
    }

    pub fn any_open(&self) -> Signal<bool> {
        let open = self.open;
        Signal::derive(move || open.with(|ids| !ids.is_empty()))
    }
}

impl ModalController for ModalContext {
    fn open(&self, id: ModalId) {
        tracing::debug!(modal = %id, "opening modal");
        self.open.update(|ids| {
            ids.insert(id);
        });
    }

    fn close(&self, id: ModalId) {
        if self.is_open(id) {
            tracing::debug!(modal = %id, "closing modal");
            self.open.update(|ids| {
                ids.remove(&id);
            });
        }
    }

    fn is_open(&self, id: ModalId) -> bool {
        self.open.with_untracked(|ids| ids.contains(&id))
    }
}

pub fn provide_modal_context() -> ModalContext {
    let context = ModalContext::new();
    provide_context(context);
    context
}

pub fn use_modal_context() -> ModalContext {
    use_context::<ModalContext>().expect("ModalContext should be provided")
}

/// Base modal component with consistent structure
#[component]
pub fn BaseModal(
    /// DOM id and open-state key of the modal
    id: ModalId,
    /// Modal title
    title: String,
    /// Modal content
    children: Children,
    /// Dialog size class
    #[prop(default = "modal-lg")]
    size: &'static str,
    /// Whether clicking backdrop closes modal
    #[prop(default = true)]
    close_on_backdrop: bool,
) -> impl IntoView {
    let modals = use_modal_context();
    let locale = use_site_config().locale;
    let is_open = modals.is_open_signal(id);

    // Close on Escape key
    #[cfg(feature = "csr")]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                modals.close(id);
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            id=id.as_str()
            class="modal fade"
            class:show=move || is_open.get()
            style:display=move || if is_open.get() { "block" } else { "none" }
            tabindex="-1"
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                if close_on_backdrop {
                    #[cfg(feature = "csr")]
                    {
                        if let Some(target) = e.target() {
                            if let Some(element) = target.dyn_ref::<web_sys::Element>() {
                                if element.class_list().contains("modal") {
                                    modals.close(id);
                                }
                            }
                        }
                    }
                    #[cfg(not(feature = "csr"))]
                    {
                        let _ = e;
                    }
                }
            }
        >
            <div class=format!("modal-dialog modal-dialog-centered {}", size)>
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{title}</h5>
                        <button
                            type="button"
                            class="btn-close"
                            on:click=move |_| modals.close(id)
                            aria-label=i18n::CLOSE.get(locale)
                        >
                            <Icon name=icons::X class="icon-standalone"/>
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Dimmed page overlay behind open modals
#[component]
pub fn ModalBackdrop() -> impl IntoView {
    let any_open = use_modal_context().any_open();
    view! {
        <Show when=move || any_open.get()>
            <div class="modal-backdrop fade show"></div>
        </Show>
    }
}

/// Button that opens a modal
#[component]
pub fn ModalTrigger(
    target: ModalId,
    #[prop(default = "btn btn-primary")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let modals = use_modal_context();
    view! {
        <button type="button" class=class on:click=move |_| modals.open(target)>
            {children()}
        </button>
    }
}
