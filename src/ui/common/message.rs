//! Form-level banners shown at the top of a modal body

use crate::core::Banner;
use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Success or error banner
/// Renders nothing while the signal holds `None`
#[component]
pub fn BannerMessage(
    #[prop(into)]
    banner: Signal<Option<Banner>>,
) -> impl IntoView {
    move || {
        banner.get().map(|banner| {
            let icon = match banner {
                Banner::Success(_) => icons::CHECK,
                Banner::Error(_) => icons::ALERT_CIRCLE,
            };
            view! {
                <div class=banner.class() role="alert">
                    <Icon name=icon class="icon-text"/>
                    <span>{banner.text().to_string()}</span>
                </div>
            }
        })
    }
}
