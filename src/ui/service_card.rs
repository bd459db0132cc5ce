use leptos::prelude::*;

use crate::core::CardHover;
use crate::ui::icon::Icon;

/// Service card that lifts while hovered
#[component]
pub fn ServiceCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    /// Call-to-action area under the description
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let hover = RwSignal::new(CardHover::Resting);

    view! {
        <div
            class="service-card"
            style:transform=move || hover.get().card_transform()
            on:mouseenter=move |_| hover.set(CardHover::from_pointer_inside(true))
            on:mouseleave=move |_| hover.set(CardHover::from_pointer_inside(false))
        >
            <div class="service-icon" style:transform=move || hover.get().icon_transform()>
                <Icon name=icon class="icon-lg"/>
            </div>
            <h3 class="service-title">{title}</h3>
            <p class="service-description">{description}</p>
            {children.map(|children| view! { <div class="service-actions">{children()}</div> })}
        </div>
    }
}
