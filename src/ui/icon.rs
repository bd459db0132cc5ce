use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file stem under /icons)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names shipped with the site
pub mod icons {
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const CHECK: &str = "check";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const RECYCLE: &str = "recycle";
    pub const FACTORY: &str = "factory";
    pub const TRUCK: &str = "truck";
    pub const SCISSORS: &str = "scissors";
    pub const PHONE: &str = "phone";
    pub const MAIL: &str = "mail";
}
