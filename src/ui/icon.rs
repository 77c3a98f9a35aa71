use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name, without the .svg extension
    name: &'static str,
    /// CSS classes for styling
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const SEARCH: &str = "search";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const INFORMATION_CIRCLE: &str = "information-circle";
    pub const LOADER: &str = "loader";
    pub const STAR: &str = "star";
    pub const STAR_OUTLINE: &str = "star-outline";
    pub const MAP_PIN: &str = "map-pin";
    pub const FLAG: &str = "flag";
    pub const CALENDAR: &str = "calendar";
    pub const LOGOUT: &str = "logout";
}
