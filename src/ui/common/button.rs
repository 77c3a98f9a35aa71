use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-outline-secondary",
        }
    }
}

/// Form submit button that shows a spinner while `loading`
#[component]
pub fn SubmitButton(
    /// Button text
    #[prop(into)]
    text: Signal<String>,
    /// Text shown while loading
    #[prop(into)]
    loading_text: String,
    /// Whether the form is being submitted
    #[prop(into)]
    loading: Signal<bool>,
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = if class.is_empty() {
        variant.class().to_string()
    } else {
        format!("{} {}", variant.class(), class)
    };

    view! {
        <button type="submit" class=classes disabled=move || loading.get()>
            {move || {
                if loading.get() {
                    view! {
                        <span class="d-inline-flex align-items-center">
                            <Icon name=icons::LOADER class="icon-text spin" />
                            {loading_text.clone()}
                        </span>
                    }.into_any()
                } else {
                    view! { <span>{text.get()}</span> }.into_any()
                }
            }}
        </button>
    }
}
