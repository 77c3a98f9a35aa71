use crate::core::{FieldId, InputMask};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Text input bound to one registration field.
///
/// Masked fields format every keystroke before it reaches `on_input`, so the
/// stored value is always the formatted one.
#[component]
pub fn FormField(
    /// Field the input edits; also used as the element id
    field: FieldId,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(into)]
    placeholder: String,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback, receives the formatted value
    on_input: Callback<(FieldId, String)>,
    /// Mask applied to raw input
    #[prop(optional_no_strip)]
    mask: Option<InputMask>,
    /// Whether field is disabled
    #[prop(into, optional)]
    disabled: Signal<bool>,
    /// Grid classes of the wrapper
    #[prop(default = "col-12")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=class>
            <input
                type=input_type
                id=field.to_string()
                class="form-control"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    let formatted = match &mask {
                        Some(mask) => mask.apply(&raw),
                        None => raw,
                    };
                    on_input.run((field, formatted));
                }
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    /// Field the select edits; also used as the element id
    field: FieldId,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<(FieldId, String)>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
    /// Whether field is disabled
    #[prop(into, optional)]
    disabled: Signal<bool>,
    /// Grid classes of the wrapper
    #[prop(default = "col-12")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=class>
            <select
                id=field.to_string()
                name=field.to_string()
                class="form-select"
                prop:value=move || value.get()
                on:change=move |ev| {
                    let val = event_target_value(&ev);
                    on_change.run((field, val));
                }
                disabled=move || disabled.get()
            >
                {options.into_iter().map(|(val, text)| {
                    view! {
                        <option value=val.clone()>{text}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Search input with a leading icon
#[component]
pub fn SearchField(
    /// Placeholder text
    #[prop(default = "Search")]
    placeholder: &'static str,
    /// Current query
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="input-group mb-4">
            <span class="input-group-text">
                <Icon name=icons::SEARCH class="icon-text"/>
            </span>
            <input
                type="search"
                class="form-control"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
