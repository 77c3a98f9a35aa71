//! Card or bank inputs, chosen by the selected account type

use leptos::prelude::*;

use crate::core::{FieldId, FormValues, SubForm};
use crate::ui::common::FormField;

/// Payment sub-form.
///
/// Renders the card group for passengers, the bank group for drivers and
/// nothing until an account type is picked.
#[component]
pub fn PaymentFields(
    /// Form state shared with the registration form
    values: RwSignal<FormValues>,
    /// Input callback shared with the registration form
    on_change: Callback<(FieldId, String)>,
    /// Whether the inputs are disabled
    #[prop(into, optional)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let sub_form = Memo::new(move |_| values.with(SubForm::from_values));

    let render = move || {
        let current = sub_form.get();
        let Some(title) = current.title() else {
            return ().into_any();
        };

        let fields = current
            .fields()
            .into_iter()
            .map(|spec| {
                let id = spec.id;
                let value = Signal::derive(move || values.with(|v| v.field_or_empty(id)));
                let class = if spec.full_width { "col-12" } else { "col-md-6" };
                view! {
                    <FormField
                        field=id
                        placeholder=spec.placeholder
                        value=value
                        on_input=on_change
                        mask=spec.mask
                        disabled=disabled
                        class=class
                    />
                }
            })
            .collect_view();

        view! {
            <h2 class="text-title text-center mb-4">{title}</h2>
            {fields}
        }
        .into_any()
    };

    view! { {render} }
}
