//! Registration form component
//!
//! Collects personal details, the account type and the matching payment
//! sub-form, then runs the registration pipeline against the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::context::use_session_context;
use crate::core::storage::BrowserStorage;
use crate::core::validation::validate;
use crate::core::{
    AccountType, Config, FieldId, FormValues, HttpBackend, RegistrationOutcome,
    RegistrationPipeline,
};
use crate::ui::common::{ErrorMessage, FormField, SelectField, SubmitButton};
use crate::ui::payment_fields::PaymentFields;

/// Registration form component
#[component]
pub fn RegistrationForm() -> impl IntoView {
    let session = use_session_context();
    let config = expect_context::<Config>();
    let navigate = use_navigate();

    // Form state
    let values = RwSignal::new(FormValues::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    // Partial result of an earlier submit; its user already exists
    let pending = RwSignal::new(None::<RegistrationOutcome>);

    let on_change = Callback::new(move |(field, value): (FieldId, String)| {
        values.update(|v| v.set_field(field, value));
    });

    let value_of = move |field: FieldId| Signal::derive(move || values.with(|v| v.field_or_empty(field)));

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if submitting.get_untracked() {
            return;
        }

        let form = values.get_untracked();

        // Invalid forms never reach the network
        if let Err(err) = validate(&form) {
            error.set(Some(err.to_string()));
            return;
        }
        error.set(None);
        submitting.set(true);

        let config = config.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            let backend = HttpBackend::new(config.clone());
            let store = BrowserStorage;
            let mut snapshot = session.snapshot();
            let pipeline =
                RegistrationPipeline::new(&backend, &store).with_policy(config.failure_policy);

            let result = match pending.get_untracked() {
                Some(previous) => pipeline.resume(&previous, &form, &mut snapshot).await,
                None => pipeline.submit(&form, &mut snapshot).await,
            };

            session.apply(snapshot);
            submitting.set(false);

            match result {
                Ok(outcome) if outcome.is_complete() => {
                    pending.set(None);
                    navigate(outcome.redirect(), Default::default());
                }
                Ok(outcome) => {
                    error.set(outcome.failure_message());
                    pending.set(Some(outcome));
                }
                Err(err) => {
                    leptos::logging::warn!("Registration failed: {}", err);
                    error.set(Some(err.user_message()));
                }
            }
        });
    };

    view! {
        <form class="row col-12 col-md-6 g-4 mb-5 mx-auto" on:submit=on_submit>
            <FormField
                field=FieldId::FirstName
                placeholder="First Name"
                value=value_of(FieldId::FirstName)
                on_input=on_change
                disabled=submitting
                class="col-md-6"
            />
            <FormField
                field=FieldId::LastName
                placeholder="Last Name"
                value=value_of(FieldId::LastName)
                on_input=on_change
                disabled=submitting
                class="col-md-6"
            />
            <FormField
                field=FieldId::Email
                input_type="email"
                placeholder="Email"
                value=value_of(FieldId::Email)
                on_input=on_change
                disabled=submitting
            />
            <FormField
                field=FieldId::Phone
                placeholder="Phone Number"
                value=value_of(FieldId::Phone)
                on_input=on_change
                mask=FieldId::Phone.mask()
                disabled=submitting
            />
            <FormField
                field=FieldId::Address
                placeholder="Street Address"
                value=value_of(FieldId::Address)
                on_input=on_change
                disabled=submitting
            />
            <FormField
                field=FieldId::City
                placeholder="City"
                value=value_of(FieldId::City)
                on_input=on_change
                disabled=submitting
                class="col-md-6"
            />
            <FormField
                field=FieldId::Province
                placeholder="Province"
                value=value_of(FieldId::Province)
                on_input=on_change
                mask=FieldId::Province.mask()
                disabled=submitting
                class="col-md-6"
            />
            <FormField
                field=FieldId::ZipCode
                placeholder="Postal Code"
                value=value_of(FieldId::ZipCode)
                on_input=on_change
                mask=FieldId::ZipCode.mask()
                disabled=submitting
            />
            <SelectField
                field=FieldId::AccountType
                value=value_of(FieldId::AccountType)
                on_change=on_change
                options=AccountType::select_options()
                disabled=submitting
            />
            <FormField
                field=FieldId::Password
                input_type="password"
                placeholder="Password"
                value=value_of(FieldId::Password)
                on_input=on_change
                disabled=submitting
                class="col-md-6"
            />
            <FormField
                field=FieldId::ConfirmPassword
                input_type="password"
                placeholder="Confirm Password"
                value=value_of(FieldId::ConfirmPassword)
                on_input=on_change
                disabled=submitting
                class="col-md-6"
            />

            <PaymentFields values=values on_change=on_change disabled=submitting />

            <ErrorMessage error=error />

            <SubmitButton
                text=Signal::derive(move || {
                    let label = if pending.with(Option::is_some) { "Retry" } else { "Register" };
                    label.to_string()
                })
                loading_text="Registering..."
                loading=submitting
                class="col-6 col-md-3 mx-auto d-block"
            />
        </form>
    }
}
