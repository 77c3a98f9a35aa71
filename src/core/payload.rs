//! Request bodies sent to the backend during registration

use serde::{Deserialize, Serialize};

use super::account::{AccountType, SubForm};
use super::form::{FieldId, FormValues};
use super::validation::{ValidationError, validate};

/// Body of `POST user/create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    pub accounttype: AccountType,
    pub password: String,
}

/// Body of `POST address/create/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPayload {
    pub name: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub zip: String,
}

/// Body of `POST payment/create/`, tagged by `type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PaymentPayload {
    Card {
        pan: String,
        name: String,
        expiration: String,
        csc: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_id: Option<String>,
    },
    Bank {
        name: String,
        pan: String,
        institution: String,
        transit: String,
    },
}

impl PaymentPayload {
    pub fn kind(&self) -> &'static str {
        match self {
            PaymentPayload::Card { .. } => "card",
            PaymentPayload::Bank { .. } => "bank",
        }
    }
}

/// Payment details captured on the form.
///
/// The card variant needs the address id returned by the backend, so the
/// final payload is only built once the address step has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentDraft {
    Card {
        name: String,
        pan: String,
        expiration: String,
        csc: String,
    },
    Bank {
        name: String,
        pan: String,
        institution: String,
        transit: String,
    },
}

impl PaymentDraft {
    /// Read the sub-form selected by the account type; `None` unless it is fully filled
    pub fn from_values(sub_form: SubForm, values: &FormValues) -> Option<Self> {
        if !sub_form.is_filled(values) {
            return None;
        }

        match sub_form {
            SubForm::None => None,
            SubForm::Card => Some(PaymentDraft::Card {
                name: values.field_or_empty(FieldId::NameCard),
                pan: digits_only(&values.field_or_empty(FieldId::CardNumber)),
                expiration: values.field_or_empty(FieldId::ExpirationDate),
                csc: values.field_or_empty(FieldId::Csc),
            }),
            SubForm::Bank => Some(PaymentDraft::Bank {
                name: values.field_or_empty(FieldId::NameBank),
                pan: values.field_or_empty(FieldId::AccountNumber),
                institution: values.field_or_empty(FieldId::InstitutionNumber),
                transit: values.field_or_empty(FieldId::TransitNumber),
            }),
        }
    }

    pub fn into_payload(self, address_id: Option<String>) -> PaymentPayload {
        match self {
            PaymentDraft::Card {
                name,
                pan,
                expiration,
                csc,
            } => PaymentPayload::Card {
                pan,
                name,
                expiration,
                csc,
                address_id,
            },
            PaymentDraft::Bank {
                name,
                pan,
                institution,
                transit,
            } => PaymentPayload::Bank {
                name,
                pan,
                institution,
                transit,
            },
        }
    }
}

/// Everything a valid form submits, built in one pass after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub account_type: AccountType,
    pub first_name: String,
    pub user: UserPayload,
    pub address: AddressPayload,
    pub payment: Option<PaymentDraft>,
}

impl RegistrationDraft {
    /// Validate the form and build the payloads
    pub fn from_values(values: &FormValues) -> Result<Self, ValidationError> {
        validate(values)?;

        let account_type =
            AccountType::from_values(values).ok_or(ValidationError::MissingAccountType)?;
        let first_name = values.field_or_empty(FieldId::FirstName);
        let last_name = values.field_or_empty(FieldId::LastName);
        let city = values.field(FieldId::City).map(str::to_string);
        let province = values.field(FieldId::Province).map(str::to_string);

        let user = UserPayload {
            firstname: first_name.clone(),
            lastname: last_name.clone(),
            email: values.field_or_empty(FieldId::Email),
            phone: values.field_or_empty(FieldId::Phone),
            city: city.clone(),
            province: province.clone(),
            accounttype: account_type,
            password: values.field_or_empty(FieldId::Password),
        };

        let address = AddressPayload {
            name: format!("{} {}", first_name, last_name),
            address: values.field_or_empty(FieldId::Address),
            city: city.unwrap_or_default(),
            province: province.unwrap_or_default(),
            zip: values.field_or_empty(FieldId::ZipCode),
        };

        let payment = PaymentDraft::from_values(SubForm::for_account(Some(account_type)), values);

        Ok(Self {
            account_type,
            first_name,
            user,
            address,
            payment,
        })
    }
}

fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
