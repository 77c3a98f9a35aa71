//! Registration form values keyed by field identifier

use std::collections::BTreeMap;

use derive_more::Display;

use super::mask::InputMask;

/// Known field identifiers of the registration form.
///
/// The string form matches the `id` attribute of the rendered input, which is
/// also the key the value is stored under in [`FormValues`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum FieldId {
    #[display("firstName")]
    FirstName,
    #[display("lastName")]
    LastName,
    #[display("email")]
    Email,
    #[display("phone")]
    Phone,
    #[display("address")]
    Address,
    #[display("city")]
    City,
    #[display("province")]
    Province,
    #[display("accountType")]
    AccountType,
    #[display("password")]
    Password,
    #[display("confirmPassword")]
    ConfirmPassword,
    #[display("zipCode")]
    ZipCode,
    #[display("nameCard")]
    NameCard,
    #[display("cardNumber")]
    CardNumber,
    #[display("expirationDate")]
    ExpirationDate,
    #[display("csc")]
    Csc,
    #[display("nameBank")]
    NameBank,
    #[display("accountNumber")]
    AccountNumber,
    #[display("institutionNumber")]
    InstitutionNumber,
    #[display("transitNumber")]
    TransitNumber,
}

impl FieldId {
    pub const ALL: [FieldId; 19] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Address,
        FieldId::City,
        FieldId::Province,
        FieldId::AccountType,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::ZipCode,
        FieldId::NameCard,
        FieldId::CardNumber,
        FieldId::ExpirationDate,
        FieldId::Csc,
        FieldId::NameBank,
        FieldId::AccountNumber,
        FieldId::InstitutionNumber,
        FieldId::TransitNumber,
    ];

    /// Mask applied to the raw input of this field, if any
    pub fn mask(&self) -> Option<InputMask> {
        match self {
            FieldId::Phone => Some(InputMask::phone()),
            FieldId::Province => Some(InputMask::province()),
            FieldId::ZipCode => Some(InputMask::postal_code()),
            FieldId::CardNumber => Some(InputMask::card_number()),
            FieldId::ExpirationDate => Some(InputMask::expiration()),
            FieldId::Csc => Some(InputMask::csc()),
            FieldId::InstitutionNumber => Some(InputMask::institution_number()),
            FieldId::TransitNumber => Some(InputMask::transit_number()),
            FieldId::AccountNumber => Some(InputMask::account_number()),
            _ => None,
        }
    }

    /// Look up a field by its input id
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.to_string() == key)
    }
}

/// Current values of the registration form.
///
/// Values are stored raw, under the input id. An empty string counts as not
/// provided, the same as a field the user never touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the raw value for an input id
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) {
        self.set(field.to_string(), value);
    }

    /// Value stored under an input id, `None` when missing or empty
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn field(&self, field: FieldId) -> Option<&str> {
        self.get(&field.to_string())
    }

    /// Value of a field, or an empty string
    pub fn field_or_empty(&self, field: FieldId) -> String {
        self.field(field).unwrap_or_default().to_string()
    }

    pub fn has(&self, field: FieldId) -> bool {
        self.field(field).is_some()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut values = FormValues::new();
        for (key, value) in iter {
            values.set(key, value);
        }
        values
    }
}
