//! Registration form validation
//!
//! Required fields are checked in a fixed priority order and only the first
//! failure is reported. A password/confirmation mismatch outranks every
//! missing-field check.

use super::account::AccountType;
use super::form::{FieldId, FormValues};

/// First problem found on the registration form.
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your first name")]
    MissingFirstName,
    #[error("Please enter your last name")]
    MissingLastName,
    #[error("Please enter an email address")]
    MissingEmail,
    #[error("Please enter your phone number")]
    MissingPhone,
    #[error("Please select an account type")]
    MissingAccountType,
    #[error("Please enter a password")]
    MissingPassword,
    #[error("Please confirm your password")]
    MissingConfirmPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please enter your postal code")]
    MissingPostalCode,
}

impl ValidationError {
    /// Field the error refers to
    pub fn field(&self) -> FieldId {
        match self {
            ValidationError::MissingFirstName => FieldId::FirstName,
            ValidationError::MissingLastName => FieldId::LastName,
            ValidationError::MissingEmail => FieldId::Email,
            ValidationError::MissingPhone => FieldId::Phone,
            ValidationError::MissingAccountType => FieldId::AccountType,
            ValidationError::MissingPassword => FieldId::Password,
            ValidationError::MissingConfirmPassword | ValidationError::PasswordMismatch => {
                FieldId::ConfirmPassword
            }
            ValidationError::MissingPostalCode => FieldId::ZipCode,
        }
    }
}

/// Required fields in priority order, with the error each one raises
pub const REQUIRED_FIELDS: [(FieldId, ValidationError); 8] = [
    (FieldId::FirstName, ValidationError::MissingFirstName),
    (FieldId::LastName, ValidationError::MissingLastName),
    (FieldId::Email, ValidationError::MissingEmail),
    (FieldId::Phone, ValidationError::MissingPhone),
    (FieldId::AccountType, ValidationError::MissingAccountType),
    (FieldId::Password, ValidationError::MissingPassword),
    (FieldId::ConfirmPassword, ValidationError::MissingConfirmPassword),
    (FieldId::ZipCode, ValidationError::MissingPostalCode),
];

/// Validate the form, returning the first error in priority order
pub fn validate(values: &FormValues) -> Result<(), ValidationError> {
    if let (Some(password), Some(confirm)) = (
        values.field(FieldId::Password),
        values.field(FieldId::ConfirmPassword),
    ) {
        if password != confirm {
            return Err(ValidationError::PasswordMismatch);
        }
    }

    for (field, error) in REQUIRED_FIELDS {
        let present = match field {
            FieldId::AccountType => AccountType::from_values(values).is_some(),
            _ => values.has(field),
        };
        if !present {
            return Err(error);
        }
    }

    Ok(())
}
