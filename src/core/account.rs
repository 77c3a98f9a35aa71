//! Account types and the payment sub-form each one selects

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::form::{FieldId, FormValues};
use super::mask::InputMask;

/// Value of the account type select before the user picks one
pub const NOT_SELECTED: &str = "not-selected";

/// Registration flow selected on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[display("passenger")]
    Passenger,
    #[display("driver")]
    Driver,
}

impl AccountType {
    /// Parse the select value; the placeholder and unknown values select nothing
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "passenger" => Some(AccountType::Passenger),
            "driver" => Some(AccountType::Driver),
            _ => None,
        }
    }

    pub fn from_values(values: &FormValues) -> Option<Self> {
        values.field(FieldId::AccountType).and_then(Self::parse)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AccountType::Passenger => "Passenger",
            AccountType::Driver => "Driver",
        }
    }

    /// Landing page after a successful registration
    pub fn home_route(&self) -> &'static str {
        match self {
            AccountType::Passenger => "/main-passenger",
            AccountType::Driver => "/main-driver",
        }
    }

    /// Options of the account type select, placeholder first
    pub fn select_options() -> Vec<(String, String)> {
        vec![
            (NOT_SELECTED.to_string(), "Select account type...".to_string()),
            ("passenger".to_string(), "Passenger".to_string()),
            ("driver".to_string(), "Driver".to_string()),
        ]
    }
}

/// How one input of a sub-form is rendered
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub id: FieldId,
    pub placeholder: &'static str,
    pub mask: Option<InputMask>,
    /// Whether the input takes the full row or half of it
    pub full_width: bool,
}

impl FieldSpec {
    fn new(id: FieldId, placeholder: &'static str) -> Self {
        Self {
            id,
            placeholder,
            mask: id.mask(),
            full_width: true,
        }
    }

    fn half(mut self) -> Self {
        self.full_width = false;
        self
    }
}

/// Payment input group shown under the main form.
///
/// Passengers pay by card, drivers are paid into a bank account. Without an
/// account type neither group is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubForm {
    #[default]
    None,
    Card,
    Bank,
}

impl SubForm {
    pub fn for_account(account_type: Option<AccountType>) -> Self {
        match account_type {
            Some(AccountType::Passenger) => SubForm::Card,
            Some(AccountType::Driver) => SubForm::Bank,
            None => SubForm::None,
        }
    }

    pub fn from_values(values: &FormValues) -> Self {
        Self::for_account(AccountType::from_values(values))
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            SubForm::None => None,
            SubForm::Card => Some("Payment Information"),
            SubForm::Bank => Some("Banking Information"),
        }
    }

    /// Inputs of this group, in render order
    pub fn fields(&self) -> Vec<FieldSpec> {
        match self {
            SubForm::None => Vec::new(),
            SubForm::Card => vec![
                FieldSpec::new(FieldId::NameCard, "Name on card"),
                FieldSpec::new(FieldId::CardNumber, "Card Number"),
                FieldSpec::new(FieldId::ExpirationDate, "Expiration Date (mm/yy)").half(),
                FieldSpec::new(FieldId::Csc, "CSC").half(),
            ],
            SubForm::Bank => vec![
                FieldSpec::new(FieldId::NameBank, "Account holder name"),
                FieldSpec::new(FieldId::InstitutionNumber, "Institution Number").half(),
                FieldSpec::new(FieldId::TransitNumber, "Transit Number").half(),
                FieldSpec::new(FieldId::AccountNumber, "Account Number"),
            ],
        }
    }

    pub fn field_ids(&self) -> Vec<FieldId> {
        self.fields().into_iter().map(|spec| spec.id).collect()
    }

    /// Whether every input of the group has a value
    pub fn is_filled(&self, values: &FormValues) -> bool {
        match self {
            SubForm::None => false,
            _ => self.field_ids().into_iter().all(|id| values.has(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_account_type() {
        assert_eq!(AccountType::parse("passenger"), Some(AccountType::Passenger));
        assert_eq!(AccountType::parse("driver"), Some(AccountType::Driver));
        assert_eq!(AccountType::parse(NOT_SELECTED), None);
        assert_eq!(AccountType::parse("Driver"), None);
        assert_eq!(AccountType::parse(""), None);
    }

    #[test]
    fn test_account_type_serializes_lowercase() {
        let json = serde_json::to_string(&AccountType::Passenger).unwrap();
        assert_eq!(json, "\"passenger\"");
        assert_eq!(AccountType::Driver.to_string(), "driver");
    }

    #[test]
    fn test_home_route() {
        assert_eq!(AccountType::Driver.home_route(), "/main-driver");
        assert_eq!(AccountType::Passenger.home_route(), "/main-passenger");
    }

    #[test]
    fn test_driver_renders_only_bank_fields() {
        let sub_form = SubForm::for_account(Some(AccountType::Driver));
        assert_eq!(sub_form, SubForm::Bank);

        let ids = sub_form.field_ids();
        assert!(ids.contains(&FieldId::TransitNumber));
        assert!(ids.contains(&FieldId::InstitutionNumber));
        assert!(!ids.contains(&FieldId::CardNumber));
        assert!(!ids.contains(&FieldId::Csc));
    }

    #[test]
    fn test_passenger_renders_only_card_fields() {
        let sub_form = SubForm::for_account(Some(AccountType::Passenger));
        assert_eq!(sub_form, SubForm::Card);

        let ids = sub_form.field_ids();
        assert_eq!(
            ids,
            vec![
                FieldId::NameCard,
                FieldId::CardNumber,
                FieldId::ExpirationDate,
                FieldId::Csc
            ]
        );
    }

    #[test]
    fn test_card_number_input_is_masked() {
        let card = SubForm::Card.fields();
        let number = card.iter().find(|spec| spec.id == FieldId::CardNumber).unwrap();
        assert_eq!(number.mask, Some(InputMask::card_number()));
        assert!(!card[2].full_width);
    }

    #[test]
    fn test_unselected_renders_nothing() {
        let values: FormValues = [("accountType", NOT_SELECTED)].into_iter().collect();
        let sub_form = SubForm::from_values(&values);

        assert_eq!(sub_form, SubForm::None);
        assert!(sub_form.fields().is_empty());
        assert!(sub_form.title().is_none());
    }

    #[test]
    fn test_is_filled_requires_every_field() {
        let mut values: FormValues = [
            ("nameCard", "A B"),
            ("cardNumber", "4111 1111 1111 1111"),
            ("expirationDate", "12/26"),
        ]
        .into_iter()
        .collect();
        assert!(!SubForm::Card.is_filled(&values));

        values.set("csc", "123");
        assert!(SubForm::Card.is_filled(&values));
        assert!(!SubForm::Bank.is_filled(&values));
        assert!(!SubForm::None.is_filled(&values));
    }
}
