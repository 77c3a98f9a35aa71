pub mod auth;
pub mod common;
pub mod icon;
pub mod layout;
pub mod pages;
pub mod payment_fields;
pub mod ride_card;

pub use auth::{RegistrationForm, SessionContext, provide_session_context, use_session_context};
pub use icon::{Icon, icons};
pub use layout::PageShell;
pub use payment_fields::PaymentFields;
pub use ride_card::{RideCard, RideGrid};
