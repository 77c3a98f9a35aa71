//! Common reusable UI components
//!
//! Inputs, buttons and messages shared by the registration form and the
//! landing pages.

pub mod button;
pub mod form;
pub mod message;

pub use button::{ButtonVariant, SubmitButton};
pub use form::{FormField, SearchField, SelectField};
pub use message::{ErrorMessage, InfoMessage};
