//! Authentication UI module
//!
//! Session context and the registration form.

mod context;
mod register_form;

pub use context::{SessionContext, provide_session_context, use_session_context};
pub use register_form::RegistrationForm;
