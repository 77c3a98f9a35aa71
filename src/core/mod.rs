//! Core domain models and business logic for rider and driver registration

pub mod account;
pub mod api;
pub mod config;
pub mod form;
pub mod mask;
pub mod payload;
pub mod registration;
pub mod rides;
pub mod session;
pub mod storage;
pub mod validation;
#[cfg(test)]
mod tests;

pub use account::{AccountType, FieldSpec, SubForm};
pub use api::{ApiError, HttpBackend, RegistrationBackend};
pub use config::Config;
pub use form::{FieldId, FormValues};
pub use mask::InputMask;
pub use payload::{AddressPayload, PaymentPayload, RegistrationDraft, UserPayload};
pub use registration::{
    FailurePolicy, RegistrationOutcome, RegistrationPipeline, Step, StepStatus, SubmitError,
};
pub use rides::RideSummary;
pub use session::{Session, TokenCheck, UserData};
pub use storage::{BrowserStorage, KeyValueStore, MemoryStore};
pub use validation::ValidationError;
