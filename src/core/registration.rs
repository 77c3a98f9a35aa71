//! Registration submission pipeline
//!
//! A valid form is submitted as three ordered steps: the user, their address,
//! and (when the payment sub-form is filled) a card or bank account. Address
//! and payment depend on the token returned for the user, so neither is
//! attempted unless the user step succeeds. A created user is never rolled
//! back; later failures are reported in the [`RegistrationOutcome`].

use derive_more::Display;
use leptos::logging::warn;

use super::account::AccountType;
use super::api::{ApiError, CreatedUser, RegistrationBackend};
use super::form::FormValues;
use super::payload::RegistrationDraft;
use super::session::Session;
use super::storage::KeyValueStore;
use super::validation::ValidationError;

/// What happens after the address or payment step fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failure and skip the remaining steps
    #[default]
    AbortAndReport,
    /// Keep going; a card is then sent without an address id
    BestEffort,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::AbortAndReport => "abort",
            FailurePolicy::BestEffort => "best-effort",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "best-effort" | "best_effort" | "besteffort" => FailurePolicy::BestEffort,
            _ => FailurePolicy::AbortAndReport,
        }
    }
}

/// Steps of the pipeline, in submission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Step {
    #[display("user")]
    User,
    #[display("address")]
    Address,
    #[display("payment")]
    Payment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    /// Not attempted: nothing to send, or an earlier step failed
    Skipped,
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    pub status: StepStatus,
}

/// Submission that did not create a user
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Could not create your account: {0}")]
    UserCreation(ApiError),
}

impl SubmitError {
    /// Text for the form's error slot
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(err) => err.to_string(),
            SubmitError::UserCreation(ApiError::Rejected(message)) => message.clone(),
            SubmitError::UserCreation(_) => {
                "We could not reach the server. Please try again.".to_string()
            }
        }
    }
}

/// Result of a submission that created the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub account_type: AccountType,
    pub user: CreatedUser,
    /// Id of the saved address, once the address step has completed
    pub address_id: Option<String>,
    /// Set when the session could not be written to storage
    pub session_error: Option<String>,
    pub steps: Vec<StepReport>,
}

impl RegistrationOutcome {
    pub fn status(&self, step: Step) -> Option<&StepStatus> {
        self.steps
            .iter()
            .find(|report| report.step == step)
            .map(|report| &report.status)
    }

    /// First failed step, if any
    pub fn first_failure(&self) -> Option<(Step, &ApiError)> {
        self.steps.iter().find_map(|report| match &report.status {
            StepStatus::Failed(err) => Some((report.step, err)),
            _ => None,
        })
    }

    fn completed(&self, step: Step) -> bool {
        self.status(step) == Some(&StepStatus::Completed)
    }

    pub fn is_complete(&self) -> bool {
        self.session_error.is_none() && self.first_failure().is_none()
    }

    /// Where to go once registration is done
    pub fn redirect(&self) -> &'static str {
        self.account_type.home_route()
    }

    /// Text for the form's error slot after a partial failure
    pub fn failure_message(&self) -> Option<String> {
        if let Some((step, _)) = self.first_failure() {
            return Some(match step {
                Step::User => "Could not create your account".to_string(),
                Step::Address => {
                    "Your account was created, but saving your address failed".to_string()
                }
                Step::Payment => {
                    "Your account was created, but saving your payment details failed".to_string()
                }
            });
        }
        self.session_error
            .as_ref()
            .map(|_| "Your account was created, but your session could not be saved".to_string())
    }
}

/// Runs a registration against a backend and persists the resulting session
pub struct RegistrationPipeline<'a, B, S> {
    backend: &'a B,
    store: &'a S,
    policy: FailurePolicy,
}

impl<'a, B, S> RegistrationPipeline<'a, B, S>
where
    B: RegistrationBackend,
    S: KeyValueStore,
{
    pub fn new(backend: &'a B, store: &'a S) -> Self {
        Self {
            backend,
            store,
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate and submit the form.
    ///
    /// Validation failures send nothing. On user creation the token, user id
    /// and first name are persisted and `session` is signed in before the
    /// address and payment steps run.
    pub async fn submit(
        &self,
        values: &FormValues,
        session: &mut Session,
    ) -> Result<RegistrationOutcome, SubmitError> {
        let draft = RegistrationDraft::from_values(values)?;

        let user = match self.backend.create_user(&draft.user).await {
            Ok(user) => user,
            Err(err) => {
                warn!("Registration failed at user step: {}", err);
                return Err(SubmitError::UserCreation(err));
            }
        };

        Ok(self.finish(draft, user, None, session).await)
    }

    /// Retry what an earlier submission left unfinished.
    ///
    /// The user from `previous` is reused and never created again. Steps that
    /// already completed are not repeated; the session is written again.
    pub async fn resume(
        &self,
        previous: &RegistrationOutcome,
        values: &FormValues,
        session: &mut Session,
    ) -> Result<RegistrationOutcome, SubmitError> {
        let draft = RegistrationDraft::from_values(values)?;
        Ok(self
            .finish(draft, previous.user.clone(), Some(previous), session)
            .await)
    }

    async fn finish(
        &self,
        draft: RegistrationDraft,
        user: CreatedUser,
        previous: Option<&RegistrationOutcome>,
        session: &mut Session,
    ) -> RegistrationOutcome {
        let session_error =
            match session.sign_in(self.store, &user.token, &user.id, &draft.first_name) {
                Ok(()) => None,
                Err(err) => {
                    warn!("Could not persist session: {}", err);
                    Some(err)
                }
            };

        let done = |step| previous.is_some_and(|previous| previous.completed(step));

        let mut steps = vec![StepReport {
            step: Step::User,
            status: StepStatus::Completed,
        }];

        let address_id = if done(Step::Address) {
            steps.push(StepReport {
                step: Step::Address,
                status: StepStatus::Completed,
            });
            previous.and_then(|previous| previous.address_id.clone())
        } else {
            match self.backend.create_address(&user.token, &draft.address).await {
                Ok(address) => {
                    steps.push(StepReport {
                        step: Step::Address,
                        status: StepStatus::Completed,
                    });
                    Some(address.id)
                }
                Err(err) => {
                    warn!("Registration failed at address step: {}", err);
                    steps.push(StepReport {
                        step: Step::Address,
                        status: StepStatus::Failed(err),
                    });
                    None
                }
            }
        };

        let address_failed = address_id.is_none();
        let payment_status = match draft.payment {
            _ if done(Step::Payment) => StepStatus::Completed,
            None => StepStatus::Skipped,
            Some(_) if address_failed && self.policy == FailurePolicy::AbortAndReport => {
                StepStatus::Skipped
            }
            Some(payment) => {
                let payload = payment.into_payload(address_id.clone());
                match self.backend.create_payment(&user.token, &payload).await {
                    Ok(()) => StepStatus::Completed,
                    Err(err) => {
                        warn!("Registration failed at payment step: {}", err);
                        StepStatus::Failed(err)
                    }
                }
            }
        };
        steps.push(StepReport {
            step: Step::Payment,
            status: payment_status,
        });

        RegistrationOutcome {
            account_type: draft.account_type,
            user,
            address_id,
            session_error,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_policy_from_str() {
        assert_eq!(FailurePolicy::from_str("best-effort"), FailurePolicy::BestEffort);
        assert_eq!(FailurePolicy::from_str("Best_Effort"), FailurePolicy::BestEffort);
        assert_eq!(FailurePolicy::from_str("abort"), FailurePolicy::AbortAndReport);
        assert_eq!(FailurePolicy::from_str(""), FailurePolicy::AbortAndReport);
        assert_eq!(FailurePolicy::BestEffort.as_str(), "best-effort");
    }

    #[test]
    fn test_submit_error_messages() {
        let invalid = SubmitError::from(ValidationError::PasswordMismatch);
        assert_eq!(invalid.user_message(), "Passwords do not match");
        assert_eq!(invalid.to_string(), "Passwords do not match");

        let rejected = SubmitError::UserCreation(ApiError::Rejected("Email taken".to_string()));
        assert_eq!(rejected.user_message(), "Email taken");

        let offline = SubmitError::UserCreation(ApiError::Transport("timeout".to_string()));
        assert_eq!(
            offline.user_message(),
            "We could not reach the server. Please try again."
        );
    }

    #[test]
    fn test_outcome_reports_first_failure() {
        let outcome = RegistrationOutcome {
            account_type: AccountType::Driver,
            user: CreatedUser {
                id: "u".to_string(),
                token: "t".to_string(),
            },
            address_id: None,
            session_error: None,
            steps: vec![
                StepReport {
                    step: Step::User,
                    status: StepStatus::Completed,
                },
                StepReport {
                    step: Step::Address,
                    status: StepStatus::Failed(ApiError::Status(500)),
                },
                StepReport {
                    step: Step::Payment,
                    status: StepStatus::Skipped,
                },
            ],
        };

        assert!(!outcome.is_complete());
        assert_eq!(
            outcome.first_failure(),
            Some((Step::Address, &ApiError::Status(500)))
        );
        assert_eq!(outcome.status(Step::Payment), Some(&StepStatus::Skipped));
        assert_eq!(outcome.redirect(), "/main-driver");
        assert!(outcome.failure_message().unwrap().contains("address"));
    }

    #[test]
    fn test_unsaved_session_makes_outcome_incomplete() {
        let outcome = RegistrationOutcome {
            account_type: AccountType::Passenger,
            user: CreatedUser {
                id: "u".to_string(),
                token: "t".to_string(),
            },
            address_id: Some("a".to_string()),
            session_error: Some("quota exceeded".to_string()),
            steps: vec![StepReport {
                step: Step::User,
                status: StepStatus::Completed,
            }],
        };

        assert!(outcome.first_failure().is_none());
        assert!(!outcome.is_complete());
        assert!(outcome.failure_message().unwrap().contains("session"));
    }
}
