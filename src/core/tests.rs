#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::core::api::{ApiError, CreatedAddress, CreatedUser, RegistrationBackend};
    use crate::core::storage::{USER_FIRST_NAME, USER_ID, USER_TOKEN};
    use crate::core::{
        AccountType, AddressPayload, FailurePolicy, FormValues, KeyValueStore, MemoryStore,
        PaymentPayload, RegistrationPipeline, Session, Step, StepStatus, SubmitError, TokenCheck,
        UserPayload, ValidationError,
    };

    /// A call the pipeline made against the backend
    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        User(UserPayload),
        Address {
            token: String,
            address: AddressPayload,
        },
        Payment {
            token: String,
            payment: PaymentPayload,
        },
    }

    /// Backend fake that records calls and answers from a script
    struct RecordingBackend {
        calls: RefCell<Vec<Call>>,
        user: Result<CreatedUser, ApiError>,
        address: RefCell<Result<CreatedAddress, ApiError>>,
        payment: RefCell<Result<(), ApiError>>,
    }

    impl RecordingBackend {
        fn succeeding() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                user: Ok(CreatedUser {
                    id: "user-1".to_string(),
                    token: "token-1".to_string(),
                }),
                address: RefCell::new(Ok(CreatedAddress {
                    id: "address-1".to_string(),
                })),
                payment: RefCell::new(Ok(())),
            }
        }

        fn with_user(mut self, result: Result<CreatedUser, ApiError>) -> Self {
            self.user = result;
            self
        }

        fn with_address(self, result: Result<CreatedAddress, ApiError>) -> Self {
            self.answer_address(result);
            self
        }

        fn with_payment(self, result: Result<(), ApiError>) -> Self {
            self.answer_payment(result);
            self
        }

        /// Change the scripted address answer for later calls
        fn answer_address(&self, result: Result<CreatedAddress, ApiError>) {
            *self.address.borrow_mut() = result;
        }

        fn answer_payment(&self, result: Result<(), ApiError>) {
            *self.payment.borrow_mut() = result;
        }

        fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|call| predicate(*call))
                .count()
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn payment_calls(&self) -> Vec<PaymentPayload> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    Call::Payment { payment, .. } => Some(payment),
                    _ => None,
                })
                .collect()
        }
    }

    impl RegistrationBackend for RecordingBackend {
        async fn create_user(&self, user: &UserPayload) -> Result<CreatedUser, ApiError> {
            self.calls.borrow_mut().push(Call::User(user.clone()));
            self.user.clone()
        }

        async fn create_address(
            &self,
            token: &str,
            address: &AddressPayload,
        ) -> Result<CreatedAddress, ApiError> {
            self.calls.borrow_mut().push(Call::Address {
                token: token.to_string(),
                address: address.clone(),
            });
            self.address.borrow().clone()
        }

        async fn create_payment(
            &self,
            token: &str,
            payment: &PaymentPayload,
        ) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Payment {
                token: token.to_string(),
                payment: payment.clone(),
            });
            self.payment.borrow().clone()
        }
    }

    fn scenario_values() -> FormValues {
        [
            ("firstName", "A"),
            ("lastName", "B"),
            ("email", "a@b.com"),
            ("phone", "1234567890"),
            ("accountType", "passenger"),
            ("password", "x"),
            ("confirmPassword", "x"),
            ("zipCode", "A1A1A1"),
        ]
        .into_iter()
        .collect()
    }

    fn with_card(mut values: FormValues) -> FormValues {
        values.set("nameCard", "A B");
        values.set("cardNumber", "4111 1111 1111 1111");
        values.set("expirationDate", "12/26");
        values.set("csc", "123");
        values
    }

    fn driver_with_bank() -> FormValues {
        let mut values = scenario_values();
        values.set("accountType", "driver");
        values.set("nameBank", "A B");
        values.set("institutionNumber", "001");
        values.set("transitNumber", "12345");
        values.set("accountNumber", "987654321");
        values
    }

    // ========================================================================
    // Validation scenarios
    // ========================================================================

    #[tokio::test]
    async fn test_valid_passenger_sends_user_payload() {
        let backend = RecordingBackend::succeeding();
        let store = MemoryStore::new();
        let mut session = Session::init(&store, TokenCheck::Present);

        let outcome = RegistrationPipeline::new(&backend, &store)
            .submit(&scenario_values(), &mut session)
            .await
            .unwrap();

        let calls = backend.calls();
        match &calls[0] {
            Call::User(user) => {
                assert_eq!(user.accounttype, AccountType::Passenger);
                assert_eq!(user.firstname, "A");
                assert_eq!(user.phone, "1234567890");
            }
            other => panic!("expected user call first, got {:?}", other),
        }
        assert!(outcome.is_complete());
        assert_eq!(outcome.redirect(), "/main-passenger");
    }

    #[tokio::test]
    async fn test_password_mismatch_sends_nothing() {
        let backend = RecordingBackend::succeeding();
        let store = MemoryStore::new();
        let mut session = Session::init(&store, TokenCheck::Present);

        let mut values = scenario_values();
        values.set("confirmPassword", "y");

        let err = RegistrationPipeline::new(&backend, &store)
            .submit(&values, &mut session)
            .await
            .unwrap_err();

        assert_eq!(err, SubmitError::Invalid(ValidationError::PasswordMismatch));
        assert_eq!(err.user_message(), "Passwords do not match");
        assert!(backend.calls().is_empty());
        assert!(store.is_empty());
        assert!(!session.authenticated);
    }

    #[tokio::test]
    async fn test_missing_field_sends_nothing() {
        let backend = RecordingBackend::succeeding();
        let store = MemoryStore::new();
        let mut session = Session::default();

        let mut values = scenario_values();
        values.set("zipCode", "");

        let err = RegistrationPipeline::new(&backend, &store)
            .submit(&values, &mut session)
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Please enter your postal code");
        assert!(backend.calls().is_empty());
    }

    // ========================================================================
    // Step ordering and payment
    // ========================================================================

    #[tokio::test]
    async fn test_no_payment_without_payment_fields() {
        let backend = RecordingBackend::succeeding();
        let store = MemoryStore::new();
        let mut session = Session::default();

        let outcome = RegistrationPipeline::new(&backend, &store)
            .submit(&scenario_values(), &mut session)
            .await
            .unwrap();

        assert!(backend.payment_calls().is_empty());
        assert_eq!(outcome.status(Step::Payment), Some(&StepStatus::Skipped));
        assert_eq!(backend.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_steps_run_in_order_with_token() {
        let backend = RecordingBackend::succeeding();
        let store = MemoryStore::new();
        let mut session = Session::default();

        let outcome = RegistrationPipeline::new(&backend, &store)
            .submit(&with_card(scenario_values()), &mut session)
            .await
            .unwrap();

        let calls = backend.calls();
        assert_eq!(calls.len(), 3);
        assert!(matches!(calls[0], Call::User(_)));
        assert!(matches!(&calls[1], Call::Address { token, .. } if token == "token-1"));
        match &calls[2] {
            Call::Payment { token, payment } => {
                assert_eq!(token, "token-1");
                assert_eq!(
                    *payment,
                    PaymentPayload::Card {
                        pan: "4111111111111111".to_string(),
                        name: "A B".to_string(),
                        expiration: "12/26".to_string(),
                        csc: "123".to_string(),
                        address_id: Some("address-1".to_string()),
                    }
                );
            }
            other => panic!("expected payment call, got {:?}", other),
        }
        assert!(outcome.is_complete());
    }

    #[tokio::test]
    async fn test_driver_sends_bank_payment() {
        let backend = RecordingBackend::succeeding();
        let store = MemoryStore::new();
        let mut session = Session::default();

        let outcome = RegistrationPipeline::new(&backend, &store)
            .submit(&driver_with_bank(), &mut session)
            .await
            .unwrap();

        let payments = backend.payment_calls();
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].kind(), "bank");
        assert_eq!(outcome.redirect(), "/main-driver");
    }

    #[tokio::test]
    async fn test_session_persisted_after_user_creation() {
        let backend = RecordingBackend::succeeding();
        let store = MemoryStore::new();
        let mut session = Session::init(&store, TokenCheck::Present);

        RegistrationPipeline::new(&backend, &store)
            .submit(&scenario_values(), &mut session)
            .await
            .unwrap();

        assert_eq!(store.get(USER_TOKEN), Some("token-1".to_string()));
        assert_eq!(store.get(USER_ID), Some("user-1".to_string()));
        assert_eq!(store.get(USER_FIRST_NAME), Some("A".to_string()));
        assert!(session.authenticated);
        assert_eq!(session.first_name(), Some("A"));
    }

    // ========================================================================
    // Failure policy
    // ========================================================================

    #[tokio::test]
    async fn test_user_failure_stops_pipeline() {
        let backend = RecordingBackend::succeeding()
            .with_user(Err(ApiError::Rejected("Email already in use".to_string())));
        let store = MemoryStore::new();
        let mut session = Session::default();

        let err = RegistrationPipeline::new(&backend, &store)
            .with_policy(FailurePolicy::BestEffort)
            .submit(&with_card(scenario_values()), &mut session)
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Email already in use");
        assert_eq!(backend.calls().len(), 1);
        assert!(store.is_empty());
        assert!(!session.authenticated);
    }

    #[tokio::test]
    async fn test_address_failure_aborts_payment() {
        let backend = RecordingBackend::succeeding().with_address(Err(ApiError::Status(500)));
        let store = MemoryStore::new();
        let mut session = Session::default();

        let outcome = RegistrationPipeline::new(&backend, &store)
            .with_policy(FailurePolicy::AbortAndReport)
            .submit(&with_card(scenario_values()), &mut session)
            .await
            .unwrap();

        assert!(backend.payment_calls().is_empty());
        assert_eq!(outcome.status(Step::Payment), Some(&StepStatus::Skipped));
        assert_eq!(
            outcome.first_failure(),
            Some((Step::Address, &ApiError::Status(500)))
        );
        // The user exists, so the session is kept
        assert!(session.authenticated);
    }

    #[tokio::test]
    async fn test_best_effort_sends_card_without_address_id() {
        let backend = RecordingBackend::succeeding()
            .with_address(Err(ApiError::Transport("offline".to_string())));
        let store = MemoryStore::new();
        let mut session = Session::default();

        let outcome = RegistrationPipeline::new(&backend, &store)
            .with_policy(FailurePolicy::BestEffort)
            .submit(&with_card(scenario_values()), &mut session)
            .await
            .unwrap();

        let payments = backend.payment_calls();
        assert_eq!(payments.len(), 1);
        assert!(matches!(
            &payments[0],
            PaymentPayload::Card {
                address_id: None,
                ..
            }
        ));
        assert_eq!(outcome.status(Step::Payment), Some(&StepStatus::Completed));
        assert!(!outcome.is_complete());
    }

    #[tokio::test]
    async fn test_payment_failure_is_reported() {
        let backend = RecordingBackend::succeeding().with_payment(Err(ApiError::Status(502)));
        let store = MemoryStore::new();
        let mut session = Session::default();

        let outcome = RegistrationPipeline::new(&backend, &store)
            .submit(&driver_with_bank(), &mut session)
            .await
            .unwrap();

        assert_eq!(
            outcome.status(Step::Payment),
            Some(&StepStatus::Failed(ApiError::Status(502)))
        );
        assert!(outcome.failure_message().unwrap().contains("payment"));
    }

    // ========================================================================
    // Resubmission after a partial failure
    // ========================================================================

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), String> {
            Err(format!("Failed to set {}", key))
        }

        fn remove(&self, _key: &str) -> Result<(), String> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_resubmit_after_address_failure_creates_user_once() {
        let backend = RecordingBackend::succeeding().with_address(Err(ApiError::Status(500)));
        let store = MemoryStore::new();
        let mut session = Session::init(&store, TokenCheck::Present);
        let values = with_card(scenario_values());
        let pipeline = RegistrationPipeline::new(&backend, &store);

        let first = pipeline.submit(&values, &mut session).await.unwrap();
        assert!(!first.is_complete());

        backend.answer_address(Ok(CreatedAddress {
            id: "address-2".to_string(),
        }));
        let second = pipeline.resume(&first, &values, &mut session).await.unwrap();

        assert_eq!(backend.count(|call| matches!(call, Call::User(_))), 1);
        assert_eq!(backend.count(|call| matches!(call, Call::Address { .. })), 2);
        let payments = backend.payment_calls();
        assert_eq!(payments.len(), 1);
        assert!(matches!(
            &payments[0],
            PaymentPayload::Card { address_id: Some(id), .. } if id == "address-2"
        ));
        assert!(second.is_complete());
        assert_eq!(second.user, first.user);
        assert!(session.authenticated);
    }

    #[tokio::test]
    async fn test_resubmit_skips_completed_steps() {
        let backend = RecordingBackend::succeeding().with_payment(Err(ApiError::Status(502)));
        let store = MemoryStore::new();
        let mut session = Session::default();
        let values = driver_with_bank();
        let pipeline = RegistrationPipeline::new(&backend, &store);

        let first = pipeline.submit(&values, &mut session).await.unwrap();
        assert_eq!(first.address_id, Some("address-1".to_string()));

        backend.answer_payment(Ok(()));
        let second = pipeline.resume(&first, &values, &mut session).await.unwrap();

        assert_eq!(backend.count(|call| matches!(call, Call::User(_))), 1);
        assert_eq!(backend.count(|call| matches!(call, Call::Address { .. })), 1);
        assert_eq!(backend.payment_calls().len(), 2);
        assert_eq!(second.address_id, Some("address-1".to_string()));
        assert!(second.is_complete());
        assert_eq!(second.redirect(), "/main-driver");
    }

    #[tokio::test]
    async fn test_resubmit_with_invalid_form_sends_nothing() {
        let backend = RecordingBackend::succeeding().with_address(Err(ApiError::Status(500)));
        let store = MemoryStore::new();
        let mut session = Session::default();
        let pipeline = RegistrationPipeline::new(&backend, &store);

        let first = pipeline
            .submit(&scenario_values(), &mut session)
            .await
            .unwrap();
        let calls_before = backend.calls().len();

        let mut values = scenario_values();
        values.set("confirmPassword", "y");
        let err = pipeline
            .resume(&first, &values, &mut session)
            .await
            .unwrap_err();

        assert_eq!(err, SubmitError::Invalid(ValidationError::PasswordMismatch));
        assert_eq!(backend.calls().len(), calls_before);
    }

    #[tokio::test]
    async fn test_unsaved_session_keeps_created_user() {
        let backend = RecordingBackend::succeeding();
        let mut session = Session::default();
        let values = scenario_values();

        let first = RegistrationPipeline::new(&backend, &ReadOnlyStore)
            .submit(&values, &mut session)
            .await
            .unwrap();

        // The account exists even though the session was not saved
        assert_eq!(first.session_error, Some("Failed to set userID".to_string()));
        assert!(!first.is_complete());
        assert!(!session.authenticated);
        assert_eq!(first.status(Step::Address), Some(&StepStatus::Completed));

        let store = MemoryStore::new();
        let second = RegistrationPipeline::new(&backend, &store)
            .resume(&first, &values, &mut session)
            .await
            .unwrap();

        assert_eq!(backend.count(|call| matches!(call, Call::User(_))), 1);
        assert_eq!(backend.count(|call| matches!(call, Call::Address { .. })), 1);
        assert!(second.is_complete());
        assert!(session.authenticated);
        assert_eq!(store.get(USER_TOKEN), Some("token-1".to_string()));
    }
}
