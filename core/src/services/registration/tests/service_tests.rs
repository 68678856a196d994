use std::sync::Arc;

use crate::domain::entities::registration::PendingRegistration;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{MockRegistrationRepository, RegistrationRepository};
use crate::services::registration::RegistrationService;

fn service(
    registrations: Vec<PendingRegistration>,
) -> (
    RegistrationService<MockRegistrationRepository>,
    Arc<MockRegistrationRepository>,
) {
    let repository = Arc::new(MockRegistrationRepository::with_registrations(registrations));
    (RegistrationService::new(repository.clone()), repository)
}

#[tokio::test]
async fn test_submit_appends_pending_record() {
    let (service, repository) = service(vec![]);

    let registration = service
        .submit("charlie", "555-0100", "pw")
        .await
        .unwrap();
    assert!(registration.is_pending());
    assert_eq!(registration.username, "charlie");

    let stored = repository.load_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], registration);
}

#[tokio::test]
async fn test_submit_preserves_existing_records() {
    let existing = PendingRegistration::new("dana", "555-0200", "pw");
    let (service, repository) = service(vec![existing.clone()]);

    service.submit("charlie", "555-0100", "pw").await.unwrap();

    let stored = repository.load_all().await.unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0], existing);
}

#[tokio::test]
async fn test_submit_requires_username_and_password() {
    let (service, _) = service(vec![]);

    let error = service.submit("  ", "555-0100", "pw").await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Validation(ValidationError::RequiredField { ref field }) if field == "username"
    ));

    let error = service.submit("charlie", "555-0100", "").await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Validation(ValidationError::RequiredField { ref field }) if field == "password"
    ));
}

#[tokio::test]
async fn test_submit_rejects_implausible_phone() {
    let (service, _) = service(vec![]);

    let error = service.submit("charlie", "not-a-phone", "pw").await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Validation(ValidationError::InvalidFormat { ref field }) if field == "phoneNumber"
    ));
}

#[tokio::test]
async fn test_submit_rejects_duplicate_pending_username() {
    let (service, _) = service(vec![PendingRegistration::new("charlie", "555-0100", "pw")]);

    let error = service
        .submit("CHARLIE", "555-0999", "other")
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        DomainError::Validation(ValidationError::DuplicateValue { ref field }) if field == "username"
    ));
}

#[tokio::test]
async fn test_resubmission_allowed_after_rejection() {
    let mut rejected = PendingRegistration::new("charlie", "555-0100", "pw");
    rejected.reject();
    let (service, repository) = service(vec![rejected]);

    let registration = service.submit("charlie", "555-0100", "pw").await.unwrap();
    assert!(registration.is_pending());

    let stored = repository.load_all().await.unwrap();
    assert_eq!(stored.len(), 2);
}
