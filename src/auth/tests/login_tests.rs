//! Unit tests for the login flow and identity resolution.

use std::sync::Arc;

use crate::auth::domain::Role;
use crate::auth::password::{self, PasswordHash};
use crate::auth::services::{AuthError, AuthService, BootstrapAdmin};
use crate::auth::token::{TokenCodec, TokenConfig};
use crate::directory::adapters::memory::InMemoryEmployeeRepository;
use crate::directory::domain::{Employee, EmployeeEmail};
use crate::directory::ports::EmployeeRepository;
use crate::error::ErrorKind;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = AuthService<InMemoryEmployeeRepository, DefaultClock>;

struct Harness {
    repository: Arc<InMemoryEmployeeRepository>,
    service: TestService,
}

#[fixture]
fn harness() -> Harness {
    let repository = Arc::new(InMemoryEmployeeRepository::new());
    let codec = Arc::new(TokenCodec::new(&TokenConfig::new("login-test-secret")));
    let bootstrap = BootstrapAdmin::new(
        EmployeeEmail::new(BootstrapAdmin::DEFAULT_EMAIL).expect("valid bootstrap email"),
    );
    let service = AuthService::new(
        Arc::clone(&repository),
        codec,
        bootstrap,
        Arc::new(DefaultClock),
    );
    Harness {
        repository,
        service,
    }
}

async fn seed(
    repository: &InMemoryEmployeeRepository,
    email: &str,
    stored: PasswordHash,
    manager: Option<&str>,
    role: Role,
) {
    let manager_ref = manager.map(|m| EmployeeEmail::new(m).expect("valid manager email"));
    let employee = Employee::new(
        EmployeeEmail::new(email).expect("valid email"),
        stored,
        "Test",
        "User",
        manager_ref,
        role,
    )
    .expect("valid employee");
    repository
        .insert(&employee)
        .await
        .expect("seed insert should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_issues_decodable_token(harness: Harness) {
    let digest = password::hash("s3cret").expect("hashing should succeed");
    seed(&harness.repository, "dev@example.com", digest, Some("boss@example.com"), Role::Developer)
        .await;

    let issued = harness
        .service
        .login("dev@example.com", "s3cret")
        .await
        .expect("login should succeed");

    let identity = harness
        .service
        .authenticate(&issued.token)
        .expect("authenticate should succeed");
    assert_eq!(identity.subject().as_str(), "dev@example.com");
    assert_eq!(identity.role(), Role::Developer);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_rejects_wrong_password(harness: Harness) {
    let digest = password::hash("s3cret").expect("hashing should succeed");
    seed(&harness.repository, "dev@example.com", digest, Some("boss@example.com"), Role::Developer)
        .await;

    let result = harness.service.login("dev@example.com", "wrong").await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_rejects_unknown_account(harness: Harness) {
    let result = harness.service.login("ghost@example.com", "anything").await;

    let Err(error) = result else {
        panic!("login must fail for an unknown account");
    };
    assert!(matches!(error, AuthError::InvalidCredentials));
    assert_eq!(error.kind(), ErrorKind::Unauthenticated);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bootstrap_admin_logs_in_with_cleartext_credential(harness: Harness) {
    // The seeded bootstrap record stores the password as cleartext, not as
    // a bcrypt digest; only this one account may match that way.
    seed(
        &harness.repository,
        BootstrapAdmin::DEFAULT_EMAIL,
        PasswordHash::new("bootstrap-pw"),
        None,
        Role::Admin,
    )
    .await;

    let issued = harness
        .service
        .login(BootstrapAdmin::DEFAULT_EMAIL, "bootstrap-pw")
        .await
        .expect("bootstrap login should succeed");

    let identity = harness
        .service
        .authenticate(&issued.token)
        .expect("authenticate should succeed");
    assert_eq!(identity.role(), Role::Admin);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cleartext_match_is_not_generalized_to_other_accounts(harness: Harness) {
    seed(
        &harness.repository,
        "dev@example.com",
        PasswordHash::new("cleartext-pw"),
        Some("boss@example.com"),
        Role::Developer,
    )
    .await;

    let result = harness.service.login("dev@example.com", "cleartext-pw").await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn authenticate_rejects_tampered_token(harness: Harness) {
    let digest = password::hash("s3cret").expect("hashing should succeed");
    seed(&harness.repository, "dev@example.com", digest, Some("boss@example.com"), Role::Developer)
        .await;

    let issued = harness
        .service
        .login("dev@example.com", "s3cret")
        .await
        .expect("login should succeed");
    let mut tampered = issued.token;
    tampered.push('x');

    let Err(error) = harness.service.authenticate(&tampered) else {
        panic!("tampered token must not authenticate");
    };
    assert_eq!(error.kind(), ErrorKind::Unauthenticated);
}
