//! Unit tests for role parsing and authorization predicates.

use crate::auth::domain::{AccessError, Identity, Role};
use crate::directory::domain::EmployeeEmail;
use crate::error::ErrorKind;
use rstest::rstest;

#[rstest]
#[case(Role::Admin, "admin")]
#[case(Role::Manager, "manager")]
#[case(Role::Developer, "developer")]
fn as_str_returns_canonical_form(#[case] role: Role, #[case] expected: &str) {
    assert_eq!(role.as_str(), expected);
    assert_eq!(role.to_string(), expected);
}

#[rstest]
#[case("admin", Role::Admin)]
#[case("  Manager ", Role::Manager)]
#[case("DEVELOPER", Role::Developer)]
fn try_from_normalizes_case_and_whitespace(#[case] raw: &str, #[case] expected: Role) {
    assert_eq!(Role::try_from(raw), Ok(expected));
}

#[rstest]
#[case("")]
#[case("root")]
#[case("admins")]
fn try_from_rejects_unknown_roles(#[case] raw: &str) {
    assert!(Role::try_from(raw).is_err());
}

#[rstest]
fn serde_uses_snake_case_wire_form() {
    let json = serde_json::to_string(&Role::Developer).expect("serialize");
    assert_eq!(json, "\"developer\"");
    let role: Role = serde_json::from_str("\"manager\"").expect("deserialize");
    assert_eq!(role, Role::Manager);
}

fn identity(role: Role) -> Identity {
    let email = EmployeeEmail::new("caller@example.com").expect("valid email");
    Identity::new(email, role)
}

#[rstest]
#[case(Role::Admin, Role::Admin, true)]
#[case(Role::Admin, Role::Manager, false)]
#[case(Role::Admin, Role::Developer, false)]
#[case(Role::Manager, Role::Admin, false)]
#[case(Role::Manager, Role::Manager, true)]
#[case(Role::Manager, Role::Developer, false)]
#[case(Role::Developer, Role::Admin, false)]
#[case(Role::Developer, Role::Manager, false)]
#[case(Role::Developer, Role::Developer, true)]
fn require_role_demands_exact_equality(
    #[case] held: Role,
    #[case] required: Role,
    #[case] allowed: bool,
) {
    let result = identity(held).require_role(required);
    if allowed {
        assert_eq!(result, Ok(()));
    } else {
        assert_eq!(result, Err(AccessError::RoleMismatch { required }));
    }
}

#[rstest]
fn role_mismatch_maps_to_forbidden() {
    let error = AccessError::RoleMismatch {
        required: Role::Admin,
    };
    assert_eq!(error.kind(), ErrorKind::Forbidden);
}

#[rstest]
fn identity_is_matches_subject_only() {
    let caller = identity(Role::Developer);
    let own = EmployeeEmail::new("caller@example.com").expect("valid email");
    let other = EmployeeEmail::new("other@example.com").expect("valid email");
    assert!(caller.is(&own));
    assert!(!caller.is(&other));
}
