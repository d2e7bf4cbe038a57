//! Unit tests for password hashing and verification.

use crate::auth::password::{self, PasswordHash};
use rstest::rstest;

#[rstest]
fn hash_then_verify_accepts_original_password() {
    let digest = password::hash("hunter2").expect("hashing should succeed");
    assert_ne!(digest.as_str(), "hunter2");
    assert!(password::verify("hunter2", &digest));
}

#[rstest]
fn verify_rejects_wrong_password() {
    let digest = password::hash("hunter2").expect("hashing should succeed");
    assert!(!password::verify("hunter3", &digest));
}

#[rstest]
fn verify_treats_malformed_digest_as_mismatch() {
    let digest = PasswordHash::new("not-a-bcrypt-digest");
    assert!(!password::verify("hunter2", &digest));
}
