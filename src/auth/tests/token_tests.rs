//! Unit tests for the bearer-token codec.

use crate::auth::domain::Role;
use crate::auth::token::{InvalidTokenError, TokenCodec, TokenConfig};
use crate::directory::domain::EmployeeEmail;
use chrono::{DateTime, Duration, Local, Utc};
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

/// Clock pinned to a fixed instant for deterministic expiry tests.
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[fixture]
fn codec() -> TokenCodec {
    TokenCodec::new(&TokenConfig::new("unit-test-secret"))
}

fn subject() -> EmployeeEmail {
    EmployeeEmail::new("worker@example.com").expect("valid email")
}

#[rstest]
fn issue_then_decode_round_trips_claims(codec: TokenCodec) {
    let issued = codec
        .issue(&subject(), Role::Developer, &DefaultClock)
        .expect("issuance should succeed");

    let claims = codec.decode(&issued.token).expect("decode should succeed");
    assert_eq!(claims.sub, "worker@example.com");
    assert_eq!(claims.role, Role::Developer);
    assert_eq!(claims.exp, issued.expires_at.timestamp());
}

#[rstest]
fn expiry_is_sixty_minutes_from_issuance(codec: TokenCodec) {
    let now = Utc::now();
    let issued = codec
        .issue(&subject(), Role::Manager, &FixedClock(now))
        .expect("issuance should succeed");

    assert_eq!(
        issued.expires_at.timestamp(),
        (now + Duration::minutes(60)).timestamp()
    );
}

#[rstest]
fn decode_rejects_tampered_token(codec: TokenCodec) {
    let issued = codec
        .issue(&subject(), Role::Developer, &DefaultClock)
        .expect("issuance should succeed");

    let mut tampered = issued.token;
    tampered.push('x');

    assert_eq!(codec.decode(&tampered), Err(InvalidTokenError));
}

#[rstest]
fn decode_rejects_token_signed_with_other_secret(codec: TokenCodec) {
    let other = TokenCodec::new(&TokenConfig::new("a-different-secret"));
    let issued = other
        .issue(&subject(), Role::Admin, &DefaultClock)
        .expect("issuance should succeed");

    assert_eq!(codec.decode(&issued.token), Err(InvalidTokenError));
}

#[rstest]
#[case("")]
#[case("not-a-token")]
#[case("aaaa.bbbb.cccc")]
fn decode_rejects_malformed_input(codec: TokenCodec, #[case] raw: &str) {
    assert_eq!(codec.decode(raw), Err(InvalidTokenError));
}

#[rstest]
fn decode_rejects_expired_token(codec: TokenCodec) {
    let past = Utc::now() - Duration::hours(2);
    let issued = codec
        .issue(&subject(), Role::Developer, &FixedClock(past))
        .expect("issuance should succeed");

    // Claimed role and subject are irrelevant once the expiry has passed.
    assert_eq!(codec.decode(&issued.token), Err(InvalidTokenError));
}
