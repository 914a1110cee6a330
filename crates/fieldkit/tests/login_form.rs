//! Login submission lifecycle tests
//!
//! Cover the full protocol: validation gating, payload normalization,
//! transport failure handling, and the submitting flag settling back to
//! false after every attempt.

mod common;

use common::{FailingTransport, RecordingTransport};
use fieldkit::{LoginForm, StubTransport, SubmitOutcome};
use pretty_assertions::assert_eq;

fn filled_form() -> LoginForm {
    let mut form = LoginForm::new();
    form.set_field("email", "  User@Example.COM ");
    form.set_field("password", "longenough");
    form
}

#[tokio::test]
async fn invalid_login_never_reaches_transport() {
    let transport = RecordingTransport::default();
    let mut form = LoginForm::new();
    form.set_field("email", "abc");
    form.set_field("password", "longenough");

    let outcome = form.submit(&transport).await;

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(form.error(), Some("Enter a valid email address."));
    assert_eq!(transport.login_count(), 0);
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn valid_login_hands_off_normalized_payload() {
    let transport = RecordingTransport::default();
    let mut form = filled_form();

    let outcome = form.submit(&transport).await;

    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(form.error(), None);
    assert!(!form.is_submitting());

    let logins = transport.logins.lock().unwrap();
    assert_eq!(logins.len(), 1);
    assert_eq!(logins[0].email, "user@example.com");
    assert_eq!(logins[0].password, "longenough");
}

#[tokio::test]
async fn stub_transport_accepts_valid_login() {
    let mut form = filled_form();
    let outcome = form.submit(&StubTransport::instant()).await;

    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn transport_failure_surfaces_carried_message() {
    let transport = FailingTransport::with_message("Account locked.");
    let mut form = filled_form();

    let outcome = form.submit(&transport).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(form.error(), Some("Account locked."));
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn transport_failure_without_message_uses_fallback() {
    let transport = FailingTransport::default();
    let mut form = filled_form();

    form.submit(&transport).await;

    assert_eq!(form.error(), Some("Login failed. Please try again."));
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn failed_submission_can_be_retried_manually() {
    let mut form = filled_form();

    let outcome = form.submit(&FailingTransport::default()).await;
    assert_eq!(outcome, SubmitOutcome::Failed);

    // No automatic retry happened; the user resubmits and succeeds
    let recording = RecordingTransport::default();
    let outcome = form.submit(&recording).await;
    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(recording.login_count(), 1);
    assert_eq!(form.error(), None);
}

#[tokio::test]
async fn submit_clears_stale_error_before_validating() {
    let mut form = LoginForm::new();

    form.submit(&RecordingTransport::default()).await;
    assert_eq!(form.error(), Some("Email is required."));

    form.set_field("email", "user@example.com");
    form.set_field("password", "longenough");
    form.submit(&RecordingTransport::default()).await;
    assert_eq!(form.error(), None);
}
