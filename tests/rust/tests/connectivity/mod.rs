//! Connectivity checker integration tests
//!
//! All probes here are deterministic mocks; no test depends on chance
//! or wall-clock timing.

use std::sync::Arc;
use std::time::Duration;

use appshelf_core::domain::{ProbeOutcome, ServerKind};
use appshelf_core::service::{ConnectivityChecker, ProbeRequest, ProbeState};
use appshelf_core::{EventBus, ValidationError};
use pretty_assertions::assert_eq;
use tests::mocks::{DelayedProbe, ScriptedProbe};

fn request() -> ProbeRequest {
    ProbeRequest::new("Corp AD", ServerKind::Ad, "10.0.0.5", "389")
}

#[tokio::test]
async fn test_missing_field_fails_fast_without_probing() {
    let probe = Arc::new(ScriptedProbe::succeeding());
    let checker = ConnectivityChecker::new(probe.clone());

    let mut incomplete = request();
    incomplete.name = String::new();

    let err = checker.check(&incomplete).await.unwrap_err();
    assert_eq!(err, ValidationError::Required { field: "name" });
    assert_eq!(checker.state().await, ProbeState::Idle);
    assert_eq!(probe.calls(), 0, "probe must not run for invalid input");
}

#[tokio::test]
async fn test_missing_port_fails_fast() {
    let probe = Arc::new(ScriptedProbe::succeeding());
    let checker = ConnectivityChecker::new(probe.clone());

    let mut incomplete = request();
    incomplete.port = "  ".to_string();

    let err = checker.check(&incomplete).await.unwrap_err();
    assert_eq!(err, ValidationError::Required { field: "port" });
    assert_eq!(probe.calls(), 0);
}

#[tokio::test]
async fn test_success_and_failure_reach_matching_states() {
    let checker = ConnectivityChecker::new(Arc::new(ScriptedProbe::succeeding()));
    assert_eq!(checker.check(&request()).await.unwrap(), ProbeOutcome::Success);
    assert_eq!(checker.state().await, ProbeState::Success);

    let checker = ConnectivityChecker::new(Arc::new(ScriptedProbe::failing()));
    assert_eq!(checker.check(&request()).await.unwrap(), ProbeOutcome::Failed);
    assert_eq!(checker.state().await, ProbeState::Error);
}

#[tokio::test]
async fn test_check_emits_advisory_event() {
    let bus = EventBus::new();
    let mut rx = bus.subscribe();
    let checker =
        ConnectivityChecker::new(Arc::new(ScriptedProbe::failing())).with_event_sender(bus.sender());

    checker.check(&request()).await.unwrap();

    let event = rx.try_recv().expect("expected connectivity event");
    assert_eq!(event.type_name(), "connectivity_checked");
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_check_supersedes_slower_probe() {
    // First probe is slow and would succeed; the second is fast and
    // fails. The slow result arrives last but must not overwrite the
    // state written by the newer check.
    let probe = Arc::new(DelayedProbe::new(vec![
        (Duration::from_millis(100), ProbeOutcome::Success),
        (Duration::from_millis(10), ProbeOutcome::Failed),
    ]));
    let bus = EventBus::new();
    let mut rx = bus.subscribe();
    let checker = ConnectivityChecker::new(probe).with_event_sender(bus.sender());

    let first_request = request();
    let second_request = request();
    let (first, second) =
        tokio::join!(checker.check(&first_request), checker.check(&second_request));

    assert_eq!(first.unwrap(), ProbeOutcome::Success);
    assert_eq!(second.unwrap(), ProbeOutcome::Failed);
    assert_eq!(
        checker.state().await,
        ProbeState::Error,
        "stale probe result must not clobber the newer one"
    );

    // Only the winning probe reports
    assert!(rx.try_recv().is_some());
    assert!(rx.try_recv().is_none());
}

#[tokio::test]
async fn test_reset_clears_previous_result() {
    let checker = ConnectivityChecker::new(Arc::new(ScriptedProbe::succeeding()));
    checker.check(&request()).await.unwrap();
    assert_eq!(checker.state().await, ProbeState::Success);

    checker.reset().await;
    assert_eq!(checker.state().await, ProbeState::Idle);
}
