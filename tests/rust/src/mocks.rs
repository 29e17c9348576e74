//! Mock probe implementations for testing
//!
//! Deterministic replacements for the randomized default probe, so
//! connectivity tests are free of timing and chance.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use appshelf_core::domain::ProbeOutcome;
use appshelf_core::service::{ConnectionProbe, ProbeRequest};

/// Probe that returns a fixed outcome immediately and counts calls.
pub struct ScriptedProbe {
    outcome: ProbeOutcome,
    calls: AtomicUsize,
}

impl ScriptedProbe {
    pub fn succeeding() -> Self {
        Self {
            outcome: ProbeOutcome::Success,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            outcome: ProbeOutcome::Failed,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times the probe was invoked
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConnectionProbe for ScriptedProbe {
    async fn probe(&self, _request: &ProbeRequest) -> ProbeOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome
    }
}

/// Probe that replays a script of (delay, outcome) pairs, one per call.
///
/// Combined with tokio's paused clock this makes the supersede behavior
/// of overlapping checks reproducible.
pub struct DelayedProbe {
    script: Mutex<VecDeque<(Duration, ProbeOutcome)>>,
}

impl DelayedProbe {
    pub fn new(script: Vec<(Duration, ProbeOutcome)>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
        }
    }
}

#[async_trait]
impl ConnectionProbe for DelayedProbe {
    async fn probe(&self, _request: &ProbeRequest) -> ProbeOutcome {
        let (delay, outcome) = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("DelayedProbe script exhausted");
        tokio::time::sleep(delay).await;
        outcome
    }
}
