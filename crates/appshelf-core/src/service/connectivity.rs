//! Advisory connectivity check for server entries
//!
//! Simulates a probe against the address/port a user has typed into the
//! entry sheet. The outcome is feedback only: it is never written to a
//! stored entry and a failed probe blocks nothing.
//!
//! The probe itself is an injected capability so tests can supply a
//! deterministic implementation without timing dependence.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::{DomainEvent, ProbeOutcome, ServerKind};
use crate::error::ValidationError;
use crate::event_bus::EventSender;

/// Delay of the default simulated probe
const DEFAULT_PROBE_DELAY: Duration = Duration::from_millis(1500);

/// Success probability of the default simulated probe
const DEFAULT_SUCCESS_RATE: f64 = 0.7;

/// Target of a connectivity check.
///
/// All fields are required before a probe is attempted; an incomplete
/// request is rejected up front and never enters the loading state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeRequest {
    pub name: String,
    pub kind: ServerKind,
    pub address: String,
    pub port: String,
}

impl ProbeRequest {
    pub fn new(
        name: impl Into<String>,
        kind: ServerKind,
        address: impl Into<String>,
        port: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            address: address.into(),
            port: port.into(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required { field: "name" });
        }
        if self.address.trim().is_empty() {
            return Err(ValidationError::Required { field: "address" });
        }
        if self.port.trim().is_empty() {
            return Err(ValidationError::Required { field: "port" });
        }
        Ok(())
    }
}

/// Transient state of the check indicator in the entry sheet.
///
/// Never persisted; resets to `Idle` whenever the sheet reopens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Injectable probe capability.
#[async_trait]
pub trait ConnectionProbe: Send + Sync {
    /// Attempt to reach the target and report the outcome
    async fn probe(&self, request: &ProbeRequest) -> ProbeOutcome;
}

/// Default simulated probe: fixed delay, randomized outcome.
pub struct RandomDelayProbe {
    delay: Duration,
    success_rate: f64,
}

impl RandomDelayProbe {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_PROBE_DELAY,
            success_rate: DEFAULT_SUCCESS_RATE,
        }
    }
}

impl Default for RandomDelayProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionProbe for RandomDelayProbe {
    async fn probe(&self, _request: &ProbeRequest) -> ProbeOutcome {
        tokio::time::sleep(self.delay).await;
        if rand::random::<f64>() < self.success_rate {
            ProbeOutcome::Success
        } else {
            ProbeOutcome::Failed
        }
    }
}

/// Runs connectivity checks and tracks the transient indicator state.
///
/// A second invocation while a probe is in flight supersedes the first:
/// the stale probe still completes, but its result no longer updates the
/// indicator or emits an event. No cancellation is supported.
pub struct ConnectivityChecker {
    probe: Arc<dyn ConnectionProbe>,
    state: Mutex<ProbeState>,
    generation: AtomicU64,
    event_sender: Option<EventSender>,
}

impl ConnectivityChecker {
    pub fn new(probe: Arc<dyn ConnectionProbe>) -> Self {
        Self {
            probe,
            state: Mutex::new(ProbeState::Idle),
            generation: AtomicU64::new(0),
            event_sender: None,
        }
    }

    /// Emit `ConnectivityChecked` events for completed probes
    pub fn with_event_sender(mut self, sender: EventSender) -> Self {
        self.event_sender = Some(sender);
        self
    }

    /// Current indicator state
    pub async fn state(&self) -> ProbeState {
        *self.state.lock().await
    }

    /// Reset the indicator to `Idle` (sheet reopened)
    pub async fn reset(&self) {
        *self.state.lock().await = ProbeState::Idle;
    }

    /// Run a connectivity check against the given target.
    ///
    /// An incomplete request reports the validation error immediately
    /// without entering `Loading`. Otherwise the injected probe runs and
    /// the indicator moves to `Success` or `Error` - unless a newer check
    /// superseded this one in the meantime.
    pub async fn check(&self, request: &ProbeRequest) -> Result<ProbeOutcome, ValidationError> {
        request.validate()?;

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.lock().await = ProbeState::Loading;

        let outcome = self.probe.probe(request).await;

        // Only the newest probe may publish its result
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(
                name = %request.name,
                "[ConnectivityChecker] Probe result superseded, dropped"
            );
            return Ok(outcome);
        }

        *self.state.lock().await = match outcome {
            ProbeOutcome::Success => ProbeState::Success,
            ProbeOutcome::Failed => ProbeState::Error,
        };

        if let Some(sender) = &self.event_sender {
            sender.emit(DomainEvent::ConnectivityChecked {
                name: request.name.clone(),
                address: request.address.clone(),
                outcome,
            });
        }

        Ok(outcome)
    }
}
