//! Security Application Service
//!
//! Manages the security policy with automatic event emission.

use std::sync::Arc;
use tracing::info;

use crate::domain::{DomainEvent, SecurityPolicy};
use crate::error::SettingsError;
use crate::event_bus::EventSender;
use crate::repository::SecurityPolicyRepository;

/// Application service for security settings
pub struct SecurityAppService {
    policy_repo: Arc<dyn SecurityPolicyRepository>,
    event_sender: EventSender,
}

impl SecurityAppService {
    pub fn new(policy_repo: Arc<dyn SecurityPolicyRepository>, event_sender: EventSender) -> Self {
        Self {
            policy_repo,
            event_sender,
        }
    }

    /// Get the current security policy
    pub async fn get(&self) -> Result<SecurityPolicy, SettingsError> {
        Ok(self.policy_repo.get().await?)
    }

    /// Replace the security policy after range validation.
    ///
    /// Emits: `SecurityPolicyUpdated`
    pub async fn update(&self, policy: SecurityPolicy) -> Result<SecurityPolicy, SettingsError> {
        policy.validate()?;

        self.policy_repo.set(&policy).await?;

        info!(
            session_lifetime_hours = policy.session_lifetime_hours,
            max_sessions = policy.max_sessions,
            inactivity_timeout_minutes = policy.inactivity_timeout_minutes,
            "[SecurityAppService] Updated security policy"
        );

        self.event_sender.emit(DomainEvent::SecurityPolicyUpdated {
            session_lifetime_hours: policy.session_lifetime_hours,
            max_sessions: policy.max_sessions,
            inactivity_timeout_minutes: policy.inactivity_timeout_minutes,
        });

        Ok(policy)
    }
}
