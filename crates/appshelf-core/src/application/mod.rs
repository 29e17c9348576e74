//! Application Services - Orchestration layer with event emission
//!
//! Application services sit between the presentation layer (settings
//! tabs, sheets, dialogs) and the domain layer. They:
//!
//! 1. **Validate** submitted drafts and enforce business rules
//! 2. **Orchestrate** registry and settings operations
//! 3. **Emit events** after successful operations via the event bus
//!
//! The registry is injected as a repository parameter rather than held
//! as ambient page state, so every rule is unit-testable in isolation.

mod integration;
mod security;

pub use integration::IntegrationAppService;
pub use security::SecurityAppService;

use std::sync::Arc;

use crate::event_bus::EventBus;
use crate::repository::{SecurityPolicyRepository, ServerRegistryRepository};

/// Builder for creating all application services with shared dependencies
pub struct ApplicationServicesBuilder {
    event_bus: Option<Arc<EventBus>>,
    registry_repo: Option<Arc<dyn ServerRegistryRepository>>,
    policy_repo: Option<Arc<dyn SecurityPolicyRepository>>,
}

impl ApplicationServicesBuilder {
    pub fn new() -> Self {
        Self {
            event_bus: None,
            registry_repo: None,
            policy_repo: None,
        }
    }

    pub fn with_event_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.event_bus = Some(bus);
        self
    }

    pub fn with_registry_repo(mut self, repo: Arc<dyn ServerRegistryRepository>) -> Self {
        self.registry_repo = Some(repo);
        self
    }

    pub fn with_policy_repo(mut self, repo: Arc<dyn SecurityPolicyRepository>) -> Self {
        self.policy_repo = Some(repo);
        self
    }

    /// Build all application services
    pub fn build(self) -> anyhow::Result<ApplicationServices> {
        let event_bus = self
            .event_bus
            .ok_or_else(|| anyhow::anyhow!("Event bus required"))?;
        let sender = event_bus.sender();

        Ok(ApplicationServices {
            event_bus,
            integrations: self
                .registry_repo
                .map(|r| IntegrationAppService::new(r, sender.clone())),
            security: self
                .policy_repo
                .map(|r| SecurityAppService::new(r, sender.clone())),
        })
    }
}

impl Default for ApplicationServicesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all application services
pub struct ApplicationServices {
    /// Shared event bus
    pub event_bus: Arc<EventBus>,
    /// Server registry management (integrations tab)
    pub integrations: Option<IntegrationAppService>,
    /// Security policy management (security tab)
    pub security: Option<SecurityAppService>,
}

impl ApplicationServices {
    /// Get the integrations service (panics if not configured)
    pub fn integrations(&self) -> &IntegrationAppService {
        self.integrations
            .as_ref()
            .expect("IntegrationAppService not configured")
    }

    /// Get the security service (panics if not configured)
    pub fn security(&self) -> &SecurityAppService {
        self.security
            .as_ref()
            .expect("SecurityAppService not configured")
    }

    /// Subscribe to events from all services
    pub fn subscribe(&self) -> crate::event_bus::EventReceiver {
        self.event_bus.subscribe()
    }
}
