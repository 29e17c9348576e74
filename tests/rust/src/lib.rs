//! Shared test utilities and fixtures for AppShelf integration tests.

use std::sync::Arc;

use appshelf_core::{ApplicationServices, ApplicationServicesBuilder, EventBus};
use appshelf_storage::{InMemorySecurityPolicyStore, InMemoryServerRegistry};

/// Mock probe implementations
pub mod mocks;

/// Initialize tracing output for a test run (idempotent).
///
/// Controlled by `RUST_LOG`, e.g. `RUST_LOG=debug cargo test`.
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Build application services backed by an empty in-memory registry.
pub fn test_services() -> ApplicationServices {
    test_services_with(Arc::new(InMemoryServerRegistry::new()))
}

/// Build application services backed by the given registry.
pub fn test_services_with(registry: Arc<InMemoryServerRegistry>) -> ApplicationServices {
    ApplicationServicesBuilder::new()
        .with_event_bus(Arc::new(EventBus::new()))
        .with_registry_repo(registry)
        .with_policy_repo(Arc::new(InMemorySecurityPolicyStore::new()))
        .build()
        .expect("failed to build application services")
}

/// Test fixtures
pub mod fixtures {
    use appshelf_core::domain::{ServerDraft, ServerKind};

    /// A complete, valid directory-service draft
    pub fn directory_draft(name: &str) -> ServerDraft {
        ServerDraft::new(name, "10.0.0.10")
            .with_port("389")
            .with_base_dn("dc=corp,dc=local")
    }

    /// A complete, valid configuration-system draft
    pub fn config_draft(name: &str) -> ServerDraft {
        ServerDraft::new(name, "cfg.corp.local")
            .with_kind(ServerKind::Other)
            .with_port("8443")
    }
}

/// Event testing utilities
pub mod events {
    use appshelf_core::{DomainEvent, EventReceiver};
    use std::time::Duration;

    /// Collect events from a receiver with a timeout
    pub async fn collect_events(mut rx: EventReceiver, timeout: Duration) -> Vec<DomainEvent> {
        let mut events = Vec::new();
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                break;
            }

            match tokio::time::timeout(remaining, rx.recv()).await {
                Ok(Some(event)) => events.push(event),
                Ok(None) => break, // Channel closed
                Err(_) => break,   // Timeout
            }
        }

        events
    }
}
