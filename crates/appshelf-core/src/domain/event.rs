//! Domain Events - Unified event system for AppShelf
//!
//! All domain changes are represented as events in this module.
//! Application services emit them after successful operations; consumers
//! (the settings UI bridge, audit logging) subscribe via the event bus
//! and react.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Collection;

/// Result of an advisory connectivity check.
///
/// Advisory only: a failed probe never blocks or rolls back any stored
/// entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeOutcome {
    Success,
    Failed,
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Unified domain events for the AppShelf settings panel
///
/// # Serialization
///
/// Events serialize with a `type` field containing the snake_case variant
/// name:
/// ```json
/// { "type": "server_added", "collection": "directory_services", ... }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A new server entry was created in a collection
    ServerAdded {
        collection: Collection,
        entry_id: Uuid,
        name: String,
    },

    /// An existing server entry was edited
    ServerUpdated {
        collection: Collection,
        entry_id: Uuid,
        name: String,
    },

    /// A server entry was deleted
    ServerRemoved {
        collection: Collection,
        entry_id: Uuid,
    },

    /// Security policy was changed
    SecurityPolicyUpdated {
        session_lifetime_hours: u32,
        max_sessions: u32,
        inactivity_timeout_minutes: u32,
    },

    /// An advisory connectivity check completed
    ConnectivityChecked {
        name: String,
        address: String,
        outcome: ProbeOutcome,
    },
}

impl DomainEvent {
    /// Snake_case tag of the variant, matching the serialized `type` field
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ServerAdded { .. } => "server_added",
            Self::ServerUpdated { .. } => "server_updated",
            Self::ServerRemoved { .. } => "server_removed",
            Self::SecurityPolicyUpdated { .. } => "security_policy_updated",
            Self::ConnectivityChecked { .. } => "connectivity_checked",
        }
    }

    /// Collection the event concerns, when it concerns one
    pub fn collection(&self) -> Option<Collection> {
        match self {
            Self::ServerAdded { collection, .. }
            | Self::ServerUpdated { collection, .. }
            | Self::ServerRemoved { collection, .. } => Some(*collection),
            _ => None,
        }
    }
}
