//! Domain entities, value objects, and events
//!
//! This module contains all domain-level types for AppShelf:
//! - Entities (ServerEntry, SecurityPolicy)
//! - Value Objects (Collection, ServerKind, ServerStatus, SyncFrequency)
//! - Domain Events (DomainEvent enum for event-driven architecture)

mod event;
mod security;
mod server_entry;

pub use event::{DomainEvent, ProbeOutcome};
pub use security::SecurityPolicy;
pub use server_entry::{
    AvailabilityCheck, AvailabilityUnit, Collection, ServerDraft, ServerEntry, ServerKind,
    ServerStatus, SyncFrequency,
};
