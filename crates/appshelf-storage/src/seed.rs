//! Fixed seed data for a new session
//!
//! Nothing survives a reload, so every session re-initializes the
//! registry from these values: two corporate directory servers and an
//! empty configuration-systems collection.

use appshelf_core::domain::{
    AvailabilityCheck, AvailabilityUnit, Collection, ServerDraft, ServerEntry, ServerStatus,
    SyncFrequency,
};

use crate::InMemoryServerRegistry;

/// Seed entries for the directory services collection
pub fn directory_services() -> Vec<ServerEntry> {
    let mut primary = ServerEntry::from_draft(
        ServerDraft::new("Corp AD Primary", "10.0.0.5")
            .with_port("389")
            .with_base_dn("dc=corp,dc=local")
            .as_main(),
    );
    primary.sync_frequency = SyncFrequency::Hour1;
    primary.availability_check = AvailabilityCheck {
        value: 15,
        unit: AvailabilityUnit::Minutes,
    };

    let mut backup = ServerEntry::from_draft(
        ServerDraft::new("Corp AD Backup", "10.0.0.6")
            .with_port("389")
            .with_base_dn("dc=corp,dc=local"),
    );
    backup.status = ServerStatus::Disabled;
    backup.sync_frequency = SyncFrequency::Hour1;
    backup.availability_check = AvailabilityCheck {
        value: 30,
        unit: AvailabilityUnit::Minutes,
    };

    vec![primary, backup]
}

/// Create a registry preloaded with the session seed.
///
/// Directory services start with the two corporate AD servers; the
/// configuration systems collection starts empty.
pub async fn seeded_registry() -> InMemoryServerRegistry {
    InMemoryServerRegistry::new()
        .with_entries(Collection::DirectoryServices, directory_services())
        .await
}
