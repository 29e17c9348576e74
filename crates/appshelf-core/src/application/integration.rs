//! Integration Application Service
//!
//! Manages the two server registry collections with automatic event
//! emission, enforcing the main-server invariants on every mutation.

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::domain::{Collection, DomainEvent, ServerDraft, ServerEntry};
use crate::error::RegistryError;
use crate::event_bus::EventSender;
use crate::repository::ServerRegistryRepository;

/// Application service for the server registry (integrations tab)
///
/// Invariants held for each collection independently:
/// - at most one entry has `is_main = true`
/// - no entry has both `is_main` and `stop_tracking` set
/// - entry ids are unique within the collection's lifetime
pub struct IntegrationAppService {
    registry_repo: Arc<dyn ServerRegistryRepository>,
    event_sender: EventSender,
}

impl IntegrationAppService {
    pub fn new(registry_repo: Arc<dyn ServerRegistryRepository>, event_sender: EventSender) -> Self {
        Self {
            registry_repo,
            event_sender,
        }
    }

    /// List all entries in a collection, in insertion order
    pub async fn list(&self, collection: Collection) -> Result<Vec<ServerEntry>, RegistryError> {
        Ok(self.registry_repo.list(collection).await?)
    }

    /// Get an entry by ID
    pub async fn get(
        &self,
        collection: Collection,
        id: &Uuid,
    ) -> Result<Option<ServerEntry>, RegistryError> {
        Ok(self.registry_repo.get(collection, id).await?)
    }

    /// Create a new entry from a submitted draft.
    ///
    /// The entry gets a fresh id and `Active` status. When the draft
    /// requests main status, every other main flag in the collection is
    /// cleared first so the exclusivity invariant holds at all times.
    ///
    /// Emits: `ServerAdded`
    pub async fn add(
        &self,
        collection: Collection,
        draft: ServerDraft,
    ) -> Result<ServerEntry, RegistryError> {
        draft.validate()?;

        if draft.is_main {
            self.registry_repo.clear_main(collection).await?;
        }

        let entry = ServerEntry::from_draft(draft);
        self.registry_repo.add(collection, &entry).await?;

        info!(
            collection = collection.as_str(),
            entry_id = %entry.id,
            name = %entry.name,
            "[IntegrationAppService] Added server entry"
        );

        self.event_sender.emit(DomainEvent::ServerAdded {
            collection,
            entry_id: entry.id,
            name: entry.name.clone(),
        });

        Ok(entry)
    }

    /// Edit an existing entry, replacing its addressable fields.
    ///
    /// The id, status, and creation timestamp are preserved. Applies the
    /// same main-exclusivity clearing rule as `add` when the draft sets
    /// main status.
    ///
    /// Emits: `ServerUpdated`
    pub async fn update(
        &self,
        collection: Collection,
        id: &Uuid,
        draft: ServerDraft,
    ) -> Result<ServerEntry, RegistryError> {
        draft.validate()?;

        let mut entry = self
            .registry_repo
            .get(collection, id)
            .await?
            .ok_or(RegistryError::EntryNotFound { id: *id })?;

        if draft.is_main {
            self.registry_repo.clear_main(collection).await?;
        }

        entry.apply_draft(draft);
        self.registry_repo.update(collection, &entry).await?;

        info!(
            collection = collection.as_str(),
            entry_id = %entry.id,
            name = %entry.name,
            "[IntegrationAppService] Updated server entry"
        );

        self.event_sender.emit(DomainEvent::ServerUpdated {
            collection,
            entry_id: entry.id,
            name: entry.name.clone(),
        });

        Ok(entry)
    }

    /// Delete an entry.
    ///
    /// Refused with `MainServerProtected` when the target is the
    /// collection's main server; callers must reassign main status to
    /// another entry first. Nothing is changed on refusal.
    ///
    /// Emits: `ServerRemoved`
    pub async fn remove(&self, collection: Collection, id: &Uuid) -> Result<(), RegistryError> {
        let entry = self
            .registry_repo
            .get(collection, id)
            .await?
            .ok_or(RegistryError::EntryNotFound { id: *id })?;

        if entry.is_main {
            return Err(RegistryError::MainServerProtected {
                name: entry.name.clone(),
            });
        }

        self.registry_repo.remove(collection, id).await?;

        info!(
            collection = collection.as_str(),
            entry_id = %id,
            "[IntegrationAppService] Removed server entry"
        );

        self.event_sender.emit(DomainEvent::ServerRemoved {
            collection,
            entry_id: *id,
        });

        Ok(())
    }
}
