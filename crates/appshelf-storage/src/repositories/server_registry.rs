//! In-memory server registry
//!
//! Both collections live in a single map guarded by one lock, since all
//! mutations arrive from discrete user actions and run to completion
//! before the next one is processed.

use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use appshelf_core::domain::{Collection, ServerEntry};
use appshelf_core::repository::{RepoResult, ServerRegistryRepository};

/// In-memory implementation of [`ServerRegistryRepository`].
///
/// Each collection is a `Vec`, so insertion order is preserved.
pub struct InMemoryServerRegistry {
    collections: RwLock<HashMap<Collection, Vec<ServerEntry>>>,
}

impl InMemoryServerRegistry {
    /// Create an empty registry with both collections present
    pub fn new() -> Self {
        let mut collections = HashMap::new();
        collections.insert(Collection::DirectoryServices, Vec::new());
        collections.insert(Collection::ConfigSystems, Vec::new());
        Self {
            collections: RwLock::new(collections),
        }
    }

    /// Create a registry preloaded with entries for one collection
    pub async fn with_entries(self, collection: Collection, entries: Vec<ServerEntry>) -> Self {
        {
            let mut collections = self.collections.write().await;
            collections.insert(collection, entries);
        }
        self
    }
}

impl Default for InMemoryServerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServerRegistryRepository for InMemoryServerRegistry {
    async fn list(&self, collection: Collection) -> RepoResult<Vec<ServerEntry>> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    async fn get(&self, collection: Collection, id: &Uuid) -> RepoResult<Option<ServerEntry>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|entries| entries.iter().find(|e| e.id == *id))
            .cloned())
    }

    async fn add(&self, collection: Collection, entry: &ServerEntry) -> RepoResult<()> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection)
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn update(&self, collection: Collection, entry: &ServerEntry) -> RepoResult<()> {
        let mut collections = self.collections.write().await;
        let entries = collections.entry(collection).or_default();
        let slot = entries
            .iter_mut()
            .find(|e| e.id == entry.id)
            .ok_or_else(|| anyhow!("entry {} not found in {}", entry.id, collection.as_str()))?;
        *slot = entry.clone();
        Ok(())
    }

    async fn remove(&self, collection: Collection, id: &Uuid) -> RepoResult<()> {
        let mut collections = self.collections.write().await;
        let entries = collections.entry(collection).or_default();
        let before = entries.len();
        entries.retain(|e| e.id != *id);
        if entries.len() == before {
            return Err(anyhow!("entry {} not found in {}", id, collection.as_str()));
        }
        Ok(())
    }

    async fn clear_main(&self, collection: Collection) -> RepoResult<()> {
        let mut collections = self.collections.write().await;
        for entry in collections.entry(collection).or_default().iter_mut() {
            entry.is_main = false;
        }
        Ok(())
    }
}
