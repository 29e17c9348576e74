//! Repository traits for data access
//!
//! These traits define the interface for registry and settings storage
//! without specifying the implementation (in-memory, database, etc.).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Collection, SecurityPolicy, ServerEntry};

/// Result type for repository operations
pub type RepoResult<T> = anyhow::Result<T>;

/// Server registry repository trait
///
/// Holds the two independent server collections. Implementations must
/// preserve insertion order within a collection.
#[async_trait]
pub trait ServerRegistryRepository: Send + Sync {
    /// Get all entries in a collection, in insertion order
    async fn list(&self, collection: Collection) -> RepoResult<Vec<ServerEntry>>;

    /// Get an entry by ID
    async fn get(&self, collection: Collection, id: &Uuid) -> RepoResult<Option<ServerEntry>>;

    /// Append a new entry
    async fn add(&self, collection: Collection, entry: &ServerEntry) -> RepoResult<()>;

    /// Replace an existing entry in place (matched by id)
    async fn update(&self, collection: Collection, entry: &ServerEntry) -> RepoResult<()>;

    /// Remove an entry
    async fn remove(&self, collection: Collection, id: &Uuid) -> RepoResult<()>;

    /// Clear the main flag on every entry in a collection
    async fn clear_main(&self, collection: Collection) -> RepoResult<()>;
}

/// Security policy repository trait
#[async_trait]
pub trait SecurityPolicyRepository: Send + Sync {
    /// Get the current policy
    async fn get(&self) -> RepoResult<SecurityPolicy>;

    /// Replace the current policy
    async fn set(&self, policy: &SecurityPolicy) -> RepoResult<()>;
}
