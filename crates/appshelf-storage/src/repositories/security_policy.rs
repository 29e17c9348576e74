//! In-memory security policy store

use async_trait::async_trait;
use tokio::sync::RwLock;

use appshelf_core::domain::SecurityPolicy;
use appshelf_core::repository::{RepoResult, SecurityPolicyRepository};

/// In-memory implementation of [`SecurityPolicyRepository`].
///
/// Starts at the policy defaults each session.
#[derive(Default)]
pub struct InMemorySecurityPolicyStore {
    policy: RwLock<SecurityPolicy>,
}

impl InMemorySecurityPolicyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SecurityPolicyRepository for InMemorySecurityPolicyStore {
    async fn get(&self) -> RepoResult<SecurityPolicy> {
        Ok(*self.policy.read().await)
    }

    async fn set(&self, policy: &SecurityPolicy) -> RepoResult<()> {
        *self.policy.write().await = *policy;
        Ok(())
    }
}
