//! In-memory repository implementations

mod security_policy;
mod server_registry;

pub use security_policy::InMemorySecurityPolicyStore;
pub use server_registry::InMemoryServerRegistry;
