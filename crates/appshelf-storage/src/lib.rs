//! # AppShelf Storage
//!
//! In-memory implementations of the core repository traits.
//!
//! All registry and settings state is session-local: nothing is written
//! to disk and every session starts from the fixed seed values in the
//! [`seed`] module.

pub mod repositories;
pub mod seed;

pub use repositories::{InMemorySecurityPolicyStore, InMemoryServerRegistry};
