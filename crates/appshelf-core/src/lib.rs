//! # AppShelf Core Library
//!
//! Domain logic, entities, and business rules for the AppShelf
//! administration panel.
//!
//! ## Modules
//!
//! - `domain` - Core entities (ServerEntry, SecurityPolicy, DomainEvent)
//! - `error` - Typed error taxonomy for registry and settings operations
//! - `repository` - Data access traits
//! - `service` - Domain services (connectivity checking)
//! - `application` - Application services with event emission
//! - `event_bus` - Central event distribution system
//! - `system_info` - Centralized product/system constants

pub mod application;
pub mod domain;
pub mod error;
pub mod event_bus;
pub mod repository;
pub mod service;
pub mod system_info;

// Re-export commonly used types
pub use domain::*;
pub use error::{RegistryError, SettingsError, ValidationError};
pub use repository::*;
pub use service::*;

// Event-driven architecture exports
pub use application::{
    ApplicationServices, ApplicationServicesBuilder, IntegrationAppService, SecurityAppService,
};
pub use event_bus::{EventBus, EventReceiver, EventSender, SharedEventBus};
