//! Centralized system/product constants
//!
//! Everything shown on the general settings tab comes from this module.

use serde::{Deserialize, Serialize};

/// Current product version
pub const VERSION: &str = "2.4.0";

/// Date of the last product update (ISO 8601)
pub const LAST_UPDATED: &str = "2025-11-23";

/// Technical support email
pub const SUPPORT_EMAIL: &str = "support@appstore.local";

/// Technical support phone
pub const SUPPORT_PHONE: &str = "+7 (999) 000-00-00";

/// System administrator email
pub const ADMIN_EMAIL: &str = "admin@appstore.local";

/// Read-only snapshot of the general tab contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub version: &'static str,
    pub last_updated: &'static str,
    pub support_email: &'static str,
    pub support_phone: &'static str,
    pub admin_email: &'static str,
}

/// Get the current system information
pub fn current() -> SystemInfo {
    SystemInfo {
        version: VERSION,
        last_updated: LAST_UPDATED,
        support_email: SUPPORT_EMAIL,
        support_phone: SUPPORT_PHONE,
        admin_email: ADMIN_EMAIL,
    }
}
