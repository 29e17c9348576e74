//! SecurityPolicy entity - session limits for panel users

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Security settings governing user sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityPolicy {
    /// Session lifetime in hours (1..=24)
    pub session_lifetime_hours: u32,

    /// Maximum number of concurrently open sessions (1..=10)
    pub max_sessions: u32,

    /// Inactivity timeout in minutes (10..=1440)
    pub inactivity_timeout_minutes: u32,
}

impl Default for SecurityPolicy {
    fn default() -> Self {
        Self {
            session_lifetime_hours: 12,
            max_sessions: 5,
            inactivity_timeout_minutes: 30,
        }
    }
}

impl SecurityPolicy {
    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        range(self.session_lifetime_hours, "session_lifetime_hours", 1, 24)?;
        range(self.max_sessions, "max_sessions", 1, 10)?;
        range(
            self.inactivity_timeout_minutes,
            "inactivity_timeout_minutes",
            10,
            1440,
        )?;
        Ok(())
    }
}

fn range(value: u32, field: &'static str, min: u32, max: u32) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(())
}
