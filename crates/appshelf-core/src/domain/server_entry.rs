//! ServerEntry entity - a tracked external integration server

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// The two independent registry collections.
///
/// Each collection enforces its own main-server exclusivity invariant;
/// flags in one never affect the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Directory services (LDAP-style corporate directories)
    DirectoryServices,
    /// Configuration-management systems
    ConfigSystems,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DirectoryServices => "directory_services",
            Self::ConfigSystems => "config_systems",
        }
    }
}

/// Category of a registered server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ServerKind {
    /// Active Directory style directory service
    #[default]
    #[serde(rename = "AD")]
    Ad,
    /// Generic variant, used for configuration-management entries
    Other,
}

impl ServerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ad => "AD",
            Self::Other => "Other",
        }
    }
}

/// Server availability status shown in the entry tables.
///
/// Set to `Active` on creation. No automatic health-check loop mutates
/// this; any later change is caller-controlled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ServerStatus {
    /// In use
    #[default]
    Active,
    /// Disabled by an administrator
    Disabled,
    /// Unreachable
    Unavailable,
}

impl ServerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
            Self::Unavailable => "unavailable",
        }
    }
}

/// Synchronization interval options offered by the schedule form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SyncFrequency {
    Min15,
    Min30,
    Min45,
    #[default]
    Hour1,
    Hour5,
    Hour10,
    Hour15,
    Hour24,
}

impl SyncFrequency {
    /// Interval label as shown in the frequency dropdown
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Min15 => "15 min",
            Self::Min30 => "30 min",
            Self::Min45 => "45 min",
            Self::Hour1 => "1 h",
            Self::Hour5 => "5 h",
            Self::Hour10 => "10 h",
            Self::Hour15 => "15 h",
            Self::Hour24 => "24 h",
        }
    }
}

/// Unit for the availability polling interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityUnit {
    #[default]
    #[serde(rename = "min")]
    Minutes,
    #[serde(rename = "h")]
    Hours,
}

/// Availability polling interval: a positive value plus its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityCheck {
    pub value: u32,
    pub unit: AvailabilityUnit,
}

impl Default for AvailabilityCheck {
    fn default() -> Self {
        Self {
            value: 15,
            unit: AvailabilityUnit::Minutes,
        }
    }
}

/// A registered external server (directory service or configuration system).
///
/// Entries live in one of two independent ordered collections. Within a
/// collection at most one entry may be the main server, and the main
/// server can never be marked as not tracked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerEntry {
    /// Unique identifier, assigned at creation, immutable thereafter
    pub id: Uuid,

    /// Display label
    pub name: String,

    /// Category (AD for directory services, Other for config systems)
    pub kind: ServerKind,

    /// Host identifier: IPv4 literal or FQDN
    pub address: String,

    /// Optional numeric-string port
    pub port: Option<String>,

    /// Distinguished name, meaningful only for directory services
    pub base_dn: Option<String>,

    /// Whether this is the collection's main server
    pub is_main: bool,

    /// Excluded from active monitoring; mutually exclusive with `is_main`
    pub stop_tracking: bool,

    /// Availability status (Active on creation)
    pub status: ServerStatus,

    /// Synchronization interval
    pub sync_frequency: SyncFrequency,

    /// Availability polling interval
    pub availability_check: AvailabilityCheck,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl ServerEntry {
    /// Create a new entry from a submitted draft.
    ///
    /// A fresh id is assigned and the status is forced to `Active`.
    /// If the draft requests main status the stop-tracking flag is
    /// cleared, since the two are mutually exclusive.
    pub fn from_draft(draft: ServerDraft) -> Self {
        let now = Utc::now();
        let stop_tracking = !draft.is_main && draft.stop_tracking;
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            kind: draft.kind,
            address: draft.address,
            port: draft.port,
            base_dn: draft.base_dn,
            is_main: draft.is_main,
            stop_tracking,
            status: ServerStatus::Active,
            sync_frequency: draft.sync_frequency,
            availability_check: draft.availability_check,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the addressable fields from a draft, preserving id,
    /// status, and creation timestamp.
    pub fn apply_draft(&mut self, draft: ServerDraft) {
        let stop_tracking = !draft.is_main && draft.stop_tracking;
        self.name = draft.name;
        self.kind = draft.kind;
        self.address = draft.address;
        self.port = draft.port;
        self.base_dn = draft.base_dn;
        self.is_main = draft.is_main;
        self.stop_tracking = stop_tracking;
        self.sync_frequency = draft.sync_frequency;
        self.availability_check = draft.availability_check;
        self.updated_at = Utc::now();
    }
}

/// Submitted form payload for creating or editing a server entry.
///
/// Carries every [`ServerEntry`] field except `id` and `status`, which
/// the registry controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerDraft {
    pub name: String,
    pub kind: ServerKind,
    pub address: String,
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub base_dn: Option<String>,
    #[serde(default)]
    pub is_main: bool,
    #[serde(default)]
    pub stop_tracking: bool,
    #[serde(default)]
    pub sync_frequency: SyncFrequency,
    #[serde(default)]
    pub availability_check: AvailabilityCheck,
}

impl ServerDraft {
    /// Create a draft with the form's default values.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ServerKind::Ad,
            address: address.into(),
            port: None,
            base_dn: None,
            is_main: false,
            stop_tracking: false,
            sync_frequency: SyncFrequency::default(),
            availability_check: AvailabilityCheck::default(),
        }
    }

    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    pub fn with_base_dn(mut self, base_dn: impl Into<String>) -> Self {
        self.base_dn = Some(base_dn.into());
        self
    }

    pub fn with_kind(mut self, kind: ServerKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn as_main(mut self) -> Self {
        self.is_main = true;
        self
    }

    pub fn with_stop_tracking(mut self, stop_tracking: bool) -> Self {
        self.stop_tracking = stop_tracking;
        self
    }

    /// Validate required fields and numeric ranges.
    ///
    /// `name` and `address` must be non-empty, the availability value
    /// must be at least 1, and a port, when given, must parse as a TCP
    /// port number.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required { field: "name" });
        }
        if self.address.trim().is_empty() {
            return Err(ValidationError::Required { field: "address" });
        }
        if self.availability_check.value < 1 {
            return Err(ValidationError::OutOfRange {
                field: "availability_check_value",
                min: 1,
                max: u32::MAX,
            });
        }
        if let Some(port) = &self.port {
            if !port.trim().is_empty() && port.trim().parse::<u16>().is_err() {
                return Err(ValidationError::InvalidPort { value: port.clone() });
            }
        }
        Ok(())
    }
}
