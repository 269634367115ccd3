//! App data models

use serde::{Deserialize, Serialize};

use crate::cf::models::{NamedEntity, Resource};

/// App as returned by `/v2/apps`
pub type App = Resource<AppEntity>;

/// App entity fields
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AppEntity {
    pub name: String,
    pub space_guid: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub instances: Option<u32>,
    #[serde(default)]
    pub memory: Option<u32>,
    #[serde(default)]
    pub buildpack: Option<String>,
}

impl NamedEntity for AppEntity {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl App {
    /// GUID of the owning space
    pub fn space_guid(&self) -> &str {
        &self.entity.space_guid
    }

    /// Get state, defaulting to "unknown" if not available
    pub fn state(&self) -> &str {
        self.entity.state.as_deref().unwrap_or("unknown")
    }

    /// Get instance count, defaulting to 0 if not available
    pub fn instances(&self) -> u32 {
        self.entity.instances.unwrap_or(0)
    }

    /// Get memory in MB, defaulting to 0 if not available
    pub fn memory(&self) -> u32 {
        self.entity.memory.unwrap_or(0)
    }

    /// Get buildpack, defaulting to empty string when auto-detected
    pub fn buildpack(&self) -> &str {
        self.entity.buildpack.as_deref().unwrap_or("")
    }

    pub fn is_started(&self) -> bool {
        self.state() == "STARTED"
    }
}
