//! Audit event data models

use serde::{Deserialize, Serialize};

use crate::cf::models::{NamedEntity, Resource};

/// Audit event as returned by `/v2/events`
pub type Event = Resource<EventEntity>;

/// Audit event entity fields
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct EventEntity {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub actor_name: Option<String>,
    #[serde(default)]
    pub actee: Option<String>,
    #[serde(default)]
    pub actee_name: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub space_guid: Option<String>,
    #[serde(default)]
    pub organization_guid: Option<String>,
}

impl NamedEntity for EventEntity {
    // Events are named after what they happened to
    fn display_name(&self) -> &str {
        self.actee_name.as_deref().unwrap_or("")
    }
}

impl Event {
    pub fn event_type(&self) -> &str {
        &self.entity.event_type
    }

    pub fn actor_name(&self) -> &str {
        self.entity.actor_name.as_deref().unwrap_or("")
    }

    pub fn actee(&self) -> &str {
        self.entity.actee.as_deref().unwrap_or("")
    }

    pub fn timestamp(&self) -> &str {
        self.entity.timestamp.as_deref().unwrap_or("")
    }

    pub fn space_guid(&self) -> &str {
        self.entity.space_guid.as_deref().unwrap_or("")
    }

    pub fn organization_guid(&self) -> &str {
        self.entity.organization_guid.as_deref().unwrap_or("")
    }
}
