//! Cloud Controller v2 resource envelope shared by all endpoints

use serde::{Deserialize, Serialize};

use crate::cf::traits::CfResource;

/// One v2 resource: `{"metadata": {...}, "entity": {...}}`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Resource<E> {
    pub metadata: Metadata,
    pub entity: E,
}

/// Resource metadata common to every endpoint
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Metadata {
    pub guid: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Entity payloads that carry a display name
pub trait NamedEntity {
    fn display_name(&self) -> &str;
}

impl<E: NamedEntity> CfResource for Resource<E> {
    fn guid(&self) -> &str {
        &self.metadata.guid
    }

    fn name(&self) -> &str {
        self.entity.display_name()
    }
}

impl<E> Resource<E> {
    /// Get created_at timestamp, defaulting to empty string if not available
    pub fn created_at(&self) -> &str {
        self.metadata.created_at.as_deref().unwrap_or("")
    }
}
