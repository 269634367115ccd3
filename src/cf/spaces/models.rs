//! Space data models

use serde::{Deserialize, Serialize};

use crate::cf::models::{NamedEntity, Resource};

/// Space as returned by `/v2/spaces`
pub type Space = Resource<SpaceEntity>;

/// Space entity fields
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SpaceEntity {
    pub name: String,
    pub organization_guid: String,
}

impl NamedEntity for SpaceEntity {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Space {
    /// GUID of the owning organization
    pub fn organization_guid(&self) -> &str {
        &self.entity.organization_guid
    }
}
