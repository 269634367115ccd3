//! Organization data models

use serde::{Deserialize, Serialize};

use crate::cf::models::{NamedEntity, Resource};

/// Organization as returned by `/v2/organizations`
pub type Organization = Resource<OrganizationEntity>;

/// Organization entity fields
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OrganizationEntity {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl NamedEntity for OrganizationEntity {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Organization {
    /// Get status, defaulting to "unknown" if not available
    pub fn status(&self) -> &str {
        self.entity.status.as_deref().unwrap_or("unknown")
    }
}
