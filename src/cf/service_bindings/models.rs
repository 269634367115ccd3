//! Service binding data models

use serde::{Deserialize, Serialize};

use crate::cf::models::{NamedEntity, Resource};

/// Service binding as returned by `/v2/service_bindings`
pub type ServiceBinding = Resource<ServiceBindingEntity>;

/// Service binding entity fields
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ServiceBindingEntity {
    pub app_guid: String,
    pub service_instance_guid: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl NamedEntity for ServiceBindingEntity {
    // Bindings are often unnamed
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

impl ServiceBinding {
    pub fn app_guid(&self) -> &str {
        &self.entity.app_guid
    }

    pub fn service_instance_guid(&self) -> &str {
        &self.entity.service_instance_guid
    }
}
