//! Organization API operations

use log::debug;

use crate::cf::CfClient;
use crate::config::api;
use crate::error::Result;

use super::models::Organization;

impl CfClient {
    /// Get all organizations visible to the current user
    pub async fn get_organizations(&self) -> Result<Vec<Organization>> {
        debug!("Fetching organizations");
        self.fetch_all_pages(api::ORGANIZATIONS, "organizations")
            .await
    }

    /// Get a single organization by GUID
    pub async fn get_organization(&self, guid: &str) -> Result<Organization> {
        let path = format!("{}/{}", api::ORGANIZATIONS, guid);
        self.get_json(&path, &format!("organization '{}'", guid))
            .await
    }
}
