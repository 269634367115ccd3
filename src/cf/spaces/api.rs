//! Space API operations

use log::debug;

use crate::cf::CfClient;
use crate::config::api;
use crate::error::Result;

use super::models::Space;

impl CfClient {
    /// Get spaces, either across all organizations or within one
    pub async fn get_spaces(&self, org_guid: Option<&str>) -> Result<Vec<Space>> {
        match org_guid {
            Some(org) => {
                debug!("Fetching spaces for organization {}", org);
                let path = format!("{}/{}/spaces", api::ORGANIZATIONS, org);
                self.fetch_all_pages(&path, &format!("spaces in organization '{}'", org))
                    .await
            }
            None => {
                debug!("Fetching all spaces");
                self.fetch_all_pages(api::SPACES, "spaces").await
            }
        }
    }
}
