//! App API operations

use log::debug;

use crate::cf::CfClient;
use crate::config::api;
use crate::error::Result;

use super::models::App;

impl CfClient {
    /// Get apps, either across all spaces or within one
    pub async fn get_apps(&self, space_guid: Option<&str>) -> Result<Vec<App>> {
        match space_guid {
            Some(space) => {
                debug!("Fetching apps for space {}", space);
                let path = format!("{}/{}/apps", api::SPACES, space);
                self.fetch_all_pages(&path, &format!("apps in space '{}'", space))
                    .await
            }
            None => {
                debug!("Fetching all apps");
                self.fetch_all_pages(api::APPS, "apps").await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cf::traits::CfResource;
    use crate::error::CfError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app_json(guid: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "metadata": { "guid": guid },
            "entity": {
                "name": name,
                "space_guid": "space-1",
                "state": "STOPPED",
                "instances": 1,
                "memory": 256
            }
        })
    }

    #[tokio::test]
    async fn test_get_apps_in_space() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri(), &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/spaces/space-1/apps"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_results": 1,
                "total_pages": 1,
                "next_url": null,
                "resources": [app_json("app-1", "web")]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let apps = client.get_apps(Some("space-1")).await.unwrap();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].name(), "web");
        assert_eq!(apps[0].state(), "STOPPED");
    }

    #[tokio::test]
    async fn test_get_apps_bad_record_fails_whole_listing() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri(), &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/apps"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_pages": 1,
                "resources": [app_json("app-1", "web"), {"metadata": {"guid": "app-2"}}]
            })))
            .mount(&mock_server)
            .await;

        let result = client.get_apps(None).await;
        assert!(matches!(result, Err(CfError::Json(_))));
    }
}
