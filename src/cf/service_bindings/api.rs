//! Service binding API operations

use log::debug;

use crate::cf::CfClient;
use crate::config::api;
use crate::error::Result;

use super::models::ServiceBinding;

impl CfClient {
    /// Get service bindings, either all of them or those of one app
    pub async fn get_service_bindings(
        &self,
        app_guid: Option<&str>,
    ) -> Result<Vec<ServiceBinding>> {
        match app_guid {
            Some(app) => {
                debug!("Fetching service bindings for app {}", app);
                let path = format!("{}/{}/service_bindings", api::APPS, app);
                self.fetch_all_pages(&path, &format!("service bindings of app '{}'", app))
                    .await
            }
            None => {
                debug!("Fetching all service bindings");
                self.fetch_all_pages(api::SERVICE_BINDINGS, "service bindings")
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_service_bindings_for_app() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri(), &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/apps/app-1/service_bindings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_results": 1,
                "total_pages": 1,
                "next_url": null,
                "resources": [{
                    "metadata": { "guid": "sb-1" },
                    "entity": {
                        "app_guid": "app-1",
                        "service_instance_guid": "si-1",
                        "name": "db"
                    }
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let bindings = client.get_service_bindings(Some("app-1")).await.unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].service_instance_guid(), "si-1");
    }

    #[tokio::test]
    async fn test_get_all_service_bindings_empty() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri(), &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/service_bindings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_results": 0,
                "total_pages": 0,
                "next_url": null,
                "resources": []
            })))
            .mount(&mock_server)
            .await;

        let bindings = client.get_service_bindings(None).await.unwrap();
        assert!(bindings.is_empty());
    }
}
