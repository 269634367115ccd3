//! Audit event API operations

use log::debug;

use crate::cf::CfClient;
use crate::config::api;
use crate::error::Result;

use super::models::Event;

/// Well-known audit event types
pub mod event_types {
    pub const APP_CREATE: &str = "audit.app.create";
    pub const APP_START: &str = "audit.app.start";
    pub const APP_UPDATE: &str = "audit.app.update";
    pub const SPACE_CREATE: &str = "audit.space.create";
}

impl CfClient {
    /// Get audit events, optionally restricted to one event type
    pub async fn get_events(&self, event_type: Option<&str>) -> Result<Vec<Event>> {
        let path = events_path(event_type);
        debug!("Fetching events from {}", path);
        let context = match event_type {
            Some(t) => format!("'{}' events", t),
            None => "events".to_string(),
        };
        self.fetch_all_pages(&path, &context).await
    }
}

fn events_path(event_type: Option<&str>) -> String {
    match event_type {
        Some(t) => format!(
            "{}?q={}",
            api::EVENTS,
            urlencoding::encode(&format!("type:{}", t))
        ),
        None => api::EVENTS.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_events_path_without_filter() {
        assert_eq!(events_path(None), "/v2/events");
    }

    #[test]
    fn test_events_path_with_filter() {
        assert_eq!(
            events_path(Some(event_types::APP_START)),
            "/v2/events?q=type%3Aaudit.app.start"
        );
    }

    #[tokio::test]
    async fn test_get_events_filtered_by_type() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri(), &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/events"))
            .and(query_param("q", "type:audit.space.create"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_results": 1,
                "total_pages": 1,
                "next_url": null,
                "resources": [{
                    "metadata": { "guid": "ev-1" },
                    "entity": {
                        "type": "audit.space.create",
                        "actee": "space-1",
                        "actee_name": "dev",
                        "timestamp": "2024-02-01T12:00:00Z"
                    }
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let events = client
            .get_events(Some(event_types::SPACE_CREATE))
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "audit.space.create");
    }
}
