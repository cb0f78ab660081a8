//! Client for the project-wide `/actions` endpoints.

use hcloud_core::query::QueryParams;
use hcloud_core::{Action, ApiClient, Envelope, Result};
use std::sync::Arc;

/// Parameters supported by action listing endpoints.
#[derive(Debug, Default, Clone)]
pub struct ActionListParams {
    /// Filter by action IDs
    pub id: Vec<i64>,
    /// Filter by status (`running`, `success`, `error`)
    pub status: Option<String>,
    /// Sort order (e.g. `command:asc`, `finished:desc`)
    pub sort: Option<String>,
}

impl ActionListParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        for id in &self.id {
            params.push("id", id);
        }
        params.push_opt("status", self.status.as_deref());
        params.push_opt("sort", self.sort.as_deref());
        params.into_pairs()
    }
}

/// Asynchronous client for actions across all resources.
#[derive(Debug, Clone)]
pub struct ActionClient {
    api: Arc<ApiClient>,
}

impl ActionClient {
    /// Create a client sharing the given transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Return all actions, filtered and sorted by the given parameters.
    pub async fn list(&self, params: &ActionListParams) -> Result<Vec<Action>> {
        self.api
            .list_all("actions", "actions", &params.to_pairs())
            .await
    }

    /// Return a specific action.
    ///
    /// Returns `None` when the remote reports the ID as missing.
    pub async fn get(&self, id: i64) -> Result<Option<Action>> {
        let path = format!("actions/{id}");
        let envelope: Envelope = self.api.get_json(&path, &[]).await?;
        Ok(envelope.into_action())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hcloud_core::{ActionStatus, ClientConfig};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn test_client(server: &MockServer) -> ActionClient {
        let config = ClientConfig::with_api_url(server.uri()).unwrap();
        ActionClient::new(Arc::new(ApiClient::with_config("t", config).unwrap()))
    }

    #[test]
    fn params_render_filters() {
        let params = ActionListParams {
            id: vec![1, 2],
            status: Some("running".to_string()),
            sort: Some("id:desc".to_string()),
        };
        assert_eq!(
            params.to_pairs(),
            vec![
                ("id", "1".to_string()),
                ("id", "2".to_string()),
                ("status", "running".to_string()),
                ("sort", "id:desc".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn list_with_status_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/actions"))
            .and(query_param("status", "running"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "actions": [{"id": 1, "command": "start_server", "status": "running"}],
                "meta": {"pagination": {"page": 1, "next_page": null}}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let actions = client
            .list(&ActionListParams {
                status: Some("running".to_string()),
                ..ActionListParams::default()
            })
            .await
            .unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].status, ActionStatus::Running);
    }

    #[tokio::test]
    async fn get_returns_action() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/actions/13"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "action": {"id": 13, "command": "attach_iso", "status": "success", "progress": 100}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let action = client.get(13).await.unwrap().unwrap();
        assert_eq!(action.command, "attach_iso");
        assert_eq!(action.progress, 100);
    }

    #[tokio::test]
    async fn get_missing_action_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/actions/999"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {"code": "not_found", "message": "action with ID 999 not found"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        assert!(client.get(999).await.unwrap().is_none());
    }
}
