//! Client for the `/primary_ips/{id}/actions` endpoints.

use crate::client::{get_action, post_action, post_action_empty, ActionListParams};
use hcloud_core::{Action, ApiClient, Result};
use serde_json::json;
use std::sync::Arc;

/// Asynchronous client for primary IP actions.
#[derive(Debug, Clone)]
pub struct PrimaryIpActionClient {
    api: Arc<ApiClient>,
}

impl PrimaryIpActionClient {
    /// Create a client sharing the given transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Return all primary IP actions across the project.
    pub async fn list(&self, params: &ActionListParams) -> Result<Vec<Action>> {
        self.api
            .list_all("primary_ips/actions", "actions", &params.to_pairs())
            .await
    }

    /// Return a specific primary IP action.
    pub async fn get(&self, action_id: i64) -> Result<Action> {
        let path = format!("primary_ips/actions/{action_id}");
        get_action(&self.api, &path).await
    }

    /// Assign a primary IP to a resource.
    pub async fn assign(
        &self,
        primary_ip_id: i64,
        assignee_type: &str,
        assignee_id: i64,
    ) -> Result<Action> {
        let path = format!("primary_ips/{primary_ip_id}/actions/assign");
        let body = json!({"assignee_type": assignee_type, "assignee_id": assignee_id});
        post_action(&self.api, &path, &body).await
    }

    /// Assign a primary IP to a server.
    pub async fn assign_to_server(&self, primary_ip_id: i64, server_id: i64) -> Result<Action> {
        self.assign(primary_ip_id, "server", server_id).await
    }

    /// Unassign a primary IP from its resource.
    ///
    /// The server must be powered off.
    pub async fn unassign(&self, primary_ip_id: i64) -> Result<Action> {
        let path = format!("primary_ips/{primary_ip_id}/actions/unassign");
        post_action_empty(&self.api, &path).await
    }

    /// Set the reverse DNS entry of a primary IP.
    ///
    /// Passing no hostname resets the entry to its default value.
    pub async fn change_dns_ptr(
        &self,
        primary_ip_id: i64,
        ip: &str,
        dns_ptr: Option<&str>,
    ) -> Result<Action> {
        let path = format!("primary_ips/{primary_ip_id}/actions/change_dns_ptr");
        post_action(&self.api, &path, &json!({"ip": ip, "dns_ptr": dns_ptr})).await
    }

    /// Change the deletion protection of a primary IP.
    pub async fn change_protection(&self, primary_ip_id: i64, delete: bool) -> Result<Action> {
        let path = format!("primary_ips/{primary_ip_id}/actions/change_protection");
        post_action(&self.api, &path, &json!({"delete": delete})).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hcloud_core::{ActionStatus, ClientConfig};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn test_client(server: &MockServer) -> PrimaryIpActionClient {
        let config = ClientConfig::with_api_url(server.uri()).unwrap();
        PrimaryIpActionClient::new(Arc::new(ApiClient::with_config("t", config).unwrap()))
    }

    #[tokio::test]
    async fn assign_to_server_sends_assignee() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/primary_ips/4711/actions/assign"))
            .and(body_json(json!({"assignee_type": "server", "assignee_id": 42})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "action": {"id": 1, "command": "assign_primary_ip", "status": "running"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let action = client.assign_to_server(4711, 42).await.unwrap();
        assert_eq!(action.command, "assign_primary_ip");
    }

    #[tokio::test]
    async fn unassign_posts_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/primary_ips/4711/actions/unassign"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "action": {"id": 2, "command": "unassign_primary_ip", "status": "success"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let action = client.unassign(4711).await.unwrap();
        assert_eq!(action.status, ActionStatus::Success);
    }

    #[tokio::test]
    async fn change_dns_ptr_resets_with_null() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/primary_ips/4711/actions/change_dns_ptr"))
            .and(body_json(json!({"ip": "131.232.99.1", "dns_ptr": null})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "action": {"id": 3, "command": "change_dns_ptr", "status": "running"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let action = client
            .change_dns_ptr(4711, "131.232.99.1", None)
            .await
            .unwrap();
        assert_eq!(action.command, "change_dns_ptr");
    }
}
