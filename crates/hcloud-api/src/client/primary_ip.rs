//! Client for the `/primary_ips` endpoints.

use crate::models::{CreatePrimaryIpRequest, PrimaryIp, UpdatePrimaryIpRequest};
use hcloud_core::query::QueryParams;
use hcloud_core::{Action, ApiClient, Envelope, Error, Result};
use std::sync::Arc;

/// Parameters supported by the `/primary_ips` listing endpoint.
#[derive(Debug, Default, Clone)]
pub struct PrimaryIpListParams {
    /// Filter by name
    pub name: Option<String>,
    /// Filter by address
    pub ip: Option<String>,
    /// Filter by label selector
    pub label_selector: Option<String>,
}

impl PrimaryIpListParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("name", self.name.as_deref());
        params.push_opt("ip", self.ip.as_deref());
        params.push_opt("label_selector", self.label_selector.as_deref());
        params.into_pairs()
    }
}

/// Result of creating a primary IP.
#[derive(Debug, Clone)]
pub struct CreatedPrimaryIp {
    /// The created primary IP
    pub primary_ip: Option<PrimaryIp>,
    /// Action covering the assignment, present when an assignee was given
    pub action: Option<Action>,
}

/// Asynchronous client for primary IPs.
#[derive(Debug, Clone)]
pub struct PrimaryIpClient {
    api: Arc<ApiClient>,
}

impl PrimaryIpClient {
    /// Create a client sharing the given transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Return all primary IPs, fully paginated.
    pub async fn list(&self, params: &PrimaryIpListParams) -> Result<Vec<PrimaryIp>> {
        self.api
            .list_all("primary_ips", "primary_ips", &params.to_pairs())
            .await
    }

    /// Return a specific primary IP.
    ///
    /// Returns `None` when the remote reports the ID as missing.
    pub async fn get(&self, id: i64) -> Result<Option<PrimaryIp>> {
        let path = format!("primary_ips/{id}");
        let envelope: Envelope = self.api.get_json(&path, &[]).await?;
        envelope.field("primary_ip")
    }

    /// Create a primary IP.
    ///
    /// The request must name either a datacenter (unassigned creation) or an
    /// assignee, never both.
    pub async fn create(&self, request: &CreatePrimaryIpRequest) -> Result<CreatedPrimaryIp> {
        if request.datacenter.is_some() && request.assignee_id.is_some() {
            return Err(Error::ConfigError(
                "Choose either a datacenter or an assignee for a new primary IP".to_string(),
            ));
        }

        let envelope: Envelope = self.api.post_json("primary_ips", request).await?;
        let primary_ip = envelope.field("primary_ip")?;
        Ok(CreatedPrimaryIp {
            primary_ip,
            action: envelope.into_action(),
        })
    }

    /// Update a primary IP. Returns the accompanying action and the updated
    /// resource.
    pub async fn update(
        &self,
        id: i64,
        request: &UpdatePrimaryIpRequest,
    ) -> Result<(Option<Action>, Option<PrimaryIp>)> {
        let path = format!("primary_ips/{id}");
        let envelope: Envelope = self.api.put_json(&path, request).await?;
        envelope.into_pair()
    }

    /// Delete a primary IP.
    ///
    /// An assigned IP is unassigned automatically; the server must be
    /// powered off for that to succeed.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let path = format!("primary_ips/{id}");
        self.api.delete(&path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssigneeType, PrimaryIpType};
    use hcloud_core::ClientConfig;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn test_client(server: &MockServer) -> PrimaryIpClient {
        let config = ClientConfig::with_api_url(server.uri()).unwrap();
        PrimaryIpClient::new(Arc::new(ApiClient::with_config("t", config).unwrap()))
    }

    #[tokio::test]
    async fn list_primary_ips() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/primary_ips"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "primary_ips": [
                    {"id": 1, "name": "web-ip", "ip": "131.232.99.1", "type": "ipv4"}
                ],
                "meta": {"pagination": {"page": 1, "next_page": null}}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let ips = client.list(&PrimaryIpListParams::default()).await.unwrap();
        assert_eq!(ips.len(), 1);
        assert_eq!(ips[0].ip, "131.232.99.1");
    }

    #[tokio::test]
    async fn create_rejects_datacenter_and_assignee() {
        let server = MockServer::start().await;
        let client = test_client(&server).await;

        let request = CreatePrimaryIpRequest {
            name: "ip-1".to_string(),
            ip_type: PrimaryIpType::Ipv4,
            datacenter: Some("fsn1-dc14".to_string()),
            assignee_type: Some(AssigneeType::Server),
            assignee_id: Some(17),
            ..CreatePrimaryIpRequest::default()
        };
        let err = client.create(&request).await.unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[tokio::test]
    async fn create_assigned_ip_returns_action() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/primary_ips"))
            .and(body_partial_json(json!({"assignee_id": 17, "type": "ipv4"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "primary_ip": {"id": 4711, "name": "web-ip", "ip": "131.232.99.1", "type": "ipv4"},
                "action": {"id": 1, "command": "create_primary_ip", "status": "success"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let request = CreatePrimaryIpRequest {
            name: "web-ip".to_string(),
            ip_type: PrimaryIpType::Ipv4,
            assignee_type: Some(AssigneeType::Server),
            assignee_id: Some(17),
            auto_delete: Some(true),
            ..CreatePrimaryIpRequest::default()
        };
        let created = client.create(&request).await.unwrap();
        assert_eq!(created.primary_ip.unwrap().id, 4711);
        assert!(created.action.is_some());
    }

    #[tokio::test]
    async fn update_returns_action_and_resource() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/primary_ips/4711"))
            .and(body_partial_json(json!({"name": "new-name"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "primary_ip": {"id": 4711, "name": "new-name", "ip": "131.232.99.1", "type": "ipv4"},
                "action": {"id": 2, "command": "change_primary_ip", "status": "running"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let (action, primary_ip) = client
            .update(
                4711,
                &UpdatePrimaryIpRequest {
                    name: Some("new-name".to_string()),
                    ..UpdatePrimaryIpRequest::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(action.unwrap().id, 2);
        assert_eq!(primary_ip.unwrap().name, "new-name");
    }

    #[tokio::test]
    async fn get_missing_ip_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/primary_ips/8"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {"code": "not_found", "message": "primary_ip with ID 8 not found"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        assert!(client.get(8).await.unwrap().is_none());
    }
}
