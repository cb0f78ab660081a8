//! Client for the `/servers` endpoints.

use crate::models::{CreateServerRequest, Server, UpdateServerRequest};
use hcloud_core::query::QueryParams;
use hcloud_core::{Action, ApiClient, Envelope, Result};
use std::sync::Arc;

/// Parameters supported by the `/servers` listing endpoint.
#[derive(Debug, Default, Clone)]
pub struct ServerListParams {
    /// Filter by server name
    pub name: Option<String>,
    /// Filter by label selector
    pub label_selector: Option<String>,
    /// Filter by status
    pub status: Option<String>,
    /// Sort order (e.g. `id:asc`)
    pub sort: Option<String>,
}

impl ServerListParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("name", self.name.as_deref());
        params.push_opt("label_selector", self.label_selector.as_deref());
        params.push_opt("status", self.status.as_deref());
        params.push_opt("sort", self.sort.as_deref());
        params.into_pairs()
    }
}

/// Result of creating a server.
///
/// Creation returns preliminary server data, the provisioning action and,
/// unless an SSH key was injected, the generated root password.
#[derive(Debug, Clone)]
pub struct CreatedServer {
    /// Preliminary information about the created server
    pub server: Option<Server>,
    /// Action covering the progress of creation
    pub action: Option<Action>,
    /// Root password, absent when SSH keys were provided
    pub root_password: Option<String>,
}

/// Asynchronous client for servers.
#[derive(Debug, Clone)]
pub struct ServerClient {
    api: Arc<ApiClient>,
}

impl ServerClient {
    /// Create a client sharing the given transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Return all servers, fully paginated.
    pub async fn list(&self, params: &ServerListParams) -> Result<Vec<Server>> {
        self.api
            .list_all("servers", "servers", &params.to_pairs())
            .await
    }

    /// Return a specific server.
    ///
    /// Returns `None` when the remote reports the ID as missing.
    pub async fn get(&self, id: i64) -> Result<Option<Server>> {
        let path = format!("servers/{id}");
        let envelope: Envelope = self.api.get_json(&path, &[]).await?;
        envelope.field("server")
    }

    /// Create a server.
    pub async fn create(&self, request: &CreateServerRequest) -> Result<CreatedServer> {
        let envelope: Envelope = self.api.post_json("servers", request).await?;
        let server = envelope.field("server")?;
        let root_password = envelope.field("root_password")?;
        Ok(CreatedServer {
            server,
            action: envelope.into_action(),
            root_password,
        })
    }

    /// Update a server's name or labels.
    pub async fn update(&self, id: i64, request: &UpdateServerRequest) -> Result<Option<Server>> {
        let path = format!("servers/{id}");
        let envelope: Envelope = self.api.put_json(&path, request).await?;
        envelope.field("server")
    }

    /// Delete a server. Returns the action covering the deletion.
    pub async fn delete(&self, id: i64) -> Result<Option<Action>> {
        let path = format!("servers/{id}");
        let envelope: Envelope = self.api.delete_json(&path).await?;
        Ok(envelope.into_action())
    }
}
