//! Client for the `/networks` endpoints.

use crate::models::{CreateNetworkRequest, Network, UpdateNetworkRequest};
use hcloud_core::query::QueryParams;
use hcloud_core::{ApiClient, Envelope, Result};
use std::sync::Arc;

/// Parameters supported by the `/networks` listing endpoint.
#[derive(Debug, Default, Clone)]
pub struct NetworkListParams {
    /// Filter by network name
    pub name: Option<String>,
    /// Filter by label selector
    pub label_selector: Option<String>,
}

impl NetworkListParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("name", self.name.as_deref());
        params.push_opt("label_selector", self.label_selector.as_deref());
        params.into_pairs()
    }
}

/// Asynchronous client for private networks.
#[derive(Debug, Clone)]
pub struct NetworkClient {
    api: Arc<ApiClient>,
}

impl NetworkClient {
    /// Create a client sharing the given transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Return all networks, fully paginated.
    pub async fn list(&self, params: &NetworkListParams) -> Result<Vec<Network>> {
        self.api
            .list_all("networks", "networks", &params.to_pairs())
            .await
    }

    /// Return a specific network.
    ///
    /// Returns `None` when the remote reports the ID as missing.
    pub async fn get(&self, id: i64) -> Result<Option<Network>> {
        let path = format!("networks/{id}");
        let envelope: Envelope = self.api.get_json(&path, &[]).await?;
        envelope.field("network")
    }

    /// Create a network with the given IP range.
    pub async fn create(&self, request: &CreateNetworkRequest) -> Result<Option<Network>> {
        let envelope: Envelope = self.api.post_json("networks", request).await?;
        envelope.field("network")
    }

    /// Update a network's name or labels.
    pub async fn update(
        &self,
        id: i64,
        request: &UpdateNetworkRequest,
    ) -> Result<Option<Network>> {
        let path = format!("networks/{id}");
        let envelope: Envelope = self.api.put_json(&path, request).await?;
        envelope.field("network")
    }

    /// Delete a network.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let path = format!("networks/{id}");
        self.api.delete(&path).await?;
        Ok(())
    }
}
