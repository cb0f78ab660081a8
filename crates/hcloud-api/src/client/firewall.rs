//! Client for the `/firewalls` endpoints.

use crate::models::{CreateFirewallRequest, Firewall, UpdateFirewallRequest};
use hcloud_core::query::QueryParams;
use hcloud_core::{Action, ApiClient, Envelope, Result};
use std::sync::Arc;

/// Parameters supported by the `/firewalls` listing endpoint.
#[derive(Debug, Default, Clone)]
pub struct FirewallListParams {
    /// Filter by firewall name
    pub name: Option<String>,
    /// Filter by label selector
    pub label_selector: Option<String>,
    /// Sort order
    pub sort: Option<String>,
}

impl FirewallListParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("name", self.name.as_deref());
        params.push_opt("label_selector", self.label_selector.as_deref());
        params.push_opt("sort", self.sort.as_deref());
        params.into_pairs()
    }
}

/// Result of creating a firewall: the firewall plus the actions applying it
/// to any resources named in the request.
#[derive(Debug, Clone)]
pub struct CreatedFirewall {
    /// The created firewall
    pub firewall: Option<Firewall>,
    /// Actions applying the firewall to resources
    pub actions: Vec<Action>,
}

/// Asynchronous client for firewalls.
#[derive(Debug, Clone)]
pub struct FirewallClient {
    api: Arc<ApiClient>,
}

impl FirewallClient {
    /// Create a client sharing the given transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Return all firewalls, fully paginated.
    pub async fn list(&self, params: &FirewallListParams) -> Result<Vec<Firewall>> {
        self.api
            .list_all("firewalls", "firewalls", &params.to_pairs())
            .await
    }

    /// Return a specific firewall.
    ///
    /// Returns `None` when the remote reports the ID as missing.
    pub async fn get(&self, id: i64) -> Result<Option<Firewall>> {
        let path = format!("firewalls/{id}");
        let envelope: Envelope = self.api.get_json(&path, &[]).await?;
        envelope.field("firewall")
    }

    /// Create a firewall.
    pub async fn create(&self, request: &CreateFirewallRequest) -> Result<CreatedFirewall> {
        let envelope: Envelope = self.api.post_json("firewalls", request).await?;
        let firewall = envelope.field("firewall")?;
        Ok(CreatedFirewall {
            firewall,
            actions: envelope.into_actions(),
        })
    }

    /// Update a firewall's name or labels.
    pub async fn update(
        &self,
        id: i64,
        request: &UpdateFirewallRequest,
    ) -> Result<Option<Firewall>> {
        let path = format!("firewalls/{id}");
        let envelope: Envelope = self.api.put_json(&path, request).await?;
        envelope.field("firewall")
    }

    /// Delete a firewall. It must not be applied to any resource.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let path = format!("firewalls/{id}");
        self.api.delete(&path).await?;
        Ok(())
    }
}
