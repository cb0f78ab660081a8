//! Client for the `/networks/{id}/actions` endpoints.

use crate::client::{get_action, post_action, ActionListParams};
use crate::models::{Route, Subnet};
use hcloud_core::{Action, ApiClient, Result};
use serde_json::json;
use std::sync::Arc;

/// Asynchronous client for network actions.
#[derive(Debug, Clone)]
pub struct NetworkActionClient {
    api: Arc<ApiClient>,
}

impl NetworkActionClient {
    /// Create a client sharing the given transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Return all network actions across the project.
    pub async fn list(&self, params: &ActionListParams) -> Result<Vec<Action>> {
        self.api
            .list_all("networks/actions", "actions", &params.to_pairs())
            .await
    }

    /// Return a specific network action.
    pub async fn get(&self, action_id: i64) -> Result<Action> {
        let path = format!("networks/actions/{action_id}");
        get_action(&self.api, &path).await
    }

    /// Return all actions for one network.
    pub async fn list_for_network(
        &self,
        network_id: i64,
        params: &ActionListParams,
    ) -> Result<Vec<Action>> {
        let path = format!("networks/{network_id}/actions");
        self.api.list_all(&path, "actions", &params.to_pairs()).await
    }

    /// Return a specific action of one network.
    pub async fn get_for_network(&self, network_id: i64, action_id: i64) -> Result<Action> {
        let path = format!("networks/{network_id}/actions/{action_id}");
        get_action(&self.api, &path).await
    }

    /// Add a subnet to a network.
    ///
    /// Without an `ip_range` the remote picks the first free /24.
    pub async fn add_subnet(&self, network_id: i64, subnet: &Subnet) -> Result<Action> {
        let path = format!("networks/{network_id}/actions/add_subnet");
        post_action(&self.api, &path, subnet).await
    }

    /// Delete a subnet from a network. Fails while servers still use IPs
    /// from the subnet.
    pub async fn delete_subnet(&self, network_id: i64, ip_range: &str) -> Result<Action> {
        let path = format!("networks/{network_id}/actions/delete_subnet");
        post_action(&self.api, &path, &json!({"ip_range": ip_range})).await
    }

    /// Add a route entry to a network.
    pub async fn add_route(&self, network_id: i64, route: &Route) -> Result<Action> {
        let path = format!("networks/{network_id}/actions/add_route");
        post_action(&self.api, &path, route).await
    }

    /// Delete a route entry from a network.
    pub async fn delete_route(&self, network_id: i64, route: &Route) -> Result<Action> {
        let path = format!("networks/{network_id}/actions/delete_route");
        post_action(&self.api, &path, route).await
    }

    /// Extend the IP range of a network.
    ///
    /// Ranges can only grow, and only at the end: the new range must start
    /// at the same address with a smaller netmask.
    pub async fn change_ip_range(&self, network_id: i64, ip_range: &str) -> Result<Action> {
        let path = format!("networks/{network_id}/actions/change_ip_range");
        post_action(&self.api, &path, &json!({"ip_range": ip_range})).await
    }

    /// Change the deletion protection of a network.
    pub async fn change_protection(&self, network_id: i64, delete: bool) -> Result<Action> {
        let path = format!("networks/{network_id}/actions/change_protection");
        post_action(&self.api, &path, &json!({"delete": delete})).await
    }
}
