//! Client for the `/firewalls/{id}/actions` endpoints.
//!
//! Firewall actions fan out to every resource the firewall touches, so these
//! endpoints answer with an `actions` list instead of a single action.

use crate::client::{get_action, ActionListParams};
use crate::models::{AppliedTo, FirewallRule};
use hcloud_core::{Action, ApiClient, Envelope, Result};
use serde_json::json;
use std::sync::Arc;

/// Asynchronous client for firewall actions.
#[derive(Debug, Clone)]
pub struct FirewallActionClient {
    api: Arc<ApiClient>,
}

impl FirewallActionClient {
    /// Create a client sharing the given transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Return all firewall actions across the project.
    pub async fn list(&self, params: &ActionListParams) -> Result<Vec<Action>> {
        self.api
            .list_all("firewalls/actions", "actions", &params.to_pairs())
            .await
    }

    /// Return all actions for one firewall.
    pub async fn list_for_firewall(
        &self,
        firewall_id: i64,
        params: &ActionListParams,
    ) -> Result<Vec<Action>> {
        let path = format!("firewalls/{firewall_id}/actions");
        self.api.list_all(&path, "actions", &params.to_pairs()).await
    }

    /// Return a specific action of one firewall.
    pub async fn get_for_firewall(&self, firewall_id: i64, action_id: i64) -> Result<Action> {
        let path = format!("firewalls/{firewall_id}/actions/{action_id}");
        get_action(&self.api, &path).await
    }

    /// Replace the rules of a firewall.
    ///
    /// All existing rules are overwritten; an empty slice removes them all.
    /// Returns one action per resource the firewall is applied to.
    pub async fn set_rules(
        &self,
        firewall_id: i64,
        rules: &[FirewallRule],
    ) -> Result<Vec<Action>> {
        let path = format!("firewalls/{firewall_id}/actions/set_rules");
        let envelope: Envelope = self.api.post_json(&path, &json!({"rules": rules})).await?;
        Ok(envelope.into_actions())
    }

    /// Apply a firewall to resources.
    pub async fn apply_to_resources(
        &self,
        firewall_id: i64,
        apply_to: &[AppliedTo],
    ) -> Result<Vec<Action>> {
        let path = format!("firewalls/{firewall_id}/actions/apply_to_resources");
        let envelope: Envelope = self
            .api
            .post_json(&path, &json!({"apply_to": apply_to}))
            .await?;
        Ok(envelope.into_actions())
    }

    /// Apply a firewall to a single server.
    pub async fn apply_to_server(&self, firewall_id: i64, server_id: i64) -> Result<Vec<Action>> {
        self.apply_to_resources(firewall_id, &[AppliedTo::server(server_id)])
            .await
    }

    /// Remove a firewall from resources.
    pub async fn remove_from_resources(
        &self,
        firewall_id: i64,
        remove_from: &[AppliedTo],
    ) -> Result<Vec<Action>> {
        let path = format!("firewalls/{firewall_id}/actions/remove_from_resources");
        let envelope: Envelope = self
            .api
            .post_json(&path, &json!({"remove_from": remove_from}))
            .await?;
        Ok(envelope.into_actions())
    }

    /// Remove a firewall from a single server.
    pub async fn remove_from_server(
        &self,
        firewall_id: i64,
        server_id: i64,
    ) -> Result<Vec<Action>> {
        self.remove_from_resources(firewall_id, &[AppliedTo::server(server_id)])
            .await
    }
}
