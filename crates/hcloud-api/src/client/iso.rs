//! Client for the `/isos` endpoints.

use crate::models::Iso;
use hcloud_core::query::QueryParams;
use hcloud_core::{ApiClient, Envelope, Result};
use std::sync::Arc;

/// Parameters supported by the `/isos` listing endpoint.
#[derive(Debug, Default, Clone)]
pub struct IsoListParams {
    /// Filter by ISO name, exact match
    pub name: Option<String>,
    /// Filter by CPU architecture
    pub architecture: Option<String>,
}

impl IsoListParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("name", self.name.as_deref());
        params.push_opt("architecture", self.architecture.as_deref());
        params.into_pairs()
    }
}

/// Asynchronous client for ISO images.
#[derive(Debug, Clone)]
pub struct IsoClient {
    api: Arc<ApiClient>,
}

impl IsoClient {
    /// Create a client sharing the given transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Return all available ISOs, fully paginated.
    pub async fn list(&self, params: &IsoListParams) -> Result<Vec<Iso>> {
        self.api.list_all("isos", "isos", &params.to_pairs()).await
    }

    /// Return a specific ISO.
    ///
    /// Returns `None` when the remote reports the ID as missing.
    pub async fn get(&self, id: i64) -> Result<Option<Iso>> {
        let path = format!("isos/{id}");
        let envelope: Envelope = self.api.get_json(&path, &[]).await?;
        envelope.field("iso")
    }
}
