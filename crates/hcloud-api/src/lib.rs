//! # hcloud-api
//!
//! Typed asynchronous clients for the Hetzner Cloud API.
//!
//! The entry point is [`HcloudClient`], which bundles one client per resource
//! kind over a shared transport:
//!
//! ```no_run
//! use hcloud_api::HcloudClient;
//!
//! # async fn example() -> hcloud_core::Result<()> {
//! let client = HcloudClient::new("my-api-token")?;
//! let servers = client.server.list(&Default::default()).await?;
//! for server in servers {
//!     println!("{} ({:?})", server.name, server.status);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{
    ActionClient, ActionListParams, ConsoleAccess, CreatedFirewall, CreatedImage,
    CreatedPrimaryIp, CreatedServer, FirewallActionClient, FirewallClient, FirewallListParams,
    IsoClient, IsoListParams, NetworkActionClient, NetworkClient, NetworkListParams,
    PasswordReset, PrimaryIpActionClient, PrimaryIpClient, PrimaryIpListParams, RebuiltServer,
    RescueEnabled, ServerActionClient, ServerClient, ServerListParams,
};

use hcloud_core::{ApiClient, ClientConfig};
use std::sync::Arc;

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = hcloud_core::Result<T>;

/// Aggregate client bundling every resource client over one transport.
#[derive(Debug, Clone)]
pub struct HcloudClient {
    /// Servers
    pub server: ServerClient,
    /// Server actions
    pub server_action: ServerActionClient,
    /// Private networks
    pub network: NetworkClient,
    /// Network actions
    pub network_action: NetworkActionClient,
    /// Firewalls
    pub firewall: FirewallClient,
    /// Firewall actions
    pub firewall_action: FirewallActionClient,
    /// Primary IPs
    pub primary_ip: PrimaryIpClient,
    /// Primary IP actions
    pub primary_ip_action: PrimaryIpActionClient,
    /// ISO images
    pub iso: IsoClient,
    /// Project-wide actions
    pub action: ActionClient,
}

impl HcloudClient {
    /// Construct a client for the public API with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying transport cannot be constructed.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Ok(Self::from_api(Arc::new(ApiClient::new(token)?)))
    }

    /// Construct a client with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Ok(Self::from_api(Arc::new(ApiClient::with_config(
            token, config,
        )?)))
    }

    /// Construct a client around an existing transport.
    #[must_use]
    pub fn from_api(api: Arc<ApiClient>) -> Self {
        Self {
            server: ServerClient::new(Arc::clone(&api)),
            server_action: ServerActionClient::new(Arc::clone(&api)),
            network: NetworkClient::new(Arc::clone(&api)),
            network_action: NetworkActionClient::new(Arc::clone(&api)),
            firewall: FirewallClient::new(Arc::clone(&api)),
            firewall_action: FirewallActionClient::new(Arc::clone(&api)),
            primary_ip: PrimaryIpClient::new(Arc::clone(&api)),
            primary_ip_action: PrimaryIpActionClient::new(Arc::clone(&api)),
            iso: IsoClient::new(Arc::clone(&api)),
            action: ActionClient::new(api),
        }
    }
}
