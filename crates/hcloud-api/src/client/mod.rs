//! Asynchronous clients for the individual API resources.

pub mod action;
pub mod firewall;
pub mod firewall_action;
pub mod iso;
pub mod network;
pub mod network_action;
pub mod primary_ip;
pub mod primary_ip_action;
pub mod server;
pub mod server_action;

pub use action::{ActionClient, ActionListParams};
pub use firewall::{CreatedFirewall, FirewallClient, FirewallListParams};
pub use firewall_action::FirewallActionClient;
pub use iso::{IsoClient, IsoListParams};
pub use network::{NetworkClient, NetworkListParams};
pub use network_action::NetworkActionClient;
pub use primary_ip::{CreatedPrimaryIp, PrimaryIpClient, PrimaryIpListParams};
pub use primary_ip_action::PrimaryIpActionClient;
pub use server::{CreatedServer, ServerClient, ServerListParams};
pub use server_action::{
    ConsoleAccess, CreatedImage, PasswordReset, RebuiltServer, RescueEnabled, ServerActionClient,
};

use hcloud_core::{Action, ApiClient, Envelope, Result};
use serde::Serialize;
use tracing::debug;

// Action endpoints answer with {"action": {...}}; an absent action reads as
// an empty record, matching the remote's own convention for no-op calls.

pub(crate) async fn get_action(api: &ApiClient, path: &str) -> Result<Action> {
    let envelope: Envelope = api.get_json(path, &[]).await?;
    Ok(envelope.into_action().unwrap_or_default())
}

pub(crate) async fn post_action<B>(api: &ApiClient, path: &str, body: &B) -> Result<Action>
where
    B: Serialize + ?Sized,
{
    let envelope: Envelope = api.post_json(path, body).await?;
    let action = envelope.into_action().unwrap_or_default();
    debug!(path, command = %action.command, "action triggered");
    Ok(action)
}

pub(crate) async fn post_action_empty(api: &ApiClient, path: &str) -> Result<Action> {
    let envelope: Envelope = api.post_empty_json(path).await?;
    let action = envelope.into_action().unwrap_or_default();
    debug!(path, command = %action.command, "action triggered");
    Ok(action)
}
