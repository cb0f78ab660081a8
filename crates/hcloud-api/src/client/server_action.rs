//! Client for the `/servers/{id}/actions` endpoints.

use crate::client::{get_action, post_action, post_action_empty, ActionListParams};
use crate::models::Image;
use hcloud_core::{Action, ApiClient, Envelope, Result};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

/// Result of resetting the root password.
#[derive(Debug, Clone)]
pub struct PasswordReset {
    /// The newly generated root password
    pub root_password: Option<String>,
    /// Action covering the reset
    pub action: Option<Action>,
}

/// Result of enabling rescue mode.
#[derive(Debug, Clone)]
pub struct RescueEnabled {
    /// Root password of the rescue system
    pub root_password: Option<String>,
    /// Action covering the change
    pub action: Option<Action>,
}

/// Credentials for a VNC-over-websocket console session.
#[derive(Debug, Clone)]
pub struct ConsoleAccess {
    /// Websocket URL, valid for one minute
    pub wss_url: Option<String>,
    /// One-time console password
    pub password: Option<String>,
    /// Action covering the request
    pub action: Option<Action>,
}

/// Result of creating an image from a server.
#[derive(Debug, Clone)]
pub struct CreatedImage {
    /// The created image
    pub image: Option<Image>,
    /// Action covering the copy
    pub action: Option<Action>,
}

/// Result of rebuilding a server from an image.
#[derive(Debug, Clone)]
pub struct RebuiltServer {
    /// New root password, when the image sets one
    pub root_password: Option<String>,
    /// Action covering the rebuild
    pub action: Option<Action>,
}

/// Asynchronous client for server actions.
#[derive(Debug, Clone)]
pub struct ServerActionClient {
    api: Arc<ApiClient>,
}

impl ServerActionClient {
    /// Create a client sharing the given transport.
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Return all server actions across the project.
    pub async fn list(&self, params: &ActionListParams) -> Result<Vec<Action>> {
        self.api
            .list_all("servers/actions", "actions", &params.to_pairs())
            .await
    }

    /// Return a specific server action.
    pub async fn get(&self, action_id: i64) -> Result<Action> {
        let path = format!("servers/actions/{action_id}");
        get_action(&self.api, &path).await
    }

    /// Return all actions for one server.
    pub async fn list_for_server(
        &self,
        server_id: i64,
        params: &ActionListParams,
    ) -> Result<Vec<Action>> {
        let path = format!("servers/{server_id}/actions");
        self.api.list_all(&path, "actions", &params.to_pairs()).await
    }

    /// Return a specific action of one server.
    pub async fn get_for_server(&self, server_id: i64, action_id: i64) -> Result<Action> {
        let path = format!("servers/{server_id}/actions/{action_id}");
        get_action(&self.api, &path).await
    }

    /// Start a server by turning its power on.
    pub async fn power_on(&self, server_id: i64) -> Result<Action> {
        post_action_empty(&self.api, &format!("servers/{server_id}/actions/poweron")).await
    }

    /// Cut power to a server without a graceful shutdown. May lose data.
    pub async fn power_off(&self, server_id: i64) -> Result<Action> {
        post_action_empty(&self.api, &format!("servers/{server_id}/actions/poweroff")).await
    }

    /// Reboot a server gracefully via ACPI.
    pub async fn reboot(&self, server_id: i64) -> Result<Action> {
        post_action_empty(&self.api, &format!("servers/{server_id}/actions/reboot")).await
    }

    /// Cut power and start the server again. May lose data.
    pub async fn reset(&self, server_id: i64) -> Result<Action> {
        post_action_empty(&self.api, &format!("servers/{server_id}/actions/reset")).await
    }

    /// Shut a server down gracefully via ACPI.
    ///
    /// The returned action only reflects that the request was sent to the
    /// server, not that it actually powered off.
    pub async fn shutdown(&self, server_id: i64) -> Result<Action> {
        post_action_empty(&self.api, &format!("servers/{server_id}/actions/shutdown")).await
    }

    /// Change the type (cores, RAM, disk) of a server.
    ///
    /// The server must be powered off. With `upgrade_disk` set the disk is
    /// grown to the new type's size and the type can not be downgraded later.
    pub async fn change_type(
        &self,
        server_id: i64,
        server_type: &str,
        upgrade_disk: bool,
    ) -> Result<Action> {
        let path = format!("servers/{server_id}/actions/change_type");
        let body = json!({"server_type": server_type, "upgrade_disk": upgrade_disk});
        post_action(&self.api, &path, &body).await
    }

    /// Change the delete/rebuild protection of a server.
    pub async fn change_protection(
        &self,
        server_id: i64,
        delete: Option<bool>,
        rebuild: Option<bool>,
    ) -> Result<Action> {
        let path = format!("servers/{server_id}/actions/change_protection");
        let mut body = serde_json::Map::new();
        if let Some(delete) = delete {
            body.insert("delete".to_string(), json!(delete));
        }
        if let Some(rebuild) = rebuild {
            body.insert("rebuild".to_string(), json!(rebuild));
        }
        post_action(&self.api, &path, &body).await
    }

    /// Attach a server to a network, optionally with a fixed IP and aliases.
    pub async fn attach_to_network(
        &self,
        server_id: i64,
        network_id: i64,
        ip: Option<&str>,
        alias_ips: Option<&[String]>,
    ) -> Result<Action> {
        let path = format!("servers/{server_id}/actions/attach_to_network");
        let mut body = serde_json::Map::new();
        body.insert("network".to_string(), json!(network_id));
        if let Some(ip) = ip {
            body.insert("ip".to_string(), json!(ip));
        }
        if let Some(alias_ips) = alias_ips {
            body.insert("alias_ips".to_string(), json!(alias_ips));
        }
        post_action(&self.api, &path, &body).await
    }

    /// Detach a server from a network. The interface vanishes.
    pub async fn detach_from_network(&self, server_id: i64, network_id: i64) -> Result<Action> {
        let path = format!("servers/{server_id}/actions/detach_from_network");
        post_action(&self.api, &path, &json!({"network": network_id})).await
    }

    /// Replace the alias IPs of an already attached network.
    ///
    /// The existing aliases for the network are replaced wholesale, so the
    /// request must carry the aliases to keep as well as the new ones.
    pub async fn change_alias_ips(
        &self,
        server_id: i64,
        network_id: i64,
        alias_ips: &[String],
    ) -> Result<Action> {
        let path = format!("servers/{server_id}/actions/change_alias_ips");
        let body = json!({"network": network_id, "alias_ips": alias_ips});
        post_action(&self.api, &path, &body).await
    }

    /// Enable automatic daily backups for a server.
    pub async fn enable_backup(&self, server_id: i64) -> Result<Action> {
        post_action_empty(&self.api, &format!("servers/{server_id}/actions/enable_backup")).await
    }

    /// Disable backups and delete all existing ones.
    pub async fn disable_backup(&self, server_id: i64) -> Result<Action> {
        post_action_empty(&self.api, &format!("servers/{server_id}/actions/disable_backup")).await
    }

    /// Enable the rescue system for the next boot.
    pub async fn enable_rescue(
        &self,
        server_id: i64,
        rescue_type: Option<&str>,
    ) -> Result<RescueEnabled> {
        let path = format!("servers/{server_id}/actions/enable_rescue");
        let mut body = serde_json::Map::new();
        if let Some(rescue_type) = rescue_type {
            body.insert("type".to_string(), json!(rescue_type));
        }
        let envelope: Envelope = self.api.post_json(&path, &body).await?;
        Ok(RescueEnabled {
            root_password: envelope.field("root_password")?,
            action: envelope.into_action(),
        })
    }

    /// Disable the rescue system so the server boots from disk again.
    pub async fn disable_rescue(&self, server_id: i64) -> Result<Action> {
        post_action_empty(&self.api, &format!("servers/{server_id}/actions/disable_rescue")).await
    }

    /// Add a server to a placement group. The server must be powered off.
    pub async fn add_to_placement_group(
        &self,
        server_id: i64,
        placement_group_id: i64,
    ) -> Result<Action> {
        let path = format!("servers/{server_id}/actions/add_to_placement_group");
        post_action(&self.api, &path, &json!({"placement_group": placement_group_id})).await
    }

    /// Remove a server from its placement group.
    pub async fn remove_from_placement_group(&self, server_id: i64) -> Result<Action> {
        let path = format!("servers/{server_id}/actions/remove_from_placement_group");
        post_action_empty(&self.api, &path).await
    }

    /// Generate a new root password for a running server.
    ///
    /// Only works for Linux systems running the qemu guest agent.
    pub async fn reset_password(&self, server_id: i64) -> Result<PasswordReset> {
        let path = format!("servers/{server_id}/actions/reset_password");
        let envelope: Envelope = self.api.post_empty_json(&path).await?;
        Ok(PasswordReset {
            root_password: envelope.field("root_password")?,
            action: envelope.into_action(),
        })
    }

    /// Request VNC-over-websocket console credentials.
    pub async fn request_console(&self, server_id: i64) -> Result<ConsoleAccess> {
        let path = format!("servers/{server_id}/actions/request_console");
        let envelope: Envelope = self.api.post_empty_json(&path).await?;
        Ok(ConsoleAccess {
            wss_url: envelope.field("wss_url")?,
            password: envelope.field("password")?,
            action: envelope.into_action(),
        })
    }

    /// Attach an ISO to a server. An already attached ISO is swapped out.
    pub async fn attach_iso(&self, server_id: i64, iso: &str) -> Result<Action> {
        let path = format!("servers/{server_id}/actions/attach_iso");
        post_action(&self.api, &path, &json!({"iso": iso})).await
    }

    /// Detach the attached ISO from a server.
    pub async fn detach_iso(&self, server_id: i64) -> Result<Action> {
        post_action_empty(&self.api, &format!("servers/{server_id}/actions/detach_iso")).await
    }

    /// Set the reverse DNS entry for one of the server's primary IPs.
    ///
    /// Passing no hostname resets the entry to its default value.
    pub async fn change_dns_ptr(
        &self,
        server_id: i64,
        ip: &str,
        dns_ptr: Option<&str>,
    ) -> Result<Action> {
        let path = format!("servers/{server_id}/actions/change_dns_ptr");
        post_action(&self.api, &path, &json!({"ip": ip, "dns_ptr": dns_ptr})).await
    }

    /// Create an image (snapshot or backup) from a server's disks.
    pub async fn create_image(
        &self,
        server_id: i64,
        description: Option<&str>,
        image_type: Option<&str>,
        labels: Option<&HashMap<String, String>>,
    ) -> Result<CreatedImage> {
        let path = format!("servers/{server_id}/actions/create_image");
        let mut body = serde_json::Map::new();
        if let Some(description) = description {
            body.insert("description".to_string(), json!(description));
        }
        if let Some(image_type) = image_type {
            body.insert("type".to_string(), json!(image_type));
        }
        if let Some(labels) = labels {
            body.insert("labels".to_string(), json!(labels));
        }
        let envelope: Envelope = self.api.post_json(&path, &body).await?;
        Ok(CreatedImage {
            image: envelope.field("image")?,
            action: envelope.into_action(),
        })
    }

    /// Rebuild a server from an image, destroying all data on its disk.
    pub async fn rebuild(&self, server_id: i64, image: &str) -> Result<RebuiltServer> {
        let path = format!("servers/{server_id}/actions/rebuild");
        let envelope: Envelope = self.api.post_json(&path, &json!({"image": image})).await?;
        Ok(RebuiltServer {
            root_password: envelope.field("root_password")?,
            action: envelope.into_action(),
        })
    }
}
