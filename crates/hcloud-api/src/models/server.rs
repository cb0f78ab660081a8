//! Server models and create/update request bodies.

use crate::models::datacenter::{Datacenter, ServerType};
use crate::models::image::Image;
use crate::models::iso::Iso;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current state of a server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerStatus {
    /// Powered on and running
    Running,
    /// Being created
    Initializing,
    /// Booting up
    Starting,
    /// Shutting down
    Stopping,
    /// Powered off
    Off,
    /// Being deleted
    Deleting,
    /// Being migrated
    Migrating,
    /// Being rebuilt
    Rebuilding,
    /// Unrecognized status
    #[default]
    #[serde(other)]
    Unknown,
}

/// Public IPv4 address of a server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ipv4 {
    /// ID of the underlying primary IP
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The address
    #[serde(default)]
    pub ip: String,

    /// Whether the address is blocked for abuse
    #[serde(default)]
    pub blocked: bool,

    /// Reverse DNS entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_ptr: Option<String>,
}

/// Public IPv6 network of a server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ipv6 {
    /// ID of the underlying primary IP
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The network in CIDR notation
    #[serde(default)]
    pub ip: String,

    /// Whether the network is blocked for abuse
    #[serde(default)]
    pub blocked: bool,
}

/// Public network configuration of a server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicNet {
    /// Public IPv4, absent when disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<Ipv4>,

    /// Public IPv6, absent when disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<Ipv6>,

    /// IDs of attached floating IPs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub floating_ips: Vec<i64>,
}

/// Attachment of a server to a private network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrivateNet {
    /// ID of the network
    #[serde(default)]
    pub network: i64,

    /// IP assigned to the server in that network
    #[serde(default)]
    pub ip: String,

    /// Additional alias IPs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alias_ips: Vec<String>,

    /// MAC address of the interface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
}

/// Deletion/rebuild protection state of a server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerProtection {
    /// Prevent the server from being deleted
    #[serde(default)]
    pub delete: bool,

    /// Prevent the server from being rebuilt
    #[serde(default)]
    pub rebuild: bool,
}

/// A cloud server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Server {
    /// ID of the server
    #[serde(default)]
    pub id: i64,

    /// Name, unique per project, a valid hostname per RFC 1123
    #[serde(default)]
    pub name: String,

    /// Current status
    #[serde(default)]
    pub status: ServerStatus,

    /// Point in time when the resource was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Public network configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_net: Option<PublicNet>,

    /// Private network attachments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub private_net: Vec<PrivateNet>,

    /// Type of the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_type: Option<ServerType>,

    /// Datacenter the server is in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<Datacenter>,

    /// Image the server was created from, absent when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    /// Attached ISO, absent when none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso: Option<Iso>,

    /// Whether rescue mode is enabled for the next boot
    #[serde(default)]
    pub rescue_enabled: bool,

    /// Whether the server is locked by a running action
    #[serde(default)]
    pub locked: bool,

    /// Backup window (UTC hour interval), absent when backups are disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_window: Option<String>,

    /// Outbound traffic for the current billing period in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outgoing_traffic: Option<i64>,

    /// Inbound traffic for the current billing period in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingoing_traffic: Option<i64>,

    /// Free traffic for the current billing period in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included_traffic: Option<i64>,

    /// Size of the primary disk in GB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_disk_size: Option<i64>,

    /// Protection configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection: Option<ServerProtection>,

    /// ID of the placement group the server is in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement_group: Option<serde_json::Value>,

    /// IDs of attached volumes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<i64>,

    /// User-defined labels
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

/// Public network options for server creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateServerPublicNet {
    /// Attach an IPv4 on the public NIC
    pub enable_ipv4: bool,

    /// Attach an IPv6 on the public NIC
    pub enable_ipv6: bool,

    /// ID of an existing primary IPv4 to use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<i64>,

    /// ID of an existing primary IPv6 to use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<i64>,
}

impl Default for CreateServerPublicNet {
    fn default() -> Self {
        Self {
            enable_ipv4: true,
            enable_ipv6: true,
            ipv4: None,
            ipv6: None,
        }
    }
}

/// Request body for creating a server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateServerRequest {
    /// Name of the server
    pub name: String,

    /// ID or name of the server type
    pub server_type: String,

    /// ID or name of the image the server is created from
    pub image: String,

    /// ID or name of the datacenter to create the server in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<String>,

    /// ID or name of the location to create the server in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Public network options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_net: Option<CreateServerPublicNet>,

    /// Network IDs to attach the server to at creation
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<i64>,

    /// SSH key IDs to inject at creation
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<i64>,

    /// Volume IDs to attach at creation
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<i64>,

    /// Auto-mount attached volumes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automount: Option<bool>,

    /// Firewall IDs to apply at creation
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub firewalls: Vec<i64>,

    /// ID of the placement group to create the server in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_group: Option<i64>,

    /// Cloud-init user data, limited to 32 KiB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,

    /// Start the server right after creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_after_create: Option<bool>,

    /// User-defined labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
}

/// Request body for updating a server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateServerRequest {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Replacement labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_server() {
        let server: Server = serde_json::from_str(
            r#"{
                "id": 42,
                "name": "web-1",
                "status": "running",
                "created": "2023-06-01T12:00:00+00:00",
                "public_net": {
                    "ipv4": {"id": 7, "ip": "1.2.3.4", "blocked": false, "dns_ptr": "web.example.com"},
                    "ipv6": {"id": 8, "ip": "2001:db8::/64", "blocked": false}
                },
                "private_net": [{"network": 11, "ip": "10.0.1.2", "alias_ips": []}],
                "server_type": {"id": 104, "name": "cx22", "cores": 2, "memory": 4.0, "disk": 40},
                "rescue_enabled": false,
                "locked": false,
                "backup_window": "22-02",
                "primary_disk_size": 40,
                "protection": {"delete": true, "rebuild": true},
                "volumes": [9],
                "labels": {"env": "prod"}
            }"#,
        )
        .unwrap();

        assert_eq!(server.status, ServerStatus::Running);
        assert_eq!(
            server.public_net.as_ref().unwrap().ipv4.as_ref().unwrap().ip,
            "1.2.3.4"
        );
        assert_eq!(server.private_net[0].network, 11);
        assert!(server.protection.unwrap().delete);
        assert_eq!(server.labels["env"], "prod");
    }

    #[test]
    fn unknown_status_falls_back() {
        let server: Server =
            serde_json::from_str(r#"{"id": 1, "name": "s", "status": "hibernating"}"#).unwrap();
        assert_eq!(server.status, ServerStatus::Unknown);
    }

    #[test]
    fn create_request_skips_unset_fields() {
        let request = CreateServerRequest {
            name: "web-1".to_string(),
            server_type: "cx22".to_string(),
            image: "ubuntu-24.04".to_string(),
            public_net: Some(CreateServerPublicNet::default()),
            ..CreateServerRequest::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""enable_ipv4":true"#));
        assert!(!json.contains("placement_group"));
        assert!(!json.contains("user_data"));
        assert!(!json.contains("volumes"));
    }
}
