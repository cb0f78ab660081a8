//! Private network models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Type of a subnet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubnetType {
    /// Standard cloud subnet
    #[default]
    Cloud,
    /// Subnet bridged to a dedicated-server vSwitch
    Vswitch,
    /// Legacy server subnet
    Server,
    /// Unrecognized type
    #[serde(other)]
    Unknown,
}

/// A subnet of a network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subnet {
    /// Type of the subnet
    #[serde(default, rename = "type")]
    pub subnet_type: SubnetType,

    /// Range to allocate IPs from, a subnet of the parent network range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_range: Option<String>,

    /// Name of the network zone
    #[serde(default)]
    pub network_zone: String,

    /// Gateway IP, assigned by the remote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    /// vSwitch ID, only for vswitch subnets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vswitch_id: Option<i64>,
}

/// A static route of a network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Destination CIDR of the route
    #[serde(default)]
    pub destination: String,

    /// Gateway the traffic is routed through
    #[serde(default)]
    pub gateway: String,
}

/// A private network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// ID of the network
    #[serde(default)]
    pub id: i64,

    /// Name, unique per project
    #[serde(default)]
    pub name: String,

    /// IP range of the whole network in CIDR notation
    #[serde(default)]
    pub ip_range: String,

    /// Subnets allocated in this network
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<Subnet>,

    /// Static routes of this network
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<Route>,

    /// IDs of servers attached to this network
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<i64>,

    /// Whether this network is protected against deletion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection: Option<NetworkProtection>,

    /// User-defined labels
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// Point in time when the resource was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// Deletion protection state of a network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProtection {
    /// Prevent the network from being deleted
    #[serde(default)]
    pub delete: bool,
}

/// Request body for creating a network.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateNetworkRequest {
    /// Name of the network
    pub name: String,

    /// IP range of the whole network
    pub ip_range: String,

    /// Subnets to allocate at creation
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<Subnet>,

    /// Routes to install at creation
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<Route>,

    /// User-defined labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
}

/// Request body for updating a network.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateNetworkRequest {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Replacement labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
}
