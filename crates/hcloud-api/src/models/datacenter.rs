//! Datacenter, location and server type summaries embedded in other resources.

use serde::{Deserialize, Serialize};

/// A physical location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// ID of the location
    #[serde(default)]
    pub id: i64,

    /// Unique identifier (e.g. `fsn1`)
    #[serde(default)]
    pub name: String,

    /// Description of the location
    #[serde(default)]
    pub description: String,

    /// ISO 3166-1 alpha-2 country code
    #[serde(default)]
    pub country: String,

    /// City the location is in
    #[serde(default)]
    pub city: String,

    /// Name of the network zone the location resides in
    #[serde(default)]
    pub network_zone: String,
}

/// A datacenter within a location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Datacenter {
    /// ID of the datacenter
    #[serde(default)]
    pub id: i64,

    /// Unique identifier (e.g. `fsn1-dc14`)
    #[serde(default)]
    pub name: String,

    /// Description of the datacenter
    #[serde(default)]
    pub description: String,

    /// Location the datacenter belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// A server type (cores, memory, disk sizing).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerType {
    /// ID of the server type
    #[serde(default)]
    pub id: i64,

    /// Unique identifier (e.g. `cx22`)
    #[serde(default)]
    pub name: String,

    /// Description of the server type
    #[serde(default)]
    pub description: String,

    /// Number of CPU cores
    #[serde(default)]
    pub cores: i64,

    /// Memory in GB
    #[serde(default)]
    pub memory: f64,

    /// Disk size in GB
    #[serde(default)]
    pub disk: i64,

    /// CPU type (`shared` or `dedicated`)
    #[serde(default)]
    pub cpu_type: String,

    /// CPU architecture
    #[serde(default)]
    pub architecture: String,
}
