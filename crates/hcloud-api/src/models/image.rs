//! Image (system, snapshot, backup) models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Type of an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    /// Official distribution image
    System,
    /// Snapshot of a server disk
    Snapshot,
    /// Automatic backup bound to a server
    Backup,
    /// Application image
    App,
    /// Unrecognized type
    #[default]
    #[serde(other)]
    Unknown,
}

/// Availability of an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStatus {
    /// Ready for use
    Available,
    /// Still being created
    Creating,
    /// No longer usable
    Unavailable,
    /// Unrecognized status
    #[default]
    #[serde(other)]
    Unknown,
}

/// A disk image servers can be created from or rebuilt onto.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// ID of the image
    #[serde(default)]
    pub id: i64,

    /// Type of the image
    #[serde(default, rename = "type")]
    pub image_type: ImageType,

    /// Whether the image can be used
    #[serde(default)]
    pub status: ImageStatus,

    /// Unique identifier, only set for system images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description of the image
    #[serde(default)]
    pub description: String,

    /// Size of the disk contained in the image in GB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_size: Option<i64>,

    /// Point in time when the resource was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Flavor of operating system contained in the image
    #[serde(default)]
    pub os_flavor: String,

    /// Operating system version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,

    /// Indicates that rapid deploy of the image is available
    #[serde(default)]
    pub rapid_deploy: bool,

    /// CPU architecture the image is compatible with
    #[serde(default)]
    pub architecture: String,

    /// User-defined labels
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}
