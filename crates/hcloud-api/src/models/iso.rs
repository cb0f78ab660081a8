//! ISO image models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Type of an ISO.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsoType {
    /// Public ISO
    Public,
    /// Private ISO uploaded for one project
    Private,
    /// Unrecognized type
    #[default]
    #[serde(other)]
    Unknown,
}

/// CPU architecture tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    /// x86 / amd64
    X86,
    /// ARM 64-bit
    Arm,
    /// Unrecognized architecture
    #[default]
    #[serde(other)]
    Unknown,
}

/// Deprecation notice attached to a retiring ISO.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deprecation {
    /// Point in time when the deprecation was announced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announced: Option<DateTime<Utc>>,

    /// Point in time after which the ISO is unavailable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unavailable_after: Option<DateTime<Utc>>,
}

/// A bootable ISO image that can be attached to servers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Iso {
    /// ID of the ISO
    #[serde(default)]
    pub id: i64,

    /// Unique identifier, null for private ISOs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description of the ISO
    #[serde(default)]
    pub description: String,

    /// Type of the ISO
    #[serde(default, rename = "type")]
    pub iso_type: IsoType,

    /// Deprecation notice, when the ISO is being retired
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation: Option<Deprecation>,

    /// CPU architecture the ISO is compatible with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<Architecture>,
}
