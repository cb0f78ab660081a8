//! Primary IP models.

use crate::models::datacenter::Datacenter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Address family of a primary IP.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryIpType {
    /// IPv4 address
    #[default]
    Ipv4,
    /// IPv6 network
    Ipv6,
}

/// Resource kind a primary IP can be assigned to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssigneeType {
    /// A cloud server
    #[default]
    Server,
}

/// A reverse DNS entry of a primary IP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsPtr {
    /// IP address the entry belongs to
    #[serde(default)]
    pub ip: String,

    /// Hostname the address resolves to
    #[serde(default)]
    pub dns_ptr: String,
}

/// Deletion protection state of a primary IP.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryIpProtection {
    /// Prevent the primary IP from being deleted
    #[serde(default)]
    pub delete: bool,
}

/// A primary IP address that can outlive the server it is assigned to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimaryIp {
    /// ID of the primary IP
    #[serde(default)]
    pub id: i64,

    /// Name, unique per project
    #[serde(default)]
    pub name: String,

    /// The address (IPv4) or network (IPv6)
    #[serde(default)]
    pub ip: String,

    /// Address family
    #[serde(default, rename = "type")]
    pub ip_type: PrimaryIpType,

    /// Kind of resource the IP is assigned to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_type: Option<AssigneeType>,

    /// ID of the resource the IP is assigned to, absent when unassigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,

    /// Whether the IP is blocked for abuse
    #[serde(default)]
    pub blocked: bool,

    /// Delete the IP together with the resource it is assigned to
    #[serde(default)]
    pub auto_delete: bool,

    /// Datacenter the IP is bound to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<Datacenter>,

    /// Reverse DNS entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_ptr: Vec<DnsPtr>,

    /// Deletion protection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection: Option<PrimaryIpProtection>,

    /// User-defined labels
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// Point in time when the resource was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// Request body for creating a primary IP.
///
/// Either `datacenter` or `assignee_id` must be provided, never both: an
/// unassigned IP needs a datacenter, an assigned one inherits it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePrimaryIpRequest {
    /// Name of the primary IP
    pub name: String,

    /// Address family to allocate
    #[serde(rename = "type")]
    pub ip_type: PrimaryIpType,

    /// Datacenter to allocate the IP in (unassigned creation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<String>,

    /// Kind of resource to assign the IP to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_type: Option<AssigneeType>,

    /// ID of the resource to assign the IP to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,

    /// Delete the IP together with the assignee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_delete: Option<bool>,

    /// User-defined labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
}

/// Request body for updating a primary IP.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePrimaryIpRequest {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New auto-delete flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_delete: Option<bool>,

    /// Replacement labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_assigned_primary_ip() {
        let ip: PrimaryIp = serde_json::from_str(
            r#"{
                "id": 4711,
                "name": "web-ip",
                "ip": "131.232.99.1",
                "type": "ipv4",
                "assignee_type": "server",
                "assignee_id": 17,
                "blocked": false,
                "auto_delete": true,
                "dns_ptr": [{"ip": "131.232.99.1", "dns_ptr": "web.example.com"}],
                "created": "2023-06-01T12:00:00+00:00"
            }"#,
        )
        .unwrap();

        assert_eq!(ip.ip_type, PrimaryIpType::Ipv4);
        assert_eq!(ip.assignee_id, Some(17));
        assert_eq!(ip.dns_ptr[0].dns_ptr, "web.example.com");
    }

    #[test]
    fn unassigned_ip_has_no_assignee() {
        let ip: PrimaryIp = serde_json::from_str(
            r#"{"id": 1, "name": "spare", "ip": "2001:db8::/64", "type": "ipv6"}"#,
        )
        .unwrap();
        assert_eq!(ip.ip_type, PrimaryIpType::Ipv6);
        assert!(ip.assignee_id.is_none());
    }

    #[test]
    fn create_request_serializes_type_key() {
        let request = CreatePrimaryIpRequest {
            name: "ip-1".to_string(),
            ip_type: PrimaryIpType::Ipv4,
            datacenter: Some("fsn1-dc14".to_string()),
            ..CreatePrimaryIpRequest::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""type":"ipv4""#));
        assert!(!json.contains("assignee_id"));
    }
}
