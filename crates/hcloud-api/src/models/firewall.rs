//! Firewall models, including the string-encoded port range.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Traffic direction a rule applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleDirection {
    /// Incoming traffic, matched against `source_ips`
    #[default]
    In,
    /// Outgoing traffic, matched against `destination_ips`
    Out,
}

/// Protocol a rule matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleProtocol {
    /// TCP
    #[default]
    Tcp,
    /// UDP
    Udp,
    /// ICMP (no port)
    Icmp,
    /// IPsec ESP
    Esp,
    /// GRE
    Gre,
}

/// A port or inclusive port range.
///
/// The wire format is a string: a single port renders as `"80"`, a range as
/// `"1024-5000"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PortRange {
    /// First port of the range
    pub from: u16,
    /// Last port of the range
    pub to: u16,
}

impl PortRange {
    /// A range covering a single port.
    #[must_use]
    pub const fn port(port: u16) -> Self {
        Self { from: port, to: port }
    }

    /// An inclusive range of ports.
    #[must_use]
    pub const fn range(from: u16, to: u16) -> Self {
        Self { from, to }
    }

    /// Whether the range covers exactly one port.
    #[must_use]
    pub const fn is_single(&self) -> bool {
        self.from == self.to
    }

    /// Parse the wire format (`"80"` or `"1024-5000"`).
    ///
    /// # Errors
    ///
    /// Returns the offending input when it is not a port or `from-to` pair.
    pub fn parse(value: &str) -> Result<Self, String> {
        let mut parts = value.splitn(2, '-');
        let from = parts
            .next()
            .and_then(|p| p.trim().parse::<u16>().ok())
            .ok_or_else(|| format!("invalid port format: {value}"))?;
        match parts.next() {
            Some(rest) => {
                let to = rest
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| format!("invalid port format: {value}"))?;
                Ok(Self { from, to })
            }
            None => Ok(Self::port(from)),
        }
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{}-{}", self.from, self.to)
        }
    }
}

impl Serialize for PortRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PortRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(de::Error::custom)
    }
}

/// One firewall rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirewallRule {
    /// Traffic direction the rule applies to
    #[serde(default)]
    pub direction: RuleDirection,

    /// Protocol to match
    #[serde(default)]
    pub protocol: RuleProtocol,

    /// Port or port range, only applicable for TCP and UDP
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<PortRange>,

    /// Permitted source CIDRs for direction `in`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_ips: Vec<String>,

    /// Permitted destination CIDRs for direction `out`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destination_ips: Vec<String>,

    /// Description of the rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Server reference inside an `applied_to` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedToServer {
    /// ID of the server
    #[serde(default)]
    pub id: i64,
}

/// A resource the firewall is applied to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppliedTo {
    /// Type of the referenced resource (currently `server`)
    #[serde(default, rename = "type")]
    pub resource_type: String,

    /// The referenced server, when `type` is `server`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<AppliedToServer>,
}

impl AppliedTo {
    /// Reference a server by id.
    #[must_use]
    pub fn server(id: i64) -> Self {
        Self {
            resource_type: "server".to_string(),
            server: Some(AppliedToServer { id }),
        }
    }
}

/// A firewall with its rules and the resources it is applied to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Firewall {
    /// ID of the firewall
    #[serde(default)]
    pub id: i64,

    /// Name, unique per project
    #[serde(default)]
    pub name: String,

    /// User-defined labels
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// Point in time when the resource was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Rules of the firewall
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<FirewallRule>,

    /// Resources the firewall is applied to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applied_to: Vec<AppliedTo>,
}

/// Request body for creating a firewall.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateFirewallRequest {
    /// Name of the firewall
    pub name: String,

    /// Initial rules
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<FirewallRule>,

    /// Resources to apply the firewall to at creation
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub apply_to: Vec<AppliedTo>,

    /// User-defined labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
}

/// Request body for updating a firewall.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateFirewallRequest {
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
    fn port_range_parses_single_port() {
        let port: PortRange = serde_json::from_str(r#""80""#).unwrap();
        assert_eq!(port, PortRange::port(80));
        assert!(port.is_single());
    }

    #[test]
    fn port_range_parses_range() {
        let port: PortRange = serde_json::from_str(r#""1024-5000""#).unwrap();
        assert_eq!(port, PortRange::range(1024, 5000));
        assert!(!port.is_single());
    }

    #[test]
    fn port_range_serializes_to_wire_format() {
        assert_eq!(
            serde_json::to_string(&PortRange::port(443)).unwrap(),
            r#""443""#
        );
        assert_eq!(
            serde_json::to_string(&PortRange::range(1024, 5000)).unwrap(),
            r#""1024-5000""#
        );
    }

    #[test]
    fn port_range_rejects_garbage() {
        assert!(serde_json::from_str::<PortRange>(r#""eighty""#).is_err());
        assert!(serde_json::from_str::<PortRange>(r#""80-eighty""#).is_err());
    }

    #[test]
    fn deserialize_firewall_with_rules() {
        let firewall: Firewall = serde_json::from_str(
            r#"{
                "id": 38,
                "name": "web",
                "created": "2023-06-01T12:00:00+00:00",
                "rules": [
                    {
                        "direction": "in",
                        "protocol": "tcp",
                        "port": "80",
                        "source_ips": ["0.0.0.0/0", "::/0"],
                        "description": "http"
                    },
                    {
                        "direction": "in",
                        "protocol": "icmp",
                        "source_ips": ["0.0.0.0/0"]
                    }
                ],
                "applied_to": [{"type": "server", "server": {"id": 42}}]
            }"#,
        )
        .unwrap();

        assert_eq!(firewall.rules.len(), 2);
        assert_eq!(firewall.rules[0].port, Some(PortRange::port(80)));
        assert_eq!(firewall.rules[1].protocol, RuleProtocol::Icmp);
        assert!(firewall.rules[1].port.is_none());
        assert_eq!(firewall.applied_to[0].server.as_ref().unwrap().id, 42);
    }

    #[test]
    fn firewall_round_trip() {
        let firewall = Firewall {
            id: 1,
            name: "fw".to_string(),
            rules: vec![FirewallRule {
                direction: RuleDirection::Out,
                protocol: RuleProtocol::Udp,
                port: Some(PortRange::range(53, 53)),
                destination_ips: vec!["0.0.0.0/0".to_string()],
                ..FirewallRule::default()
            }],
            ..Firewall::default()
        };
        let json = serde_json::to_string(&firewall).unwrap();
        let back: Firewall = serde_json::from_str(&json).unwrap();
        assert_eq!(firewall, back);
    }

    #[test]
    fn applied_to_server_constructor() {
        let applied = AppliedTo::server(7);
        assert_eq!(applied.resource_type, "server");
        assert_eq!(applied.server.unwrap().id, 7);
    }
}
