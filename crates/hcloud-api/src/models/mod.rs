//! Data models for the Hetzner Cloud API resources.

pub mod datacenter;
pub mod firewall;
pub mod image;
pub mod iso;
pub mod network;
pub mod primary_ip;
pub mod server;

pub use datacenter::{Datacenter, Location, ServerType};
pub use firewall::{
    AppliedTo, AppliedToServer, CreateFirewallRequest, Firewall, FirewallRule, PortRange,
    RuleDirection, RuleProtocol, UpdateFirewallRequest,
};
pub use image::{Image, ImageStatus, ImageType};
pub use iso::{Architecture, Deprecation, Iso, IsoType};
pub use network::{
    CreateNetworkRequest, Network, Route, Subnet, SubnetType, UpdateNetworkRequest,
};
pub use primary_ip::{
    AssigneeType, CreatePrimaryIpRequest, DnsPtr, PrimaryIp, PrimaryIpType,
    UpdatePrimaryIpRequest,
};
pub use server::{
    CreateServerPublicNet, CreateServerRequest, Ipv4, Ipv6, PrivateNet, PublicNet, Server,
    ServerProtection, ServerStatus, UpdateServerRequest,
};
