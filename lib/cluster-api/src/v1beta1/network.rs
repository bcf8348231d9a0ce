use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{ApiError, LoadBalancerSpec};

/// Network topology of an AzureCluster
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSpec {
    /// Virtual network holding the cluster address space
    #[serde(default)]
    pub vnet: VnetSpec,

    /// Subnets of the vnet; one per role at least
    #[serde(default)]
    pub subnets: Vec<SubnetSpec>,

    /// Load balancer fronting the API server
    #[serde(default, rename = "apiServerLB")]
    pub api_server_lb: LoadBalancerSpec,

    /// Outbound load balancer for worker nodes. May be omitted for private
    /// clusters or when every node subnet egresses through a NAT gateway
    #[serde(rename = "nodeOutboundLB", skip_serializing_if = "Option::is_none")]
    pub node_outbound_lb: Option<LoadBalancerSpec>,

    /// Outbound load balancer for control plane machines of private clusters
    #[serde(rename = "controlPlaneOutboundLB", skip_serializing_if = "Option::is_none")]
    pub control_plane_outbound_lb: Option<LoadBalancerSpec>,

    /// Private DNS zone for internal API server load balancers
    #[serde(default, rename = "privateDNSZoneName")]
    pub private_dns_zone_name: String,
}

impl NetworkSpec {
    /// First subnet carrying the control-plane role
    pub fn control_plane_subnet(&self) -> Result<&SubnetSpec, ApiError> {
        self.subnets
            .iter()
            .find(|subnet| subnet.role == SubnetRole::ControlPlane)
            .ok_or(ApiError::SubnetRoleNotFound(SubnetRole::ControlPlane))
    }

    /// Subnets carrying the node role
    pub fn node_subnets(&self) -> impl Iterator<Item = &SubnetSpec> {
        self.subnets
            .iter()
            .filter(|subnet| subnet.role == SubnetRole::Node)
    }
}

/// Virtual network configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VnetSpec {
    /// Resource group of a pre-existing vnet. Empty when the vnet is
    /// created and managed by the provider
    #[serde(default)]
    pub resource_group: String,

    /// Azure resource ID, filled in once the vnet exists
    #[serde(default)]
    pub id: String,

    /// Name of the vnet
    #[serde(default)]
    pub name: String,

    /// Address space of the vnet (e.g., "10.0.0.0/8")
    #[serde(default)]
    pub cidr_blocks: Vec<String>,

    /// Tags applied to the vnet
    #[serde(default)]
    pub tags: BTreeMap<String, String>,

    /// Peerings to other virtual networks
    #[serde(default)]
    pub peerings: Vec<VnetPeeringSpec>,
}

impl VnetSpec {
    /// Whether the vnet is created by the provider rather than brought by the user
    pub fn is_managed(&self) -> bool {
        self.resource_group.is_empty()
    }
}

/// Peering between the cluster vnet and a remote vnet
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VnetPeeringSpec {
    /// Resource group of the remote vnet
    #[serde(default)]
    pub resource_group: String,

    /// Name of the remote vnet
    pub remote_vnet_name: String,
}

impl VnetPeeringSpec {
    /// Identity of the peering, unique within a vnet
    pub fn identity(&self) -> String {
        format!("{}/{}", self.resource_group, self.remote_vnet_name)
    }
}

/// Role a subnet plays in the cluster
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SubnetRole {
    /// Hosts control plane machines
    ControlPlane,
    /// Hosts worker machines
    #[default]
    Node,
}

impl SubnetRole {
    /// Roles every bring-your-own vnet must provide
    pub const REQUIRED: [SubnetRole; 2] = [SubnetRole::ControlPlane, SubnetRole::Node];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubnetRole::ControlPlane => "control-plane",
            SubnetRole::Node => "node",
        }
    }
}

impl fmt::Display for SubnetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subnet configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubnetSpec {
    /// Azure resource ID, filled in once the subnet exists
    #[serde(default)]
    pub id: String,

    /// Name of the subnet
    pub name: String,

    /// Role of the subnet
    pub role: SubnetRole,

    /// Address ranges of the subnet; must sit inside the vnet address space
    #[serde(default)]
    pub cidr_blocks: Vec<String>,

    /// Network security group attached to the subnet
    #[serde(default)]
    pub security_group: SecurityGroup,

    /// NAT gateway used for egress, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nat_gateway: Option<NatGateway>,
}

impl SubnetSpec {
    /// Whether egress from this subnet goes through a NAT gateway
    pub fn is_nat_gateway_enabled(&self) -> bool {
        self.nat_gateway
            .as_ref()
            .is_some_and(|gateway| !gateway.name.is_empty())
    }
}

/// Network security group
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecurityGroup {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Rules of the security group
    #[serde(default)]
    pub security_rules: Vec<SecurityRule>,
}

/// Firewall rule of a network security group
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecurityRule {
    /// Name of the rule
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Protocol: Tcp, Udp, Icmp or *
    #[serde(default)]
    pub protocol: String,

    /// Direction: Inbound or Outbound
    #[serde(default)]
    pub direction: String,

    /// Priority, lower is evaluated first
    #[serde(default)]
    pub priority: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ports: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_ports: Option<String>,
}

/// NAT gateway attached to a subnet
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NatGateway {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Public IP of the gateway
    #[serde(default, rename = "natGatewayIP")]
    pub nat_gateway_ip: String,
}
