use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of frontend IPs assumed when `frontendIPsCount` is unset
pub const DEFAULT_FRONTEND_IPS_COUNT: i32 = 1;

/// Load balancer configuration. Used for the API server load balancer and
/// for the optional node and control plane outbound load balancers
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerSpec {
    /// Azure resource ID, filled in once the load balancer exists
    #[serde(default)]
    pub id: String,

    /// Name of the load balancer
    #[serde(default)]
    pub name: String,

    /// Service tier. Unset until defaulted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,

    /// Public or Internal. Unset until defaulted
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub lb_type: Option<LoadBalancerType>,

    /// Frontend IP configurations
    #[serde(default, rename = "frontendIPs")]
    pub frontend_ips: Vec<FrontendIP>,

    /// Number of frontend IPs to provision
    #[serde(rename = "frontendIPsCount", skip_serializing_if = "Option::is_none")]
    pub frontend_ips_count: Option<i32>,

    /// Minutes an idle connection is kept open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_timeout_in_minutes: Option<i32>,
}

impl LoadBalancerSpec {
    /// Frontend IP count, falling back to the default of one
    pub fn effective_frontend_ips_count(&self) -> i32 {
        self.frontend_ips_count
            .unwrap_or(DEFAULT_FRONTEND_IPS_COUNT)
    }

    /// Whether this load balancer is internal to the vnet
    pub fn is_internal(&self) -> bool {
        self.lb_type == Some(LoadBalancerType::Internal)
    }
}

/// Load balancer service tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Sku {
    Standard,
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sku::Standard => f.write_str("Standard"),
        }
    }
}

/// Exposure of a load balancer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum LoadBalancerType {
    /// Reachable from the internet through a public IP
    Public,
    /// Reachable only from inside the vnet through a private IP
    Internal,
}

impl fmt::Display for LoadBalancerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadBalancerType::Public => f.write_str("Public"),
            LoadBalancerType::Internal => f.write_str("Internal"),
        }
    }
}

/// Frontend IP configuration of a load balancer
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FrontendIP {
    /// Name of the frontend configuration
    pub name: String,

    /// Public IP for Public load balancers
    #[serde(rename = "publicIP", skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<PublicIPSpec>,

    /// Static private IP for Internal load balancers
    #[serde(rename = "privateIP", skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
}

/// Public IP reference
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicIPSpec {
    /// Name of the public IP resource
    pub name: String,

    /// DNS label attached to the public IP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_name: Option<String>,
}
