/// API version v1beta1 for the Azure cluster infrastructure CRDs

pub mod azure_cluster;
pub mod network;
pub mod load_balancer;
pub mod overrides;

pub use azure_cluster::{AzureCluster, AzureClusterSpec, AzureClusterStatus, ApiEndpoint};
pub use network::{
    NatGateway, NetworkSpec, SecurityGroup, SecurityRule, SubnetRole, SubnetSpec, VnetPeeringSpec,
    VnetSpec,
};
pub use load_balancer::{FrontendIP, LoadBalancerSpec, LoadBalancerType, PublicIPSpec, Sku};
pub use overrides::{BackOffConfig, CloudProviderConfigOverrides, RateLimitConfig, RateLimitSpec};

use thiserror::Error;

/// API group for cluster infrastructure resources
pub const API_GROUP: &str = "infrastructure.cluster.x-k8s.io";
/// API version for cluster infrastructure resources
pub const API_VERSION: &str = "v1beta1";

/// Errors raised by lookups over the API types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("no subnet with role {0} found")]
    SubnetRoleNotFound(SubnetRole),
}
