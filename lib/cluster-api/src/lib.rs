//! Azure cluster API types and CRDs for Kubernetes integration
//!
//! This library defines the infrastructure resource validated at admission:
//! - AzureCluster: network topology and cloud settings of a managed cluster
//! - NetworkSpec: vnet, subnets, load balancers, peerings, private DNS
//! - CloudProviderConfigOverrides: rate limit and backoff settings frozen at creation

pub mod v1beta1;

pub use v1beta1::{
    AzureCluster, AzureClusterSpec, CloudProviderConfigOverrides, LoadBalancerSpec, NetworkSpec,
    SubnetSpec, VnetSpec,
};
