//! Admission validation for AzureCluster resources
//!
//! This library provides:
//! - Structured field errors collected without failing fast
//! - CIDR and name checks for bring-your-own networks
//! - Load balancer validation, including immutability on update
//! - Create and update entry points producing a single accept/reject decision

pub mod cidr;
pub mod cluster;
pub mod dns;
pub mod error;
pub mod field;
pub mod limits;
pub mod load_balancer;
pub mod names;
pub mod network;
pub mod overrides;
pub mod peering;
pub mod subnets;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use cluster::{validate_cluster, validate_create, validate_update, ClusterValidator};
pub use error::{Result, ValidationError};
pub use field::{Category, ErrorList, ErrorType, FieldError, FieldPath};
pub use limits::ValidationLimits;
pub use network::validate_network_spec;
