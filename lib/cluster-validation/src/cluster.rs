//! Cluster-level validation and the create/update entry points

use cluster_api::AzureCluster;
use kube::Resource;
use tracing::{debug, info};

use crate::field::{ErrorList, FieldPath};
use crate::limits::ValidationLimits;
use crate::names::validate_cluster_name;
use crate::network::validate_network_spec_with_limits;
use crate::overrides::validate_cloud_provider_config_overrides;
use crate::{Result, ValidationError};

/// Validates AzureCluster resources against a set of limits.
///
/// Holds no state between calls and may be shared across admission requests.
#[derive(Clone, Debug, Default)]
pub struct ClusterValidator {
    limits: ValidationLimits,
}

impl ClusterValidator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Validate a cluster being created
    pub fn validate_create(&self, cluster: &AzureCluster) -> Result<()> {
        self.validate(cluster, None)
    }

    /// Validate a change to an accepted cluster
    pub fn validate_update(&self, old: &AzureCluster, cluster: &AzureCluster) -> Result<()> {
        self.validate(cluster, Some(old))
    }

    /// Run every check and merge the violations into a single rejection
    pub fn validate(&self, cluster: &AzureCluster, old: Option<&AzureCluster>) -> Result<()> {
        let name = cluster.metadata.name.clone().unwrap_or_default();
        debug!("Validating AzureCluster {} (update: {})", name, old.is_some());

        let mut errors = validate_cluster_name(&name, &FieldPath::new("metadata").child("name"));
        errors.extend(self.validate_cluster_spec(cluster, old));

        if errors.is_empty() {
            debug!("AzureCluster {} is valid", name);
            return Ok(());
        }

        info!("Rejecting AzureCluster {} with {} violation(s)", name, errors.len());
        Err(ValidationError::Invalid {
            group: AzureCluster::group(&()).to_string(),
            kind: AzureCluster::kind(&()).to_string(),
            name,
            errors,
        })
    }

    fn validate_cluster_spec(&self, cluster: &AzureCluster, old: Option<&AzureCluster>) -> ErrorList {
        let spec_path = FieldPath::new("spec");

        let mut errors = validate_network_spec_with_limits(
            &cluster.spec.network_spec,
            old.map(|o| &o.spec.network_spec),
            &self.limits,
            &spec_path.child("networkSpec"),
        );

        // Nothing to compare against on create.
        if let Some(old) = old {
            errors.extend(validate_cloud_provider_config_overrides(
                cluster.spec.cloud_provider_config_overrides.as_ref(),
                old.spec.cloud_provider_config_overrides.as_ref(),
                &spec_path.child("cloudProviderConfigOverrides"),
            ));
        }

        errors
    }
}

/// Validate `cluster`, comparing against `old` when it is an update
pub fn validate_cluster(cluster: &AzureCluster, old: Option<&AzureCluster>) -> Result<()> {
    ClusterValidator::default().validate(cluster, old)
}

pub fn validate_create(cluster: &AzureCluster) -> Result<()> {
    ClusterValidator::default().validate_create(cluster)
}

pub fn validate_update(old: &AzureCluster, cluster: &AzureCluster) -> Result<()> {
    ClusterValidator::default().validate_update(old, cluster)
}
