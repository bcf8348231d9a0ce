use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{CloudProviderConfigOverrides, NetworkSpec};

/// AzureCluster describes the Azure infrastructure of a workload cluster:
/// where it lives, its network topology and the cloud-provider settings
/// that are frozen once the cluster exists
#[derive(CustomResource, Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "infrastructure.cluster.x-k8s.io",
    version = "v1beta1",
    kind = "AzureCluster",
    plural = "azureclusters",
    namespaced,
    derive = "Default",
    status = "AzureClusterStatus",
    printcolumn = r#"{"name":"Ready","type":"string","jsonPath":".status.ready"}"#,
    printcolumn = r#"{"name":"Resource Group","type":"string","jsonPath":".spec.resourceGroup"}"#,
    printcolumn = r#"{"name":"Location","type":"string","jsonPath":".spec.location"}"#,
)]
#[serde(rename_all = "camelCase")]
pub struct AzureClusterSpec {
    /// Resource group holding the cluster resources
    #[serde(default)]
    pub resource_group: String,

    /// Azure subscription the cluster is billed to
    #[serde(default, rename = "subscriptionID")]
    pub subscription_id: String,

    /// Azure region (e.g., "westeurope")
    #[serde(default)]
    pub location: String,

    /// Network topology of the cluster
    #[serde(default)]
    pub network_spec: NetworkSpec,

    /// Tags added to every Azure resource created for the cluster
    #[serde(default)]
    pub additional_tags: BTreeMap<String, String>,

    /// Endpoint used to reach the API server, filled in once provisioned
    #[serde(default)]
    pub control_plane_endpoint: ApiEndpoint,

    /// Overrides of the cloud-provider rate limit and backoff configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_provider_config_overrides: Option<CloudProviderConfigOverrides>,
}

/// Host and port of the cluster API server
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ApiEndpoint {
    /// Hostname or IP
    #[serde(default)]
    pub host: String,

    /// Port (0 when not yet known)
    #[serde(default)]
    pub port: i32,
}

/// Status of an AzureCluster
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AzureClusterStatus {
    /// Whether the infrastructure is ready
    #[serde(default)]
    pub ready: bool,

    /// Terminal failure reason, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,

    /// Human-readable terminal failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
}
