use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Overrides of the cloud-provider configuration rendered for the cluster.
/// Frozen once the cluster exists
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CloudProviderConfigOverrides {
    /// Per-client rate limits, keyed by name
    #[serde(default)]
    pub rate_limits: Vec<RateLimitSpec>,

    /// Retry backoff of cloud-provider API calls
    #[serde(default)]
    pub back_offs: BackOffConfig,
}

// Rate limits compare as a multiset: reordering them is not a change.
impl PartialEq for CloudProviderConfigOverrides {
    fn eq(&self, other: &Self) -> bool {
        if self.back_offs != other.back_offs || self.rate_limits.len() != other.rate_limits.len() {
            return false;
        }

        let mut unmatched: Vec<&RateLimitSpec> = other.rate_limits.iter().collect();
        self.rate_limits.iter().all(|limit| {
            match unmatched.iter().position(|candidate| *candidate == limit) {
                Some(i) => {
                    unmatched.swap_remove(i);
                    true
                }
                None => false,
            }
        })
    }
}

/// Rate limit of a single cloud-provider client
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RateLimitSpec {
    /// Client the limit applies to (e.g., "defaultRateLimit", "routeRateLimit")
    pub name: String,

    #[serde(default)]
    pub config: RateLimitConfig,
}

/// Token bucket configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RateLimitConfig {
    #[serde(default, rename = "cloudProviderRateLimit")]
    pub enabled: bool,

    #[serde(rename = "cloudProviderRateLimitQPS", skip_serializing_if = "Option::is_none")]
    pub qps: Option<Quantity>,

    #[serde(default, rename = "cloudProviderRateLimitBucket")]
    pub bucket: i32,

    #[serde(rename = "cloudProviderRateLimitQPSWrite", skip_serializing_if = "Option::is_none")]
    pub qps_write: Option<Quantity>,

    #[serde(default, rename = "cloudProviderRateLimitBucketWrite")]
    pub bucket_write: i32,
}

/// Exponential backoff of cloud-provider API calls
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BackOffConfig {
    #[serde(default, rename = "cloudProviderBackoff")]
    pub enabled: bool,

    #[serde(default, rename = "cloudProviderBackoffRetries")]
    pub retries: i32,

    #[serde(rename = "cloudProviderBackoffExponent", skip_serializing_if = "Option::is_none")]
    pub exponent: Option<Quantity>,

    /// Initial backoff (seconds)
    #[serde(default, rename = "cloudProviderBackoffDuration")]
    pub duration: i32,

    #[serde(rename = "cloudProviderBackoffJitter", skip_serializing_if = "Option::is_none")]
    pub jitter: Option<Quantity>,
}
