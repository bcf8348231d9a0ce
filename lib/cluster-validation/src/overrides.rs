//! Immutability of the cloud-provider configuration overrides

use cluster_api::v1beta1::CloudProviderConfigOverrides;

use crate::field::{Category, ErrorList, FieldError, FieldPath};

/// Cloud-provider overrides are frozen after creation: setting, changing and
/// removing them on an existing cluster are all rejected
pub fn validate_cloud_provider_config_overrides(
    new: Option<&CloudProviderConfigOverrides>,
    old: Option<&CloudProviderConfigOverrides>,
    path: &FieldPath,
) -> ErrorList {
    if new == old {
        return ErrorList::new();
    }
    vec![FieldError::invalid(
        path,
        &new,
        "cannot change cloudProviderConfigOverrides after cluster creation",
        Category::Immutability,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cluster_api::v1beta1::{RateLimitConfig, RateLimitSpec};

    fn overrides(bucket: i32) -> CloudProviderConfigOverrides {
        CloudProviderConfigOverrides {
            rate_limits: vec![RateLimitSpec {
                name: "defaultRateLimit".to_string(),
                config: RateLimitConfig {
                    enabled: true,
                    bucket,
                    ..Default::default()
                },
            }],
            ..Default::default()
        }
    }

    fn path() -> FieldPath {
        FieldPath::new("spec").child("cloudProviderConfigOverrides")
    }

    #[test]
    fn test_unchanged() {
        assert!(validate_cloud_provider_config_overrides(None, None, &path()).is_empty());
        let value = overrides(1);
        assert!(validate_cloud_provider_config_overrides(Some(&value), Some(&value), &path()).is_empty());
    }

    #[test]
    fn test_changed() {
        let old = overrides(1);
        let new = overrides(2);
        let errors = validate_cloud_provider_config_overrides(Some(&new), Some(&old), &path());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].category, Category::Immutability);
        assert_eq!(errors[0].field, "spec.cloudProviderConfigOverrides");
    }

    #[test]
    fn test_reordered_rate_limits_with_same_name() {
        let mut old = overrides(1);
        old.rate_limits.push(RateLimitSpec {
            name: "defaultRateLimit".to_string(),
            config: RateLimitConfig {
                enabled: true,
                bucket: 2,
                ..Default::default()
            },
        });
        let mut new = old.clone();
        new.rate_limits.reverse();
        assert!(validate_cloud_provider_config_overrides(Some(&new), Some(&old), &path()).is_empty());
    }

    #[test]
    fn test_introduced_or_removed() {
        let value = overrides(1);
        assert_eq!(validate_cloud_provider_config_overrides(Some(&value), None, &path()).len(), 1);
        assert_eq!(validate_cloud_provider_config_overrides(None, Some(&value), &path()).len(), 1);
    }
}
