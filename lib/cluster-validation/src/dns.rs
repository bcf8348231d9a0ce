//! Private DNS zone name checks

use cluster_api::v1beta1::{LoadBalancerType, NetworkSpec};

use crate::field::{Category, ErrorList, FieldError, FieldPath};
use crate::names::is_dns_name;

/// A private DNS zone is only meaningful behind an internal API server load
/// balancer, and must be a valid DNS name
pub fn validate_private_dns_zone_name(network: &NetworkSpec, path: &FieldPath) -> ErrorList {
    let mut errors = ErrorList::new();
    let zone = &network.private_dns_zone_name;
    if zone.is_empty() {
        return errors;
    }

    let lb_type = network.api_server_lb.lb_type;
    if lb_type != Some(LoadBalancerType::Internal) {
        errors.push(FieldError::invalid(
            path,
            &lb_type,
            "PrivateDNSZoneName is available only if APIServerLB.Type is Internal",
            Category::Policy,
        ));
    }

    if !is_dns_name(zone) {
        errors.push(FieldError::malformed(
            path,
            zone,
            "PrivateDNSZoneName can only contain alphanumeric characters, underscores and dashes, must end with an alphanumeric character",
        ));
    }

    errors
}
