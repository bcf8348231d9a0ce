//! Name and identifier checks
//!
//! Patterns follow the Azure resource naming rules. The cluster name is also
//! used as a prefix of VM and other resource names, which caps its length.

use regex::Regex;
use std::net::IpAddr;
use std::sync::LazyLock;

use crate::field::{ErrorList, FieldError, FieldPath};

/// Lowercase alphanumerics and '-', starting and ending alphanumeric. No '.'
/// since the name ends up in DNS names.
pub const CLUSTER_NAME_REGEX: &str = r"^[a-z0-9][a-z0-9-]{0,42}[a-z0-9]$";
pub const CLUSTER_NAME_MAX_LENGTH: usize = 44;
pub const RESOURCE_GROUP_REGEX: &str = r"^[-0-9A-Za-z_.()]+$";
pub const SUBNET_NAME_REGEX: &str = r"^[-0-9A-Za-z_.]+$";
pub const LOAD_BALANCER_NAME_REGEX: &str = r"^[-0-9A-Za-z_.]+$";
const DNS_NAME_REGEX: &str =
    r"^([a-zA-Z0-9_][a-zA-Z0-9_-]{0,62})(\.[a-zA-Z0-9_][a-zA-Z0-9_-]{0,62})*[._]?$";
const DNS_NAME_MAX_LENGTH: usize = 255;

static CLUSTER_NAME_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(CLUSTER_NAME_REGEX).ok());
static RESOURCE_GROUP_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(RESOURCE_GROUP_REGEX).ok());
static SUBNET_NAME_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(SUBNET_NAME_REGEX).ok());
static LOAD_BALANCER_NAME_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(LOAD_BALANCER_NAME_REGEX).ok());
static DNS_NAME_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(DNS_NAME_REGEX).ok());

fn is_match(re: &LazyLock<Option<Regex>>, value: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(value))
}

/// Length and pattern checks of the cluster name. Both may fail at once.
pub fn validate_cluster_name(name: &str, path: &FieldPath) -> ErrorList {
    let mut errors = ErrorList::new();
    if name.len() > CLUSTER_NAME_MAX_LENGTH {
        errors.push(FieldError::malformed(
            path,
            name,
            format!(
                "Cluster Name longer than allowed length of {} characters",
                CLUSTER_NAME_MAX_LENGTH
            ),
        ));
    }
    if !is_match(&CLUSTER_NAME_RE, name) {
        errors.push(FieldError::malformed(
            path,
            name,
            format!(
                "Cluster Name doesn't match regex {}, can contain only lowercase alphanumeric characters and '-', must start/end with an alphanumeric character",
                CLUSTER_NAME_REGEX
            ),
        ));
    }
    errors
}

pub fn validate_resource_group(resource_group: &str, path: &FieldPath) -> Option<FieldError> {
    if is_match(&RESOURCE_GROUP_RE, resource_group) {
        return None;
    }
    Some(FieldError::malformed(
        path,
        resource_group,
        format!("resourceGroup doesn't match regex {}", RESOURCE_GROUP_REGEX),
    ))
}

pub fn validate_subnet_name(name: &str, path: &FieldPath) -> Option<FieldError> {
    if is_match(&SUBNET_NAME_RE, name) {
        return None;
    }
    Some(FieldError::malformed(
        path,
        name,
        format!("name of subnet doesn't match regex {}", SUBNET_NAME_REGEX),
    ))
}

pub fn validate_load_balancer_name(name: &str, path: &FieldPath) -> Option<FieldError> {
    if is_match(&LOAD_BALANCER_NAME_RE, name) {
        return None;
    }
    Some(FieldError::malformed(
        path,
        name,
        format!("name of load balancer doesn't match regex {}", LOAD_BALANCER_NAME_REGEX),
    ))
}

/// Whether `name` is a syntactically valid DNS name. IP literals are not.
pub fn is_dns_name(name: &str) -> bool {
    if name.is_empty() || name.replace('.', "").len() > DNS_NAME_MAX_LENGTH {
        return false;
    }
    name.parse::<IpAddr>().is_err() && is_match(&DNS_NAME_RE, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> FieldPath {
        FieldPath::new("metadata").child("name")
    }

    #[test]
    fn test_cluster_name() {
        for name in ["test-cluster", "a1", "cluster-123", "1cluster"] {
            assert!(validate_cluster_name(name, &path()).is_empty(), "{name}");
        }
        for name in ["Test-Cluster", "-cluster", "cluster-", "cluster.name", "c", "cluster_name", ""] {
            assert!(!validate_cluster_name(name, &path()).is_empty(), "{name}");
        }
    }

    #[test]
    fn test_long_cluster_name_reports_length_and_pattern() {
        let name = "a".repeat(45);
        let errors = validate_cluster_name(&name, &path());
        assert_eq!(errors.len(), 2);
        assert!(errors[0].detail.contains("44"));

        assert!(validate_cluster_name(&"a".repeat(44), &path()).is_empty());
    }

    #[test]
    fn test_resource_group() {
        let path = FieldPath::new("rg");
        assert!(validate_resource_group("my-rg_1.(test)", &path).is_none());
        assert!(validate_resource_group("my rg", &path).is_some());
        assert!(validate_resource_group("rg/slash", &path).is_some());
    }

    #[test]
    fn test_subnet_and_load_balancer_names() {
        let path = FieldPath::new("name");
        assert!(validate_subnet_name("control-plane_subnet.1", &path).is_none());
        assert!(validate_subnet_name("my~subnet", &path).is_some());
        assert!(validate_subnet_name("", &path).is_some());
        assert!(validate_load_balancer_name("test-cluster-public-lb", &path).is_none());
        assert!(validate_load_balancer_name("lb(1)", &path).is_some());
    }

    #[test]
    fn test_is_dns_name() {
        for name in ["example.com", "good.dns.zone", "private_zone.local", "zone.", "localhost"] {
            assert!(is_dns_name(name), "{name}");
        }
        for name in ["", "wrong_dns_zone..", "-bad.zone", "10.0.0.1", "bad zone.com", "zone!.com"] {
            assert!(!is_dns_name(name), "{name}");
        }
        assert!(!is_dns_name(&format!("{}.com", "a".repeat(64))));
    }
}
