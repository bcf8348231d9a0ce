//! Load balancer checks
//!
//! Three load balancers share the same shape but not the same rules:
//! - the API server load balancer is always present, carries exactly one
//!   frontend and freezes its SKU, type, name, idle timeout and private IP
//! - the node outbound load balancer is required for public clusters unless
//!   every node subnet egresses through a NAT gateway, and freezes its identity
//! - the control plane outbound load balancer only exists for private clusters
//!
//! An "old" value of `None` means the resource is being created, so no
//! immutability rule applies.

use cluster_api::v1beta1::{LoadBalancerSpec, LoadBalancerType, Sku};

use crate::cidr;
use crate::field::{Category, ErrorList, FieldError, FieldPath};
use crate::limits::ValidationLimits;
use crate::names::validate_load_balancer_name;

/// Whether a value that was previously set has been changed
fn changed<T: PartialEq>(old: Option<&T>, new: Option<&T>) -> bool {
    old.is_some() && old != new
}

/// String flavour of [`changed`]; empty means unset
fn name_changed(old: &str, new: &str) -> bool {
    !old.is_empty() && old != new
}

pub fn validate_api_server_lb(
    lb: &LoadBalancerSpec,
    old: Option<&LoadBalancerSpec>,
    control_plane_cidrs: &[String],
    limits: &ValidationLimits,
    path: &FieldPath,
) -> ErrorList {
    let mut errors = ErrorList::new();

    if lb.sku != Some(Sku::Standard) {
        errors.push(FieldError::not_supported(&path.child("sku"), &lb.sku, &["Standard"]));
    }
    if changed(old.and_then(|o| o.sku.as_ref()), lb.sku.as_ref()) {
        errors.push(FieldError::immutable(
            &path.child("sku"),
            "API Server load balancer SKU should not be modified after AzureCluster creation.",
        ));
    }

    if lb.lb_type.is_none() {
        errors.push(FieldError::not_supported(
            &path.child("type"),
            &lb.lb_type,
            &["Public", "Internal"],
        ));
    }
    if changed(old.and_then(|o| o.lb_type.as_ref()), lb.lb_type.as_ref()) {
        errors.push(FieldError::immutable(
            &path.child("type"),
            "API Server load balancer type should not be modified after AzureCluster creation.",
        ));
    }

    errors.extend(validate_load_balancer_name(&lb.name, &path.child("name")));
    if old.is_some_and(|o| name_changed(&o.name, &lb.name)) {
        errors.push(FieldError::immutable(
            &path.child("name"),
            "API Server load balancer name should not be modified after AzureCluster creation.",
        ));
    }

    if changed(
        old.and_then(|o| o.idle_timeout_in_minutes.as_ref()),
        lb.idle_timeout_in_minutes.as_ref(),
    ) {
        errors.push(FieldError::immutable(
            &path.child("idleTimeoutInMinutes"),
            "API Server load balancer idle timeout cannot be modified after AzureCluster creation.",
        ));
    }
    errors.extend(validate_idle_timeout(lb, limits, path, "API Server"));

    // The type specific checks below assume exactly one frontend.
    let frontends_path = path.child("frontendIPConfigs");
    let [frontend] = lb.frontend_ips.as_slice() else {
        errors.push(FieldError::invalid(
            &frontends_path,
            &lb.frontend_ips,
            "API Server Load balancer should have 1 Frontend IP",
            Category::Structural,
        ));
        return errors;
    };
    if lb.effective_frontend_ips_count() != 1 {
        errors.push(FieldError::invalid(
            &path.child("frontendIPsCount"),
            &lb.frontend_ips_count,
            "API Server Load balancer should have 1 Frontend IP",
            Category::Structural,
        ));
        return errors;
    }

    let frontend_path = frontends_path.index(0);
    match lb.lb_type {
        Some(LoadBalancerType::Internal) => {
            if frontend.public_ip.is_some() {
                errors.push(FieldError::forbidden(
                    &frontend_path.child("publicIP"),
                    "Internal Load Balancers cannot have a Public IP",
                ));
            }

            let private_ip_path = frontend_path.child("privateIP");
            if let Some(address) = frontend.private_ip_address.as_deref().filter(|a| !a.is_empty()) {
                errors.extend(validate_internal_lb_ip_address(
                    address,
                    control_plane_cidrs,
                    &private_ip_path,
                ));
            }

            let old_private_ip = old
                .and_then(|o| o.frontend_ips.first())
                .and_then(|f| f.private_ip_address.as_deref())
                .filter(|a| !a.is_empty());
            if let Some(old_address) = old_private_ip {
                if frontend.private_ip_address.as_deref() != Some(old_address) {
                    errors.push(FieldError::immutable(
                        &private_ip_path,
                        "API Server load balancer private IP should not be modified after AzureCluster creation.",
                    ));
                }
            }
        }
        Some(LoadBalancerType::Public) => {
            if frontend.private_ip_address.as_deref().is_some_and(|a| !a.is_empty()) {
                errors.push(FieldError::forbidden(
                    &frontend_path.child("privateIP"),
                    "Public Load Balancers cannot have a Private IP",
                ));
            }
        }
        None => {}
    }

    errors
}

/// The private IP of an internal load balancer must sit in the control plane subnet
pub fn validate_internal_lb_ip_address(
    address: &str,
    cidrs: &[String],
    path: &FieldPath,
) -> Option<FieldError> {
    let Ok(ip) = cidr::parse_ip(address) else {
        return Some(FieldError::malformed(
            path,
            address,
            "Internal LB IP address isn't a valid IPv4 or IPv6 address",
        ));
    };

    if cidr::address_in_any(ip, cidrs) {
        return None;
    }
    Some(FieldError::invalid(
        path,
        address,
        format!(
            "Internal LB IP address needs to be in control plane subnet range ([{}])",
            cidrs.join(" ")
        ),
        Category::Policy,
    ))
}

pub fn validate_node_outbound_lb(
    lb: Option<&LoadBalancerSpec>,
    old: Option<&LoadBalancerSpec>,
    api_server_lb: &LoadBalancerSpec,
    limits: &ValidationLimits,
    path: &FieldPath,
) -> ErrorList {
    let mut errors = ErrorList::new();

    let Some(lb) = lb else {
        // May be omitted for private clusters.
        if !api_server_lb.is_internal() {
            errors.push(FieldError::required(
                path,
                "Node outbound load balancer cannot be nil for public clusters.",
            ));
        }
        return errors;
    };

    if let Some(old) = old {
        if name_changed(&old.id, &lb.id) {
            errors.push(FieldError::immutable(
                &path.child("id"),
                "Node outbound load balancer ID should not be modified after AzureCluster creation.",
            ));
        }

        if name_changed(&old.name, &lb.name) {
            errors.push(FieldError::immutable(
                &path.child("name"),
                "Node outbound load balancer Name should not be modified after AzureCluster creation.",
            ));
        }

        if changed(old.sku.as_ref(), lb.sku.as_ref()) {
            errors.push(FieldError::immutable(
                &path.child("sku"),
                "Node outbound load balancer SKU should not be modified after AzureCluster creation.",
            ));
        }

        if changed(old.lb_type.as_ref(), lb.lb_type.as_ref()) {
            errors.push(FieldError::immutable(
                &path.child("type"),
                "Node outbound load balancer Type cannot be modified after AzureCluster creation.",
            ));
        }

        if changed(old.idle_timeout_in_minutes.as_ref(), lb.idle_timeout_in_minutes.as_ref()) {
            errors.push(FieldError::immutable(
                &path.child("idleTimeoutInMinutes"),
                "Node outbound load balancer idle timeout cannot be modified after AzureCluster creation.",
            ));
        }

        // Changing the count is how the outbound IP pool is scaled, so the
        // frontend list is only frozen while the count stays the same.
        if old.frontend_ips_count == lb.frontend_ips_count {
            errors.extend(validate_frontend_ips_unchanged(old, lb, &path.child("frontendIPs")));
        }
    }

    errors.extend(validate_frontend_ips_count(lb, limits, path));
    errors.extend(validate_idle_timeout(lb, limits, path, "Node outbound"));
    errors
}

fn validate_frontend_ips_unchanged(
    old: &LoadBalancerSpec,
    lb: &LoadBalancerSpec,
    path: &FieldPath,
) -> ErrorList {
    const DETAIL: &str =
        "Node outbound load balancer FrontendIPs cannot be modified after AzureCluster creation.";

    if old.frontend_ips.len() != lb.frontend_ips.len() {
        return vec![FieldError::immutable(path, DETAIL)];
    }

    old.frontend_ips
        .iter()
        .zip(lb.frontend_ips.iter())
        .enumerate()
        .filter(|(_, (before, after))| before.name != after.name || before.public_ip != after.public_ip)
        .map(|(i, _)| FieldError::immutable(&path.index(i), DETAIL))
        .collect()
}

pub fn validate_control_plane_outbound_lb(
    lb: Option<&LoadBalancerSpec>,
    api_server_lb: &LoadBalancerSpec,
    limits: &ValidationLimits,
    path: &FieldPath,
) -> ErrorList {
    let mut errors = ErrorList::new();

    match (api_server_lb.lb_type, lb) {
        (Some(LoadBalancerType::Public), Some(_)) => {
            errors.push(FieldError::forbidden(
                path,
                "Control plane outbound load balancer cannot be set for public clusters.",
            ));
        }
        (Some(LoadBalancerType::Internal), Some(lb)) => {
            errors.extend(validate_frontend_ips_count(lb, limits, path));
            errors.extend(validate_idle_timeout(lb, limits, path, "Control plane outbound"));
        }
        // Optional for private clusters.
        _ => {}
    }

    errors
}

fn validate_frontend_ips_count(
    lb: &LoadBalancerSpec,
    limits: &ValidationLimits,
    path: &FieldPath,
) -> Option<FieldError> {
    let count = lb.frontend_ips_count?;
    if count <= limits.max_outbound_ips {
        return None;
    }
    Some(FieldError::out_of_range(
        &path.child("frontendIPsCount"),
        &count,
        format!("Max front end ips allowed is {}", limits.max_outbound_ips),
    ))
}

fn validate_idle_timeout(
    lb: &LoadBalancerSpec,
    limits: &ValidationLimits,
    path: &FieldPath,
    which: &str,
) -> Option<FieldError> {
    let minutes = lb.idle_timeout_in_minutes?;
    if limits.idle_timeout_in_range(minutes) {
        return None;
    }
    Some(FieldError::out_of_range(
        &path.child("idleTimeoutInMinutes"),
        &minutes,
        format!(
            "{} idle timeout should be between {} and {} minutes",
            which, limits.min_idle_timeout_in_minutes, limits.max_idle_timeout_in_minutes
        ),
    ))
}
