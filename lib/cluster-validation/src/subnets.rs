//! Vnet address space, subnet and security rule checks for bring-your-own vnets

use cluster_api::v1beta1::{SecurityRule, SubnetRole, SubnetSpec, VnetSpec};
use std::collections::{BTreeMap, HashSet};

use crate::cidr;
use crate::field::{Category, ErrorList, FieldError, FieldPath};
use crate::limits::ValidationLimits;
use crate::names::validate_subnet_name;

/// Every vnet CIDR block must parse
pub fn validate_vnet_cidrs(cidr_blocks: &[String], path: &FieldPath) -> ErrorList {
    cidr_blocks
        .iter()
        .filter(|block| cidr::parse_cidr(block).is_err())
        .map(|block| FieldError::malformed(path, block, "invalid CIDR format"))
        .collect()
}

/// Checks names, roles, security rules and address ranges of the subnets.
/// Collects every violation; never stops at the first one.
pub fn validate_subnets(
    subnets: &[SubnetSpec],
    vnet: &VnetSpec,
    limits: &ValidationLimits,
    path: &FieldPath,
) -> ErrorList {
    let mut errors = ErrorList::new();
    let mut names: HashSet<&str> = HashSet::with_capacity(subnets.len());
    let mut required_roles: BTreeMap<SubnetRole, bool> =
        SubnetRole::REQUIRED.iter().map(|role| (*role, false)).collect();

    for (i, subnet) in subnets.iter().enumerate() {
        let subnet_path = path.index(i);

        errors.extend(validate_subnet_name(&subnet.name, &subnet_path.child("name")));
        if !names.insert(subnet.name.as_str()) {
            errors.push(FieldError::duplicate(path, &subnet.name));
        }

        if let Some(seen) = required_roles.get_mut(&subnet.role) {
            *seen = true;
        }

        let rules_path = subnet_path.child("securityGroup").child("securityRules");
        for (j, rule) in subnet.security_group.security_rules.iter().enumerate() {
            errors.extend(validate_security_rule(rule, limits, &rules_path.index(j)));
        }

        errors.extend(validate_subnet_cidrs(
            &subnet.cidr_blocks,
            &vnet.cidr_blocks,
            &subnet_path.child("cidrBlocks"),
        ));
    }

    for (role, seen) in required_roles {
        if !seen {
            errors.push(FieldError::required(
                path,
                format!("required role {} not included in provided subnets", role),
            ));
        }
    }

    errors
}

/// Every subnet CIDR block must parse and sit inside the vnet address space
pub fn validate_subnet_cidrs(
    subnet_cidr_blocks: &[String],
    vnet_cidr_blocks: &[String],
    path: &FieldPath,
) -> ErrorList {
    let mut errors = ErrorList::new();
    for block in subnet_cidr_blocks {
        match cidr::contained_in_any(block, vnet_cidr_blocks) {
            Ok(true) => {}
            Ok(false) => errors.push(FieldError::invalid(
                path,
                block,
                format!(
                    "subnet CIDR not in vnet address space: [{}]",
                    vnet_cidr_blocks.join(" ")
                ),
                Category::Structural,
            )),
            Err(_) => errors.push(FieldError::malformed(path, block, "invalid CIDR format")),
        }
    }
    errors
}

pub fn validate_security_rule(
    rule: &SecurityRule,
    limits: &ValidationLimits,
    path: &FieldPath,
) -> Option<FieldError> {
    if limits.priority_in_range(rule.priority) {
        return None;
    }
    Some(FieldError::out_of_range(
        path,
        &rule.priority,
        format!(
            "security rule priorities should be between {} and {}",
            limits.min_rule_priority, limits.max_rule_priority
        ),
    ))
}
