//! Network topology validation
//!
//! A bring-your-own vnet (non-empty resource group) is user supplied, so its
//! resource group, address space, subnets and peerings are checked. A managed
//! vnet is generated by the provider and skips those checks. Load balancer and
//! private DNS checks run in both cases.

use cluster_api::v1beta1::NetworkSpec;
use tracing::debug;

use crate::dns::validate_private_dns_zone_name;
use crate::field::{Category, ErrorList, FieldError, FieldPath};
use crate::limits::ValidationLimits;
use crate::load_balancer::{
    validate_api_server_lb, validate_control_plane_outbound_lb, validate_node_outbound_lb,
};
use crate::names::validate_resource_group;
use crate::peering::validate_vnet_peerings;
use crate::subnets::{validate_subnets, validate_vnet_cidrs};

/// Validate a network spec with the default limits. `old` is the previously
/// accepted spec on update and `None` on create.
pub fn validate_network_spec(
    network: &NetworkSpec,
    old: Option<&NetworkSpec>,
    path: &FieldPath,
) -> ErrorList {
    validate_network_spec_with_limits(network, old, &ValidationLimits::default(), path)
}

pub fn validate_network_spec_with_limits(
    network: &NetworkSpec,
    old: Option<&NetworkSpec>,
    limits: &ValidationLimits,
    path: &FieldPath,
) -> ErrorList {
    let mut errors = ErrorList::new();
    let vnet = &network.vnet;
    let vnet_path = path.child("vnet");

    if !vnet.is_managed() {
        debug!("Validating bring-your-own vnet in resource group {}", vnet.resource_group);
        errors.extend(validate_resource_group(&vnet.resource_group, &vnet_path.child("resourceGroup")));
        errors.extend(validate_vnet_cidrs(&vnet.cidr_blocks, &vnet_path.child("cidrBlocks")));
        errors.extend(validate_subnets(&network.subnets, vnet, limits, &path.child("subnets")));
        errors.extend(validate_vnet_peerings(&vnet.peerings, &vnet_path.child("peerings")));
    }

    let control_plane_cidrs: &[String] = match network.control_plane_subnet() {
        Ok(subnet) => &subnet.cidr_blocks,
        Err(error) => {
            debug!("{}", error);
            errors.push(FieldError::invalid(
                &path.child("subnets"),
                &network.subnets,
                "ControlPlaneSubnet invalid",
                Category::Structural,
            ));
            &[]
        }
    };

    errors.extend(validate_api_server_lb(
        &network.api_server_lb,
        old.map(|o| &o.api_server_lb),
        control_plane_cidrs,
        limits,
        &path.child("apiServerLB"),
    ));

    // A NAT gateway on every node subnet is enough egress on its own.
    let node_subnet_without_nat_gateway = network
        .node_subnets()
        .any(|subnet| !subnet.is_nat_gateway_enabled());
    if node_subnet_without_nat_gateway {
        errors.extend(validate_node_outbound_lb(
            network.node_outbound_lb.as_ref(),
            old.and_then(|o| o.node_outbound_lb.as_ref()),
            &network.api_server_lb,
            limits,
            &path.child("nodeOutboundLB"),
        ));
    }

    errors.extend(validate_control_plane_outbound_lb(
        network.control_plane_outbound_lb.as_ref(),
        &network.api_server_lb,
        limits,
        &path.child("controlPlaneOutboundLB"),
    ));

    errors.extend(validate_private_dns_zone_name(network, &path.child("privateDNSZoneName")));

    errors
}
