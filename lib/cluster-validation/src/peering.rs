//! Vnet peering checks

use cluster_api::v1beta1::VnetPeeringSpec;
use std::collections::HashSet;

use crate::field::{ErrorList, FieldError, FieldPath};

/// Each remote vnet may be peered once
pub fn validate_vnet_peerings(peerings: &[VnetPeeringSpec], path: &FieldPath) -> ErrorList {
    let mut errors = ErrorList::new();
    let mut identities: HashSet<String> = HashSet::with_capacity(peerings.len());

    for peering in peerings {
        let identity = peering.identity();
        if identities.contains(&identity) {
            errors.push(FieldError::duplicate(path, &identity));
        } else {
            identities.insert(identity);
        }
    }

    errors
}
