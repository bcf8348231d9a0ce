//! Property-based tests for the AzureCluster validators

use cluster_api::v1beta1::{
    AzureCluster, AzureClusterSpec, FrontendIP, LoadBalancerSpec, LoadBalancerType, NetworkSpec,
    PublicIPSpec, SecurityRule, Sku, SubnetRole, SubnetSpec, VnetSpec,
};
use cluster_validation::names::validate_cluster_name;
use cluster_validation::subnets::{validate_security_rule, validate_subnet_cidrs};
use cluster_validation::{validate_create, validate_update, Category, FieldPath, ValidationLimits};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use proptest::prelude::*;

/// Names of 2 to 44 characters that satisfy the cluster naming rules
fn valid_cluster_name() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9-]{0,42}[a-z0-9]"
}

fn subnet(name: &str, role: SubnetRole, cidr: String) -> SubnetSpec {
    SubnetSpec {
        name: name.to_string(),
        role,
        cidr_blocks: vec![cidr],
        ..Default::default()
    }
}

fn frontend(public_ip: &str) -> FrontendIP {
    FrontendIP {
        name: "frontend".to_string(),
        public_ip: Some(PublicIPSpec {
            name: public_ip.to_string(),
            dns_name: None,
        }),
        private_ip_address: None,
    }
}

fn public_lb(name: &str) -> LoadBalancerSpec {
    LoadBalancerSpec {
        name: name.to_string(),
        sku: Some(Sku::Standard),
        lb_type: Some(LoadBalancerType::Public),
        frontend_ips: vec![frontend(&format!("pip-{}", name))],
        idle_timeout_in_minutes: Some(4),
        ..Default::default()
    }
}

fn cluster(name: String, control_plane: u8, node: u8, idle_timeout: i32) -> AzureCluster {
    let mut node_lb = public_lb(&name);
    node_lb.idle_timeout_in_minutes = Some(idle_timeout);
    AzureCluster {
        metadata: ObjectMeta {
            name: Some(name.clone()),
            ..Default::default()
        },
        spec: AzureClusterSpec {
            resource_group: name.clone(),
            location: "eastus".to_string(),
            network_spec: NetworkSpec {
                vnet: VnetSpec {
                    resource_group: "vnet-rg".to_string(),
                    name: "vnet".to_string(),
                    cidr_blocks: vec!["10.0.0.0/8".to_string()],
                    ..Default::default()
                },
                subnets: vec![
                    subnet("cp", SubnetRole::ControlPlane, format!("10.{}.0.0/16", control_plane)),
                    subnet("node", SubnetRole::Node, format!("10.{}.0.0/16", node)),
                ],
                api_server_lb: public_lb("api"),
                node_outbound_lb: Some(node_lb),
                ..Default::default()
            },
            ..Default::default()
        },
        status: None,
    }
}

proptest! {
    #[test]
    fn valid_cluster_names_pass(name in valid_cluster_name()) {
        let errors = validate_cluster_name(&name, &FieldPath::new("metadata").child("name"));
        prop_assert!(errors.is_empty(), "{}: {:?}", name, errors);
    }

    #[test]
    fn long_cluster_names_fail(name in "[a-z0-9]{45,80}") {
        let errors = validate_cluster_name(&name, &FieldPath::new("metadata").child("name"));
        prop_assert!(!errors.is_empty());
        prop_assert!(errors.iter().all(|e| e.category == Category::Malformed));
    }

    #[test]
    fn uppercase_cluster_names_fail(prefix in "[a-z0-9]{1,10}", upper in "[A-Z]", suffix in "[a-z0-9]{1,10}") {
        let name = format!("{}{}{}", prefix, upper, suffix);
        let errors = validate_cluster_name(&name, &FieldPath::new("metadata").child("name"));
        prop_assert_eq!(errors.len(), 1);
    }

    #[test]
    fn subnets_inside_vnet_pass(a in 0u8..=255, b in 0u8..=255, prefix in 16u8..=30) {
        let vnet = vec!["10.0.0.0/8".to_string()];
        let block = format!("10.{}.{}.0/{}", a, b, prefix);
        prop_assert!(validate_subnet_cidrs(&[block], &vnet, &FieldPath::new("cidrBlocks")).is_empty());
    }

    #[test]
    fn subnets_outside_vnet_fail(a in 0u8..=255, b in 0u8..=255) {
        let vnet = vec!["10.0.0.0/8".to_string()];
        let block = format!("192.168.{}.{}/32", a, b);
        let errors = validate_subnet_cidrs(&[block], &vnet, &FieldPath::new("cidrBlocks"));
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors[0].category, Category::Structural);
    }

    #[test]
    fn rule_priority_bounds(priority in any::<i32>()) {
        let limits = ValidationLimits::default();
        let rule = SecurityRule { name: "rule".to_string(), priority, ..Default::default() };
        let error = validate_security_rule(&rule, &limits, &FieldPath::new("securityRules").index(0));
        prop_assert_eq!(error.is_none(), (100..=4096).contains(&priority));
    }

    #[test]
    fn valid_clusters_accept_no_op_updates(
        name in valid_cluster_name(),
        control_plane in 0u8..=127,
        node in 128u8..=255,
        idle_timeout in 4i32..=30,
    ) {
        let cluster = cluster(name, control_plane, node, idle_timeout);
        prop_assert!(validate_create(&cluster).is_ok());
        prop_assert!(validate_update(&cluster, &cluster).is_ok());
    }

    #[test]
    fn out_of_range_idle_timeout_rejected(idle_timeout in prop_oneof![0i32..4, 31i32..1000]) {
        let cluster = cluster("test-cluster".to_string(), 0, 1, idle_timeout);
        let err = validate_create(&cluster).unwrap_err();
        prop_assert_eq!(err.errors().len(), 1);
        prop_assert_eq!(err.errors()[0].category, Category::Range);
    }
}
