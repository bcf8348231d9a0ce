//! Shared fixtures for validator tests

use cluster_api::v1beta1::{
    AzureCluster, AzureClusterSpec, FrontendIP, LoadBalancerSpec, LoadBalancerType, NetworkSpec,
    PublicIPSpec, SecurityRule, Sku, SubnetRole, SubnetSpec, VnetSpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

pub fn vnet() -> VnetSpec {
    VnetSpec {
        resource_group: "my-rg".to_string(),
        name: "my-vnet".to_string(),
        cidr_blocks: vec!["10.0.0.0/8".to_string()],
        ..Default::default()
    }
}

pub fn subnet(name: &str, role: SubnetRole, cidr: &str) -> SubnetSpec {
    SubnetSpec {
        name: name.to_string(),
        role,
        cidr_blocks: vec![cidr.to_string()],
        ..Default::default()
    }
}

fn subnets() -> Vec<SubnetSpec> {
    let mut control_plane = subnet("control-plane-subnet", SubnetRole::ControlPlane, "10.0.0.0/16");
    control_plane.security_group.security_rules = vec![SecurityRule {
        name: "allow_apiserver".to_string(),
        protocol: "Tcp".to_string(),
        direction: "Inbound".to_string(),
        priority: 2201,
        destination_ports: Some("6443".to_string()),
        ..Default::default()
    }];
    vec![control_plane, subnet("node-subnet", SubnetRole::Node, "10.1.0.0/16")]
}

fn public_frontend(name: &str, public_ip: &str) -> FrontendIP {
    FrontendIP {
        name: name.to_string(),
        public_ip: Some(PublicIPSpec {
            name: public_ip.to_string(),
            dns_name: None,
        }),
        private_ip_address: None,
    }
}

fn cluster(network_spec: NetworkSpec) -> AzureCluster {
    AzureCluster {
        metadata: ObjectMeta {
            name: Some("test-cluster".to_string()),
            namespace: Some("default".to_string()),
            ..Default::default()
        },
        spec: AzureClusterSpec {
            resource_group: "test-cluster".to_string(),
            location: "westeurope".to_string(),
            network_spec,
            ..Default::default()
        },
        status: None,
    }
}

/// Bring-your-own vnet cluster behind a public API server load balancer
pub fn public_cluster() -> AzureCluster {
    cluster(NetworkSpec {
        vnet: vnet(),
        subnets: subnets(),
        api_server_lb: LoadBalancerSpec {
            name: "test-cluster-public-lb".to_string(),
            sku: Some(Sku::Standard),
            lb_type: Some(LoadBalancerType::Public),
            frontend_ips: vec![public_frontend("test-cluster-frontEnd", "pip-test-cluster-apiserver")],
            idle_timeout_in_minutes: Some(4),
            ..Default::default()
        },
        node_outbound_lb: Some(LoadBalancerSpec {
            name: "test-cluster".to_string(),
            sku: Some(Sku::Standard),
            lb_type: Some(LoadBalancerType::Public),
            frontend_ips: vec![public_frontend("test-cluster-frontEnd", "pip-test-cluster-node-outbound")],
            frontend_ips_count: Some(1),
            idle_timeout_in_minutes: Some(4),
            ..Default::default()
        }),
        ..Default::default()
    })
}

/// Bring-your-own vnet cluster behind an internal API server load balancer
pub fn internal_cluster() -> AzureCluster {
    cluster(NetworkSpec {
        vnet: vnet(),
        subnets: subnets(),
        api_server_lb: LoadBalancerSpec {
            name: "test-cluster-internal-lb".to_string(),
            sku: Some(Sku::Standard),
            lb_type: Some(LoadBalancerType::Internal),
            frontend_ips: vec![FrontendIP {
                name: "test-cluster-internal-lb-frontend".to_string(),
                public_ip: None,
                private_ip_address: Some("10.0.0.100".to_string()),
            }],
            idle_timeout_in_minutes: Some(4),
            ..Default::default()
        },
        ..Default::default()
    })
}
