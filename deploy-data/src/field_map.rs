//! Declarative tables describing where each environment keeps its fields.
//!
//! Paths are dotted keys understood by [`common::SpecNode::node`]. Cluster
//! field names are relative to the cluster's component node, everything else
//! is relative to the document root.

use crate::constants::{AkoType, ClusterType, Env};

/// Where a cluster's network name comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkSource {
    /// Fixed segment display name
    Literal(&'static str),
    /// Field relative to the component node
    Field(&'static str),
    /// Field addressed from the document root
    Root(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterFields {
    pub component: &'static str,
    pub ako_name: &'static str,
    pub cluster_name: &'static str,
    pub network: NetworkSource,
    pub cluster_cidr: &'static str,
    pub service_cidr: &'static str,
    pub size: &'static str,
    pub cpu_size: &'static str,
    pub storage_size: &'static str,
    pub memory_size: &'static str,
    pub rbac: &'static str,
    pub base_os: &'static str,
    pub machine_count: &'static str,
    pub deployment_type: &'static str,
    pub kube_version: &'static str,
    pub cluster_group: &'static str,
}

impl ClusterFields {
    pub const fn workload(component: &'static str, network: NetworkSource) -> Self {
        Self {
            component,
            ako_name: AkoType::WORKLOAD_CLUSTER_SELECTOR,
            cluster_name: "tkgWorkloadClusterName",
            network,
            cluster_cidr: "tkgWorkloadClusterCidr",
            service_cidr: "tkgWorkloadServiceCidr",
            size: "tkgWorkloadSize",
            cpu_size: "tkgWorkloadCpuSize",
            storage_size: "tkgWorkloadStorageSize",
            memory_size: "tkgWorkloadMemorySize",
            rbac: "tkgWorkloadRbacUserRoleSpec",
            base_os: "tkgWorkloadBaseOs",
            machine_count: "tkgWorkloadWorkerMachineCount",
            deployment_type: "tkgWorkloadDeploymentType",
            kube_version: "tkgWorkloadKubeVersion",
            cluster_group: "tkgWorkloadClusterGroupName",
        }
    }

    pub const fn shared(
        component: &'static str,
        cluster_name: &'static str,
        network: NetworkSource,
    ) -> Self {
        Self {
            component,
            ako_name: AkoType::SHARED_CLUSTER_SELECTOR,
            cluster_name,
            network,
            cluster_cidr: "tkgSharedserviceClusterCidr",
            service_cidr: "tkgSharedserviceServiceCidr",
            size: "tkgSharedserviceSize",
            cpu_size: "tkgSharedserviceCpuSize",
            storage_size: "tkgSharedserviceStorageSize",
            memory_size: "tkgSharedserviceMemorySize",
            rbac: "tkgSharedserviceRbacUserRoleSpec",
            base_os: "tkgSharedserviceBaseOs",
            machine_count: "tkgSharedserviceWorkerMachineCount",
            deployment_type: "tkgSharedserviceDeploymentType",
            kube_version: "tkgSharedserviceKubeVersion",
            cluster_group: "tkgSharedserviceClusterGroupName",
        }
    }
}

/// Everything an environment assembler needs to locate in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvLayout {
    pub env: Env,
    pub identity_mgmt_type: &'static str,
    pub ceip: &'static str,
    /// `None` when the environment never attaches proxy data
    pub proxy_spec: Option<&'static str>,
    pub template: &'static str,
    pub shared: ClusterFields,
    pub workload: ClusterFields,
}

impl EnvLayout {
    pub fn cluster(&self, cluster_type: ClusterType) -> &ClusterFields {
        match cluster_type {
            ClusterType::Shared => &self.shared,
            ClusterType::Workload => &self.workload,
        }
    }
}
