use std::fmt;

use common::{Error, Result, SpecNode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    constants::{ClusterType, CUSTOM_SIZE},
    deployment::{identity_mgmt_config, os_version},
    field_map::{ClusterFields, EnvLayout, NetworkSource},
};

/// Flat deployment parameters of a single cluster, fed to the templates
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterDeployData {
    pub cluster_type: String,
    pub cluster_name: String,
    pub cluster_network: String,
    pub ako_name: String,
    pub cluster_cidr: String,
    pub service_cidr: String,
    pub pod_cidr: String,
    pub cluster_size: String,
    pub cpu_size: String,
    pub disk_size: String,
    pub mem_size_gb: String,
    pub control_plane_mem_mb: String,
    pub os_name: String,
    pub os_version: String,
    pub kube_version: String,
    pub cluster_plan: String,
    pub machine_count: String,
    pub cluster_group: String,
    pub cluster_admin_users: String,
    pub admin_users: String,
    pub edit_users: String,
    pub view_users: String,
}

impl ClusterDeployData {
    /// Map one cluster's component node onto the flat record
    pub fn from_spec(
        root: &SpecNode<'_>,
        fields: &ClusterFields,
        cluster_type: ClusterType,
    ) -> Result<Self> {
        let component = root.node(fields.component)?;
        debug!("building {cluster_type} cluster data from {}", component.path());

        let cluster_size = component.str_field(fields.size)?;
        let sizing = cluster_node_config(&component, fields, &cluster_size)?;
        let rbac = identity_mgmt_config(&component.node(fields.rbac)?)?;
        let os_name = component.str_field(fields.base_os)?;
        let os_version = os_version(&os_name)?.to_owned();
        let cluster_network = match fields.network {
            NetworkSource::Literal(name) => name.to_owned(),
            NetworkSource::Field(path) => component.str_field(path)?,
            NetworkSource::Root(path) => root.str_field(path)?,
        };
        let cluster_cidr = component.str_field(fields.cluster_cidr)?;

        Ok(Self {
            cluster_type: cluster_type.to_string(),
            cluster_name: component.str_field(fields.cluster_name)?,
            cluster_network,
            ako_name: fields.ako_name.to_owned(),
            pod_cidr: cluster_cidr.clone(),
            cluster_cidr,
            service_cidr: component.str_field(fields.service_cidr)?,
            cluster_size,
            cpu_size: sizing.cpu_size,
            disk_size: sizing.disk_size,
            mem_size_gb: sizing.mem_size_gb,
            control_plane_mem_mb: sizing.control_plane_mem_mb,
            os_name,
            os_version,
            kube_version: component.str_field(fields.kube_version)?,
            cluster_plan: component.str_field(fields.deployment_type)?,
            machine_count: component.str_field(fields.machine_count)?,
            cluster_group: component.str_field(fields.cluster_group)?,
            cluster_admin_users: rbac.cluster_admin_users,
            admin_users: rbac.admin_users,
            edit_users: rbac.edit_users,
            view_users: rbac.view_users,
        })
    }
}

impl fmt::Display for ClusterDeployData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nAKO-NAME = {}\nCLUSTER-CIDR = {}\nSERVICE-CIDR = {}\nCLUSTER-SIZE = {}\nOS-NAME = {}\nOS-VERSION = {}\nKUBE-VERSION = {}",
            self.ako_name,
            self.cluster_cidr,
            self.service_cidr,
            self.cluster_size,
            self.os_name,
            self.os_version,
            self.kube_version
        )
    }
}

/// Build the cluster record for `cluster_type` using an environment's table
pub fn cluster_deploy_data(
    root: &SpecNode<'_>,
    layout: &EnvLayout,
    cluster_type: ClusterType,
) -> Result<ClusterDeployData> {
    ClusterDeployData::from_spec(root, layout.cluster(cluster_type), cluster_type)
}

/// Explicit node sizing; all empty unless the size class is `custom`
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct NodeSizing {
    pub cpu_size: String,
    pub disk_size: String,
    pub mem_size_gb: String,
    pub control_plane_mem_mb: String,
}

pub fn cluster_node_config(
    component: &SpecNode<'_>,
    fields: &ClusterFields,
    cluster_size: &str,
) -> Result<NodeSizing> {
    if !cluster_size.eq_ignore_ascii_case(CUSTOM_SIZE) {
        return Ok(NodeSizing::default());
    }

    let cpu_size = component.str_field(fields.cpu_size)?;
    let disk_size = component.str_field(fields.storage_size)?;
    let memory = component.node(fields.memory_size)?;
    let mem_size_gb = memory.scalar()?;
    let gb: i64 = mem_size_gb
        .trim()
        .parse()
        .map_err(|source| Error::InvalidMemorySize {
            path: memory.path().to_owned(),
            value: mem_size_gb.clone(),
            source,
        })?;
    let mb = gb
        .checked_mul(1024)
        .ok_or_else(|| Error::MemoryOverflow(mem_size_gb.clone()))?;

    Ok(NodeSizing {
        cpu_size,
        disk_size,
        mem_size_gb,
        control_plane_mem_mb: mb.to_string(),
    })
}
