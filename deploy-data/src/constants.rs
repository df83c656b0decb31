use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Deployment environment a specification targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    /// On-premises vSphere with a virtual distributed switch
    #[value(alias = "vsphere")]
    Vds,
    /// VMware Cloud hosted
    Vmc,
    /// VMware Cloud Foundation
    Vcf,
}

impl Env {
    pub const ALL: [Env; 3] = [Env::Vds, Env::Vmc, Env::Vcf];

    pub fn as_str(&self) -> &'static str {
        match self {
            Env::Vds => "vds",
            Env::Vmc => "vmc",
            Env::Vcf => "vcf",
        }
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClusterType {
    Shared,
    Workload,
}

impl ClusterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClusterType::Shared => "shared",
            ClusterType::Workload => "workload",
        }
    }
}

impl fmt::Display for ClusterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct AkoType;

impl AkoType {
    pub const SHARED_CLUSTER_SELECTOR: &'static str = "tanzu-ako-for-shared-services-cluster";
    pub const WORKLOAD_CLUSTER_SELECTOR: &'static str = "tanzu-ako-for-workload-cluster";
}

pub struct SegmentsName;

impl SegmentsName {
    pub const DISPLAY_NAME_TKG_WORKLOAD: &'static str = "TKG-Workload";
}

/// Template resource identifiers
pub struct Paths;

impl Paths {
    pub const TKG_CLUSTER_14_SPEC_J2: &'static str = "tkg_cluster_14_spec.yaml.j2";
    pub const TKG_VMC_CLUSTER_14_SPEC_J2: &'static str = "tkg_vmc_cluster_14_spec.yaml.j2";
}

/// Size class that switches on explicit cpu/disk/memory values
pub const CUSTOM_SIZE: &str = "custom";
