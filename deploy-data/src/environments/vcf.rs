use crate::{
    constants::{Env, Paths},
    field_map::{ClusterFields, EnvLayout, NetworkSource},
};

use super::Environment;

pub static LAYOUT: EnvLayout = EnvLayout {
    env: Env::Vcf,
    identity_mgmt_type: "tkgComponentSpec.identityManagementSpec.identityManagementType",
    ceip: "envSpec.ceipParticipation",
    proxy_spec: Some("envSpec.proxySpec"),
    template: Paths::TKG_CLUSTER_14_SPEC_J2,
    shared: ClusterFields::shared(
        "tkgComponentSpec.tkgSharedserviceSpec",
        "tkgSharedserviceClusterName",
        NetworkSource::Root("tkgComponentSpec.tkgSharedserviceSpec.tkgSharedserviceNetworkName"),
    ),
    workload: ClusterFields::workload(
        "tkgWorkloadComponents",
        NetworkSource::Field("tkgWorkloadNetworkName"),
    ),
};

pub struct Vcf;

impl Environment for Vcf {
    fn env(&self) -> Env {
        Env::Vcf
    }

    fn layout(&self) -> &'static EnvLayout {
        &LAYOUT
    }
}
