use crate::{
    constants::{Env, Paths},
    field_map::{ClusterFields, EnvLayout, NetworkSource},
};

use super::Environment;

/// Shared services clusters ride on the management components and network
pub static LAYOUT: EnvLayout = EnvLayout {
    env: Env::Vds,
    identity_mgmt_type: "tkgComponentSpec.identityManagementSpec.identityManagementType",
    ceip: "envSpec.ceipParticipation",
    proxy_spec: Some("envSpec.proxySpec"),
    template: Paths::TKG_CLUSTER_14_SPEC_J2,
    shared: ClusterFields::shared(
        "tkgComponentSpec.tkgMgmtComponents",
        "tkgSharedserviceClusterName",
        NetworkSource::Root("tkgComponentSpec.tkgMgmtComponents.tkgMgmtNetworkName"),
    ),
    workload: ClusterFields::workload(
        "tkgWorkloadComponents",
        NetworkSource::Field("tkgWorkloadNetworkName"),
    ),
};

pub struct Vds;

impl Environment for Vds {
    fn env(&self) -> Env {
        Env::Vds
    }

    fn layout(&self) -> &'static EnvLayout {
        &LAYOUT
    }
}
