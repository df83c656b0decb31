use crate::{
    constants::{Env, Paths, SegmentsName},
    field_map::{ClusterFields, EnvLayout, NetworkSource},
};

use super::Environment;

/// Clusters land on the fixed workload segment and never carry proxy data
pub static LAYOUT: EnvLayout = EnvLayout {
    env: Env::Vmc,
    identity_mgmt_type: "componentSpec.identityManagementSpec.identityManagementType",
    ceip: "ceipParticipation",
    proxy_spec: None,
    template: Paths::TKG_VMC_CLUSTER_14_SPEC_J2,
    shared: ClusterFields::shared(
        "componentSpec.tkgSharedServiceSpec",
        "tkgSharedClusterName",
        NetworkSource::Literal(SegmentsName::DISPLAY_NAME_TKG_WORKLOAD),
    ),
    workload: ClusterFields::workload(
        "componentSpec.tkgWorkloadSpec",
        NetworkSource::Literal(SegmentsName::DISPLAY_NAME_TKG_WORKLOAD),
    ),
};

pub struct Vmc;

impl Environment for Vmc {
    fn env(&self) -> Env {
        Env::Vmc
    }

    fn layout(&self) -> &'static EnvLayout {
        &LAYOUT
    }
}
