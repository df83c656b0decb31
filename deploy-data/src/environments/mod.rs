use common::SpecTree;
use tracing::info;

use crate::{
    cluster::cluster_deploy_data,
    constants::{ClusterType, Env},
    deployment::{shared_proxy_data, workload_proxy_data, DeploymentData, ProxyCert},
    error::Result,
    field_map::EnvLayout,
    template::ResourceLoader,
};

mod vcf;
mod vds;
mod vmc;

pub use vcf::Vcf;
pub use vds::Vds;
pub use vmc::Vmc;

pub const ENVIRONMENTS: &[&'static dyn Environment] = &[&Vds, &Vmc, &Vcf];

pub trait Environment {
    fn env(self: &Self) -> Env;
    /// Field locations for this environment's documents
    fn layout(self: &Self) -> &'static EnvLayout;

    fn name(self: &Self) -> String {
        self.env().to_string()
    }

    fn deploy_data(
        self: &Self,
        spec: &SpecTree,
        cluster_type: ClusterType,
        loader: &ResourceLoader,
    ) -> Result<DeploymentData> {
        assemble(self.layout(), spec, cluster_type, loader)
    }
}

pub fn get_environment(env: Env) -> &'static dyn Environment {
    match env {
        Env::Vds => &Vds,
        Env::Vmc => &Vmc,
        Env::Vcf => &Vcf,
    }
}

/// Build the deployment data of one cluster; any missing required field aborts
pub fn assemble(
    layout: &EnvLayout,
    spec: &SpecTree,
    cluster_type: ClusterType,
    loader: &ResourceLoader,
) -> Result<DeploymentData> {
    let root = spec.root();
    let identity_mgmt_type = root.str_field(layout.identity_mgmt_type)?;
    let ceip = root.str_field(layout.ceip)?;
    let yaml_template = loader.read_resource(layout.template)?;
    let cluster_data = cluster_deploy_data(&root, layout, cluster_type)?;

    let (proxy_cert, is_proxy_cert) = match layout.proxy_spec {
        Some(path) => {
            let proxy_spec = match root.node(path) {
                Ok(node) => Some(node),
                Err(err) if err.is_missing_field() => None,
                Err(err) => return Err(err.into()),
            };
            let ProxyCert {
                cert,
                is_proxy_cert,
            } = match cluster_type {
                ClusterType::Shared => shared_proxy_data(proxy_spec.as_ref())?,
                ClusterType::Workload => workload_proxy_data(proxy_spec.as_ref())?,
            };
            (cert, is_proxy_cert)
        }
        None => (String::new(), String::new()),
    };

    info!(
        "assembled {cluster_type} cluster data for {} ({})",
        layout.env, cluster_data.cluster_name
    );
    Ok(DeploymentData {
        env: Some(layout.env),
        identity_mgmt_type,
        ceip,
        proxy_cert,
        is_proxy_cert,
        cluster_type: cluster_type.to_string(),
        cluster_data,
        yaml_template,
    })
}
