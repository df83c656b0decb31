pub mod cluster;
pub mod constants;
pub mod deployment;
pub mod environments;
pub mod error;
pub mod field_map;
pub mod template;

use common::SpecTree;

pub use cluster::ClusterDeployData;
pub use constants::{ClusterType, Env};
pub use deployment::DeploymentData;
pub use error::{Error, Result};
pub use template::{ResourceLoader, TemplateRenderer};

/// Assemble the deployment data of one cluster for `env`
pub fn deploy_data(
    env: Env,
    spec: &SpecTree,
    cluster_type: ClusterType,
    loader: &ResourceLoader,
) -> Result<DeploymentData> {
    environments::get_environment(env).deploy_data(spec, cluster_type, loader)
}
