use anyhow::Result;
use common::{
    config::{parse_config, Config},
    exit, SpecTree,
};
use deploy_data::{DeploymentData, ResourceLoader};

use crate::args::{Cli, SpecArgs};

pub mod export;
pub mod ls;
pub mod render;
pub mod show;

/// Read the tool config and spec document, then assemble the cluster data
pub fn load(cli: &Cli, args: &SpecArgs) -> Result<(Config, DeploymentData)> {
    let config = parse_config(&cli.file)?;

    let spec = match SpecTree::from_file(&args.spec) {
        Ok(s) => s,
        Err(err) => exit!(err, "Could not read specification {}", args.spec),
    };

    let loader = match &config.templates.dir {
        Some(dir) => ResourceLoader::with_dir(dir),
        None => ResourceLoader::embedded(),
    };

    let data = match deploy_data::deploy_data(args.env, &spec, args.cluster_type, &loader) {
        Ok(d) => d,
        Err(err) => exit!(
            err,
            "Could not assemble {} cluster data for {}",
            args.cluster_type,
            args.env
        ),
    };
    Ok((config, data))
}
