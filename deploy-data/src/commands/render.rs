use std::fs;

use anyhow::Result;
use common::exit;
use deploy_data::TemplateRenderer;
use tracing::info;

use crate::{
    args::{Cli, RenderArgs},
    GREEN_TICK,
};

pub fn render(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let (_, data) = super::load(cli, &args.spec)?;
    let manifest = match TemplateRenderer::new().render(&data) {
        Ok(m) => m,
        Err(err) => exit!(err, "Could not render {} manifest", args.spec.env),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, manifest)?;
            info!("wrote manifest to {path}");
            println!(
                "{} {} cluster manifest ({}) written to {}",
                GREEN_TICK.to_string(),
                data.cluster_type,
                data.cluster_data.cluster_name,
                path
            );
        }
        None => print!("{manifest}"),
    }
    Ok(())
}
