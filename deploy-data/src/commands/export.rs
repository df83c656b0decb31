use anyhow::Result;
use common::config::OutputFormat;

use crate::args::{Cli, ExportArgs, Format};

pub fn export(cli: &Cli, args: &ExportArgs) -> Result<()> {
    let (config, data) = super::load(cli, &args.spec)?;
    let format = match args.format {
        Some(f) => f,
        None => match config.output.format {
            OutputFormat::Yaml => Format::Yaml,
            OutputFormat::Json => Format::Json,
        },
    };

    let out = match format {
        Format::Yaml => serde_yaml::to_string(&data)?,
        Format::Json => serde_json::to_string_pretty(&data)?,
    };
    println!("{}", out.trim_end());
    Ok(())
}
