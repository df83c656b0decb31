use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use deploy_data::{ClusterType, Env};

#[derive(Debug, Parser)]
#[command(name = "deploy-data")]
#[command(author, version, about = "Flatten TKG deployment specs into cluster template data", long_about = None)]
pub struct Cli {
    /// Verbose logging
    #[arg(long, short, action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Configuration file
    #[arg(long, short, default_value = "deploy-data.toml")]
    pub file: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the assembled deployment data
    Show(SpecArgs),
    /// Export the flat cluster data as yaml or json
    Export(ExportArgs),
    /// Render the cluster deployment manifest
    Render(RenderArgs),
    /// List supported environments
    Ls,
}

#[derive(Debug, Args)]
pub struct SpecArgs {
    /// Target environment
    #[arg(long, short, value_enum)]
    pub env: Env,

    /// Cluster to build data for
    #[arg(long, short, value_enum)]
    pub cluster_type: ClusterType,

    /// Deployment specification (yaml or json)
    #[arg(long, short)]
    pub spec: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub spec: SpecArgs,

    /// Output format, defaults to the configured one
    #[arg(long, value_enum)]
    pub format: Option<Format>,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub spec: SpecArgs,

    /// Write the manifest here instead of stdout
    #[arg(long, short)]
    pub output: Option<String>,
}
