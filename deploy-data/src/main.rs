use std::env;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use console::{style, StyledObject};
use tracing_subscriber::EnvFilter;

mod args;
mod commands;

lazy_static::lazy_static! {
    static ref GREEN_TICK: StyledObject<&'static str> = style("✔").green();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Show(args) => commands::show::show(&cli, args),
        Commands::Export(args) => commands::export::export(&cli, args),
        Commands::Render(args) => commands::render::render(&cli, args),
        Commands::Ls => commands::ls::list(),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "error" };
    let filter = match env::var("LOG") {
        Ok(directives) => EnvFilter::new(directives),
        Err(_) => EnvFilter::new(default),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
