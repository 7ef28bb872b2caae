mod cli;
mod config;
mod naics;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => cli::commands::generate::handle_generate_command(args),
        Commands::Resolve(args) => cli::commands::lookup::handle_resolve_command(args),
        Commands::Describe(args) => cli::commands::lookup::handle_describe_command(args),
    }
}
