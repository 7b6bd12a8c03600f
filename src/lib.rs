//! herdbook library root.
//! Exposes the CLI parser, the high-level run() function, the record store
//! and the domain logic used by the commands.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Livestock { .. } => cli::commands::livestock::handle(cli, cfg),
        Commands::Weigh { .. } => cli::commands::weigh::handle(cli, cfg),
        Commands::Health { .. } => cli::commands::health::handle(cli, cfg),
        Commands::Feed { .. } => cli::commands::feed::handle(cli, cfg),
        Commands::Report { .. } => cli::commands::report::handle(cli, cfg),
        Commands::User { .. } => cli::commands::user::handle(cli, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // configuration is loaded once
    let mut cfg = Config::load()?;

    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    dispatch(&cli, &cfg)
}
