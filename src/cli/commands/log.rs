use crate::cli::commands::open_store;
use crate::cli::parser::{Cli, Commands};
use crate::cli::session::login;
use crate::config::Config;
use crate::core::log::ActivityLogic;
use crate::errors::AppResult;
use crate::models::user::Role;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = &cli.command {
        let store = open_store(cfg)?;
        login(cli, &store, Role::Admin)?;

        if *print {
            ActivityLogic::print(&store)?;
        }
    }

    Ok(())
}
