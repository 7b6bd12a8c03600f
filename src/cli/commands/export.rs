use crate::cli::commands::{audit, open_store};
use crate::cli::parser::{Cli, Commands};
use crate::cli::session::login;
use crate::config::Config;
use crate::core::algorithms::sort::SortOrder;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::models::user::Role;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        target,
        format,
        file,
        by,
        desc,
        force,
    } = &cli.command
    {
        let store = open_store(cfg)?;
        let session = login(cli, &store, Role::Admin)?;

        let sort = by.map(|field| (field, SortOrder::from_descending(*desc)));
        let written = ExportLogic::export(&store, *target, *format, file, sort, *force)?;

        if written > 0 {
            audit(
                &store,
                &session,
                "export",
                file,
                &format!("{written} record(s) as {}", format.as_str()),
            );
        }
    }

    Ok(())
}
