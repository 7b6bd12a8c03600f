use crate::cli::commands::{audit, open_store};
use crate::cli::parser::{Cli, Commands};
use crate::cli::session::login;
use crate::config::Config;
use crate::core::backup::{ArchiveFormat, BackupLogic};
use crate::errors::AppResult;
use crate::models::user::Role;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        archive,
        force,
    } = &cli.command
    {
        let store = open_store(cfg)?;
        let session = login(cli, &store, Role::Admin)?;

        let format = if *compress {
            Some(archive.unwrap_or_else(ArchiveFormat::platform_default))
        } else {
            None
        };

        let written = BackupLogic::backup(&store, Path::new(file), format, *force)?;

        audit(
            &store,
            &session,
            "backup",
            &written.to_string_lossy(),
            if format.is_some() {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );
        success(format!("Backup created: {}", written.display()));
    }

    Ok(())
}
