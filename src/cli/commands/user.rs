use crate::cli::commands::{audit, open_store};
use crate::cli::parser::{Cli, Commands, UserAction};
use crate::cli::session::login;
use crate::config::Config;
use crate::core::auth::{AuthLogic, PlaintextVerifier};
use crate::errors::{AppError, AppResult};
use crate::models::user::Role;
use crate::ui::messages::{header, success};
use crate::utils::table::print_records;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::User { action } = &cli.command else {
        return Ok(());
    };

    let store = open_store(cfg)?;
    let session = login(cli, &store, Role::Admin)?;

    match action {
        UserAction::Add {
            username,
            new_password,
        } => {
            let username = username.trim();
            if username.is_empty() {
                return Err(AppError::Other("username must not be empty".into()));
            }

            let account =
                AuthLogic::register_worker(&store, &PlaintextVerifier, username, new_password)?;
            audit(&store, &session, "register", &account.username, "worker account");
            success(format!("Worker account '{}' registered.", account.username));
        }

        UserAction::List => {
            header("Accounts");
            print_records(&AuthLogic::list_users(&store)?);
        }
    }

    Ok(())
}
