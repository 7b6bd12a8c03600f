//! Login for commands that touch the farm records.

use crate::cli::parser::Cli;
use crate::core::auth::{AuthLogic, PlaintextVerifier, Session};
use crate::errors::{AppError, AppResult};
use crate::models::user::Role;
use crate::store::RecordStore;
use crate::ui::messages::prompt;

/// Authenticate with `--user`/`--password` (prompting for what is missing)
/// and check that the account holds `required`.
pub fn login<S: RecordStore>(cli: &Cli, store: &S, required: Role) -> AppResult<Session> {
    let username = match &cli.user {
        Some(u) => u.clone(),
        None => prompt("Username: ")?,
    };
    let password = match &cli.password {
        Some(p) => p.clone(),
        None => prompt("Password: ")?,
    };

    let session = AuthLogic::authenticate(store, &PlaintextVerifier, &username, &password)?
        .ok_or(AppError::AuthenticationFailed)?;

    session.require(required)?;
    Ok(session)
}
