use crate::cli::commands::{audit, normalize_id, open_store};
use crate::cli::parser::{Cli, Commands};
use crate::cli::session::login;
use crate::config::Config;
use crate::core::livestock::LivestockLogic;
use crate::errors::AppResult;
use crate::models::user::Role;
use crate::ui::messages::success;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Weigh { id, weight } = &cli.command {
        let store = open_store(cfg)?;
        let session = login(cli, &store, Role::Worker)?;
        let id = normalize_id(id);

        let record = LivestockLogic::update_weight(&store, &id, weight.clone())?;

        audit(&store, &session, "weigh", &id, &format!("{} kg", record.current_weight));
        success(format!(
            "Weight of {} updated to {} kg.",
            record.id, record.current_weight
        ));
    }

    Ok(())
}
