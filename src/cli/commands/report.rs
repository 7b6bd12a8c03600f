use crate::cli::commands::open_store;
use crate::cli::parser::{Cli, Commands};
use crate::cli::session::login;
use crate::config::Config;
use crate::core::algorithms::sort::SortOrder;
use crate::core::livestock::LivestockLogic;
use crate::errors::AppResult;
use crate::models::user::Role;
use crate::ui::messages::header;
use crate::utils::table::print_records;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { by, desc, asc } = &cli.command {
        let store = open_store(cfg)?;
        login(cli, &store, Role::Admin)?;

        let field = by.unwrap_or(cfg.report_field);
        let descending = if *desc {
            true
        } else if *asc {
            false
        } else {
            cfg.report_descending
        };
        let order = SortOrder::from_descending(descending);

        let herd = LivestockLogic::report(&store, field, order)?;
        header(format!(
            "Livestock report by {field} ({})",
            if descending { "descending" } else { "ascending" }
        ));
        print_records(&herd);
    }

    Ok(())
}
