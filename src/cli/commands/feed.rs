use crate::cli::commands::{audit, normalize_id, open_store};
use crate::cli::parser::{Cli, Commands, FeedAction};
use crate::cli::session::login;
use crate::config::Config;
use crate::core::algorithms::sort::SortOrder;
use crate::core::feeding::FeedingLogic;
use crate::errors::AppResult;
use crate::models::feeding::NewFeeding;
use crate::models::user::Role;
use crate::ui::messages::{header, success};
use crate::utils::date;
use crate::utils::table::print_records;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Feed { action } = &cli.command else {
        return Ok(());
    };

    let store = open_store(cfg)?;

    match action {
        FeedAction::Record {
            pen,
            feed_type,
            amount,
        } => {
            let session = login(cli, &store, Role::Worker)?;

            let entry = FeedingLogic::record(
                &store,
                NewFeeding {
                    pen_id: normalize_id(pen),
                    feed_type: feed_type.trim().to_string(),
                    amount: amount.clone(),
                    recorded_by: session.username.clone(),
                    date: date::today(),
                },
            )?;

            audit(
                &store,
                &session,
                "feed",
                &entry.id,
                &format!("{} kg {} to pen {}", entry.amount_kg, entry.feed_type, entry.pen_id),
            );
            success(format!(
                "Feeding {} for pen {} saved.",
                entry.id, entry.pen_id
            ));
        }

        FeedAction::List { pen, by, desc } => {
            login(cli, &store, Role::Admin)?;
            let pen = pen.as_deref().map(normalize_id);
            let sort = by.map(|field| (field, SortOrder::from_descending(*desc)));

            let log = FeedingLogic::list(&store, pen.as_deref(), sort)?;
            header("Feeding log");
            print_records(&log);
        }
    }

    Ok(())
}
