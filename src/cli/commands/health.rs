use crate::cli::commands::{audit, normalize_id, open_store};
use crate::cli::parser::{Cli, Commands, HealthAction};
use crate::cli::session::login;
use crate::config::Config;
use crate::core::health::{HealthLogic, StatusChange};
use crate::errors::AppResult;
use crate::models::health_record::NewHealthCheck;
use crate::models::user::Role;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::date;
use crate::utils::table::print_records;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Health { action } = &cli.command else {
        return Ok(());
    };

    let store = open_store(cfg)?;

    match action {
        HealthAction::Record {
            id,
            symptoms,
            action,
        } => {
            let session = login(cli, &store, Role::Worker)?;
            let livestock_id = normalize_id(id);

            let outcome = HealthLogic::record(
                &store,
                NewHealthCheck {
                    livestock_id: livestock_id.clone(),
                    symptoms: symptoms.clone(),
                    action_taken: action.clone(),
                    recorded_by: session.username.clone(),
                    date: date::today(),
                },
            )?;

            audit(
                &store,
                &session,
                "health",
                &outcome.record.id,
                &format!("{}: {}", livestock_id, outcome.record.symptoms),
            );
            success(format!(
                "Health record {} for {} saved.",
                outcome.record.id, livestock_id
            ));

            match outcome.status_change {
                StatusChange::MarkedSick => info(format!("Status of {livestock_id} set to 'Sick'.")),
                StatusChange::LivestockMissing => warning(format!(
                    "Could not update status: livestock {livestock_id} not found."
                )),
                StatusChange::Unchanged => {}
            }
        }

        HealthAction::History { id } => {
            login(cli, &store, Role::Admin)?;
            let livestock_id = normalize_id(id);

            let records = HealthLogic::history(&store, &livestock_id)?;
            header(format!("Health history of {livestock_id}"));
            if records.is_empty() {
                info(format!("No health records found for {livestock_id}."));
            } else {
                print_records(&records);
            }
        }
    }

    Ok(())
}
