use crate::cli::commands::{audit, normalize_id, open_store};
use crate::cli::parser::{Cli, Commands, LivestockAction};
use crate::cli::session::login;
use crate::config::Config;
use crate::core::livestock::LivestockLogic;
use crate::errors::{AppError, AppResult};
use crate::models::livestock::{LivestockUpdate, NewLivestock};
use crate::models::user::Role;
use crate::ui::messages::{ask_confirmation, header, info, success, warning};
use crate::utils::date;
use crate::utils::table::print_records;

fn parse_birth_date(s: &str) -> AppResult<chrono::NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Livestock { action } = &cli.command else {
        return Ok(());
    };

    let store = open_store(cfg)?;

    match action {
        LivestockAction::Add {
            species,
            born,
            weight,
            pen,
        } => {
            let session = login(cli, &store, Role::Admin)?;
            let birth_date = parse_birth_date(born)?;

            let record = LivestockLogic::add(
                &store,
                NewLivestock {
                    species: species.trim().to_string(),
                    birth_date,
                    weight: weight.clone(),
                    pen_id: normalize_id(pen),
                },
            )?;

            audit(
                &store,
                &session,
                "add",
                &record.id,
                &format!("{} in pen {}", record.species, record.pen_id),
            );
            success(format!("Livestock {} added.", record.id));
        }

        LivestockAction::Edit {
            id,
            pen,
            status,
            species,
            born,
        } => {
            let session = login(cli, &store, Role::Admin)?;
            let id = normalize_id(id);

            let mut updates = Vec::new();
            if let Some(p) = pen {
                updates.push(LivestockUpdate::Pen(normalize_id(p)));
            }
            if let Some(s) = status {
                updates.push(LivestockUpdate::Status((*s).into()));
            }
            if let Some(s) = species {
                updates.push(LivestockUpdate::Species(s.trim().to_string()));
            }
            if let Some(b) = born {
                updates.push(LivestockUpdate::BirthDate(parse_birth_date(b)?));
            }

            if updates.is_empty() {
                warning("Nothing to change: pass --pen, --status, --species or --born.");
                return Ok(());
            }

            let record = LivestockLogic::apply_updates(&store, &id, &updates)?;

            let fields: Vec<String> = updates.iter().map(|u| u.field().to_string()).collect();
            audit(&store, &session, "edit", &id, &fields.join(", "));
            success(format!("Livestock {} updated.", record.id));
        }

        LivestockAction::Delete { id, yes } => {
            let session = login(cli, &store, Role::Admin)?;
            let id = normalize_id(id);

            if !*yes
                && !ask_confirmation(&format!(
                    "Delete livestock {id}? This action is irreversible."
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            LivestockLogic::delete(&store, &id)?;
            audit(&store, &session, "delete", &id, "removed from inventory");
            success(format!("Livestock {id} has been deleted."));
        }

        LivestockAction::List => {
            login(cli, &store, Role::Worker)?;
            header("Livestock");
            print_records(&LivestockLogic::list(&store)?);
        }
    }

    Ok(())
}
