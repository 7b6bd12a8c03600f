use crate::cli::commands::announce_setup;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::auth::PlaintextVerifier;
use crate::core::log::ActivityLogic;
use crate::core::setup::SetupLogic;
use crate::errors::AppResult;
use crate::store::CsvStore;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the data directory and one CSV file per collection
///  - the default administrator account, if there are no users yet
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.clone(), cli.test)?;
    let store = CsvStore::new(cfg.data_path());

    println!("⚙️  Initializing herdbook…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Data dir    : {}", store.root().display());

    let report = SetupLogic::initialize(&store, &PlaintextVerifier)?;
    announce_setup(&store, &report);

    ActivityLogic::record(
        &store,
        "system",
        "init",
        &store.root().to_string_lossy(),
        &format!("{} file(s) created", report.created.len()),
    );

    success("herdbook initialization completed!");
    Ok(())
}
