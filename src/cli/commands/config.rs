use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::env;
use std::path::Path;
use std::process::Command;

/// $EDITOR, then $VISUAL, then the platform editor.
fn default_editor() -> String {
    env::var("EDITOR")
        .or_else(|_| env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn open_in(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        let yaml = serde_yaml::to_string(cfg)
            .map_err(|e| AppError::Config(format!("cannot render configuration: {e}")))?;
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{yaml}");
    }

    if *edit_config {
        // the editor needs a file to open
        if !path.exists() {
            cfg.save()?;
        }

        let fallback = default_editor();
        let requested = editor.clone().unwrap_or_else(|| fallback.clone());

        if open_in(&requested, &path) {
            success(format!("Configuration file edited with '{requested}'"));
            return Ok(());
        }

        if requested != fallback {
            warning(format!(
                "Editor '{requested}' not available, trying '{fallback}'"
            ));
            if open_in(&fallback, &path) {
                success(format!("Configuration file edited with '{fallback}'"));
                return Ok(());
            }
        }

        return Err(AppError::Config(format!(
            "could not open {} in an editor",
            path.display()
        )));
    }

    Ok(())
}
