//! Path utilities: expand ~, check output targets before overwriting.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{ask_confirmation, info};
use std::io;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Check whether a file may be created or overwritten.
///
/// - path does NOT exist → Ok
/// - path exists and `force` → Ok
/// - path exists otherwise → asks the user
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if ask_confirmation(&format!("'{}' already exists. Overwrite?", path.display())) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "Operation cancelled: existing file not overwritten",
        )))
    }
}
