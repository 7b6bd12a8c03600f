//! Activity log: who changed what, appended after each mutating command.

use crate::errors::AppResult;
use crate::models::activity::ActivityEntry;
use crate::store::RecordStore;
use crate::ui::messages::{info, warning};
use crate::utils::table::{pad_right, visible_width};
use ansi_term::Colour;
use chrono::Local;

/// Truncation limit for the "operation (target)" column.
const OP_TARGET_MAX: usize = 60;

/// ANSI color for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "register" => Colour::Green,
        "delete" => Colour::Red,
        "edit" | "weigh" => Colour::Yellow,
        "health" | "feed" => Colour::Cyan,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct ActivityLogic;

impl ActivityLogic {
    /// Append one entry. Failures are reported and never abort the caller.
    pub fn record<S: RecordStore>(
        store: &S,
        username: &str,
        operation: &str,
        target: &str,
        message: &str,
    ) {
        let entry = ActivityEntry {
            timestamp: Local::now().to_rfc3339(),
            username: username.to_string(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        };

        if let Err(e) = store.append_one(&entry) {
            warning(format!("Failed to write activity log: {e}"));
        }
    }

    pub fn entries<S: RecordStore>(store: &S) -> AppResult<Vec<ActivityEntry>> {
        store.load_all()
    }

    pub fn print<S: RecordStore>(store: &S) -> AppResult<()> {
        let entries = Self::entries(store)?;
        if entries.is_empty() {
            info("Activity log is empty.");
            return Ok(());
        }

        let rendered: Vec<(String, String, String, &str)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.timestamp)
                    .map(|dt| dt.format("%F %T").to_string())
                    .unwrap_or_else(|_| e.timestamp.clone());

                let mut op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                if op_target.chars().count() > OP_TARGET_MAX {
                    op_target = op_target.chars().take(OP_TARGET_MAX - 3).collect();
                    op_target.push_str("...");
                }

                // only the operation word is colored
                let colored = match op_target.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color_for_operation(&e.operation).paint(op), rest),
                    None => color_for_operation(&e.operation).paint(op_target.as_str()).to_string(),
                };

                (date, e.username.clone(), colored, e.message.as_str())
            })
            .collect();

        let user_w = rendered.iter().map(|r| visible_width(&r.1)).max().unwrap_or(0);
        let op_w = rendered.iter().map(|r| visible_width(&r.2)).max().unwrap_or(0);

        println!("📜 Activity log:\n");
        for (date, user, op, message) in &rendered {
            println!(
                "{} | {} | {} => {}",
                date,
                pad_right(user, user_w),
                pad_right(op, op_w),
                message
            );
        }

        Ok(())
    }
}
