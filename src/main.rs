//! herdbook main entrypoint.

use herdbook::run;
use herdbook::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
