//! Table rendering for CLI listings.

use crate::ui::messages::info;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Terminal columns occupied by `s`, ignoring color codes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{s}{}", " ".repeat(pad))
}

/// Records that can be shown as table rows.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn from_records<R: Tabular>(records: &[R]) -> Self {
        let mut table = Table::new(R::HEADERS);
        for record in records {
            table.add_row(record.cells());
        }
        table
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .fold(visible_width(h), usize::max)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let line = |cells: &[String]| -> String {
            widths
                .iter()
                .enumerate()
                .map(|(i, w)| pad_right(cells.get(i).map(String::as_str).unwrap_or(""), *w))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let mut out = String::new();

        // Header
        let header = line(&self.headers);
        out.push_str(&header);
        out.push('\n');
        out.push_str(&"-".repeat(visible_width(&header)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            out.push_str(&line(row));
            out.push('\n');
        }

        out
    }
}

/// Print `records` as a table, or a notice when there is nothing to show.
pub fn print_records<R: Tabular>(records: &[R]) {
    if records.is_empty() {
        info("No data to display.");
        return;
    }
    print!("\n{}", Table::from_records(records).render());
}
