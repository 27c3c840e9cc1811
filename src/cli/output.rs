//! Output formatting for CLI commands.
//!
//! Supports two modes: human-readable tables (default) and JSON (--json).

use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::Result;

/// Output mode for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Table
        }
    }
}

/// Render rows as a table, or `(no results)` when empty.
pub fn render_table<T: Tabled>(items: &[T]) -> String {
    if items.is_empty() {
        "(no results)".to_string()
    } else {
        Table::new(items).to_string()
    }
}

/// Print a vec of Tabled + Serialize items in the chosen mode.
pub fn print_items<T: Tabled + Serialize>(items: &[T], mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Table => println!("{}", render_table(items)),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(items)?),
    }
    Ok(())
}

/// Print a single Serialize item as JSON.
pub fn print_json<T: Serialize + ?Sized>(item: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(item)?);
    Ok(())
}

/// Print a section heading.
pub fn print_heading(title: &str) {
    println!("\x1b[36m{title}\x1b[0m");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct Row {
        name: String,
    }

    #[test]
    fn test_render_empty_table() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(render_table(&rows), "(no results)");
    }

    #[test]
    fn test_render_table_contains_cells() {
        let rows = vec![Row { name: "Cented".to_string() }];
        let table = render_table(&rows);
        assert!(table.contains("name"));
        assert!(table.contains("Cented"));
    }
}
