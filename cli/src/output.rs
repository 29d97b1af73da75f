//! cli/src/output.rs
//! Output utilities for CLI
//! description: This module provides helpers for rendering lookup results,
//! the registered-lookup table, and error reporting in the CLI.

use comfy_table::Table;
use console::Style;
use pluck_core::{Host, Value, value_to_json};

/// Render a single lookup result for plain-text output. Strings print bare,
/// everything else as JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Str(s) => s.clone(),
        other => value_to_json(other).to_string(),
    }
}

/// Table of registered lookups with their metadata, one row per lookup.
pub fn render_lookup_table(host: &Host, names: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["name", "version", "description", "options"]);
    for name in names {
        if let Some(meta) = host.lookup_metadata(name) {
            let options = meta
                .options
                .iter()
                .map(|o| o.name.clone())
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(vec![name.clone(), meta.version, meta.description, options]);
        }
    }
    table
}

/// Print a styled error line to stderr.
pub fn print_error(message: &str) {
    let style = Style::new().red().bold();
    eprintln!("{} {}", style.apply_to("error:"), message);
}
