//! Table output formatting for CLI commands
//!
//! Renders settings and the field catalogue using comfy-table.

use crate::domain::models::{FieldSpec, RedactedSettings, Settings};
use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
        }
    }

    /// Format effective settings, one row per declared field
    pub fn format_settings(&self, view: &RedactedSettings) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Field").add_attribute(Attribute::Bold),
            Cell::new("Variable").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        for field in Settings::FIELDS {
            let value = view.field_value(field.name).unwrap_or_default();
            let value_cell = if value.is_empty() {
                self.dim(Cell::new("(unset)"))
            } else if field.secret && self.use_colors {
                Cell::new(value).fg(Color::Yellow)
            } else {
                Cell::new(value)
            };

            table.add_row(vec![
                Cell::new(field.name),
                Cell::new(field.env_var),
                value_cell,
            ]);
        }

        table.to_string()
    }

    /// Format undeclared env file keys
    pub fn format_extras(&self, view: &RedactedSettings) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Key").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        for (key, value) in &view.extra {
            table.add_row(vec![Cell::new(key), Cell::new(value)]);
        }

        table.to_string()
    }

    /// Format the field catalogue
    pub fn format_fields(&self, fields: &[FieldSpec]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Variable").add_attribute(Attribute::Bold),
            Cell::new("Default").add_attribute(Attribute::Bold),
            Cell::new("Secret").add_attribute(Attribute::Bold),
            Cell::new("Description").add_attribute(Attribute::Bold),
        ]);

        for field in fields {
            let default_cell = if field.default.is_empty() {
                self.dim(Cell::new("(empty)"))
            } else {
                Cell::new(field.default)
            };
            let secret_cell = if field.secret {
                let cell = Cell::new("yes");
                if self.use_colors {
                    cell.fg(Color::Yellow)
                } else {
                    cell
                }
            } else {
                Cell::new("no")
            };

            table.add_row(vec![
                Cell::new(field.env_var),
                default_cell,
                secret_cell,
                Cell::new(field.description),
            ]);
        }

        table.to_string()
    }

    fn dim(&self, cell: Cell) -> Cell {
        if self.use_colors {
            cell.fg(Color::DarkGrey)
        } else {
            cell
        }
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_table_masks_secrets() {
        let formatter = TableFormatter { use_colors: false };
        let settings = crate::SettingsLoader::merge(
            Settings::default(),
            [("private_key".to_string(), "super-secret".to_string())].into(),
            Default::default(),
        )
        .unwrap();

        let output = formatter.format_settings(&settings.redacted());
        assert!(output.contains("PRIVATE_KEY"));
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("super-secret"));
        assert!(output.contains("http://127.0.0.1:8545"));
        assert!(output.contains("(unset)"));
    }

    #[test]
    fn test_fields_table_lists_every_variable() {
        let formatter = TableFormatter { use_colors: false };
        let output = formatter.format_fields(Settings::FIELDS);
        for field in Settings::FIELDS {
            assert!(output.contains(field.env_var), "missing {}", field.env_var);
        }
        assert!(output.contains("Frontend URL for CORS"));
    }
}
