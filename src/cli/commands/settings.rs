//! Implementation of the `evidence-anchor settings` commands.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::cli::types::SettingsCommands;
use crate::domain::models::{FieldSpec, RedactedSettings, Settings};

/// Output of `settings show`
#[derive(Debug, Serialize)]
pub struct ShowOutput {
    /// Effective values, secrets masked unless revealed
    pub settings: RedactedSettings,
    /// Whether secret values are printed in clear text
    pub secrets_revealed: bool,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let formatter = TableFormatter::new();
        let mut lines = vec![formatter.format_settings(&self.settings)];
        if !self.settings.extra.is_empty() {
            lines.push(format!(
                "\nAdditional keys from env file ({}):",
                self.settings.extra.len()
            ));
            lines.push(formatter.format_extras(&self.settings));
        }
        if !self.secrets_revealed {
            lines.push("\nSecrets are masked. Use --reveal-secrets to show them.".to_string());
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Output of `settings describe`
#[derive(Debug, Serialize)]
pub struct DescribeOutput {
    /// Catalogue entry for every declared field
    pub fields: Vec<FieldSpec>,
}

impl CommandOutput for DescribeOutput {
    fn to_human(&self) -> String {
        TableFormatter::new().format_fields(&self.fields)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Output of `settings check`
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    /// True when there is nothing to report
    pub ok: bool,
    /// Advisory warnings; never fatal
    pub warnings: Vec<String>,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        if self.warnings.is_empty() {
            return "Settings look complete.".to_string();
        }
        let mut lines = vec![format!("{} warning(s):", self.warnings.len())];
        for warning in &self.warnings {
            lines.push(format!("  - {}", warning));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl ShowOutput {
    /// Build the view of `settings`, masking secrets unless `reveal_secrets`
    pub fn new(settings: &Settings, reveal_secrets: bool) -> Self {
        Self {
            settings: if reveal_secrets {
                settings.revealed()
            } else {
                settings.redacted()
            },
            secrets_revealed: reveal_secrets,
        }
    }
}

impl DescribeOutput {
    /// Catalogue of [`Settings::FIELDS`]
    pub fn new() -> Self {
        Self {
            fields: Settings::FIELDS.to_vec(),
        }
    }
}

impl Default for DescribeOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckOutput {
    /// Collect the warnings of `settings`
    pub fn new(settings: &Settings) -> Self {
        let warnings = settings.warnings();
        Self {
            ok: warnings.is_empty(),
            warnings,
        }
    }
}

/// Run a `settings` subcommand against already loaded settings and print the result
pub fn execute(command: SettingsCommands, settings: &Settings, json_mode: bool) -> Result<()> {
    match command {
        SettingsCommands::Show { reveal_secrets } => {
            output(&ShowOutput::new(settings, reveal_secrets), json_mode);
        }
        SettingsCommands::Describe => output(&DescribeOutput::new(), json_mode),
        SettingsCommands::Check => output(&CheckOutput::new(settings), json_mode),
    }
    Ok(())
}
