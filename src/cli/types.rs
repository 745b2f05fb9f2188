use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::infrastructure::config::{SettingsLoader, DEFAULT_ENV_FILE};
use crate::infrastructure::logging::{LogConfig, LogFormat, RotationPolicy};

#[derive(Parser, Debug)]
#[command(name = "evidence-anchor")]
#[command(about = "Inspect the evidence-anchor runtime settings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Env file to read before the process environment
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Ignore the env file and use only the process environment
    #[arg(long, global = true, conflicts_with = "env_file")]
    pub no_env_file: bool,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log format on stderr: json or pretty
    #[arg(long, global = true, env = "LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,

    /// Also write JSON logs to a rolling file in this directory
    #[arg(long, global = true, env = "LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Rotation of the log file: daily, hourly or never
    #[arg(long, global = true, env = "LOG_ROTATION", default_value = "daily")]
    pub log_rotation: RotationPolicy,
}

impl Cli {
    /// Settings loader honoring the env file flags
    pub fn loader(&self) -> SettingsLoader {
        if self.no_env_file {
            SettingsLoader::new().without_env_file()
        } else {
            SettingsLoader::new().env_file(&self.env_file)
        }
    }

    /// Logging configuration from the global flags
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: self.log_format,
            log_dir: self.log_dir.clone(),
            rotation: self.log_rotation,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Settings inspection commands
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsCommands {
    /// Show the effective settings
    Show {
        /// Print secret values in clear text
        #[arg(long)]
        reveal_secrets: bool,
    },

    /// List every setting with its variable, default and description
    Describe,

    /// Report advisory warnings about the effective settings
    Check,
}
