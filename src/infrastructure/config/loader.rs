use figment::providers::Serialized;
use figment::Figment;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::env_file;
use crate::domain::models::Settings;

/// Env file read when no other path is given
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Settings loading error types
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read env file {}", path.display())]
    EnvFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to extract settings: {0}")]
    Extract(#[from] Box<figment::Error>),
}

/// Settings loader with layered merging
///
/// Precedence (lowest to highest):
/// 1. Declared defaults
/// 2. Env file (`.env` in the working directory unless configured otherwise)
/// 3. Environment variables (process environment unless injected)
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    env_file: Option<PathBuf>,
    environment: Option<Vec<(String, String)>>,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self {
            env_file: Some(PathBuf::from(DEFAULT_ENV_FILE)),
            environment: None,
        }
    }
}

impl SettingsLoader {
    /// Loader reading `.env` from the working directory and the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from `.env` and the process environment.
    pub fn load() -> Result<Settings, SettingsError> {
        Self::new().resolve()
    }

    /// Load settings using a specific env file and the process environment.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Settings, SettingsError> {
        Self::new().env_file(path.as_ref()).resolve()
    }

    /// Read the env file layer from `path`.
    #[must_use]
    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Skip the env file layer entirely.
    #[must_use]
    pub fn without_env_file(mut self) -> Self {
        self.env_file = None;
        self
    }

    /// Use `vars` as the environment layer instead of the process environment.
    #[must_use]
    pub fn environment<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.environment = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Read every configured layer and merge them into a `Settings`.
    pub fn resolve(&self) -> Result<Settings, SettingsError> {
        let file_layer = match &self.env_file {
            Some(path) => env_file::read(path)?,
            None => BTreeMap::new(),
        };

        let env_layer = match &self.environment {
            Some(vars) => declared_only(vars.iter().cloned()),
            None => declared_only(process_environment()),
        };

        debug!(
            file_keys = file_layer.len(),
            env_keys = env_layer.len(),
            "merging settings layers"
        );

        let settings = Self::merge(Settings::default(), file_layer, env_layer)?;

        for warning in settings.warnings() {
            warn!("{}", warning);
        }
        info!(
            rpc_url = %settings.rpc_url(),
            frontend_url = %settings.frontend_url(),
            extra_keys = settings.extras().len(),
            "settings loaded"
        );

        Ok(settings)
    }

    /// Merge the three layers, later layers overriding earlier ones key by key.
    ///
    /// Layer keys must already be lowercased. Keys of `file_layer` that no
    /// field declares end up in [`Settings::extras`].
    pub fn merge(
        defaults: Settings,
        file_layer: BTreeMap<String, String>,
        env_layer: BTreeMap<String, String>,
    ) -> Result<Settings, SettingsError> {
        let settings = Figment::new()
            .merge(Serialized::defaults(defaults))
            .merge(Serialized::defaults(file_layer))
            .merge(Serialized::defaults(env_layer))
            .extract()
            .map_err(Box::new)?;
        Ok(settings)
    }
}

/// Keep only variables naming a declared field, keyed lowercase.
///
/// Names match case-insensitively. When several spellings of one name are
/// present, the canonical uppercase spelling (`PRIVATE_KEY`) wins; among
/// other spellings the first one seen is kept.
fn declared_only<I>(vars: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut layer = BTreeMap::new();
    let mut canonical = BTreeSet::new();
    for (key, value) in vars {
        if !Settings::is_declared_key(&key) {
            continue;
        }
        let lowered = key.to_ascii_lowercase();
        if key == key.to_ascii_uppercase() {
            canonical.insert(lowered.clone());
            layer.insert(lowered, value);
        } else if !canonical.contains(&lowered) {
            layer.entry(lowered).or_insert(value);
        }
    }
    layer
}

/// Process environment, skipping entries that are not valid UTF-8.
fn process_environment() -> impl Iterator<Item = (String, String)> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
}
