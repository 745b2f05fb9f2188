//! Env file layer.
//!
//! Parses `KEY=VALUE` files with dotenvy without touching the process
//! environment. Keys are lowercased; a missing file reads as empty and
//! malformed lines are skipped with a warning.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

use super::loader::SettingsError;

/// Read an env file into a key/value layer.
pub fn read(path: &Path) -> Result<BTreeMap<String, String>, SettingsError> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(err) if err.not_found() => {
            debug!(path = %path.display(), "env file not found, skipping");
            return Ok(BTreeMap::new());
        }
        Err(err) => return Err(read_error(path, err)),
    };

    let mut values = BTreeMap::new();
    for entry in entries {
        match entry {
            Ok((key, value)) => {
                values.insert(key.to_ascii_lowercase(), value);
            }
            Err(dotenvy::Error::Io(source)) => {
                return Err(SettingsError::EnvFileRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping malformed env file entry");
            }
        }
    }

    debug!(path = %path.display(), keys = values.len(), "env file read");
    Ok(values)
}

fn read_error(path: &Path, err: dotenvy::Error) -> SettingsError {
    let source = match err {
        dotenvy::Error::Io(source) => source,
        other => io::Error::other(other.to_string()),
    };
    SettingsError::EnvFileRead {
        path: path.to_path_buf(),
        source,
    }
}
