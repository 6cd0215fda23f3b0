//! Credential loading.
//!
//! Each `NC_*` key is taken from the process environment first, then from a
//! flat JSON config file. Blank values count as missing. Completeness is
//! checked later, when the provider is built.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use namecheap_provider::{
    KEY_API_KEY, KEY_API_USER, KEY_CLIENT_IP, KEY_ENDPOINT, KEY_USERNAME, NamecheapCredentials,
};
use serde_json::Value;
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "config.json";
const APP_DIR_NAME: &str = "namecheap-manager";

/// Keys read from the environment and the config file.
pub const CONFIG_KEYS: [&str; 5] = [
    KEY_API_USER,
    KEY_API_KEY,
    KEY_USERNAME,
    KEY_CLIENT_IP,
    KEY_ENDPOINT,
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{}: expected a JSON object of NC_* keys", path.display())]
    NotAnObject { path: PathBuf },

    #[error("{}: value of {key} must be a string", path.display())]
    NotAString { path: PathBuf, key: String },
}

/// Config file to read, if any.
///
/// An explicit path must exist. Otherwise `./config.json`, then
/// `<config dir>/namecheap-manager/config.json`, whichever exists first.
pub fn locate_config_file(explicit: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        return Ok(Some(path.to_path_buf()));
    }

    let candidates = [
        Some(PathBuf::from(CONFIG_FILE_NAME)),
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)),
    ];

    Ok(candidates.into_iter().flatten().find(|p| p.is_file()))
}

/// Read the known keys from a flat JSON object. Unknown keys are ignored.
pub fn read_config_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Object(object) = value else {
        return Err(ConfigError::NotAnObject {
            path: path.to_path_buf(),
        });
    };

    let mut values = HashMap::new();
    for (key, value) in object {
        if !CONFIG_KEYS.contains(&key.as_str()) {
            tracing::debug!("Ignoring unknown config key {key} in {}", path.display());
            continue;
        }
        match value {
            Value::String(s) => {
                values.insert(key, s);
            }
            Value::Null => {}
            _ => {
                return Err(ConfigError::NotAString {
                    path: path.to_path_buf(),
                    key,
                });
            }
        }
    }

    Ok(values)
}

/// Merge environment and file values per key; the environment wins.
pub fn resolve<F>(env: F, file: &HashMap<String, String>) -> NamecheapCredentials
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |v: &String| !v.trim().is_empty();

    let merged: HashMap<String, String> = CONFIG_KEYS
        .iter()
        .filter_map(|key| {
            env(*key)
                .filter(non_blank)
                .or_else(|| file.get(*key).filter(|v| non_blank(v)).cloned())
                .map(|v| ((*key).to_string(), v))
        })
        .collect();

    NamecheapCredentials::from_map(&merged)
}

/// Load credentials from the process environment and the located config file.
pub fn load(explicit: Option<&Path>) -> Result<NamecheapCredentials, ConfigError> {
    let file = match locate_config_file(explicit)? {
        Some(path) => {
            tracing::debug!("Reading config file {}", path.display());
            read_config_file(&path)?
        }
        None => {
            tracing::debug!("No config file found, using the environment only");
            HashMap::new()
        }
    };

    Ok(resolve(|key| std::env::var(key).ok(), &file))
}
