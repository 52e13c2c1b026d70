use crate::error::{Result, ScanError};
use crate::types::config::{ReviewConfig, ScanConfig};
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "profile-scan.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".profile-scan/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/profile-scan/config.toml";

/// Loads global, project and local configuration, later files winning.
pub fn load_config(root: &Path) -> Result<ScanConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<ScanConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: ScanConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ScanError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolves the store path against the config root unless it is absolute.
pub fn resolve_store_path(root: &Path, cfg: &ScanConfig) -> PathBuf {
    let candidate = PathBuf::from(cfg.store_path());
    if candidate.is_absolute() {
        candidate
    } else {
        root.join(candidate)
    }
}

/// Credentials handed to a `ReviewGenerator` implementation when it is constructed.
///
/// Nothing resolves these implicitly; the caller building a generator calls
/// [`GeneratorCredentials::from_env`] with the review section of the loaded config.
#[derive(Clone)]
pub struct GeneratorCredentials {
    pub model: String,
    api_key: String,
}

impl GeneratorCredentials {
    pub fn from_env(review: &ReviewConfig) -> Result<Self> {
        Self::from_lookup(review, |name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(review: &ReviewConfig, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(&review.api_key_env)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ScanError::MissingCredential(review.api_key_env.clone()))?;
        Ok(Self {
            model: review.model.clone(),
            api_key,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for GeneratorCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorCredentials")
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScanError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
