use crate::utils::error::{Result, ScaffoldError};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads a YAML file into an untyped value.
pub fn read_yaml<P: AsRef<Path>>(path: P) -> Result<serde_yaml::Value> {
    read_yaml_as(path)
}

/// Reads a YAML file into `T`.
pub fn read_yaml_as<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let content = read_file(path)?;
    let value = from_yaml_str(&content, path)?;
    log_loaded(path);
    Ok(value)
}

pub(crate) fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ScaffoldError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

pub fn log_loaded(path: &Path) {
    tracing::info!("{} has been successfully loaded.", path.display());
}

/// Parses YAML text that was loaded from `path`.
pub fn from_yaml_str<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T> {
    serde_yaml::from_str(content).map_err(|source| ScaffoldError::YamlError {
        path: path.to_path_buf(),
        source,
    })
}
