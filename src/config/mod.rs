#[cfg(feature = "cli")]
pub mod cli;
pub mod file_config;
pub mod yaml;

use crate::config::file_config::ScaffoldConfig;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_relative_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_PROJECT_NAME: &str = "mlops-classification";

/// Effective settings for one run, after merging the config file and CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub project_name: String,
    pub base_dir: PathBuf,
    pub create_gitignore: bool,
    pub additional_directories: Vec<String>,
    pub log_file: Option<PathBuf>,
    pub log_format: LogFormat,
    pub verbose: bool,
    pub dry_run: bool,
    pub json: bool,
    /// Config file the settings were read from, if any.
    pub config_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            base_dir: PathBuf::from("."),
            create_gitignore: false,
            additional_directories: Vec::new(),
            log_file: None,
            log_format: LogFormat::default(),
            verbose: false,
            dry_run: false,
            json: false,
            config_file: None,
        }
    }
}

impl From<ScaffoldConfig> for Settings {
    fn from(config: ScaffoldConfig) -> Self {
        let defaults = Settings::default();
        Self {
            project_name: config.project.name.unwrap_or(defaults.project_name),
            base_dir: config
                .project
                .base_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.base_dir),
            create_gitignore: config.gitignore.enabled,
            additional_directories: config.layout.additional_directories,
            log_file: config.logging.file.map(PathBuf::from),
            log_format: config.logging.format,
            verbose: config.logging.verbose,
            ..defaults
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("project_name", &self.project_name)?;
        validate_path("project_name", &self.project_name)?;
        validate_path("base_dir", &self.base_dir.to_string_lossy())?;
        for dir in &self.additional_directories {
            validate_relative_path("additional_directories", dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.project_name, "mlops-classification");
        assert!(!settings.create_gitignore);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_from_config_file() {
        let config = ScaffoldConfig::from_toml_str(
            r#"
[project]
name = "house-credit-fraud"

[gitignore]
enabled = true

[logging]
file = "running_logs.log"
"#,
        )
        .unwrap();

        let settings = Settings::from(config);
        assert_eq!(settings.project_name, "house-credit-fraud");
        assert_eq!(settings.base_dir, PathBuf::from("."));
        assert!(settings.create_gitignore);
        assert_eq!(settings.log_file, Some(PathBuf::from("running_logs.log")));
        assert!(!settings.dry_run);
    }

    #[test]
    fn test_settings_validation_rejects_absolute_extra_dir() {
        let settings = Settings {
            additional_directories: vec!["/var/cache".to_string()],
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
