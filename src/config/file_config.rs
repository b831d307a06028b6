use crate::config::yaml;
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_relative_path, Validate,
};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub project: ProjectConfig,
    pub gitignore: GitignoreConfig,
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: Option<String>,
    pub base_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GitignoreConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub additional_directories: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub verbose: bool,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            _ => Err(ScaffoldError::InvalidConfigValueError {
                field: "config".to_string(),
                value: path.display().to_string(),
                reason: "Unsupported config extension. Use .toml, .yaml or .yml".to_string(),
            }),
        }
    }
}

impl ScaffoldConfig {
    /// Loads a TOML or YAML config file, chosen by extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = yaml::read_file(path)?;

        let config = match format {
            ConfigFormat::Toml => Self::from_toml_str(&content)?,
            ConfigFormat::Yaml => yaml::from_yaml_str(&substitute_env_vars(&content), path)?,
        };
        tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parses TOML text after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(&substitute_env_vars(content))?)
    }
}

impl Validate for ScaffoldConfig {
    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.project.name {
            validate_non_empty_string("project.name", name)?;
            validate_path("project.name", name)?;
        }
        if let Some(base_dir) = &self.project.base_dir {
            validate_path("project.base_dir", base_dir)?;
        }
        if let Some(file) = &self.logging.file {
            validate_path("logging.file", file)?;
        }
        for dir in &self.layout.additional_directories {
            validate_relative_path("layout.additional_directories", dir)?;
        }
        Ok(())
    }
}

/// Replaces `${VAR}` with the environment value. Unset variables stay as written.
pub fn substitute_env_vars(content: &str) -> String {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
    });

    re.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
    })
    .into_owned()
}
