use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create file {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parsing error in {}: {source}", .path.display())]
    YamlError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ScaffoldError {
    /// The underlying OS error, if this failure came from the filesystem.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            ScaffoldError::CreateDir { source, .. }
            | ScaffoldError::CreateFile { source, .. }
            | ScaffoldError::WriteFile { source, .. }
            | ScaffoldError::ReadFile { source, .. } => Some(source),
            ScaffoldError::IoError(e) => Some(e),
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        if let ScaffoldError::ReadFile { .. } = self {
            return "Check that the file exists and is readable";
        }

        if let Some(io) = self.io_error() {
            return match io.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    "Check write permissions on the target directory, then re-run; existing files are kept"
                }
                std::io::ErrorKind::NotFound => {
                    "Check that the base directory exists, then re-run"
                }
                _ => "Fix the filesystem problem (disk space, path length) and re-run; existing files are kept",
            };
        }

        match self {
            ScaffoldError::YamlError { .. } | ScaffoldError::TomlError(_) => {
                "Make sure the config file is valid TOML or YAML"
            }
            ScaffoldError::InvalidConfigValueError { .. } => {
                "Check the command line arguments and config file values"
            }
            _ => "Re-run with --verbose for more details",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
