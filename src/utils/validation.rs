use crate::utils::error::{Result, ScaffoldError};
use std::path::{Component, Path};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScaffoldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScaffoldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScaffoldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A path that must stay inside the project root: relative, no `..`.
pub fn validate_relative_path(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;

    let escapes = Path::new(path).components().any(|c| {
        matches!(
            c,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    });
    if escapes {
        return Err(ScaffoldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must be relative to the project root".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("project.name", "demo-project").is_ok());
        assert!(validate_non_empty_string("project.name", "").is_err());
        assert!(validate_non_empty_string("project.name", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("project.base_dir", "./out").is_ok());
        assert!(validate_path("project.base_dir", "").is_err());
        assert!(validate_path("project.base_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_relative_path() {
        assert!(validate_relative_path("layout.additional_directories", "cache").is_ok());
        assert!(validate_relative_path("layout.additional_directories", "data/tmp").is_ok());
        assert!(validate_relative_path("layout.additional_directories", "/tmp").is_err());
        assert!(validate_relative_path("layout.additional_directories", "../outside").is_err());
    }
}
