use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One row of a layout: a directory relative to the project root (`""` is the
/// root itself) and the placeholder files created inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEntry {
    pub directory: &'static str,
    pub files: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub directories: usize,
    pub files: usize,
    pub files_created: usize,
    pub files_existing: usize,
    pub additional_directories: Vec<String>,
}

/// A single filesystem side effect, as recorded by a dry run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "path", rename_all = "snake_case")]
pub enum FsOp {
    CreateDir(PathBuf),
    Touch(PathBuf),
    Write(PathBuf),
}

impl fmt::Display for FsOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsOp::CreateDir(path) => write!(f, "create directory {}", path.display()),
            FsOp::Touch(path) => write!(f, "create file      {}", path.display()),
            FsOp::Write(path) => write!(f, "write file       {}", path.display()),
        }
    }
}
