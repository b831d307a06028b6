pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{LocalFilesystem, RecordingFilesystem};
pub use app::{run, RunOutcome};
pub use config::{Settings, DEFAULT_PROJECT_NAME};
pub use crate::core::{gitignore::render_git_ignore, scaffold::ScaffoldBuilder};
pub use domain::model::ScaffoldReport;
pub use utils::error::{Result, ScaffoldError};
