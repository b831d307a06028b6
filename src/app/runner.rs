use crate::adapters::{LocalFilesystem, RecordingFilesystem};
use crate::config::Settings;
use crate::core::gitignore::render_git_ignore;
use crate::core::scaffold::ScaffoldBuilder;
use crate::domain::model::{FsOp, ScaffoldReport};
use crate::domain::ports::Filesystem;
use crate::utils::error::Result;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub report: ScaffoldReport,
    pub gitignore: Option<PathBuf>,
    /// Present only for dry runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned: Option<Vec<FsOp>>,
}

/// Scaffolds the project described by `settings`, then renders `.gitignore`
/// when requested. A dry run goes through the same steps against a
/// recording filesystem.
pub fn run(settings: &Settings) -> Result<RunOutcome> {
    if settings.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        let (report, gitignore, fs) = scaffold_with(RecordingFilesystem::new(), settings)?;
        return Ok(RunOutcome {
            report,
            gitignore,
            planned: Some(fs.into_operations()),
        });
    }

    let (report, gitignore, _) = scaffold_with(LocalFilesystem::new(), settings)?;
    Ok(RunOutcome {
        report,
        gitignore,
        planned: None,
    })
}

fn scaffold_with<F: Filesystem>(
    fs: F,
    settings: &Settings,
) -> Result<(ScaffoldReport, Option<PathBuf>, F)> {
    let builder = ScaffoldBuilder::new(fs)
        .with_base_dir(settings.base_dir.clone())
        .with_additional_directories(settings.additional_directories.iter().cloned());

    let report = builder.build(&settings.project_name)?;

    let gitignore = if settings.create_gitignore {
        Some(render_git_ignore(builder.filesystem(), &report.root)?)
    } else {
        None
    };

    Ok((report, gitignore, builder.into_filesystem()))
}
