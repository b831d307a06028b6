use crate::core::layout::{self, ADDITIONAL_DIRECTORIES, MLOPS_LAYOUT};
use crate::domain::model::{LayoutEntry, ScaffoldReport};
use crate::domain::ports::Filesystem;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path};
use std::path::{Path, PathBuf};

/// Materializes a layout table under `<base_dir>/<project_name>`.
///
/// Every step is idempotent: directories that exist are left alone and
/// placeholder files are only created when missing, so a failed run can be
/// fixed and repeated. Nothing is rolled back on error.
pub struct ScaffoldBuilder<F: Filesystem> {
    fs: F,
    base_dir: PathBuf,
    layout: &'static [LayoutEntry],
    additional_directories: Vec<String>,
}

impl<F: Filesystem> ScaffoldBuilder<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            base_dir: PathBuf::from("."),
            layout: MLOPS_LAYOUT,
            additional_directories: ADDITIONAL_DIRECTORIES
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn with_layout(mut self, layout: &'static [LayoutEntry]) -> Self {
        self.layout = layout;
        self
    }

    /// Appends directories after the built-in ones, skipping duplicates.
    pub fn with_additional_directories<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for dir in dirs {
            let dir = dir.into();
            if !self.additional_directories.contains(&dir) {
                self.additional_directories.push(dir);
            }
        }
        self
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    pub fn into_filesystem(self) -> F {
        self.fs
    }

    pub fn additional_directories(&self) -> &[String] {
        &self.additional_directories
    }

    /// Absolute path of the project root; nothing is created.
    pub fn root_for(&self, project_name: &str) -> Result<PathBuf> {
        validate_non_empty_string("project_name", project_name)?;
        validate_path("project_name", project_name)?;
        Ok(std::path::absolute(self.base_dir.join(project_name))?)
    }

    pub fn build(&self, project_name: &str) -> Result<ScaffoldReport> {
        let root = self.root_for(project_name)?;

        self.fs.create_dir_all(&root)?;
        tracing::info!("Creating MLOps project structure in: {}", root.display());

        let mut files_created = 0;
        let mut files_existing = 0;

        for entry in self.layout {
            let dir_path = if entry.directory.is_empty() {
                root.clone()
            } else {
                let path = join_relative(&root, entry.directory);
                self.fs.create_dir_all(&path)?;
                tracing::info!("Created directory: {}", path.display());
                path
            };

            for file in entry.files {
                let file_path = dir_path.join(file);
                if self.fs.touch(&file_path)? {
                    files_created += 1;
                    tracing::info!("Created file: {}", file_path.display());
                } else {
                    files_existing += 1;
                    tracing::info!("Kept existing file: {}", file_path.display());
                }
            }
        }

        let directories = layout::directory_count(self.layout);
        let files = layout::file_count(self.layout);
        tracing::info!("✅ MLOps project structure created successfully!");
        tracing::info!("📁 Project location: {}", root.display());
        tracing::info!("📊 Total directories created: {}", directories);
        tracing::info!(
            "📄 Total files created: {} ({} new, {} already present)",
            files,
            files_created,
            files_existing
        );

        for dir in &self.additional_directories {
            let path = join_relative(&root, dir);
            self.fs.create_dir_all(&path)?;
            tracing::info!("Created additional directory: {}", path.display());
        }

        Ok(ScaffoldReport {
            root,
            directories,
            files,
            files_created,
            files_existing,
            additional_directories: self.additional_directories.clone(),
        })
    }
}

/// Joins a `/`-separated relative path segment by segment.
fn join_relative(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{LocalFilesystem, RecordingFilesystem};
    use crate::domain::model::FsOp;
    use crate::utils::error::ScaffoldError;
    use tempfile::TempDir;

    const SMALL_LAYOUT: &[LayoutEntry] = &[
        LayoutEntry {
            directory: "",
            files: &["README.md"],
        },
        LayoutEntry {
            directory: "src/deep/nested",
            files: &["mod.py", "other.py"],
        },
        LayoutEntry {
            directory: "empty",
            files: &[],
        },
    ];

    #[test]
    fn test_join_relative_splits_segments() {
        let path = join_relative(Path::new("/root"), "src/entities");
        assert_eq!(path, Path::new("/root").join("src").join("entities"));
    }

    #[test]
    fn test_dry_run_records_layout_in_order() {
        let builder = ScaffoldBuilder::new(RecordingFilesystem::new())
            .with_base_dir("/projects")
            .with_layout(SMALL_LAYOUT)
            .with_additional_directories(["cache"]);

        let report = builder.build("demo").unwrap();
        let root = PathBuf::from("/projects/demo");
        assert_eq!(report.root, root);

        let ops = builder.into_filesystem().into_operations();
        assert_eq!(
            ops,
            vec![
                FsOp::CreateDir(root.clone()),
                FsOp::Touch(root.join("README.md")),
                FsOp::CreateDir(root.join("src").join("deep").join("nested")),
                FsOp::Touch(root.join("src").join("deep").join("nested").join("mod.py")),
                FsOp::Touch(root.join("src").join("deep").join("nested").join("other.py")),
                FsOp::CreateDir(root.join("empty")),
                FsOp::CreateDir(root.join("logs")),
                FsOp::CreateDir(root.join("temp")),
                FsOp::CreateDir(root.join(".dvc")),
                FsOp::CreateDir(root.join("mlruns")),
                FsOp::CreateDir(root.join("cache")),
            ]
        );
    }

    #[test]
    fn test_report_counts() {
        let temp_dir = TempDir::new().unwrap();
        let builder = ScaffoldBuilder::new(LocalFilesystem::new())
            .with_base_dir(temp_dir.path())
            .with_layout(SMALL_LAYOUT);

        let report = builder.build("demo").unwrap();
        assert_eq!(report.directories, 2);
        assert_eq!(report.files, 3);
        assert_eq!(report.files_created, 3);
        assert_eq!(report.files_existing, 0);
        assert!(report.root.is_absolute());
        assert!(report.root.join("src/deep/nested/other.py").is_file());
        assert!(report.root.join("empty").is_dir());
    }

    #[test]
    fn test_duplicate_additional_directories_are_skipped() {
        let builder = ScaffoldBuilder::new(RecordingFilesystem::new())
            .with_additional_directories(["logs", "cache", "cache"]);
        assert_eq!(
            builder.additional_directories(),
            &["logs", "temp", ".dvc", "mlruns", "cache"]
        );
    }

    #[test]
    fn test_empty_project_name_is_rejected() {
        let builder = ScaffoldBuilder::new(RecordingFilesystem::new());
        let err = builder.build("  ").unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidConfigValueError { .. }));
        assert!(builder.filesystem().operations().is_empty());
    }

    #[test]
    fn test_filesystem_error_aborts_run() {
        let temp_dir = TempDir::new().unwrap();
        // A file where the project root should go.
        std::fs::write(temp_dir.path().join("demo"), "not a directory").unwrap();

        let builder = ScaffoldBuilder::new(LocalFilesystem::new())
            .with_base_dir(temp_dir.path())
            .with_layout(SMALL_LAYOUT);

        let err = builder.build("demo").unwrap_err();
        assert!(matches!(err, ScaffoldError::CreateDir { .. }));
        assert!(err.io_error().is_some());
    }
}
