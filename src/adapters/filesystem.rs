use crate::domain::model::FsOp;
use crate::domain::ports::Filesystem;
use crate::utils::error::{Result, ScaffoldError};
use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|source| ScaffoldError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
    }

    fn touch(&self, path: &Path) -> Result<bool> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => match fs::metadata(path) {
                Ok(meta) if meta.is_file() => Ok(false),
                Ok(_) => Err(ScaffoldError::CreateFile {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(
                        ErrorKind::AlreadyExists,
                        "path exists but is not a regular file",
                    ),
                }),
                // Dangling symlink.
                Err(source) => Err(ScaffoldError::CreateFile {
                    path: path.to_path_buf(),
                    source,
                }),
            },
            Err(source) => Err(ScaffoldError::CreateFile {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).map_err(|source| ScaffoldError::WriteFile {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Dry-run filesystem: remembers what would have happened and touches nothing.
#[derive(Debug, Default)]
pub struct RecordingFilesystem {
    ops: RefCell<Vec<FsOp>>,
}

impl RecordingFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operations(&self) -> Vec<FsOp> {
        self.ops.borrow().clone()
    }

    pub fn into_operations(self) -> Vec<FsOp> {
        self.ops.into_inner()
    }
}

impl Filesystem for RecordingFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.ops
            .borrow_mut()
            .push(FsOp::CreateDir(path.to_path_buf()));
        Ok(())
    }

    fn touch(&self, path: &Path) -> Result<bool> {
        self.ops.borrow_mut().push(FsOp::Touch(path.to_path_buf()));
        Ok(true)
    }

    fn write(&self, path: &Path, _contents: &[u8]) -> Result<()> {
        self.ops.borrow_mut().push(FsOp::Write(path.to_path_buf()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_touch_keeps_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README.md");
        std::fs::write(&path, "hello").unwrap();

        let fs = LocalFilesystem::new();
        assert!(!fs.touch(&path).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_touch_creates_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("setup.py");

        let fs = LocalFilesystem::new();
        assert!(fs.touch(&path).unwrap());
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_touch_in_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("file.txt");

        let err = LocalFilesystem::new().touch(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::CreateFile { .. }));
        assert_eq!(err.io_error().map(|e| e.kind()), Some(ErrorKind::NotFound));
    }

    #[test]
    fn test_touch_on_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("conftest.py");
        std::fs::create_dir(&path).unwrap();

        let err = LocalFilesystem::new().touch(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::CreateFile { .. }));
        assert!(err.to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_touch_on_dangling_symlink_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("setup.py");
        std::os::unix::fs::symlink(temp_dir.path().join("missing-target"), &path).unwrap();

        let err = LocalFilesystem::new().touch(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::CreateFile { .. }));
        assert_eq!(err.io_error().map(|e| e.kind()), Some(ErrorKind::NotFound));
    }

    #[cfg(unix)]
    #[test]
    fn test_touch_through_symlink_to_file_keeps_it() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.md");
        std::fs::write(&target, "hello").unwrap();
        let path = temp_dir.path().join("README.md");
        std::os::unix::fs::symlink(&target, &path).unwrap();

        assert!(!LocalFilesystem::new().touch(&path).unwrap());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "hello");
    }

    #[test]
    fn test_create_dir_all_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("c");

        let fs = LocalFilesystem::new();
        fs.create_dir_all(&path).unwrap();
        fs.create_dir_all(&path).unwrap();
        assert!(path.is_dir());
    }

    #[test]
    fn test_recording_filesystem_records_in_order() {
        let fs = RecordingFilesystem::new();
        fs.create_dir_all(Path::new("demo")).unwrap();
        assert!(fs.touch(Path::new("demo/README.md")).unwrap());
        fs.write(Path::new("demo/.gitignore"), b"x").unwrap();

        assert_eq!(
            fs.into_operations(),
            vec![
                FsOp::CreateDir("demo".into()),
                FsOp::Touch("demo/README.md".into()),
                FsOp::Write("demo/.gitignore".into()),
            ]
        );
    }
}
