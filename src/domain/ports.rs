use crate::utils::error::Result;
use std::path::Path;

pub trait Filesystem {
    /// Creates `path` and any missing parents. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Ensures an empty file exists at `path` without touching existing
    /// content. Returns `true` when the file was newly created.
    fn touch(&self, path: &Path) -> Result<bool>;

    /// Replaces the contents of `path`.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
}
