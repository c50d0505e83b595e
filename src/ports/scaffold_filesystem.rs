//! Filesystem operations needed to materialize and inspect a scaffold.
//!
//! Paths are absolute (or relative to the process working directory).
//! Implementations attach the offending path to every error they return.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for the filesystem side effects of the emitter and verifier.
pub trait ScaffoldFilesystem {
    /// Check whether anything (file, directory, or dangling symlink) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether `path` is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create exactly one directory. Fails with `TargetExists` if `path` already exists.
    fn create_dir(&self, path: &Path) -> Result<(), AppError>;

    /// Create a directory and any missing ancestors. Existing directories are not an error.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Write content verbatim. The parent directory must already exist.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Read a file as raw bytes.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;

    /// Recursively list regular files under `root`, as sorted `/`-separated relative paths.
    ///
    /// Symlinks are not followed or listed. Directories whose name is in
    /// `pruned_dirs` are skipped entirely.
    fn list_files(&self, root: &Path, pruned_dirs: &[&str]) -> Result<Vec<String>, AppError>;

    /// Create a fresh, uniquely named directory inside `parent`.
    fn create_staging_dir(&self, parent: &Path, prefix: &str) -> Result<PathBuf, AppError>;

    /// Rename `from` to `to`. Fails with `TargetExists` if `to` already exists.
    fn rename_dir(&self, from: &Path, to: &Path) -> Result<(), AppError>;

    /// Remove a directory and all its contents. No-op if absent.
    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError>;
}
