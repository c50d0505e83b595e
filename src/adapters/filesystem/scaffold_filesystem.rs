//! `ScaffoldFilesystem` implementation for `LocalFilesystem`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ScaffoldFilesystem;

use super::{LocalFilesystem, create_dir_error, io_error_at};
use crate::domain::catalog::to_catalog_path;

impl ScaffoldFilesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir(path).map_err(|e| create_dir_error(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path)
            .map_err(|source| AppError::CreateDir { path: path.to_path_buf(), source })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(|source| AppError::Write { path: path.to_path_buf(), source })
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        fs::read(path).map_err(|e| io_error_at(path, e))
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|e| io_error_at(path, e))
    }

    fn list_files(&self, root: &Path, pruned_dirs: &[&str]) -> Result<Vec<String>, AppError> {
        let mut files = Vec::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let entries = fs::read_dir(&dir).map_err(|e| io_error_at(&dir, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| io_error_at(&dir, e))?;
                let path = entry.path();
                let file_type = entry.file_type().map_err(|e| io_error_at(&path, e))?;
                if file_type.is_dir() {
                    let pruned = pruned_dirs.iter().any(|name| entry.file_name() == *name);
                    if !pruned {
                        pending.push(path);
                    }
                } else if file_type.is_file()
                    && let Ok(relative) = path.strip_prefix(root)
                {
                    files.push(to_catalog_path(relative));
                }
            }
        }

        files.sort();
        Ok(files)
    }

    fn create_staging_dir(&self, parent: &Path, prefix: &str) -> Result<PathBuf, AppError> {
        let staging = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir_in(parent)
            .map_err(|source| AppError::CreateDir { path: parent.to_path_buf(), source })?;
        Ok(staging.keep())
    }

    fn rename_dir(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        // `rename` silently replaces an empty directory on Unix.
        if self.exists(to) {
            return Err(AppError::TargetExists { path: to.to_path_buf() });
        }
        fs::rename(from, to).map_err(|e| io_error_at(to, e))
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError> {
        if self.exists(path) {
            fs::remove_dir_all(path).map_err(|e| io_error_at(path, e))?;
        }
        Ok(())
    }
}
