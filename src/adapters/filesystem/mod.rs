//! Local filesystem adapter for `ScaffoldFilesystem`.

mod scaffold_filesystem;

use std::io;
use std::path::Path;

use crate::domain::AppError;

/// `ScaffoldFilesystem` backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

// ── Error mapping ──────────────────────────────────────────────────────

fn create_dir_error(path: &Path, source: io::Error) -> AppError {
    if source.kind() == io::ErrorKind::AlreadyExists {
        AppError::TargetExists { path: path.to_path_buf() }
    } else {
        AppError::CreateDir { path: path.to_path_buf(), source }
    }
}

fn io_error_at(path: &Path, source: io::Error) -> AppError {
    AppError::Io(io::Error::new(source.kind(), format!("{}: {}", path.display(), source)))
}
