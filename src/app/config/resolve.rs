//! Option resolution: defaults, then config file, then command-line flags.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, ScaffoldOptions, WriteMode};
use crate::ports::ScaffoldFilesystem;

use super::load_config;

/// Caller-supplied overrides for a `new` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProjectRequest {
    /// Target directory, relative to the working directory unless absolute.
    pub target_dir: Option<PathBuf>,
    pub skip_install: bool,
    pub staged: bool,
    /// Path to a `scaffold.toml` file.
    pub config: Option<PathBuf>,
}

/// Resolve the effective options for a run started in `cwd`.
///
/// The returned `target_dir` is joined onto `cwd`.
pub fn resolve_options<F: ScaffoldFilesystem>(
    cwd: &Path,
    request: &NewProjectRequest,
    filesystem: &F,
) -> Result<ScaffoldOptions, AppError> {
    let mut options = ScaffoldOptions::default();

    if let Some(config_path) = &request.config {
        options = load_config(&cwd.join(config_path), filesystem)?.apply(options);
    }

    if let Some(target_dir) = &request.target_dir {
        options.target_dir = target_dir.clone();
    }
    if request.skip_install {
        options.skip_install = true;
    }
    if request.staged {
        options.write_mode = WriteMode::Staged;
    }

    options.target_dir = cwd.join(&options.target_dir);
    Ok(options)
}
