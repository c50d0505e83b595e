//! Emit command: materialize the template catalog under a target root.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::domain::{
    AppError, EmitReport, InstallStatus, ScaffoldOptions, TemplateCatalog, WriteMode,
};
use crate::ports::{DependencyInstaller, ScaffoldFilesystem};

/// Execute the emit command.
///
/// Fails with `TargetExists` before touching the filesystem if
/// `options.target_dir` is already present. Installation runs only after
/// every file was written, and its failure is recorded in the report.
pub fn execute<F, I>(
    ctx: &AppContext<F, I>,
    catalog: &TemplateCatalog,
    options: &ScaffoldOptions,
) -> Result<EmitReport, AppError>
where
    F: ScaffoldFilesystem,
    I: DependencyInstaller,
{
    let root = options.target_dir.as_path();
    if ctx.filesystem().exists(root) {
        return Err(AppError::TargetExists { path: root.to_path_buf() });
    }

    info!(root = %root.display(), files = catalog.len(), mode = ?options.write_mode, "emitting scaffold");
    let files_written = match options.write_mode {
        WriteMode::Direct => write_direct(ctx.filesystem(), catalog, root)?,
        WriteMode::Staged => write_staged(ctx.filesystem(), catalog, root)?,
    };

    let install = if options.skip_install {
        debug!("dependency installation skipped");
        InstallStatus::Skipped
    } else {
        run_install(ctx.installer(), root)
    };

    Ok(EmitReport {
        root: root.to_path_buf(),
        files_written,
        install,
        install_command: ctx.installer().describe(),
    })
}

fn write_direct<F: ScaffoldFilesystem>(
    fs: &F,
    catalog: &TemplateCatalog,
    root: &Path,
) -> Result<usize, AppError> {
    fs.create_dir_all(parent_dir(root))?;
    fs.create_dir(root)?;
    materialize(fs, catalog, root)
}

fn write_staged<F: ScaffoldFilesystem>(
    fs: &F,
    catalog: &TemplateCatalog,
    root: &Path,
) -> Result<usize, AppError> {
    let parent = parent_dir(root);
    fs.create_dir_all(parent)?;

    let name = root.file_name().map(|n| n.to_string_lossy().into_owned());
    let prefix = format!(".{}.partial-", name.as_deref().unwrap_or("scaffold"));
    let staging = fs.create_staging_dir(parent, &prefix)?;
    debug!(staging = %staging.display(), "writing into staging directory");

    let result = materialize(fs, catalog, &staging)
        .map_err(|err| relocate_error(err, &staging, root))
        .and_then(|written| fs.rename_dir(&staging, root).map(|()| written));

    if result.is_err()
        && let Err(cleanup) = fs.remove_dir_all(&staging)
    {
        warn!(staging = %staging.display(), error = %cleanup, "failed to remove staging directory");
    }

    result
}

/// Write every entry under `base`, creating ancestors as needed.
fn materialize<F: ScaffoldFilesystem>(
    fs: &F,
    catalog: &TemplateCatalog,
    base: &Path,
) -> Result<usize, AppError> {
    let mut written = 0;
    for (relative, content) in catalog.iter() {
        let path = base.join(relative);
        if let Some(parent) = path.parent() {
            fs.create_dir_all(parent)?;
        }
        fs.write_file(&path, content)?;
        debug!(path = %path.display(), bytes = content.len(), "wrote file");
        written += 1;
    }
    Ok(written)
}

fn run_install<I: DependencyInstaller>(installer: &I, root: &Path) -> InstallStatus {
    info!(command = %installer.describe(), "installing dependencies");
    match installer.install(root) {
        Ok(()) => InstallStatus::Succeeded,
        Err(err) => {
            warn!(error = %err, "dependency installation failed");
            InstallStatus::Failed(err.to_string())
        }
    }
}

fn parent_dir(root: &Path) -> &Path {
    match root.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

// Errors raised while staging name the path the file would have had under the real root.
fn relocate_error(err: AppError, staging: &Path, root: &Path) -> AppError {
    let relocate = |path: PathBuf| match path.strip_prefix(staging) {
        Ok(relative) => root.join(relative),
        Err(_) => path,
    };
    match err {
        AppError::Write { path, source } => AppError::Write { path: relocate(path), source },
        AppError::CreateDir { path, source } => {
            AppError::CreateDir { path: relocate(path), source }
        }
        other => other,
    }
}
