//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::assets::scaffold_assets::embedded_catalog;
use crate::adapters::command_installer::CommandInstaller;
use crate::adapters::filesystem::LocalFilesystem;
use crate::app::config::resolve_options;
use crate::app::{
    AppContext,
    commands::{emit as emit_command, list, verify as verify_command},
};

pub use crate::app::commands::list::CatalogListing;
pub use crate::app::config::NewProjectRequest;
pub use crate::domain::{
    AppError, EmitReport, InstallStatus, ScaffoldOptions, TemplateCatalog, VerifyReport, WriteMode,
};

/// Create an `AppContext` backed by the local filesystem and the configured installer.
fn create_context(options: &ScaffoldOptions) -> AppContext<LocalFilesystem, CommandInstaller> {
    AppContext::new(LocalFilesystem::new(), CommandInstaller::new(options.install.clone()))
}

/// Materialize `catalog` at `options.target_dir`.
///
/// Relative targets resolve against the process working directory.
pub fn emit(catalog: &TemplateCatalog, options: &ScaffoldOptions) -> Result<EmitReport, AppError> {
    let ctx = create_context(options);
    emit_command::execute(&ctx, catalog, options)
}

// =============================================================================
// New Project API
// =============================================================================

/// Create the embedded project in the current directory.
pub fn new_project(request: &NewProjectRequest) -> Result<EmitReport, AppError> {
    new_project_at(std::env::current_dir()?, request)
}

/// Create the embedded project relative to `cwd`.
pub fn new_project_at(
    cwd: impl Into<PathBuf>,
    request: &NewProjectRequest,
) -> Result<EmitReport, AppError> {
    let cwd = cwd.into();
    let options = resolve_options(&cwd, request, &LocalFilesystem::new())?;
    let catalog = embedded_catalog()?;
    emit(&catalog, &options)
}

// =============================================================================
// Catalog Inspection API
// =============================================================================

/// The embedded template catalog.
pub fn catalog() -> Result<TemplateCatalog, AppError> {
    embedded_catalog()
}

/// Describe every embedded catalog entry.
pub fn list_catalog() -> Result<Vec<CatalogListing>, AppError> {
    Ok(list::execute(&embedded_catalog()?))
}

/// Compare a project directory in the current directory with the embedded catalog.
pub fn verify(target_dir: Option<&Path>) -> Result<VerifyReport, AppError> {
    verify_at(std::env::current_dir()?, target_dir)
}

/// Compare a project directory (relative to `cwd`) with the embedded catalog.
pub fn verify_at(
    cwd: impl Into<PathBuf>,
    target_dir: Option<&Path>,
) -> Result<VerifyReport, AppError> {
    let root = cwd.into().join(target_dir.unwrap_or(Path::new(crate::domain::DEFAULT_TARGET_DIR)));
    let catalog = embedded_catalog()?;
    verify_command::execute(&LocalFilesystem::new(), &catalog, &root)
}
