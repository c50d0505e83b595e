//! Verify command - compares an emitted tree with the catalog.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::domain::verify::{INSTALL_DIRS, compare, hash_content, is_install_artifact};
use crate::domain::{AppError, TemplateCatalog, VerifyReport};
use crate::ports::ScaffoldFilesystem;

/// Execute the verify command against `root`.
pub fn execute<F: ScaffoldFilesystem>(
    fs: &F,
    catalog: &TemplateCatalog,
    root: &Path,
) -> Result<VerifyReport, AppError> {
    if !fs.is_dir(root) {
        return Err(AppError::TargetNotFound { path: root.to_path_buf() });
    }

    let mut on_disk = BTreeMap::new();
    for relative in fs.list_files(root, INSTALL_DIRS)? {
        if is_install_artifact(&relative) {
            continue;
        }
        let bytes = fs.read_bytes(&root.join(&relative))?;
        on_disk.insert(relative, hash_content(&bytes));
    }
    debug!(root = %root.display(), files = on_disk.len(), "hashed existing tree");

    Ok(compare(catalog, &on_disk))
}
