//! Embedded project template for `sewapay-fintech`.

use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::catalog::to_catalog_path;
use crate::domain::{AppError, TemplateCatalog};

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scaffold");

/// Build the template catalog from the files embedded at compile time.
pub fn embedded_catalog() -> Result<TemplateCatalog, AppError> {
    let mut files = Vec::new();
    collect_files(&SCAFFOLD_DIR, &mut files)?;
    TemplateCatalog::from_entries(files)
}

fn collect_files(dir: &'static Dir, files: &mut Vec<(String, &'static str)>) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let path = to_catalog_path(file.path());
                let content = file.contents_utf8().ok_or_else(|| AppError::InvalidCatalogPath {
                    path: path.clone(),
                    reason: "embedded file is not valid UTF-8".into(),
                })?;
                files.push((path, content));
            }
            DirEntry::Dir(subdir) => collect_files(subdir, files)?,
        }
    }
    Ok(())
}
