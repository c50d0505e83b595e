//! Drift detection between an on-disk tree and the catalog.

use std::collections::BTreeMap;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::domain::TemplateCatalog;

/// Directories the dependency installer populates. Never walked by `verify`.
pub const INSTALL_DIRS: &[&str] = &["node_modules"];

/// Lockfiles the dependency installer may write next to `package.json`.
const INSTALL_LOCKFILES: &[&str] =
    &["package-lock.json", "npm-shrinkwrap.json", "yarn.lock", "pnpm-lock.yaml", "bun.lockb"];

/// Whether a catalog-relative path was produced by installing dependencies
/// rather than by the scaffold.
pub fn is_install_artifact(path: &str) -> bool {
    INSTALL_LOCKFILES.contains(&path)
        || path.split('/').any(|segment| INSTALL_DIRS.contains(&segment))
}

/// Differences between a materialized tree and the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    /// Catalog paths not present on disk.
    pub missing: Vec<String>,
    /// Paths present on disk whose content differs from the catalog.
    pub modified: Vec<String>,
    /// Files on disk that the catalog does not define.
    pub extra: Vec<String>,
    /// Paths whose content matches.
    pub matching: usize,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.modified.is_empty() && self.extra.is_empty()
    }
}

/// Compare on-disk digests (relative path -> SHA-256 hex) with the catalog.
pub fn compare(catalog: &TemplateCatalog, on_disk: &BTreeMap<String, String>) -> VerifyReport {
    let mut report = VerifyReport::default();

    for (path, content) in catalog.iter() {
        match on_disk.get(path) {
            None => report.missing.push(path.to_string()),
            Some(digest) if *digest == hash_content(content.as_bytes()) => report.matching += 1,
            Some(_) => report.modified.push(path.to_string()),
        }
    }

    report.extra = on_disk
        .keys()
        .filter(|path| !catalog.contains(path) && !is_install_artifact(path))
        .map(|path| path.to_string())
        .collect();

    report
}

pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
