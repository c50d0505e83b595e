//! Template catalog: the fixed mapping of relative paths to file contents.

use std::collections::BTreeMap;
use std::path::{Component, Path};

use crate::domain::AppError;

/// Immutable, validated set of files to materialize.
///
/// Entries iterate in lexicographic path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateCatalog {
    entries: BTreeMap<String, String>,
}

impl TemplateCatalog {
    /// Build a catalog from `(path, content)` pairs.
    ///
    /// Rejects unclean paths, duplicates, and entries whose path would need
    /// another entry's file to be a directory.
    pub fn from_entries<I, P, C>(entries: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (path, content) in entries {
            let path = path.into();
            validate_relative_path(&path)?;
            if map.insert(path.clone(), content.into()).is_some() {
                return Err(AppError::DuplicateCatalogPath(path));
            }
        }

        check_file_directory_conflicts(&map)?;
        Ok(Self { entries: map })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the content for a path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Iterate `(path, content)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(path, content)| (path.as_str(), content.as_str()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Join the normal components of a relative filesystem path with `/`.
pub fn to_catalog_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Validate that a catalog path is relative, `/`-separated, and free of
/// empty, `.` or `..` segments.
pub fn validate_relative_path(path: &str) -> Result<(), AppError> {
    let invalid = |reason: &str| AppError::InvalidCatalogPath {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    if path.is_empty() {
        return Err(invalid("path is empty"));
    }
    if path.starts_with('/') {
        return Err(invalid("path must be relative"));
    }
    if path.contains('\\') {
        return Err(invalid("use '/' as the separator"));
    }
    if path.contains(':') {
        return Err(invalid("drive or scheme prefixes are not allowed"));
    }
    for segment in path.split('/') {
        match segment {
            "" => return Err(invalid("empty path segment")),
            "." | ".." => return Err(invalid("'.' and '..' segments are not allowed")),
            _ => {}
        }
    }
    Ok(())
}

// Keys are sorted, so any entry used as a directory by another entry is
// found by checking each ancestor prefix against the map.
fn check_file_directory_conflicts(entries: &BTreeMap<String, String>) -> Result<(), AppError> {
    for path in entries.keys() {
        let mut end = 0;
        while let Some(offset) = path[end..].find('/') {
            end += offset;
            let ancestor = &path[..end];
            if entries.contains_key(ancestor) {
                return Err(AppError::CatalogConflict {
                    file: ancestor.to_string(),
                    nested: path.clone(),
                });
            }
            end += 1;
        }
    }
    Ok(())
}
