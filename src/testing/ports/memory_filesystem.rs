//! Test double for `ScaffoldFilesystem`.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::catalog::to_catalog_path;
use crate::ports::ScaffoldFilesystem;

/// In-memory implementation of `ScaffoldFilesystem` for unit tests.
///
/// Directories and files are tracked by absolute path. Writes can be made to
/// fail for a specific path or path suffix.
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    dirs: RefCell<BTreeSet<PathBuf>>,
    files: RefCell<BTreeMap<PathBuf, String>>,
    fail_write_at: Option<PathBuf>,
    fail_write_suffix: Option<String>,
    appear_before_rename: Option<PathBuf>,
    staging_counter: Cell<usize>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, path: &str) -> Self {
        for ancestor in Path::new(path).ancestors() {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.borrow_mut().insert(ancestor.to_path_buf());
            }
        }
        self
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        let this = match Path::new(path).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                self.with_dir(&parent.to_string_lossy())
            }
            _ => self,
        };
        this.files.borrow_mut().insert(PathBuf::from(path), content.to_string());
        this
    }

    pub fn fail_write_at(mut self, path: &str) -> Self {
        self.fail_write_at = Some(PathBuf::from(path));
        self
    }

    pub fn fail_write_at_suffix(mut self, suffix: &str) -> Self {
        self.fail_write_suffix = Some(suffix.to_string());
        self
    }

    /// Simulate another process creating `path` (holding one file) right
    /// before a rename onto it.
    pub fn appear_before_rename(mut self, path: &str) -> Self {
        self.appear_before_rename = Some(PathBuf::from(path));
        self
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.borrow().get(Path::new(path)).cloned()
    }

    pub fn has_dir(&self, path: &str) -> bool {
        self.dirs.borrow().contains(Path::new(path))
    }

    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }

    /// Directories strictly below `path`.
    pub fn dirs_under(&self, path: &str) -> Vec<PathBuf> {
        let base = Path::new(path);
        self.dirs.borrow().iter().filter(|d| d.starts_with(base) && *d != base).cloned().collect()
    }

    fn should_fail_write(&self, path: &Path) -> bool {
        self.fail_write_at.as_deref() == Some(path)
            || self
                .fail_write_suffix
                .as_deref()
                .is_some_and(|suffix| path.to_string_lossy().ends_with(suffix))
    }

    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.dirs.borrow().contains(parent),
            _ => true,
        }
    }
}

fn not_found(what: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("Mock {} not found", what))
}

impl ScaffoldFilesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path) || self.files.borrow().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn create_dir(&self, path: &Path) -> Result<(), AppError> {
        if self.exists(path) {
            return Err(AppError::TargetExists { path: path.to_path_buf() });
        }
        if !self.parent_exists(path) {
            return Err(AppError::CreateDir { path: path.to_path_buf(), source: not_found("parent") });
        }
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        for ancestor in path.ancestors() {
            if self.files.borrow().contains_key(ancestor) {
                return Err(AppError::CreateDir {
                    path: path.to_path_buf(),
                    source: io::Error::new(io::ErrorKind::AlreadyExists, "Mock file in the way"),
                });
            }
        }
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.borrow_mut().insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.should_fail_write(path) {
            return Err(AppError::Write {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "Mock write denied"),
            });
        }
        if !self.parent_exists(path) || self.is_dir(path) {
            return Err(AppError::Write { path: path.to_path_buf(), source: not_found("parent") });
        }
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        self.read_to_string(path).map(String::into_bytes)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        self.files.borrow().get(path).cloned().ok_or_else(|| AppError::from(not_found("file")))
    }

    fn list_files(&self, root: &Path, pruned_dirs: &[&str]) -> Result<Vec<String>, AppError> {
        let pruned = |relative: &Path| {
            relative.parent().is_some_and(|dirs| {
                dirs.components()
                    .any(|c| pruned_dirs.iter().any(|name| c.as_os_str() == OsStr::new(name)))
            })
        };
        let mut files: Vec<String> = self
            .files
            .borrow()
            .keys()
            .filter_map(|path| path.strip_prefix(root).ok())
            .filter(|relative| !relative.as_os_str().is_empty() && !pruned(*relative))
            .map(to_catalog_path)
            .collect();
        files.sort();
        Ok(files)
    }

    fn create_staging_dir(&self, parent: &Path, prefix: &str) -> Result<PathBuf, AppError> {
        let n = self.staging_counter.get();
        self.staging_counter.set(n + 1);
        let path = parent.join(format!("{}{}", prefix, n));
        self.create_dir(&path)?;
        Ok(path)
    }

    fn rename_dir(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        if self.appear_before_rename.as_deref() == Some(to) {
            self.dirs.borrow_mut().insert(to.to_path_buf());
            self.files.borrow_mut().insert(to.join("theirs.txt"), "created concurrently".into());
        }
        if self.exists(to) {
            return Err(AppError::TargetExists { path: to.to_path_buf() });
        }
        let moved = |path: &PathBuf| {
            path.strip_prefix(from).ok().map(|rel| {
                if rel.as_os_str().is_empty() { to.to_path_buf() } else { to.join(rel) }
            })
        };

        let dirs: Vec<PathBuf> = self.dirs.borrow().iter().cloned().collect();
        let mut new_dirs = BTreeSet::new();
        for dir in dirs {
            new_dirs.insert(moved(&dir).unwrap_or(dir));
        }
        *self.dirs.borrow_mut() = new_dirs;

        let files: Vec<(PathBuf, String)> =
            self.files.borrow().iter().map(|(p, c)| (p.clone(), c.clone())).collect();
        let mut new_files = BTreeMap::new();
        for (path, content) in files {
            new_files.insert(moved(&path).unwrap_or(path), content);
        }
        *self.files.borrow_mut() = new_files;
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.dirs.borrow_mut().retain(|dir| !dir.starts_with(path));
        self.files.borrow_mut().retain(|file, _| !file.starts_with(path));
        Ok(())
    }
}
