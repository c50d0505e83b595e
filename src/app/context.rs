use crate::ports::{DependencyInstaller, ScaffoldFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ScaffoldFilesystem, I: DependencyInstaller> {
    filesystem: F,
    installer: I,
}

impl<F: ScaffoldFilesystem, I: DependencyInstaller> AppContext<F, I> {
    /// Create a new application context.
    pub fn new(filesystem: F, installer: I) -> Self {
        Self { filesystem, installer }
    }

    /// Get a reference to the filesystem port.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the dependency installer.
    pub fn installer(&self) -> &I {
        &self.installer
    }
}
