use std::path::Path;

use crate::domain::InstallError;

/// Port for the best-effort dependency installation run after emitting.
pub trait DependencyInstaller {
    /// Install the generated project's dependencies inside `root`.
    fn install(&self, root: &Path) -> Result<(), InstallError>;

    /// Human-readable command line, used in warnings and next steps.
    fn describe(&self) -> String;
}
