//! Test double for `DependencyInstaller`.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::InstallError;
use crate::ports::DependencyInstaller;

/// Records every install call and returns a canned outcome.
#[derive(Debug, Default)]
pub struct FakeInstaller {
    fail: bool,
    calls: RefCell<Vec<PathBuf>>,
}

impl FakeInstaller {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl DependencyInstaller for FakeInstaller {
    fn install(&self, root: &Path) -> Result<(), InstallError> {
        self.calls.borrow_mut().push(root.to_path_buf());
        if self.fail {
            return Err(InstallError::ExitStatus {
                command: self.describe(),
                status: "exit status: 1".into(),
            });
        }
        Ok(())
    }

    fn describe(&self) -> String {
        "npm i".into()
    }
}
