use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::{InstallCommand, InstallError};
use crate::ports::DependencyInstaller;

/// Runs an external package-manager command in the project root.
///
/// The installer shares the user's terminal, so prompts can be answered.
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    command: InstallCommand,
}

impl CommandInstaller {
    pub fn new(command: InstallCommand) -> Self {
        Self { command }
    }
}

impl DependencyInstaller for CommandInstaller {
    fn install(&self, root: &Path) -> Result<(), InstallError> {
        let status = Command::new(&self.command.program)
            .args(&self.command.args)
            .current_dir(root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| InstallError::Spawn { command: self.describe(), source })?;

        if !status.success() {
            return Err(InstallError::ExitStatus {
                command: self.describe(),
                status: status.to_string(),
            });
        }

        Ok(())
    }

    fn describe(&self) -> String {
        self.command.to_string()
    }
}
