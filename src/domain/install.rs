//! Post-emit dependency installation step.

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// External command run inside the new project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl InstallCommand {
    pub fn new<P: Into<String>>(program: P, args: &[&str]) -> Self {
        Self { program: program.into(), args: args.iter().map(|a| a.to_string()).collect() }
    }
}

impl Default for InstallCommand {
    fn default() -> Self {
        Self::new("npm", &["i"])
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Failure of the installation step. Never promoted to an emitter error.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The installer could not be started (missing tool, permissions).
    #[error("Failed to start '{command}': {source}")]
    Spawn { command: String, source: io::Error },

    /// The installer ran and exited unsuccessfully.
    #[error("'{command}' exited with {status}")]
    ExitStatus { command: String, status: String },
}

/// What happened to the installation step of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStatus {
    Skipped,
    Succeeded,
    Failed(String),
}

impl InstallStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, InstallStatus::Failed(_))
    }
}
