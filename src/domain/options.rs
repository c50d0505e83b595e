use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::InstallCommand;

/// Project directory used when nothing else is configured.
pub const DEFAULT_TARGET_DIR: &str = "sewapay-fintech";

/// How catalog files reach the target root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Write straight into the target root. A failed run leaves a partial tree.
    #[default]
    Direct,
    /// Write into a sibling staging directory and rename it into place.
    Staged,
}

/// Resolved options for one emit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub target_dir: PathBuf,
    pub skip_install: bool,
    pub write_mode: WriteMode,
    pub install: InstallCommand,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            skip_install: false,
            write_mode: WriteMode::Direct,
            install: InstallCommand::default(),
        }
    }
}

/// Result of a successful emit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    /// Root the catalog was materialized under.
    pub root: PathBuf,
    pub files_written: usize,
    pub install: crate::domain::InstallStatus,
    /// Command line of the installer, for manual retries.
    pub install_command: String,
}
