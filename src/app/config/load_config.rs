//! Scaffold configuration loading.

use std::path::Path;

use crate::domain::config::parse_config_content;
use crate::domain::{AppError, ScaffoldConfig};
use crate::ports::ScaffoldFilesystem;

/// Load and parse a `scaffold.toml` file.
pub fn load_config<F: ScaffoldFilesystem>(
    config_path: &Path,
    filesystem: &F,
) -> Result<ScaffoldConfig, AppError> {
    if !filesystem.exists(config_path) {
        return Err(AppError::config_error(format!(
            "Config file not found: {}",
            config_path.display()
        )));
    }

    let content = filesystem.read_to_string(config_path)?;
    parse_config_content(&content)
}
