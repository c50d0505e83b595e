use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{AppError, InstallCommand, ScaffoldOptions, WriteMode};

/// Optional settings read from a `scaffold.toml` file.
///
/// Every field is optional; unset fields leave the incoming options untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldConfig {
    pub target_dir: Option<PathBuf>,
    pub skip_install: Option<bool>,
    pub write_mode: Option<WriteMode>,
    pub install: Option<InstallCommand>,
}

impl ScaffoldConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(target_dir) = &self.target_dir
            && target_dir.as_os_str().is_empty()
        {
            return Err(AppError::config_error("target_dir must not be empty"));
        }

        if let Some(install) = &self.install
            && install.program.trim().is_empty()
        {
            return Err(AppError::config_error("install.program must not be empty"));
        }

        Ok(())
    }

    /// Layer this config over `options`.
    pub fn apply(self, mut options: ScaffoldOptions) -> ScaffoldOptions {
        if let Some(target_dir) = self.target_dir {
            options.target_dir = target_dir;
        }
        if let Some(skip_install) = self.skip_install {
            options.skip_install = skip_install;
        }
        if let Some(write_mode) = self.write_mode {
            options.write_mode = write_mode;
        }
        if let Some(install) = self.install {
            options.install = install;
        }
        options
    }
}
