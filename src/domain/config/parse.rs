//! Pure parse/validate for scaffold configuration (`scaffold.toml`).

use crate::domain::AppError;
use crate::domain::config::ScaffoldConfig;

/// Parse and validate scaffold configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ScaffoldConfig, AppError> {
    let config: ScaffoldConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
