//! List command implementation.

use clap::ValueEnum;

use crate::app::api;
use crate::domain::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn run_list(long: bool, format: OutputFormat) -> Result<(), AppError> {
    let entries = api::list_catalog()?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entries).map_err(|err| {
                AppError::SerializeError { what: "catalog listing".into(), details: err.to_string() }
            })?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for entry in &entries {
                if long {
                    println!("{:>7}  {}  {}", entry.bytes, &entry.sha256[..12], entry.path);
                } else {
                    println!("{}", entry.path);
                }
            }
        }
    }
    Ok(())
}
