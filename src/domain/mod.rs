pub mod catalog;
pub mod config;
pub mod error;
pub mod install;
pub mod options;
pub mod verify;

pub use catalog::TemplateCatalog;
pub use config::ScaffoldConfig;
pub use error::AppError;
pub use install::{InstallCommand, InstallError, InstallStatus};
pub use options::{DEFAULT_TARGET_DIR, EmitReport, ScaffoldOptions, WriteMode};
pub use verify::VerifyReport;
