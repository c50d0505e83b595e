//! sewapay-scaffold: materialize the SewaPay fintech Next.js project onto disk.

mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    CatalogListing, NewProjectRequest, catalog, emit, list_catalog, new_project, new_project_at,
    verify, verify_at,
};
pub use domain::{
    AppError, DEFAULT_TARGET_DIR, EmitReport, InstallCommand, InstallError, InstallStatus,
    ScaffoldConfig, ScaffoldOptions, TemplateCatalog, VerifyReport, WriteMode,
};
