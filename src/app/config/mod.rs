mod load_config;
mod resolve;

pub use load_config::load_config;
pub use resolve::{NewProjectRequest, resolve_options};
