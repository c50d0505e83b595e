pub mod parse;
pub mod scaffold_config;

pub use parse::parse_config_content;
pub use scaffold_config::ScaffoldConfig;
