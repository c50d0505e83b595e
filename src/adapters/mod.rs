pub mod assets;
pub mod command_installer;
pub mod filesystem;
