mod dependency_installer;
mod scaffold_filesystem;

pub use dependency_installer::DependencyInstaller;
pub use scaffold_filesystem::ScaffoldFilesystem;
