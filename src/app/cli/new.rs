//! New command implementation.

use std::path::{Path, PathBuf};

use crate::app::api::{self, NewProjectRequest};
use crate::domain::{AppError, EmitReport, InstallStatus};

pub fn run_new(
    target_dir: Option<PathBuf>,
    skip_install: bool,
    staged: bool,
    config: Option<PathBuf>,
) -> Result<(), AppError> {
    let cwd = std::env::current_dir()?;
    let request = NewProjectRequest { target_dir, skip_install, staged, config };
    let report = api::new_project_at(&cwd, &request)?;

    print_summary(&cwd, &report);
    Ok(())
}

fn print_summary(cwd: &Path, report: &EmitReport) {
    println!(
        "✅ Project files created in {} ({} files)",
        report.root.display(),
        report.files_written
    );

    let needs_install = match &report.install {
        InstallStatus::Succeeded => false,
        InstallStatus::Skipped => true,
        InstallStatus::Failed(reason) => {
            eprintln!("⚠️  Dependency installation failed: {}", reason);
            eprintln!(
                "   Run `{}` manually inside {}",
                report.install_command,
                report.root.display()
            );
            true
        }
    };

    let display_dir = report.root.strip_prefix(cwd).unwrap_or(&report.root);
    println!("Done. Next steps:");
    println!("  cd {}", display_dir.display());
    if needs_install {
        println!("  {}", report.install_command);
    }
    println!("  npm run dev  # http://localhost:3000");
    println!("  git init && git add . && git commit -m \"init\"");
    println!("Push to GitHub and deploy on Vercel.");
}
