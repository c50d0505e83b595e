//! Verify command implementation.

use std::path::PathBuf;

use crate::app::api;
use crate::domain::AppError;

pub fn run_verify(target_dir: Option<PathBuf>) -> Result<i32, AppError> {
    let report = api::verify(target_dir.as_deref())?;

    if report.is_clean() {
        println!("✅ {} file(s) match the scaffold", report.matching);
        return Ok(0);
    }

    println!("⚠️  Project differs from the scaffold:");
    for path in &report.missing {
        println!("  missing   {}", path);
    }
    for path in &report.modified {
        println!("  modified  {}", path);
    }
    for path in &report.extra {
        println!("  extra     {}", path);
    }
    println!(
        "{} matching, {} missing, {} modified, {} extra",
        report.matching,
        report.missing.len(),
        report.modified.len(),
        report.extra.len()
    );
    Ok(1)
}
