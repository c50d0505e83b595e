use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn list_prints_catalog_paths() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("package.json"))
        .stdout(predicate::str::contains("app/portal/retailer/page.tsx"))
        .stdout(predicate::str::contains(".gitignore"));

    assert!(!ctx.project_path().exists());
}

#[test]
fn list_json_is_machine_readable() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["ls", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().expect("listing should be an array");
    assert_eq!(entries.len(), 49);
    assert!(entries.iter().all(|e| e["sha256"].as_str().map(str::len) == Some(64)));
}
