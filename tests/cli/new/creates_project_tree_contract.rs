use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn new_creates_exact_catalog_tree() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project files created in"))
        .stdout(predicate::str::contains("(49 files)"))
        .stdout(predicate::str::contains("cd sewapay-fintech"))
        .stdout(predicate::str::contains("npm run dev  # http://localhost:3000"));

    ctx.assert_matches_catalog(&ctx.project_path());
}

#[test]
fn new_accepts_custom_nested_target() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["n", "apps/portal", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cd apps/portal"));

    let root = ctx.work_dir().join("apps/portal");
    ctx.assert_matches_catalog(&root);
    assert!(!ctx.project_path().exists());
}
