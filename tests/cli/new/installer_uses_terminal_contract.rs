use crate::harness::TestContext;
use predicates::prelude::*;

#[cfg(unix)]
#[test]
fn installer_can_read_user_input() {
    let ctx = TestContext::new();
    ctx.write_file(
        "scaffold.toml",
        "[install]\nprogram = \"sh\"\nargs = [\"-c\", \"read answer && test \\\"$answer\\\" = yes && touch answered\"]\n",
    );

    ctx.cli()
        .args(["new", "--config", "scaffold.toml"])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Dependency installation failed").not());

    assert!(ctx.project_path().join("answered").is_file());
}
