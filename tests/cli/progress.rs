use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn progress_marks_toggle_steps_complete_for_empty_answers() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("progress")
        .write_stdin("{}")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[ ] System Type\n[ ] Objective\n"))
        .stdout(predicate::str::contains("[x] Landing Page\n[x] Dashboard\n"))
        .stdout(predicate::str::ends_with("2/10 steps complete (20%)\n"));
}

#[test]
fn progress_reflects_answered_steps() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("p")
        .write_stdin(r#"{"systemType":"saas","objective":"Billing","hasDashboard":true}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] System Type\n[x] Objective\n"))
        .stdout(predicate::str::contains("[ ] Dashboard\n"))
        .stdout(predicate::str::ends_with("3/10 steps complete (30%)\n"));
}
