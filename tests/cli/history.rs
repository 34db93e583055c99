use crate::harness::TestContext;
use crate::harness::answers::{ECOMMERCE_DOCUMENT, ECOMMERCE_JSON};
use predicates::prelude::*;

#[test]
fn history_requires_identity() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["history", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No identity configured"));
}

#[test]
fn compose_save_with_copy_requires_identity() {
    let ctx = TestContext::new();
    let answers = ctx.write_file("answers.json", ECOMMERCE_JSON);

    ctx.cli()
        .args(["compose", "--copy", "--save", "--answers"])
        .arg(&answers)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Copied").not())
        .stderr(predicate::str::contains("No identity configured"));
}

#[test]
fn saved_prompt_can_be_listed_shown_and_deleted() {
    let ctx = TestContext::signed_in("u-123");
    let answers = ctx.write_file("answers.json", ECOMMERCE_JSON);

    let id = ctx.save_prompt(&answers);
    assert_eq!(id.len(), 16);
    assert!(ctx.history_dir().join("u-123.json").exists());

    ctx.cli()
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&id))
        .stdout(predicate::str::contains("Sistema e-commerce"));

    ctx.cli().args(["h", "show", id.as_str()]).assert().success().stdout(ECOMMERCE_DOCUMENT);

    ctx.cli()
        .args(["history", "delete", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    ctx.cli().args(["history", "list"]).assert().success().stdout("No saved prompts\n");
}

#[test]
fn identity_can_come_from_environment() {
    let ctx = TestContext::new();
    ctx.write_config(&format!("[history]\ndir = \"{}\"\n", ctx.history_dir().display()));
    let answers = ctx.write_file("answers.json", ECOMMERCE_JSON);

    ctx.cli()
        .args(["compose", "--save", "--answers"])
        .arg(&answers)
        .env("DEVPROMPT_USER_ID", "env-user")
        .assert()
        .success();

    assert!(ctx.history_dir().join("env-user.json").exists());
}

#[test]
fn histories_are_separate_per_identity() {
    let ctx = TestContext::signed_in("alice");
    let answers = ctx.write_file("answers.json", ECOMMERCE_JSON);
    ctx.save_prompt(&answers);

    ctx.cli()
        .args(["history", "list"])
        .env("DEVPROMPT_USER_ID", "bob")
        .assert()
        .success()
        .stdout("No saved prompts\n");
}

#[test]
fn showing_unknown_entry_fails() {
    let ctx = TestContext::signed_in("u-123");

    ctx.cli()
        .args(["history", "show", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("History entry 'deadbeef' not found"));
}

#[test]
fn saving_empty_document_is_rejected() {
    let ctx = TestContext::signed_in("u-123");

    ctx.cli()
        .args(["compose", "--save"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}
