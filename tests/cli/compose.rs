use crate::harness::TestContext;
use crate::harness::answers::{
    ECOMMERCE_DOCUMENT, ECOMMERCE_JSON, ECOMMERCE_TOML, ECOMMERCE_YAML,
};
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn compose_prints_document_for_each_answers_format() {
    let ctx = TestContext::new();

    for (name, content) in [
        ("answers.json", ECOMMERCE_JSON),
        ("answers.toml", ECOMMERCE_TOML),
        ("answers.yaml", ECOMMERCE_YAML),
    ] {
        let path = ctx.write_file(name, content);
        ctx.cli()
            .args(["compose", "--answers"])
            .arg(&path)
            .assert()
            .success()
            .stdout(ECOMMERCE_DOCUMENT);
    }
}

#[test]
fn compose_reads_json_from_stdin() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["c", "--answers", "-"])
        .write_stdin(ECOMMERCE_JSON)
        .assert()
        .success()
        .stdout(ECOMMERCE_DOCUMENT);
}

#[test]
fn empty_answers_compose_to_nothing() {
    let ctx = TestContext::new();

    ctx.cli().arg("compose").write_stdin("{}").assert().success().stdout("");
}

#[test]
fn other_system_type_uses_custom_text() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("compose")
        .write_stdin(r#"{"systemType":"outro","systemTypeCustom":"Quantum Scheduler"}"#)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Sistema Quantum Scheduler\n\n"))
        .stdout(predicate::str::contains("outro").not());
}

#[test]
fn compose_writes_output_file() {
    let ctx = TestContext::new();
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("out/prompt.md");

    ctx.cli()
        .args(["compose", "--output"])
        .arg(output.path())
        .write_stdin(ECOMMERCE_JSON)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved prompt to"));

    output.assert(ECOMMERCE_DOCUMENT);
}

#[test]
fn compose_output_refuses_empty_document() {
    let ctx = TestContext::new();
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("prompt.md");

    ctx.cli()
        .args(["compose", "--output"])
        .arg(output.path())
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: The composed prompt is empty"));

    output.assert(predicate::path::missing());
}

#[test]
fn malformed_answers_report_the_source() {
    let ctx = TestContext::new();
    let path = ctx.write_file("broken.json", "{ not json");

    ctx.cli()
        .args(["compose", "--answers"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse answers from"))
        .stderr(predicate::str::contains("broken.json"));
}

#[test]
fn unknown_answer_fields_are_ignored() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("compose")
        .write_stdin(r#"{"objective":"CRM","legacyField":true}"#)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("## Objective\nCRM\n\n"));
}
