use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn catalog_lists_system_types_with_other_last() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("e-commerce\nsaas\n"))
        .stdout(predicate::str::ends_with("outro (custom)\n"));
}

#[test]
fn catalog_lists_specific_features() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["catalog", "--system-type", "e-commerce"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn unknown_system_type_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["catalog", "-t", "spaceship"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown system type 'spaceship'"));
}

#[test]
fn catalog_override_from_config() {
    let ctx = TestContext::new();
    ctx.write_file(
        "../catalog.toml",
        "system_types = [\"kiosk\", \"outro\"]\n\n[specific_features]\nkiosk = [\"Touch UI\"]\n",
    );
    ctx.write_config("[catalog]\npath = \"catalog.toml\"\n");

    ctx.cli().arg("catalog").assert().success().stdout("kiosk\noutro (custom)\n");
    ctx.cli().args(["catalog", "-t", "kiosk"]).assert().success().stdout("Touch UI\n");
}

#[test]
fn invalid_catalog_override_is_reported() {
    let ctx = TestContext::new();
    ctx.write_file("../catalog.toml", "colors = [\"Azul\", \"Azul\"]\n");
    ctx.write_config("[catalog]\npath = \"catalog.toml\"\n");

    ctx.cli()
        .arg("catalog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate option 'Azul'"));
}
