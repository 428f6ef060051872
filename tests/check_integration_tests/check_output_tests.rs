//! Output formats, quiet mode and colors.

use crate::common::{DOUBLE_BLANK_CONF, TestFixture, VALID_CONF};
use crate::layout_guard;
use predicates::prelude::*;

fn mixed_fixture() -> TestFixture {
    let fixture = TestFixture::new();
    fixture.create_file("etc/a.conf", VALID_CONF);
    fixture.create_file("etc/b.conf", DOUBLE_BLANK_CONF);
    fixture
}

#[test]
fn text_output_lists_files_in_order() {
    let fixture = mixed_fixture();

    let output = layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "etc"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();

    assert_eq!(output.status.code(), Some(2));
    assert!(lines[0].starts_with("✓ PASSED: ") && lines[0].ends_with("a.conf"));
    assert!(lines[1].starts_with("✗ FAILED: ") && lines[1].contains("b.conf: [E001]"));
    assert_eq!(lines[2], "Summary: 2 files checked, 1 passed, 1 failed");
}

#[test]
fn quiet_mode_reports_only_failures() {
    let fixture = mixed_fixture();

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "--quiet", "etc"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("PASSED").not())
        .stdout(predicate::str::contains("Summary").not())
        .stdout(predicate::str::contains("FAILED"));
}

#[test]
fn json_output() {
    let fixture = mixed_fixture();

    let output = layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "--format", "json", "etc"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(json["summary"]["total_files"], 2);
    assert_eq!(json["summary"]["passed"], 1);
    assert_eq!(json["summary"]["failed"], 1);
    assert_eq!(json["results"][1]["status"], "failed");
    assert_eq!(json["results"][1]["diagnostic"]["code"], "E001");
    assert_eq!(json["results"][1]["diagnostic"]["line"], 3);
}

#[test]
fn unknown_format_exits_one() {
    layout_guard!()
        .args(["--format", "sarif", "etc"])
        .assert()
        .code(1);
}

#[test]
fn color_always_emits_ansi() {
    let fixture = mixed_fixture();

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "always", "etc"])
        .assert()
        .stdout(predicate::str::contains("\x1b["));
}

#[test]
fn color_never_emits_plain_text() {
    let fixture = mixed_fixture();

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "etc"])
        .assert()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn verbose_logging_goes_to_stderr() {
    let fixture = mixed_fixture();

    layout_guard!()
        .current_dir(fixture.path())
        .env_remove("RUST_LOG")
        .args(["--no-config", "--color", "never", "-v", "--format", "json", "etc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("checked"));
}
