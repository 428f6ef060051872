//! Exit codes, diagnostics and file discovery.

use crate::common::{
    DOUBLE_BLANK_CONF, MISSING_BLANK_AFTER_SECTION_CONF, TAB_CONF, TestFixture, VALID_CONF,
};
use crate::layout_guard;
use predicates::prelude::*;

// =============================================================================
// Exit Codes
// =============================================================================

#[test]
fn valid_tree_exits_zero() {
    let fixture = TestFixture::new();
    fixture.create_file("etc/app.conf", VALID_CONF);
    fixture.create_file("etc/nested/db.conf", "host = db\nport = 5432\n");

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "etc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ PASSED:"))
        .stdout(predicate::str::contains(
            "Summary: 2 files checked, 2 passed, 0 failed",
        ));
}

#[test]
fn failing_file_exits_two() {
    let fixture = TestFixture::new();
    fixture.create_file("etc/bad.conf", DOUBLE_BLANK_CONF);

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "etc"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "[E001] More than one blank line successively at line 3",
        ));
}

#[test]
fn missing_paths_exit_two_with_usage() {
    let fixture = TestFixture::new();

    layout_guard!()
        .current_dir(fixture.path())
        .arg("--no-config")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing directory path(s)"))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn unknown_flag_exits_one() {
    layout_guard!()
        .args(["--no-such-flag", "etc"])
        .assert()
        .code(1);
}

#[test]
fn invalid_exclude_pattern_exits_one() {
    let fixture = TestFixture::new();
    fixture.create_file("etc/app.conf", VALID_CONF);

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "--exclude-file", "(", "etc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid exclude file pattern"));
}

#[test]
fn missing_directory_exits_three() {
    let fixture = TestFixture::new();

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "does-not-exist"])
        .assert()
        .code(3);
}

#[test]
fn help_and_version_exit_zero() {
    layout_guard!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--line-max-length"));

    layout_guard!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn only_matching_extension_is_checked() {
    let fixture = TestFixture::new();
    fixture.create_file("etc/app.conf", VALID_CONF);
    fixture.create_file("etc/readme.txt", DOUBLE_BLANK_CONF);

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "etc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 files checked"));
}

#[test]
fn custom_extension_selects_other_files() {
    let fixture = TestFixture::new();
    fixture.create_file("etc/app.conf", VALID_CONF);
    fixture.create_file("etc/bad.cfg", DOUBLE_BLANK_CONF);

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "--file-extension", "cfg", "etc"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("bad.cfg"));
}

#[test]
fn excluded_files_are_skipped() {
    let fixture = TestFixture::new();
    fixture.create_file("etc/app.conf", VALID_CONF);
    fixture.create_file("etc/vendor/bad.conf", DOUBLE_BLANK_CONF);
    fixture.create_file("etc/generated.conf", DOUBLE_BLANK_CONF);

    layout_guard!()
        .current_dir(fixture.path())
        .args([
            "--no-config",
            "--exclude-file",
            "vendor,generated",
            "etc",
        ])
        .assert()
        .success();
}

#[test]
fn every_path_argument_is_checked() {
    let fixture = TestFixture::new();
    fixture.create_file("one/app.conf", VALID_CONF);
    fixture.create_file("two/bad.conf", MISSING_BLANK_AFTER_SECTION_CONF);

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "one", "two"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "[E003] Expecting a blank line after nested section at line 4",
        ));
}

#[test]
fn file_argument_is_checked_directly() {
    let fixture = TestFixture::new();
    fixture.create_file("single.conf", DOUBLE_BLANK_CONF);

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "single.conf"])
        .assert()
        .code(2);
}

#[test]
fn empty_directory_passes() {
    let fixture = TestFixture::new();
    fixture.create_dir("empty");

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "empty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 files checked"));
}

// =============================================================================
// Layout Options
// =============================================================================

#[test]
fn tab_indent_option() {
    let fixture = TestFixture::new();
    fixture.create_file("etc/tabs.conf", TAB_CONF);

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "etc"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("[E005]"));

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "--indent", "\t", "etc"])
        .assert()
        .success();
}

#[test]
fn line_max_length_option() {
    let fixture = TestFixture::new();
    fixture.create_file("etc/app.conf", "name = abcdefghijklmnopqrst\n");

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "--line-max-length", "10", "etc"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("[E007] Line 1 is too long: 27 > 10"));
}

#[test]
fn latin1_file_is_checked_not_reported_as_error() {
    let fixture = TestFixture::new();
    fixture.create_dir("etc");
    std::fs::write(
        fixture.path().join("etc/legacy.conf"),
        b"# caf\xe9\nname = app\n",
    )
    .unwrap();

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "etc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ PASSED:"))
        .stdout(predicate::str::contains("ERROR").not());
}
