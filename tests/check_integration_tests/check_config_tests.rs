//! Configuration file discovery and precedence.

use crate::common::{DOUBLE_BLANK_CONF, TAB_CONF, TestFixture, VALID_CONF};
use crate::layout_guard;
use predicates::prelude::*;

#[test]
fn local_config_is_loaded() {
    let fixture = TestFixture::new();
    fixture.create_config("[check]\nindent = \"\\t\"\n");
    fixture.create_file("etc/tabs.conf", TAB_CONF);

    layout_guard!()
        .current_dir(fixture.path())
        .arg("etc")
        .assert()
        .success();
}

#[test]
fn no_config_ignores_local_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[check]\nindent = \"\\t\"\n");
    fixture.create_file("etc/tabs.conf", TAB_CONF);

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "etc"])
        .assert()
        .code(2);
}

#[test]
fn explicit_config_path() {
    let fixture = TestFixture::new();
    fixture.create_file("settings/guard.toml", "[check]\nextension = \"cfg\"\n");
    fixture.create_file("etc/bad.conf", DOUBLE_BLANK_CONF);
    fixture.create_file("etc/ok.cfg", VALID_CONF);

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--config", "settings/guard.toml", "etc"])
        .assert()
        .success();
}

#[test]
fn cli_flag_overrides_config_file() {
    let fixture = TestFixture::new();
    fixture.create_config("[check]\nline_max_length = 10\n");
    fixture.create_file("etc/app.conf", "name = abcdefghijklmnopqrst\n");

    layout_guard!()
        .current_dir(fixture.path())
        .arg("etc")
        .assert()
        .code(2);

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--line-max-length", "80", "etc"])
        .assert()
        .success();
}

#[test]
fn config_and_cli_excludes_combine() {
    let fixture = TestFixture::new();
    fixture.create_config("[check]\nexclude = [\"vendor\"]\n");
    fixture.create_file("etc/vendor/bad.conf", DOUBLE_BLANK_CONF);
    fixture.create_file("etc/generated.conf", DOUBLE_BLANK_CONF);

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--exclude-file", "generated", "etc"])
        .assert()
        .success();
}

#[test]
fn unknown_config_key_exits_one() {
    let fixture = TestFixture::new();
    fixture.create_config("[check]\nindentation = \"  \"\n");
    fixture.create_file("etc/app.conf", VALID_CONF);

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--color", "never", "etc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config"));
}

#[test]
fn empty_indent_in_config_exits_one() {
    let fixture = TestFixture::new();
    fixture.create_config("[check]\nindent = \"\"\n");
    fixture.create_file("etc/app.conf", VALID_CONF);

    layout_guard!()
        .current_dir(fixture.path())
        .arg("etc")
        .assert()
        .code(1);
}

#[test]
fn missing_explicit_config_exits_one() {
    let fixture = TestFixture::new();
    fixture.create_file("etc/app.conf", VALID_CONF);

    layout_guard!()
        .current_dir(fixture.path())
        .args(["--config", "absent.toml", "etc"])
        .assert()
        .code(1);
}
