use std::path::{Path, PathBuf};

use assert_cmd::Command;
use base64::{Engine, engine::general_purpose::STANDARD};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;
use usergroup_core::RecordKind;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("usergroup"))
}

fn group_bytes() -> Vec<u8> {
    let mut data = RecordKind::Group.discriminator().to_vec();
    data.extend_from_slice(&[3, 1, 0, 1, 2, 1, 0, 0]);
    data.extend_from_slice(&100u32.to_le_bytes());
    data.extend_from_slice(&4u32.to_le_bytes());
    data.extend_from_slice(&36u32.to_le_bytes());
    data.extend_from_slice(&17u32.to_le_bytes());
    data.extend_from_slice(&9u32.to_le_bytes());
    data.extend_from_slice(&[0u8; 32]);
    data.extend_from_slice(&[1u8; 32]);
    data
}

fn write_input(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).expect("write input");
    path
}

fn stdout_json(assert: &assert_cmd::assert::Assert) -> Value {
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    serde_json::from_str(&stdout).expect("valid json")
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("decode").and(contains("detect")));
    cmd().arg("decode").arg("--help").assert().success();
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.bin");
    let report = temp.path().join("report.json");

    cmd()
        .arg("decode")
        .arg("group")
        .arg(missing)
        .arg("-o")
        .arg(report)
        .assert()
        .code(2)
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn stdout_outputs_group_report() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(temp.path(), "group.bin", &group_bytes());

    let assert = cmd()
        .arg("decode")
        .arg("group")
        .arg(input)
        .arg("--stdout")
        .assert()
        .success();
    let value = stdout_json(&assert);
    assert_eq!(value["kind"], "group");
    assert_eq!(value["input"]["bytes"], 100);
    assert_eq!(value["record"]["seed"], 3);
    assert_eq!(value["record"]["electing"], true);
    assert_eq!(value["record"]["freeze"], false);
    assert_eq!(value["record"]["rate"]["denominator"], 2);
    assert_eq!(value["record"]["max_manager"], 100);
    assert_eq!(
        value["record"]["sponsor"],
        "11111111111111111111111111111111"
    );
}

#[test]
fn base64_input_is_decoded() {
    let temp = TempDir::new().expect("tempdir");
    let text = format!("{}\n", STANDARD.encode(group_bytes()));
    let input = write_input(temp.path(), "group.b64", text.as_bytes());

    let assert = cmd()
        .arg("decode")
        .arg("group")
        .arg(input)
        .arg("--base64")
        .arg("--stdout")
        .assert()
        .success();
    assert_eq!(stdout_json(&assert)["record"]["current_member"], 36);
}

#[test]
fn invalid_base64_fails() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(temp.path(), "group.b64", b"not base64!");

    cmd()
        .arg("decode")
        .arg("group")
        .arg(input)
        .arg("--base64")
        .arg("--stdout")
        .assert()
        .code(2)
        .stderr(contains("invalid base64"));
}

#[test]
fn report_written_to_file() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(temp.path(), "group.bin", &group_bytes());
    let report = temp.path().join("out").join("report.json");

    cmd()
        .arg("decode")
        .arg("group")
        .arg(&input)
        .arg("-o")
        .arg(&report)
        .arg("--pretty")
        .assert()
        .success()
        .stderr(contains("OK: report written"));

    let text = std::fs::read_to_string(&report).expect("report");
    assert!(text.contains('\n'));
    let value: Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["report_version"], 1);
}

#[test]
fn report_creates_nested_directories() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(temp.path(), "group.bin", &group_bytes());
    let report = temp.path().join("a").join("b").join("report.json");

    cmd()
        .arg("decode")
        .arg("group")
        .arg(&input)
        .arg("-o")
        .arg(&report)
        .arg("--quiet")
        .assert()
        .success();
    assert!(report.is_file());
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(temp.path(), "group.bin", &group_bytes());
    let report = temp.path().join("report.json");

    cmd()
        .arg("decode")
        .arg("group")
        .arg(input)
        .arg("-o")
        .arg(report)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(contains("OK: report written").not());
}

#[test]
fn report_path_must_differ_from_input() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(temp.path(), "group.bin", &group_bytes());

    cmd()
        .arg("decode")
        .arg("group")
        .arg(&input)
        .arg("-o")
        .arg(&input)
        .assert()
        .code(2)
        .stderr(contains("must differ from input"));
}

#[test]
fn stdout_and_report_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(temp.path(), "group.bin", &group_bytes());
    let report = temp.path().join("report.json");

    cmd()
        .arg("decode")
        .arg("group")
        .arg(input)
        .arg("--stdout")
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn pretty_and_compact_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(temp.path(), "group.bin", &group_bytes());

    cmd()
        .arg("decode")
        .arg("group")
        .arg(input)
        .arg("--stdout")
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn truncated_record_names_field() {
    let temp = TempDir::new().expect("tempdir");
    let mut data = group_bytes();
    data.truncate(99);
    let input = write_input(temp.path(), "group.bin", &data);

    cmd()
        .arg("decode")
        .arg("group")
        .arg(input)
        .arg("--stdout")
        .assert()
        .code(2)
        .stderr(
            contains("truncated input")
                .and(contains("field `admin`"))
                .and(contains("at least 100 bytes")),
        );
}

#[test]
fn invalid_boolean_is_reported() {
    let temp = TempDir::new().expect("tempdir");
    let mut data = group_bytes();
    data[9] = 2;
    let input = write_input(temp.path(), "group.bin", &data);

    cmd()
        .arg("decode")
        .arg("group")
        .arg(input)
        .arg("--stdout")
        .assert()
        .code(2)
        .stderr(contains("invalid bool value: 2").and(contains("field `electing`")));
}

#[test]
fn verify_discriminator_rejects_other_kind() {
    let temp = TempDir::new().expect("tempdir");
    let mut data = group_bytes();
    data.resize(RecordKind::Member.min_len().max(data.len()), 0);
    let input = write_input(temp.path(), "group.bin", &data);

    cmd()
        .arg("decode")
        .arg("member")
        .arg(&input)
        .arg("--stdout")
        .arg("--verify-discriminator")
        .assert()
        .code(2)
        .stderr(contains("discriminator mismatch").and(contains("usergroup detect")));
}

#[test]
fn detect_prints_kind() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(temp.path(), "group.bin", &group_bytes());

    cmd()
        .arg("detect")
        .arg(input)
        .assert()
        .success()
        .stdout("group\n");
}

#[test]
fn detect_unknown_discriminator_fails() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(temp.path(), "noise.bin", &[0xab; 16]);

    cmd()
        .arg("detect")
        .arg(input)
        .assert()
        .code(2)
        .stderr(contains("unrecognized discriminator").and(contains("--base64")));
}

#[test]
fn glob_with_single_match_is_accepted() {
    let temp = TempDir::new().expect("tempdir");
    write_input(temp.path(), "group.bin", &group_bytes());
    let pattern = temp.path().join("*.bin");

    cmd()
        .arg("detect")
        .arg(pattern)
        .assert()
        .success()
        .stdout("group\n");
}

#[test]
fn glob_with_multiple_matches_is_rejected() {
    let temp = TempDir::new().expect("tempdir");
    write_input(temp.path(), "a.bin", &group_bytes());
    write_input(temp.path(), "b.bin", &group_bytes());
    let pattern = temp.path().join("*.bin");

    cmd()
        .arg("decode")
        .arg("group")
        .arg(pattern)
        .arg("--stdout")
        .assert()
        .code(2)
        .stderr(contains("multiple files match pattern").and(contains("hint:")));
}
