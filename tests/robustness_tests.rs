use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

#[test]
fn test_malformed_invocation_lines_are_skipped() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"handler": "initiate", "event": {{"body": "{{}}"}}}}"#).unwrap();
    // Unknown handler
    writeln!(file, r#"{{"handler": "refund", "event": {{}}}}"#).unwrap();
    // Not JSON at all
    writeln!(file, "initiate amount=5").unwrap();
    writeln!(file, r#"{{"handler": "status", "event": {{}}}}"#).unwrap();

    let mut cmd = Command::new(cargo_bin!("payflow"));
    cmd.arg("replay").arg(file.path());

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Error reading invocation").count(), 2);

    let statuses: Vec<u64> = common::response_bodies(&output.stdout)
        .into_iter()
        .map(|(status, _)| status)
        .collect();
    assert_eq!(statuses, vec![200, 400]);
}

#[test]
fn test_odd_bodies_never_fail_initiation() {
    let mut file = NamedTempFile::new().unwrap();
    for body in [
        r#""""#,
        r#""[1, 2, 3]""#,
        r#""{\"unterminated\": ""#,
        "null",
        "42",
        r#"{"amount": 1}"#,
    ] {
        writeln!(file, r#"{{"handler": "initiate", "event": {{"body": {}}}}}"#, body).unwrap();
    }
    writeln!(
        file,
        r#"{{"handler": "initiate", "event": {{"body": "not base64!", "isBase64Encoded": true}}}}"#
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("payflow"));
    cmd.arg("replay").arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading invocation").not());

    let output = Command::new(cargo_bin!("payflow"))
        .arg("replay")
        .arg(file.path())
        .output()
        .unwrap();
    let responses = common::response_bodies(&output.stdout);
    assert_eq!(responses.len(), 7);
    assert!(responses.iter().all(|(status, body)| *status == 200 && body["status"] == "pending"));
}

#[test]
fn test_missing_input_file_fails() {
    let mut cmd = Command::new(cargo_bin!("payflow"));
    cmd.arg("replay").arg("tests/fixtures/does_not_exist.ndjson");

    cmd.assert().failure();
}

#[test]
fn test_null_transaction_id_is_bad_request() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"handler": "status", "event": {{"queryStringParameters": {{"transaction_id": null}}}}}}"#
    )
    .unwrap();
    writeln!(
        file,
        r#"{{"handler": "status", "event": {{"queryStringParameters": {{"transaction_id": 42}}}}}}"#
    )
    .unwrap();

    let output = Command::new(cargo_bin!("payflow"))
        .arg("replay")
        .arg(file.path())
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Error reading invocation"));

    let responses = common::response_bodies(&output.stdout);
    assert_eq!(responses.len(), 2);
    for (status, body) in responses {
        assert_eq!(status, 400);
        assert_eq!(body["message"], "transaction_id required");
    }
}
