use crate::common::{run_with_stdin, tally_command};
use std::io::Write;

#[tokio::test]
async fn test_counts_roster_from_stdin() {
    let output = run_with_stdin(&[], "Nam\nNữ\n\nnam\nAn\n").await;

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== GENDER TALLY ==="), "stdout: {}", stdout);
    assert!(stdout.contains("Input: stdin (local matching)"), "stdout: {}", stdout);
    assert!(stdout.contains("50.0%"), "stdout: {}", stdout);
    assert!(stdout.contains("25.0%"), "stdout: {}", stdout);
}

#[tokio::test]
async fn test_sample_flag_ignores_stdin() {
    let output = run_with_stdin(&["--sample", "--format", "json"], "garbage\n").await;
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["local"]["counts"]["male"], 3);
    assert_eq!(value["local"]["counts"]["female"], 8);
    assert_eq!(value["local"]["counts"]["unknown"], 0);
    assert_eq!(value["local"]["counts"]["total"], 11);
    assert_eq!(value["local"]["roster_label"], "sample");
    assert!(value.get("smart").is_none());
}

#[tokio::test]
async fn test_reads_roster_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "female\nmale\nmale\n").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let output = tally_command(&["--format", "json", &path])
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["local"]["counts"]["male"], 2);
    assert_eq!(value["local"]["counts"]["female"], 1);
}

#[tokio::test]
async fn test_empty_input_reports_zeroes() {
    let output = run_with_stdin(&[], "  \n\n").await;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0.0%"), "stdout: {}", stdout);
    assert!(stdout.contains("No entries to chart yet"), "stdout: {}", stdout);
}

#[tokio::test]
async fn test_extra_aliases_from_flags() {
    let output = run_with_stdin(
        &["--format", "json", "--male-alias", "Anh", "--female-alias", "Chị"],
        "anh\nchị\nnam\n",
    )
    .await;

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["local"]["counts"]["male"], 2);
    assert_eq!(value["local"]["counts"]["female"], 1);
    assert_eq!(value["local"]["counts"]["unknown"], 0);
}

#[tokio::test]
async fn test_missing_roster_file_fails() {
    let output = tally_command(&["/no/such/roster.txt"]).output().await.unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("I/O error"), "stderr: {}", stderr);
}

#[tokio::test]
async fn test_bad_alias_file_is_config_exit_code() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let output = run_with_stdin(&["--aliases", &path], "nam\n").await;

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Alias file error"), "stderr: {}", stderr);
}
