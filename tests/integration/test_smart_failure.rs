use crate::common::run_with_stdin;

#[tokio::test]
async fn test_missing_api_key_keeps_local_counts() {
    let output = run_with_stdin(&["--mode", "smart"], "Nam\nNữ\n").await;

    // The local report is still printed and the run succeeds.
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stdout.contains("local matching"), "stdout: {}", stdout);
    assert!(stdout.contains("50.0%"), "stdout: {}", stdout);
    assert!(!stdout.contains("smart analysis"), "stdout: {}", stdout);

    assert!(stderr.contains("SMART ANALYSIS ERROR"), "stderr: {}", stderr);
    assert!(stderr.contains("API key is missing"), "stderr: {}", stderr);
}

#[tokio::test]
async fn test_smart_failure_in_json_output() {
    let output = run_with_stdin(&["--mode", "smart", "--format", "json"], "Nam\n").await;

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(value["local"]["counts"]["male"], 1);
    assert!(value.get("smart").is_none());
    assert!(value["smart_error"]
        .as_str()
        .unwrap()
        .contains("API key is missing"));
}

#[tokio::test]
async fn test_unsupported_model_in_smart_mode() {
    let output = run_with_stdin(&["--mode", "smart", "--model", "llama-3"], "Nam\n").await;

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported model 'llama-3'"), "stderr: {}", stderr);
}

#[tokio::test]
async fn test_smart_mode_skips_empty_input() {
    let output = run_with_stdin(&["--mode", "smart"], "\n\n").await;

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input is empty"), "stderr: {}", stderr);
}
