mod common;

use common::{TestCommand, TestEnvironment};
use fcm_push::message::{build_common_message, build_override_message};

#[test]
fn test_cli_help() {
    TestCommand::new()
        .arg("--help")
        .expect_success()
        .stdout_contains("Send a Firebase Cloud Messaging notification")
        .stdout_contains("--message");
}

#[test]
fn test_cli_version() {
    TestCommand::new()
        .arg("--version")
        .expect_success()
        .stdout_contains("fcm-push");
}

#[test]
fn test_missing_message_prints_usage() {
    let env = TestEnvironment::new();
    env.command()
        .expect_success()
        .stdout_contains("Invalid command. Please use one of the following commands:")
        .stdout_contains("fcm-push --message=common-message")
        .stdout_contains("fcm-push --message=override-message");
}

#[test]
fn test_bogus_message_prints_usage_without_sending() {
    let env = TestEnvironment::new();
    env.command()
        .arg("--message=bogus")
        .expect_success()
        .stdout_contains("Invalid command.")
        .stdout_lacks("FCM request body")
        .stdout_lacks("Unable to send message to Firebase");
}

#[test]
fn test_common_message_dry_run_prints_body() {
    let env = TestEnvironment::new();
    let assertion = env
        .command()
        .args(["--message=common-message", "--dry-run"])
        .expect_success()
        .stdout_contains("FCM request body for message using common notification object:")
        .stdout_lacks("Message sent to Firebase");

    let stdout = assertion.stdout();
    let json_start = stdout.find('{').expect("body should be printed");
    let printed: serde_json::Value = serde_json::from_str(stdout[json_start..].trim()).unwrap();
    assert_eq!(printed, serde_json::to_value(build_common_message()).unwrap());
}

#[test]
fn test_rust_log_raises_log_level() {
    let env = TestEnvironment::new();
    env.command()
        .env("RUST_LOG", "debug")
        .args(["--message=common-message", "--dry-run"])
        .expect_success()
        .stderr_contains("Dry run - not sending to FCM");
}

#[test]
fn test_default_log_level_is_quiet() {
    let env = TestEnvironment::new();
    env.command()
        .args(["--message=common-message", "--dry-run"])
        .expect_success()
        .done()
        .stderr(predicates::str::is_empty());
}

#[test]
fn test_override_message_dry_run_prints_body() {
    let env = TestEnvironment::new();
    let assertion = env
        .command()
        .args(["--message", "override-message", "--dry-run"])
        .expect_success()
        .stdout_contains("FCM request body for override message:")
        .stdout_contains("\"apns-priority\": \"10\"")
        .stdout_contains("\"click_action\": \"android.intent.action.MAIN\"");

    let stdout = assertion.stdout();
    let json_start = stdout.find('{').expect("body should be printed");
    let printed: serde_json::Value = serde_json::from_str(stdout[json_start..].trim()).unwrap();
    assert_eq!(printed, serde_json::to_value(build_override_message()).unwrap());
}

#[test]
fn test_missing_credentials_fails_after_echo() {
    let env = TestEnvironment::new();
    let missing = env.path().join("missing-key.json");

    env.command()
        .args(["--message=common-message", "--credentials"])
        .arg(missing.to_string_lossy())
        .expect_failure()
        .stdout_contains("FCM request body for message using common notification object:")
        .stderr_contains("Unable to load service account key");
}

#[test]
fn test_missing_explicit_config_fails() {
    let env = TestEnvironment::new();
    env.command()
        .args(["--message=common-message", "--dry-run", "--config", "nope.toml"])
        .expect_failure()
        .stderr_contains("Configuration file not found");
}
