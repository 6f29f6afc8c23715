//! Common test utilities and helpers
//!
//! Runs the fcm-push binary inside an isolated temporary environment so the
//! developer's own config files and FCM_* variables never leak into tests.

#![allow(dead_code)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test command builder for the fcm-push CLI
pub struct TestCommand {
    cmd: Command,
}

impl TestCommand {
    /// Create a new test command for the fcm-push binary
    pub fn new() -> Self {
        let mut cmd = Command::cargo_bin("fcm-push")
            .expect("Failed to find fcm-push binary");
        for var in ["FCM_PUSH_CONFIG", "FCM_CREDENTIALS", "FCM_PROJECT_ID", "FCM_ACCESS_TOKEN", "RUST_LOG"] {
            cmd.env_remove(var);
        }
        Self { cmd }
    }

    /// Add arguments to the command
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            self.cmd.arg(arg.as_ref());
        }
        self
    }

    /// Add a single argument to the command
    pub fn arg<S: AsRef<str>>(mut self, arg: S) -> Self {
        self.cmd.arg(arg.as_ref());
        self
    }

    /// Set environment variable
    pub fn env<K, V>(mut self, key: K, val: V) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.cmd.env(key.as_ref(), val.as_ref());
        self
    }

    /// Run from `dir`, with HOME and XDG_CONFIG_HOME pointed at it as well
    pub fn isolated_in(mut self, dir: &Path) -> Self {
        self.cmd
            .current_dir(dir)
            .env("HOME", dir)
            .env("XDG_CONFIG_HOME", dir.join(".config"));
        self
    }

    /// Execute and expect success
    pub fn expect_success(mut self) -> TestAssertion {
        let assert = self.cmd.assert().success();
        TestAssertion { assert }
    }

    /// Execute and expect failure
    pub fn expect_failure(mut self) -> TestAssertion {
        let assert = self.cmd.assert().failure();
        TestAssertion { assert }
    }
}

impl Default for TestCommand {
    fn default() -> Self {
        Self::new()
    }
}

/// Test assertion wrapper with convenient methods
pub struct TestAssertion {
    assert: assert_cmd::assert::Assert,
}

impl TestAssertion {
    /// Assert stdout contains text
    pub fn stdout_contains<S: AsRef<str>>(self, text: S) -> Self {
        let assert = self.assert.stdout(predicate::str::contains(text.as_ref()));
        Self { assert }
    }

    /// Assert stdout does not contain text
    pub fn stdout_lacks<S: AsRef<str>>(self, text: S) -> Self {
        let assert = self.assert.stdout(predicate::str::contains(text.as_ref()).not());
        Self { assert }
    }

    /// Assert stderr contains text
    pub fn stderr_contains<S: AsRef<str>>(self, text: S) -> Self {
        let assert = self.assert.stderr(predicate::str::contains(text.as_ref()));
        Self { assert }
    }

    /// Stdout as a string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.assert.get_output().stdout).into_owned()
    }

    /// Finish the assertion
    pub fn done(self) -> assert_cmd::assert::Assert {
        self.assert
    }
}

/// Temporary directory the binary runs in
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `fcm-push.toml` pointing the client at `base_url`
    pub fn write_config(&self, base_url: &str, project_id: &str) -> PathBuf {
        let path = self.path().join("fcm-push.toml");
        let content = format!(
            "[fcm]\nproject_id = \"{project_id}\"\nbase_url = \"{base_url}\"\ntimeout_secs = 5\n"
        );
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Create a command running inside this environment
    pub fn command(&self) -> TestCommand {
        TestCommand::new().isolated_in(self.path())
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}
