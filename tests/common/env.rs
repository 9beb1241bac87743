//! Test environment builder for isolated Deckhand testing.
//!
//! Provides `TestEnv` - temp directories for the project, home and a private
//! `PATH`, plus helpers to run the Deckhand CLI. The private `PATH` is empty
//! unless a fake `docker` is installed, so no test ever reaches a real daemon.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::windows::WindowsCompatExt;

/// Result of running a Deckhand CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// stdout parsed as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {l}"))
            })
            .collect()
    }

    /// The first event with the given `event` field
    pub fn event(&self, name: &str) -> Option<serde_json::Value> {
        self.json_events().into_iter().find(|e| e["event"] == name)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the project (the working directory)
    pub project_root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    /// Directory used as the whole `PATH`
    bin_dir: TempDir,
    deckhand_bin: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin_dir: TempDir::new().expect("Failed to create bin dir"),
            deckhand_bin: PathBuf::from(env!("CARGO_BIN_EXE_deckhand")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run deckhand in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run deckhand with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.deckhand_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .with_test_home(self.home_dir.path())
            .env("PATH", self.bin_dir.path())
            .env("NO_COLOR", "1")
            .env("LANG", "C")
            .env_remove("DECKHAND_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute deckhand");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Read a project file
    pub fn read(&self, relative_path: &str) -> String {
        let full_path = self.project_path(relative_path);
        std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    pub fn exists(&self, relative_path: &str) -> bool {
        self.project_path(relative_path).exists()
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Every argument line the fake docker received
    pub fn docker_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.docker_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn docker_log(&self) -> PathBuf {
        self.bin_dir.path().join("docker.log")
    }

    /// Install a `docker` stand-in that reports `running` from `docker ps`.
    ///
    /// `compose up` fails when `fail_up` is set.
    #[cfg(unix)]
    pub fn install_fake_docker(&self, running: &[&str], fail_up: bool) {
        use std::os::unix::fs::PermissionsExt;

        let up_status = if fail_up { 1 } else { 0 };
        let script = format!(
            r#"#!/bin/sh
echo "$*" >> "{log}"
case "$1" in
  --version) echo "Docker version 27.0.0, build fake" ;;
  ps) printf '%s\n' {running} ;;
  compose)
    for arg in "$@"; do last="$arg"; done
    if [ "$2" = "version" ]; then echo "Docker Compose version v2.29.0"; exit 0; fi
    if [ "$last" = "-d" ] && [ {up_status} -ne 0 ]; then echo "pull access denied" >&2; exit {up_status}; fi
    ;;
esac
exit 0
"#,
            log = self.docker_log().display(),
            running = running.join(" "),
            up_status = up_status,
        );
        let path = self.bin_dir.path().join("docker");
        std::fs::write(&path, script).expect("Failed to write fake docker");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake docker executable");
    }

    pub fn path(&self) -> &Path {
        self.project_root.path()
    }
}
