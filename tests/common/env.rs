//! Test environment for isolated Terramena runs.
//!
//! Provides `TestEnv` - temp directories for the project, HOME and tool
//! logs, plus helpers to run the `terramena` binary inside them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::*;

/// Result of running a Terramena CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", line, e))
            })
            .collect()
    }
}

/// Isolated test environment.
///
/// The project directory is the working directory of every run. HOME and
/// XDG_CONFIG_HOME point into a separate temp dir so user config never
/// leaks in, and every `TERRAMENA_*` override is cleared.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    /// Where the fake tools write what they were called with
    pub log_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            log_dir: TempDir::new().expect("Failed to create log dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_terramena")),
        }
    }

    /// Project with state, channel, module directory and template in place
    pub fn with_deployment_project() -> Self {
        let env = Self::new();
        env.write_project_file("terraform.tfstate", STATE_THREE_HOSTS);
        env.write_project_file("channels.nix", CHANNELS_NIX);
        env.write_project_file("nixos/default.nix", MODULE_DEFAULT_NIX);
        env.write_project_file("colmena_deployment.nix", TEMPLATE_NIX);
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn log_path(&self, name: &str) -> PathBuf {
        self.log_dir.path().join(name)
    }

    /// Run terramena from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run terramena from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("TERRAMENA_TEST_LOG_DIR", self.log_dir.path())
            .env_remove("RUST_LOG");

        for key in [
            "TERRAMENA_STATE",
            "TERRAMENA_SSH_CONFIG",
            "TERRAMENA_CHANNEL",
            "TERRAMENA_TEMPLATE",
            "TERRAMENA_NIX_BUILD",
            "TERRAMENA_COLMENA",
            "TERRAMENA_SSH",
            "SSH_CONFIG_FILE",
        ] {
            cmd.env_remove(key);
        }

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute terramena");
        output_to_result(output)
    }

    /// Write a file relative to the project root, creating parents
    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        let full_path = self.project_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write an executable script into the project's `bin/` directory
    #[cfg(unix)]
    pub fn write_script(&self, name: &str, content: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.write_project_file(&format!("bin/{}", name), content);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
        path
    }

    /// Lines a fake tool recorded, empty when it never ran
    pub fn read_log_lines(&self, name: &str) -> Vec<String> {
        std::fs::read_to_string(self.log_path(name))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Path as a `&str` for CLI arguments
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("test paths are UTF-8")
}
