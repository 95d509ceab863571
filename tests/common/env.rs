//! Test environment builder for isolated dayn testing.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Boilerplate stub content used as the template in tests.
pub const TEMPLATE: &str = "use std::error::Error;\n\npub(crate) fn main() -> Result<(), Box<dyn Error>> {\n    Ok(())\n}\n";

/// Result of running a dayn CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Isolated puzzle repository with the stub template in place.
pub struct TestEnv {
    pub repo_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let repo_root = TempDir::new().expect("failed to create temp repo");
        fs::create_dir_all(repo_root.path().join("tools")).unwrap();
        fs::write(repo_root.path().join("tools/dayn.rs"), TEMPLATE).unwrap();
        Self {
            repo_root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_dayn")),
        }
    }

    /// Bare temp directory without the template or any repo markers.
    pub fn empty() -> Self {
        Self {
            repo_root: TempDir::new().expect("failed to create temp repo"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_dayn")),
        }
    }

    /// Get path relative to the repository root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.repo_root.path().join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
    }

    /// Run dayn from the repository root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.repo_root.path(), args)
    }

    /// Run dayn from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .current_dir(cwd)
            .args(args)
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .output()
            .expect("failed to run dayn binary");
        TestResult::from(output)
    }
}
