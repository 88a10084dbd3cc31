//! Shared test fixtures for the integration tests.
//!
//! Every test runs the `docq` binary inside its own [`TempWorkspace`], with the state
//! directory pointed into the workspace so cache writes never touch the real home.

use docq::{DocDatabase, DocEntry};
use rstest::fixture;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// A temporary workspace directory for test isolation.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// State directory used as `DOCQ_HOME`.
    pub fn state_dir(&self) -> PathBuf {
        self.root.join("state")
    }

    /// Creates a file with the given content within this workspace.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
    }

    /// Writes a documentation database at `path`, relative to the workspace.
    pub fn create_database(&self, path: &str, entries: Vec<DocEntry>) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create database directory");
        }
        DocDatabase::new(entries)
            .save(&full_path)
            .unwrap_or_else(|e| panic!("Failed to write database '{}': {:#}", path, e));
    }

    /// Reads a file within this workspace, or `None` if it does not exist.
    pub fn read_file(&self, path: &str) -> Option<String> {
        std::fs::read_to_string(self.root.join(path)).ok()
    }

    /// Runs `docq` in the workspace without a pager or package discovery.
    pub fn docq(&self, args: &[&str], stdin: &str) -> Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_docq"))
            .args(["-T", "--no-discovery"])
            .args(args)
            .current_dir(&self.root)
            .env("DOCQ_HOME", self.state_dir())
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn docq");

        if let Some(mut input) = child.stdin.take() {
            // docq may exit before reading stdin
            let _ = input.write_all(stdin.as_bytes());
        }
        child.wait_with_output().expect("Failed to wait for docq")
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh empty workspace.
#[fixture]
pub fn workspace() -> TempWorkspace {
    TempWorkspace::new()
}
