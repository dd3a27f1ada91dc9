//! Common test utilities for packgraph integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary asset project for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new empty project directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a project directory that is already initialized
    pub fn initialized() -> Self {
        let project = Self::new();
        project.cmd().arg("scan").assert().success();
        project
    }

    /// Write a text file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        self.write_bytes(path, content.as_bytes());
    }

    /// Write a file with exact byte content, for size assertions
    pub fn write_bytes(&self, path: &str, content: &[u8]) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a file of the given size filled with zero bytes
    pub fn write_sized(&self, path: &str, size: usize) {
        self.write_bytes(path, &vec![0u8; size]);
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Delete a file from the project
    pub fn delete_file(&self, path: &str) {
        std::fs::remove_file(self.path.join(path)).expect("Failed to delete file");
    }

    /// Read the assignment store as a string
    pub fn assignments(&self) -> String {
        self.read_file(".packgraph/assignments.yaml")
    }

    /// Command running in this project's directory
    pub fn cmd(&self) -> Command {
        let mut cmd = packgraph_cmd();
        cmd.current_dir(&self.path);
        cmd
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

// cargo_bin is deprecated in recent assert_cmd; fine for tests until the
// replacement API settles.
#[allow(deprecated)]
#[allow(dead_code)]
pub fn packgraph_cmd() -> Command {
    let mut cmd = Command::cargo_bin("packgraph").expect("binary under test");
    // Keep the environment from redirecting commands at another project.
    cmd.env_remove("PACKGRAPH_PROJECT");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = TestProject::new();
        assert!(project.path.exists());
        assert!(!project.file_exists(".packgraph"));
    }

    #[test]
    fn test_project_file_operations() {
        let project = TestProject::new();
        project.write_file("textures/logo.png", "png");
        assert!(project.file_exists("textures/logo.png"));
        assert_eq!(project.read_file("textures/logo.png"), "png");

        project.write_sized("audio/theme.ogg", 64);
        let file = project.path.join("audio/theme.ogg");
        assert_eq!(std::fs::metadata(file).unwrap().len(), 64);
    }
}
