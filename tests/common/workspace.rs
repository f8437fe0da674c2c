//! Scratch directories for conversion tests.

use std::path::{Path, PathBuf};

/// A temporary input directory and output directory.
pub struct TestWorkspace {
    _tmp: tempfile::TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("assets");
        let output = tmp.path().join("out");
        std::fs::create_dir(&input).unwrap();
        Self {
            _tmp: tmp,
            input,
            output,
        }
    }

    /// Write `bytes` to `input/name` and return the path.
    pub fn add(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.input.join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    pub fn read_output(&self, name: &str) -> String {
        let path = self.output.join(name);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
    }

    /// Sorted file names in the output directory (empty if it doesn't exist).
    pub fn output_files(&self) -> Vec<String> {
        list_files(&self.output)
    }
}

fn list_files(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
