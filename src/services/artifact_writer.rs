use std::fs;
use std::path::PathBuf;

use crate::error::ConvertError;
use crate::models::Artifact;

/// Writes rendered artifacts into one destination directory.
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    /// Writer for `dir`, creating it if missing.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, ConvertError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| ConvertError::io(&dir, e))?;
        Ok(Self { dir })
    }

    /// Write every artifact or none of them.
    ///
    /// Each artifact is first written to a hidden `.<name>.tmp` sibling. Only
    /// once every one of them is complete are they renamed into place. If any
    /// step fails, the staged files and any already renamed are removed
    /// before the error is returned, so no truncated artifact is left behind.
    pub fn write_all(&self, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, ConvertError> {
        let mut staged = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = self.dir.join(&artifact.file_name);
            let temp = self.dir.join(format!(".{}.tmp", artifact.file_name));
            if let Err(e) = fs::write(&temp, &artifact.contents) {
                // fs::write may have created and partly filled `temp`
                staged.push((temp, path.clone()));
                self.rollback(&staged, &[]);
                return Err(ConvertError::io(path, e));
            }
            staged.push((temp, path));
        }

        let mut written = Vec::with_capacity(staged.len());
        for (i, (temp, path)) in staged.iter().enumerate() {
            if let Err(e) = fs::rename(temp, path) {
                self.rollback(&staged[i..], &written);
                return Err(ConvertError::io(path, e));
            }
            tracing::debug!(path = %path.display(), "Wrote artifact");
            written.push(path.clone());
        }
        Ok(written)
    }

    fn rollback(&self, staged: &[(PathBuf, PathBuf)], written: &[PathBuf]) {
        let temps = staged.iter().map(|(temp, _)| temp);
        for path in temps.chain(written) {
            match fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to remove partial artifact")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArtifactKind;

    fn artifact(name: &str) -> Artifact {
        Artifact::new(ArtifactKind::Audio, name, format!("// {name}\n"))
    }

    #[test]
    fn test_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested/out");
        ArtifactWriter::create(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_writes_all() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = ArtifactWriter::create(tmp.path()).unwrap();
        let paths = writer
            .write_all(&[artifact("a_audio.c"), artifact("b_audio.c")])
            .unwrap();

        assert_eq!(paths.len(), 2);
        assert_eq!(
            fs::read_to_string(tmp.path().join("b_audio.c")).unwrap(),
            "// b_audio.c\n"
        );
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let tmp = tempfile::tempdir().unwrap();
        // A directory where the second staging file should go makes that write fail
        fs::create_dir(tmp.path().join(".blocked.c.tmp")).unwrap();
        let writer = ArtifactWriter::create(tmp.path()).unwrap();

        let result = writer.write_all(&[artifact("first.c"), artifact("blocked.c")]);

        assert!(matches!(result, Err(ConvertError::Io { .. })));
        assert!(!tmp.path().join("first.c").exists());
        assert!(!tmp.path().join(".first.c.tmp").exists());
        assert!(!tmp.path().join("blocked.c").exists());
    }

    #[test]
    fn test_failure_after_files_created_leaves_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        // Every file is staged and "a.c" is already in place when "b.c"
        // cannot be moved over a non-empty directory
        fs::create_dir_all(tmp.path().join("b.c/inner")).unwrap();
        let writer = ArtifactWriter::create(tmp.path()).unwrap();

        let result = writer.write_all(&[artifact("a.c"), artifact("b.c"), artifact("c.c")]);

        assert!(matches!(result, Err(ConvertError::Io { .. })));
        let mut left: Vec<String> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        left.sort();
        assert_eq!(left, vec!["b.c"]);
    }

    #[test]
    fn test_no_staging_files_after_success() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = ArtifactWriter::create(tmp.path()).unwrap();
        writer.write_all(&[artifact("x.c")]).unwrap();

        let names: Vec<String> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["x.c"]);
    }

    #[test]
    fn test_directory_creation_failure_is_io() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("plain-file");
        fs::write(&file, b"x").unwrap();

        let result = ArtifactWriter::create(file.join("sub"));
        assert!(matches!(result, Err(ConvertError::Io { .. })));
    }
}
