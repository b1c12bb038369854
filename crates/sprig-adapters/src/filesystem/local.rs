//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use sprig_core::{application::ports::Filesystem, error::SprigResult};

/// Production filesystem implementation.
///
/// `write_file` never leaves a partial write behind: content goes to a
/// temporary file in the destination directory and is renamed over the
/// target, so on any failure the target keeps its prior state.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SprigResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SprigResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)
            .map_err(|e| map_io_error(path, e, "create parent directories"))?;

        let mut tmp =
            NamedTempFile::new_in(parent).map_err(|e| map_io_error(path, e, "stage write"))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))?;
        tmp.persist(path)
            .map_err(|e| map_io_error(path, e.error, "replace file"))?;
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> SprigResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> sprig_core::error::SprigError {
    use sprig_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "hello").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "hello");
        assert!(fs.exists(&path));
        assert!(!fs.is_dir(&path));
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("deep.txt");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "nested").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "nested");
        assert!(fs.is_dir(&dir.path().join("a").join("b")));
    }

    #[test]
    fn write_replaces_existing_content_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.txt");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "first version, quite long").unwrap();
        fs.write_file(&path, "second").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn create_dir_all_is_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("x").join("y").join("z");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&nested).unwrap();
        assert!(fs.is_dir(&nested));
    }

    #[test]
    fn reading_a_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.read_to_string(&dir.path().join("absent")).is_err());
    }

    #[test]
    #[cfg(unix)]
    fn write_into_unwritable_directory_leaves_no_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

        let fs = LocalFilesystem::new();
        let target = locked.join("file.txt");
        // Root bypasses permission checks; only assert when the write fails.
        if fs.write_file(&target, "data").is_err() {
            assert!(!fs.exists(&target));
        }

        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}
