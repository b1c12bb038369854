//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use sprig_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SprigResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so tests can keep a handle for assertions while the
/// filesystem is boxed into a service.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, registering its ancestor directories (testing helper).
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            register_dirs(&mut inner.directories, parent);
        }
        inner.files.insert(path, content.into());
    }

    /// Seed a directory and its ancestors (testing helper).
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        register_dirs(&mut inner.directories, &path.into());
    }

    /// Read a file's content (testing helper).
    pub fn file_content(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }
}

fn register_dirs(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> SprigResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        register_dirs(&mut inner.directories, path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SprigResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        if let Some(parent) = path.parent() {
            register_dirs(&mut inner.directories, parent);
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> SprigResult<String> {
        let inner = self.inner.read().map_err(|_| lock_error(path))?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.directories.contains(path)
    }
}

fn lock_error(path: &Path) -> sprig_core::error::SprigError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: "filesystem lock poisoned".into(),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_registers_parent_directories() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("/proj/src/app.html"), "<html>").unwrap();

        assert!(fs.is_dir(Path::new("/proj/src")));
        assert!(fs.is_dir(Path::new("/proj")));
        assert_eq!(
            fs.read_to_string(Path::new("/proj/src/app.html")).unwrap(),
            "<html>"
        );
    }

    #[test]
    fn missing_file_read_is_an_error() {
        let fs = MemoryFilesystem::new();
        assert!(fs.read_to_string(Path::new("/absent")).is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.add_file("/seeded.txt", "content");
        assert!(handle.exists(Path::new("/seeded.txt")));
    }

    #[test]
    fn files_are_not_directories() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/proj/package.json", "{}");
        assert!(fs.exists(Path::new("/proj/package.json")));
        assert!(!fs.is_dir(Path::new("/proj/package.json")));
    }
}
