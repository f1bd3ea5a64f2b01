//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use nbforge_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, PathKind},
    },
    error::ForgeResult,
};

/// In-memory filesystem for testing.
///
/// Removal semantics match the real filesystem: removing a path that does
/// not exist fails with `PathNotFound`. The cleanup hook's fail-fast tests
/// depend on this strictness.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.executables.contains(path)
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
        inner.executables.clear();
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error(path: &Path) -> nbforge_core::error::ForgeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "filesystem lock poisoned".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> ForgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        if executable {
            inner.executables.insert(path.to_path_buf());
        } else {
            inner.executables.remove(path);
        }

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn remove_file(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        if inner.files.remove(path).is_none() {
            return Err(ApplicationError::PathNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        inner.executables.remove(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::PathNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        inner.executables.retain(|p| !p.starts_with(path));

        Ok(())
    }

    fn path_kind(&self, path: &Path) -> ForgeResult<PathKind> {
        let inner = self.inner.read().map_err(|_| lock_error(path))?;

        if inner.files.contains_key(path) {
            Ok(PathKind::File)
        } else if inner.directories.contains(path) {
            Ok(PathKind::Directory)
        } else {
            Ok(PathKind::Missing)
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use nbforge_core::error::ForgeError;

    #[test]
    fn remove_file_is_strict() {
        let fs = MemoryFilesystem::new();
        let err = fs.remove_file(Path::new("/x/LICENSE")).unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::PathNotFound { .. })
        ));
    }

    #[test]
    fn remove_dir_all_is_strict_and_recursive() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p/.devcontainer/configuration"))
            .unwrap();
        fs.write_file(
            Path::new("/p/.devcontainer/configuration/plugins.py"),
            "PLUGINS = []",
        )
        .unwrap();

        fs.remove_dir_all(Path::new("/p/.devcontainer")).unwrap();
        assert!(!fs.exists(Path::new("/p/.devcontainer")));
        assert!(
            fs.read_file(Path::new("/p/.devcontainer/configuration/plugins.py"))
                .is_none()
        );

        // Second removal of the same path fails.
        assert!(fs.remove_dir_all(Path::new("/p/.devcontainer")).is_err());
    }

    #[test]
    fn path_kind_reflects_stored_entries() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p/api")).unwrap();
        fs.write_file(Path::new("/p/api/views.py"), "").unwrap();

        assert_eq!(fs.path_kind(Path::new("/p/api")).unwrap(), PathKind::Directory);
        assert_eq!(
            fs.path_kind(Path::new("/p/api/views.py")).unwrap(),
            PathKind::File
        );
        assert_eq!(fs.path_kind(Path::new("/p/nope")).unwrap(), PathKind::Missing);
    }

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/no/parent.txt"), "x").is_err());
    }
}
