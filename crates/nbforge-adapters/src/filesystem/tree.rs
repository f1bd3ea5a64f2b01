//! Generated-tree listing.
//!
//! Walks a freshly generated project directory and returns its entries
//! relative to the root, sorted for stable display. The CLI uses this to
//! show the final tree after the cleanup hook has run.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// One entry of a generated tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// List all entries beneath `root`, excluding the root itself.
pub fn list_tree(root: &Path) -> io::Result<Vec<TreeEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(io::Error::other)?;
        let rel = entry
            .path()
            .strip_prefix(root)
            .map_err(io::Error::other)?
            .to_path_buf();
        entries.push(TreeEntry {
            path: rel,
            is_dir: entry.file_type().is_dir(),
        });
    }

    Ok(entries)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_relative_sorted_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("pkg/api")).unwrap();
        std::fs::write(dir.path().join("LICENSE"), "").unwrap();
        std::fs::write(dir.path().join("pkg/api/views.py"), "").unwrap();

        let entries = list_tree(dir.path()).unwrap();
        let paths: Vec<_> = entries.iter().map(|e| e.path.clone()).collect();

        assert!(paths.contains(&PathBuf::from("LICENSE")));
        assert!(paths.contains(&PathBuf::from("pkg/api/views.py")));
        assert!(
            entries
                .iter()
                .find(|e| e.path == Path::new("pkg"))
                .unwrap()
                .is_dir
        );
    }

    #[test]
    fn missing_root_is_an_error() {
        assert!(list_tree(Path::new("/definitely/not/here")).is_err());
    }
}
