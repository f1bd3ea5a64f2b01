//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `nbforge-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{PluginTemplate, ProjectStructure, RenderContext};
use crate::error::ForgeResult;

/// On-disk kind of a probed path.
///
/// Used by the cleanup hook's `RemovePath` action, whose targets may be a
/// file in one template layout and a directory in another. Kinds other than
/// `File`/`Directory` are surfaced so the caller decides the failure mode
/// instead of inheriting whatever a polymorphic remove would do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
    Symlink,
    Other,
    Missing,
}

impl PathKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
            Self::Symlink => "symlink",
            Self::Other => "special file",
            Self::Missing => "missing path",
        }
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `nbforge_adapters::filesystem::LocalFilesystem` (production)
/// - `nbforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Removal operations fail on missing paths; the hook's fail-fast
///   contract depends on this, so implementations must not silently
///   succeed when there is nothing to remove.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> ForgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single regular file. Errors if the path is missing.
    fn remove_file(&self, path: &Path) -> ForgeResult<()>;

    /// Remove a directory and all contents. Errors if the path is missing.
    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Probe what a path is on disk without touching it.
    fn path_kind(&self, path: &Path) -> ForgeResult<PathKind>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `nbforge_adapters::renderer::SubstitutionRenderer`
pub trait TemplateRenderer: Send + Sync {
    /// Render a template into a project structure.
    ///
    /// # Arguments
    ///
    /// * `template` - The template to render
    /// * `context` - Variable substitution context
    /// * `output_root` - Root directory for output paths
    fn render(
        &self,
        template: &PluginTemplate,
        context: &RenderContext,
        output_root: &Path,
    ) -> ForgeResult<ProjectStructure>;
}
