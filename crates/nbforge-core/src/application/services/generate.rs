//! Generate Service - main application orchestrator.
//!
//! This service coordinates one generation run:
//! 1. Validate the template
//! 2. Render it with the option-derived context
//! 3. Write the structure to the filesystem
//! 4. Run the post-generation cleanup hook
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        error::ApplicationError,
        ports::{Filesystem, TemplateRenderer},
        services::hook,
    },
    domain::{CleanupPlan, FsEntry, PluginOptions, PluginTemplate, ProjectStructure, RenderContext},
    error::{ForgeError, ForgeResult},
};

/// Outcome of a completed generation run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub project_root: PathBuf,
    pub files_written: usize,
    pub directories_created: usize,
    pub removed: Vec<PathBuf>,
}

/// Preview of what a run would do, for `--dry-run`.
#[derive(Debug, Clone, Serialize)]
pub struct RunPreview {
    pub project_root: PathBuf,
    pub files: Vec<PathBuf>,
    pub directories: Vec<PathBuf>,
    pub would_remove: Vec<PathBuf>,
}

/// Main generation service.
///
/// Orchestrates rendering, writing, and the cleanup hook.
pub struct GenerateService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Generate a plugin project at `project_root`.
    ///
    /// The template is always expanded in full; the cleanup hook then
    /// removes whatever the selected options decline. This guarantees the
    /// hook's precondition that every path it may delete exists.
    ///
    /// Failure semantics differ by phase: a failed **write** rolls the
    /// partially-written root back (best effort); a failed **hook** leaves
    /// the tree exactly as it was at the point of failure and propagates
    /// the error.
    #[instrument(
        skip_all,
        fields(
            plugin = %options.name,
            project_root = %project_root.as_ref().display()
        )
    )]
    pub fn generate(
        &self,
        template: &PluginTemplate,
        options: &PluginOptions,
        project_root: impl AsRef<Path>,
    ) -> ForgeResult<RunReport> {
        let project_root = project_root.as_ref();
        let run_id = Uuid::new_v4();
        info!(%run_id, template = template.name, "Generation started");

        // 1. Validate template
        template.validate().map_err(ForgeError::Domain)?;

        // 2. Build render context
        let context = RenderContext::from_options(options);

        // 3. Render template
        let structure = self.renderer.render(template, &context, project_root)?;
        info!(entries = structure.entry_count(), "Template rendered");

        // 4. Write to filesystem (rollback on failure)
        self.write_structure(&structure)?;
        let files_written = structure.files().count();
        let directories_created = structure.directories().count();

        // 5. Post-generation cleanup hook. No rollback here: a failed hook
        //    leaves the tree in whatever state it reached.
        let plan = CleanupPlan::for_options(options);
        let cleanup = hook::run_cleanup(self.filesystem.as_ref(), project_root, &plan)?;
        info!(removed = cleanup.removed.len(), "Cleanup hook completed");

        info!(%run_id, "Generation completed successfully");
        Ok(RunReport {
            run_id,
            project_root: project_root.to_path_buf(),
            files_written,
            directories_created,
            removed: cleanup.removed,
        })
    }

    /// Describe a run without touching the filesystem.
    pub fn preview(
        &self,
        template: &PluginTemplate,
        options: &PluginOptions,
        project_root: impl AsRef<Path>,
    ) -> ForgeResult<RunPreview> {
        let project_root = project_root.as_ref();

        template.validate().map_err(ForgeError::Domain)?;
        let context = RenderContext::from_options(options);
        let structure = self.renderer.render(template, &context, project_root)?;

        let plan = CleanupPlan::for_options(options);
        Ok(RunPreview {
            project_root: project_root.to_path_buf(),
            files: structure.files().map(|f| f.path.clone()).collect(),
            directories: structure.directories().map(|d| d.path.clone()).collect(),
            would_remove: plan
                .actions()
                .iter()
                .map(|a| a.path().as_path().to_path_buf())
                .collect(),
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write project structure to filesystem with rollback on failure.
    fn write_structure(&self, structure: &ProjectStructure) -> ForgeResult<()> {
        // Check if project exists
        if self.filesystem.exists(structure.root()) {
            return Err(ApplicationError::ProjectExists {
                path: structure.root().to_path_buf(),
            }
            .into());
        }

        match self.write_all(structure) {
            Ok(()) => {
                info!("Successfully wrote all files");
                Ok(())
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(structure.root());
                Err(e)
            }
        }
    }

    /// Write all entries in the structure.
    fn write_all(&self, structure: &ProjectStructure) -> ForgeResult<()> {
        // Create root
        self.filesystem.create_dir_all(structure.root())?;

        // Write entries
        for entry in &structure.entries {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = structure.root().join(&dir.path);
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(file) => {
                    let path = structure.root().join(&file.path);

                    // Ensure parent exists
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;

                    if file.permissions.executable_flag() {
                        self.filesystem.set_permissions(&path, true)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
