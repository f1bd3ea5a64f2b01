//! Post-generation cleanup hook runner.
//!
//! Applies a [`CleanupPlan`] to a freshly generated project tree. This is
//! the effectful half of the hook; plan derivation is pure and lives in
//! `domain::cleanup`.
//!
//! ## Failure semantics
//!
//! Fail-fast, no recovery: the first action that cannot be applied aborts
//! the run and the tree is left exactly as it was at that point. There is
//! deliberately no existence check before a removal — a missing target
//! means the generated tree and the rules disagree, which is a template
//! packaging defect, and silently skipping it would mask that. The direct
//! consequence is that the hook is NOT idempotent: re-running it over an
//! already-cleaned tree fails with `PathNotFound`.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use crate::application::error::ApplicationError;
use crate::application::ports::{Filesystem, PathKind};
use crate::domain::{CleanupAction, CleanupPlan};
use crate::error::ForgeResult;

/// What a hook run removed, for display and JSON output.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanupReport {
    pub removed: Vec<PathBuf>,
}

impl CleanupReport {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Apply every action of `plan` relative to `project_root`.
///
/// Actions target disjoint paths, so their order cannot change the final
/// tree; it only determines which failure is reported first.
#[instrument(skip_all, fields(root = %project_root.display(), actions = plan.len()))]
pub fn run_cleanup(
    fs: &dyn Filesystem,
    project_root: &Path,
    plan: &CleanupPlan,
) -> ForgeResult<CleanupReport> {
    let mut report = CleanupReport::default();

    for action in plan.actions() {
        let target = project_root.join(action.path().as_path());

        match action {
            CleanupAction::RemoveFile(_) => {
                debug!(path = %target.display(), "removing file");
                fs.remove_file(&target)?;
            }
            CleanupAction::RemoveDir(_) => {
                debug!(path = %target.display(), "removing directory tree");
                fs.remove_dir_all(&target)?;
            }
            CleanupAction::RemovePath(_) => {
                let kind = fs.path_kind(&target)?;
                debug!(path = %target.display(), kind = kind.as_str(), "removing probed path");
                match kind {
                    PathKind::File => fs.remove_file(&target)?,
                    PathKind::Directory => fs.remove_dir_all(&target)?,
                    PathKind::Missing => {
                        return Err(ApplicationError::PathNotFound { path: target }.into());
                    }
                    other => {
                        return Err(ApplicationError::UnsupportedPathKind {
                            path: target,
                            kind: other.as_str(),
                        }
                        .into());
                    }
                }
            }
        }

        report.removed.push(target);
    }

    Ok(report)
}

// ── tests ─────────────────────────────────────────────────────────────────────
