//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A path targeted for removal does not exist.
    ///
    /// The cleanup hook performs no existence check before deleting; a
    /// missing target means the template never generated the file or an
    /// earlier run already removed it. Either way the run fails.
    #[error("Path not found: {path}")]
    PathNotFound { path: PathBuf },

    /// A probed path is neither a regular file nor a directory.
    #[error("Cannot remove {path}: unsupported path kind ({kind})")]
    UnsupportedPathKind { path: PathBuf, kind: &'static str },

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::PathNotFound { path } => vec![
                format!("Expected to remove: {}", path.display()),
                "The generated tree does not match the cleanup rules".into(),
                "Was the hook already run against this directory?".into(),
            ],
            Self::UnsupportedPathKind { path, kind } => vec![
                format!("'{}' is a {}", path.display(), kind),
                "Only regular files and directories can be removed".into(),
                "Remove the path manually and re-run".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different project name".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PathNotFound { .. } => ErrorCategory::NotFound,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::UnsupportedPathKind { .. } => ErrorCategory::Validation,
            Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::RollbackFailed { .. } => ErrorCategory::Internal,
        }
    }
}
