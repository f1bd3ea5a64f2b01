// ============================================================================
// domain/error.rs - COMPREHENSIVE ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid plugin name '{name}': {reason}")]
    InvalidPluginName { name: String, reason: String },

    #[error("Invalid answer for '{field}': got '{value}', expected {expected}")]
    InvalidAnswer {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Template has no content")]
    EmptyTemplate,

    #[error("Duplicate path in template: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPluginName { name, reason } => vec![
                format!("Plugin name '{}' was rejected: {}", name, reason),
                "Use alphanumeric characters, hyphens, and underscores".into(),
            ],
            Self::InvalidAnswer {
                field,
                value,
                expected,
            } => vec![
                format!("The answer '{}' is not valid for '{}'", value, field),
                format!("Expected {}", expected),
                "Check the answers file against the documented option values".into(),
            ],
            Self::EmptyTemplate => vec![
                "The built-in plugin template is corrupted".into(),
                "Please report this issue".into(),
            ],
            Self::DuplicatePath { path } => {
                vec![format!("The template declares '{}' more than once", path)]
            }
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPluginName { .. }
            | Self::InvalidAnswer { .. }
            | Self::InvalidTemplate(_)
            | Self::EmptyTemplate
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::MissingRequiredField { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
