//! Application layer for nbforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, run_cleanup)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{CleanupReport, GenerateService, RunPreview, RunReport, run_cleanup};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, PathKind, TemplateRenderer};

pub use error::ApplicationError;
