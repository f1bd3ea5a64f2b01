// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for nbforge.
//!
//! This module contains pure business logic. All I/O is handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod cleanup;
pub mod common;
pub mod error;
pub mod options;
pub mod render;
pub mod structure;
pub mod template;

// Re-exports for convenience
pub use cleanup::{ApiRemoval, CleanupAction, CleanupPlan};
pub use common::{Permissions, RelativePath};
pub use error::{DomainError, ErrorCategory};
pub use options::{LicenseChoice, PluginName, PluginOptions, RawAnswers};
pub use render::RenderContext;
pub use structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
pub use template::{
    DirectorySpec, FileSpec, PluginTemplate, PluginTemplateBuilder, TemplateContent, TemplateNode,
    TemplateSource,
};
