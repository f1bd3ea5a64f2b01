//! nbforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the nbforge
//! NetBox plugin generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          nbforge-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (GenerateService, run_cleanup)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: Filesystem, Render)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     nbforge-adapters (Infrastructure)   │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (PluginOptions, CleanupPlan, Template) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nbforge_core::{
//!     application::GenerateService,
//!     domain::{PluginOptions, RawAnswers},
//! };
//!
//! // 1. Validate the raw answers once, at the boundary
//! let options = PluginOptions::from_answers(&RawAnswers {
//!     project_name: "ACME DNS Sync".into(),
//!     ..RawAnswers::default()
//! }).unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = GenerateService::new(renderer, filesystem);
//! service.generate(&template, &options, "./acme-dns-sync").unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CleanupReport, GenerateService, RunPreview, RunReport,
        ports::{Filesystem, PathKind, TemplateRenderer},
        run_cleanup,
    };
    pub use crate::domain::{
        ApiRemoval, CleanupAction, CleanupPlan, LicenseChoice, Permissions, PluginName,
        PluginOptions, PluginTemplate, ProjectStructure, RawAnswers, RelativePath, RenderContext,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
