//! Infrastructure adapters for nbforge.
//!
//! This crate implements the ports defined in `nbforge_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod plugin_template;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use plugin_template::netbox_plugin_template;
pub use renderer::SubstitutionRenderer;
