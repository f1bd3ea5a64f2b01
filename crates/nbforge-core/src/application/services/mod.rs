//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases: "generate a plugin project" and "run the
//! post-generation cleanup hook".

pub mod generate;
pub mod hook;

pub use generate::{GenerateService, RunPreview, RunReport};
pub use hook::{CleanupReport, run_cleanup};
