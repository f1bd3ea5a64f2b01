//! Implementation of the `nbforge hook` command.
//!
//! Runs the post-generation cleanup standalone against an already-generated
//! tree. This mirrors the generation tool's invocation contract: the hook
//! operates on a project root (defaulting to the CWD) using the answers the
//! tree was generated with, and fails fast on the first path it cannot
//! remove.

use tracing::{info, instrument};

use nbforge_adapters::LocalFilesystem;
use nbforge_core::{
    application::run_cleanup,
    domain::{ApiRemoval, CleanupPlan, PluginOptions},
};

use crate::{
    answers::load_answers,
    cli::{HookArgs, OutputFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `nbforge hook` command.
#[instrument(skip_all, fields(root = %args.root.display()))]
pub fn execute(args: HookArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    // Validate the answers once, at the boundary.
    let answers = load_answers(&args.answers)?;
    let options = PluginOptions::from_answers(&answers).map_err(|e| CliError::Core(e.into()))?;

    if !args.root.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("'{}' is not a directory", args.root.display()),
            source: None,
        });
    }

    let api_removal = if args.prune_api_dir {
        ApiRemoval::EntireTree
    } else {
        ApiRemoval::IndividualFiles
    };
    let plan = CleanupPlan::for_options_with(&options, api_removal);

    if plan.is_empty() {
        output.info("Nothing to remove for the selected options")?;
        return Ok(());
    }

    info!(actions = plan.len(), "Running cleanup hook");
    let report = run_cleanup(&LocalFilesystem::new(), &args.root, &plan).map_err(CliError::Core)?;

    if output.format() == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(|e| CliError::InvalidInput {
                message: format!("failed to serialise report: {e}"),
                source: Some(Box::new(e)),
            })?
        );
        return Ok(());
    }

    for path in &report.removed {
        output.print(&format!("  removed {}", path.display()))?;
    }
    output.success(&format!(
        "Cleanup complete: {} path(s) removed",
        report.removed.len(),
    ))?;

    Ok(())
}
