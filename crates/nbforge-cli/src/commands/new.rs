//! Implementation of the `nbforge new` command.
//!
//! Responsibility: translate CLI arguments into validated `PluginOptions`,
//! call the core generate service, and display results. No business logic
//! lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use nbforge_adapters::{LocalFilesystem, SubstitutionRenderer, netbox_plugin_template};
use nbforge_core::{
    application::{ApplicationError, GenerateService, RunPreview, RunReport},
    domain::{PluginOptions, RawAnswers},
};

use crate::{
    answers::load_answers,
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

/// Execute the `nbforge new` command.
///
/// Dispatch sequence:
/// 1. Split the NAME argument into plugin name and output directory
/// 2. Assemble the raw answers (config defaults < answers file < CLI flags)
/// 3. Validate them into typed `PluginOptions` (the single string boundary)
/// 4. Confirm with user unless `--yes` or `--quiet`
/// 5. Early-exit if `--dry-run`
/// 6. Execute generation (expand template, then the cleanup hook)
/// 7. Print the run report and next-steps guidance
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve plugin name and output directory
    let (raw_name, parent_dir) = resolve_target(&args.name)?;

    // 2 + 3. Assemble answers and validate at the boundary
    let answers = assemble_answers(&args, &raw_name, &config)?;
    let options = PluginOptions::from_answers(&answers).map_err(|e| CliError::Core(e.into()))?;
    let project_root = parent_dir.join(options.name.hyphenated());

    debug!(
        plugin = %options.name,
        package = options.name.underscored(),
        license = %options.license,
        rest_api = options.include_rest_api,
        graphql = options.include_graphql,
        devcontainer = options.devcontainer,
        "Options resolved"
    );

    // 4. Show configuration and confirm
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&options, &project_root, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Existing directory handling
    if project_root.exists() {
        if args.force {
            std::fs::remove_dir_all(&project_root)
                .with_cli_context(|| format!("removing '{}'", project_root.display()))?;
        } else if !args.dry_run {
            return Err(CliError::Core(
                ApplicationError::ProjectExists {
                    path: project_root,
                }
                .into(),
            ));
        }
    }

    // 6. Build adapters and run
    let template = netbox_plugin_template();
    let service = GenerateService::new(
        Box::new(SubstitutionRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    if args.dry_run {
        let preview = service
            .preview(&template, &options, &project_root)
            .map_err(CliError::Core)?;
        return print_preview(&preview, &output);
    }

    output.header(&format!("Creating '{}'...", options.name.hyphenated()))?;
    info!(root = %project_root.display(), "Generation started");

    let spinner = output.spinner("Expanding plugin template");
    let result = service.generate(&template, &options, &project_root);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let report = result.map_err(CliError::Core)?;

    info!(run_id = %report.run_id, "Generation completed");

    // 7. Report + next steps
    print_report(&report, &global, &output)?;

    if !global.quiet && output.format() != OutputFormat::Json {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", options.name.hyphenated()))?;
        output.print("  pip install -e .")?;
    }

    Ok(())
}

// ── Target resolution ─────────────────────────────────────────────────────────

/// Split the NAME argument into the plugin name (leaf) and the directory the
/// project is created in (parent, defaulting to the CWD). The project
/// directory itself is always the hyphenated plugin name.
fn resolve_target(name: &str) -> CliResult<(String, PathBuf)> {
    let path = Path::new(name);

    let leaf = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidInput {
            message: format!("cannot extract a plugin name from '{name}'"),
            source: None,
        })?
        .to_string();

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok((leaf, parent))
}

// ── Answer assembly ───────────────────────────────────────────────────────────

/// Merge the three answer sources. Precedence, weakest first: config
/// defaults, answers file, CLI flags. The plugin name always comes from the
/// NAME argument.
fn assemble_answers(args: &NewArgs, name: &str, config: &AppConfig) -> CliResult<RawAnswers> {
    let mut answers = match &args.answers {
        Some(path) => load_answers(path)?,
        None => RawAnswers {
            full_name: config.defaults.author.clone().unwrap_or_default(),
            email: config.defaults.email.clone().unwrap_or_default(),
            open_source_license: config.defaults.license.clone(),
            include_rest_api: yes_no(config.defaults.rest_api).into(),
            include_graphql: yes_no(config.defaults.graphql).into(),
            devcontainer: python_bool(config.defaults.devcontainer).into(),
            ..RawAnswers::default()
        },
    };

    answers.project_name = name.to_string();
    if let Some(author) = &args.author {
        answers.full_name = author.clone();
    }
    if let Some(email) = &args.email {
        answers.email = email.clone();
    }
    if let Some(version) = &args.plugin_version {
        answers.version = version.clone();
    }
    if let Some(description) = &args.description {
        answers.project_short_description = description.clone();
    }
    if let Some(license) = args.license {
        answers.open_source_license = license.as_answer().into();
    }
    if args.no_rest_api {
        answers.include_rest_api = "no".into();
    }
    if args.no_graphql {
        answers.include_graphql = "no".into();
    }
    if args.devcontainer {
        answers.devcontainer = "True".into();
    }

    Ok(answers)
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn python_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    options: &PluginOptions,
    project_root: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Plugin:        {}", options.name))?;
    out.print(&format!("  Package:       {}", options.name.underscored()))?;
    out.print(&format!("  License:       {}", options.license))?;
    out.print(&format!("  REST API:      {}", yes_no(options.include_rest_api)))?;
    out.print(&format!("  GraphQL:       {}", yes_no(options.include_graphql)))?;
    out.print(&format!("  Dev container: {}", yes_no(options.devcontainer)))?;
    out.print(&format!("  Location:      {}", project_root.display()))?;
    out.print("")?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: format!("confirmation prompt failed: {e}"),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

fn print_preview(preview: &RunPreview, out: &OutputManager) -> CliResult<()> {
    if out.format() == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(preview).map_err(|e| CliError::InvalidInput {
                message: format!("failed to serialise preview: {e}"),
                source: Some(Box::new(e)),
            })?
        );
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create '{}' with {} files",
        preview.project_root.display(),
        preview.files.len(),
    ))?;
    for path in &preview.would_remove {
        out.print(&format!("  then remove {}", path.display()))?;
    }
    Ok(())
}

fn print_report(report: &RunReport, global: &GlobalArgs, out: &OutputManager) -> CliResult<()> {
    if out.format() == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(report).map_err(|e| CliError::InvalidInput {
                message: format!("failed to serialise report: {e}"),
                source: Some(Box::new(e)),
            })?
        );
        return Ok(());
    }

    out.success(&format!(
        "Project created at {} ({} files)",
        report.project_root.display(),
        report.files_written,
    ))?;
    for removed in &report.removed {
        out.print(&format!("  cleaned {}", removed.display()))?;
    }

    // Full tree only on -v: the listing is noisy for the default case.
    if global.verbose > 0 {
        let entries = nbforge_adapters::filesystem::tree::list_tree(&report.project_root)
            .with_cli_context(|| "listing generated tree")?;
        out.print("")?;
        for entry in entries {
            let suffix = if entry.is_dir { "/" } else { "" };
            out.print(&format!("  {}{}", entry.path.display(), suffix))?;
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::LicenseArg;

    fn new_args(name: &str) -> NewArgs {
        NewArgs {
            name: name.into(),
            author: None,
            email: None,
            plugin_version: None,
            description: None,
            license: None,
            no_rest_api: false,
            no_graphql: false,
            devcontainer: false,
            answers: None,
            yes: true,
            force: false,
            dry_run: false,
        }
    }

    // ── resolve_target ────────────────────────────────────────────────────

    #[test]
    fn plain_name_resolves_to_cwd() {
        let (name, dir) = resolve_target("acme-dns").unwrap();
        assert_eq!(name, "acme-dns");
        assert_eq!(dir, PathBuf::from("."));
    }

    #[test]
    fn relative_path_splits_leaf_and_parent() {
        let (name, dir) = resolve_target("../plugins/acme-dns").unwrap();
        assert_eq!(name, "acme-dns");
        assert_eq!(dir, PathBuf::from("../plugins"));
    }

    // ── assemble_answers ──────────────────────────────────────────────────

    #[test]
    fn config_defaults_feed_answers() {
        let mut config = AppConfig::default();
        config.defaults.license = "MIT".into();
        config.defaults.graphql = false;
        config.defaults.author = Some("Jane Doe".into());

        let answers = assemble_answers(&new_args("acme-dns"), "acme-dns", &config).unwrap();
        assert_eq!(answers.open_source_license, "MIT");
        assert_eq!(answers.include_graphql, "no");
        assert_eq!(answers.full_name, "Jane Doe");
        assert_eq!(answers.project_name, "acme-dns");
    }

    #[test]
    fn cli_flags_override_config_defaults() {
        let mut args = new_args("acme-dns");
        args.license = Some(LicenseArg::NotOpenSource);
        args.no_rest_api = true;
        args.devcontainer = true;
        args.author = Some("Someone Else".into());

        let answers = assemble_answers(&args, "acme-dns", &AppConfig::default()).unwrap();
        assert_eq!(answers.open_source_license, "Not open source");
        assert_eq!(answers.include_rest_api, "no");
        assert_eq!(answers.devcontainer, "True");
        assert_eq!(answers.full_name, "Someone Else");
    }

    #[test]
    fn assembled_answers_validate_into_options() {
        let mut args = new_args("acme-dns");
        args.no_graphql = true;

        let answers = assemble_answers(&args, "acme-dns", &AppConfig::default()).unwrap();
        let options = PluginOptions::from_answers(&answers).unwrap();
        assert!(!options.include_graphql);
        assert!(options.include_rest_api);
        assert_eq!(options.name.underscored(), "acme_dns");
    }
}
