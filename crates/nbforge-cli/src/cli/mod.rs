//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use nbforge_core::domain::LicenseChoice;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "nbforge",
    bin_name = "nbforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} NetBox plugin project generator",
    long_about = "nbforge expands a NetBox plugin skeleton and removes the \
                  pieces you decline: REST API, GraphQL, dev container, LICENSE.",
    after_help = "EXAMPLES:\n\
        \x20 nbforge new acme-dns-sync --author \"Jane Doe\" --license mit\n\
        \x20 nbforge new acme-dns-sync --no-rest-api --no-graphql --yes\n\
        \x20 nbforge hook --answers .nbforge-answers.toml\n\
        \x20 nbforge completions bash > /usr/share/bash-completion/completions/nbforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new plugin project from the built-in template.
    #[command(
        visible_alias = "n",
        about = "Create a new plugin project",
        after_help = "EXAMPLES:\n\
            \x20 nbforge new acme-dns-sync --license apache-2.0\n\
            \x20 nbforge new acme-dns-sync --no-graphql --devcontainer --yes\n\
            \x20 nbforge new ../plugins/acme-dns-sync --answers answers.toml"
    )]
    New(NewArgs),

    /// Run the post-generation cleanup hook against an existing tree.
    #[command(
        about = "Run the post-generation cleanup hook",
        after_help = "EXAMPLES:\n\
            \x20 nbforge hook --answers answers.toml\n\
            \x20 nbforge hook --root ./acme-dns-sync --answers answers.toml\n\
            \x20 nbforge hook --answers answers.toml --prune-api-dir"
    )]
    Hook(HookArgs),

    /// Initialise an nbforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 nbforge init           # default location\n\
            \x20 nbforge init --force   # overwrite existing config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 nbforge completions bash > ~/.local/share/bash-completion/completions/nbforge\n\
            \x20 nbforge completions zsh  > ~/.zfunc/_nbforge\n\
            \x20 nbforge completions fish > ~/.config/fish/completions/nbforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the nbforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 nbforge config get defaults.license\n\
            \x20 nbforge config list\n\
            \x20 nbforge config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `nbforge new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Plugin name or path.  A plain name creates the project in the current
    /// directory; a path like `../plugins/acme-dns` places it there.  The
    /// final directory name is always the hyphenated plugin name.
    #[arg(value_name = "NAME", help = "Plugin name or path")]
    pub name: String,

    /// Plugin author.
    #[arg(long = "author", value_name = "NAME", help = "Plugin author")]
    pub author: Option<String>,

    /// Author email.
    #[arg(long = "email", value_name = "EMAIL", help = "Author email")]
    pub email: Option<String>,

    /// Initial plugin version.
    #[arg(
        long = "plugin-version",
        value_name = "VERSION",
        help = "Initial plugin version"
    )]
    pub plugin_version: Option<String>,

    /// One-line project description.
    #[arg(
        long = "description",
        value_name = "TEXT",
        help = "Short project description"
    )]
    pub description: Option<String>,

    /// License for the generated project.
    #[arg(
        short = 'l',
        long = "license",
        value_name = "LICENSE",
        value_enum,
        help = "License (not-open-source removes the LICENSE file)"
    )]
    pub license: Option<LicenseArg>,

    /// Skip REST API scaffolding (removes API views, URLs and tests).
    #[arg(long = "no-rest-api", help = "Generate without REST API endpoints")]
    pub no_rest_api: bool,

    /// Skip GraphQL scaffolding (removes the schema and its tests).
    #[arg(long = "no-graphql", help = "Generate without GraphQL support")]
    pub no_graphql: bool,

    /// Keep the development container setup.
    #[arg(long = "devcontainer", help = "Include the .devcontainer setup")]
    pub devcontainer: bool,

    /// Answers file (TOML) with string-valued generation answers.
    /// CLI flags override individual answers.
    #[arg(
        long = "answers",
        value_name = "FILE",
        help = "Answers file with generation options"
    )]
    pub answers: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── hook ──────────────────────────────────────────────────────────────────────

/// Arguments for `nbforge hook`.
#[derive(Debug, Args)]
pub struct HookArgs {
    /// Root of the freshly generated project (defaults to the current
    /// directory, matching the generation tool's invocation contract).
    #[arg(
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Generated project root"
    )]
    pub root: PathBuf,

    /// Answers file the tree was generated with.
    #[arg(
        long = "answers",
        value_name = "FILE",
        required = true,
        help = "Answers file with generation options"
    )]
    pub answers: PathBuf,

    /// Remove the whole api/ path instead of individual files, probing
    /// whether it is a module or a package on disk (legacy layouts).
    #[arg(long = "prune-api-dir", help = "Remove the entire api path")]
    pub prune_api_dir: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `nbforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `nbforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `nbforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.license`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// License choices accepted on the command line.
///
/// Mirrors [`LicenseChoice`] with CLI-friendly kebab-case names; the core
/// enum stays free of clap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum LicenseArg {
    #[value(name = "apache-2.0")]
    Apache2,
    Mit,
    #[value(name = "bsd-3-clause")]
    Bsd3Clause,
    #[value(name = "gpl-3.0")]
    Gpl3,
    NotOpenSource,
}

impl LicenseArg {
    /// The exact answer string the option boundary expects.
    pub fn as_answer(&self) -> &'static str {
        self.to_core().as_str()
    }

    pub fn to_core(self) -> LicenseChoice {
        match self {
            Self::Apache2 => LicenseChoice::Apache2,
            Self::Mit => LicenseChoice::Mit,
            Self::Bsd3Clause => LicenseChoice::Bsd3Clause,
            Self::Gpl3 => LicenseChoice::Gpl3,
            Self::NotOpenSource => LicenseChoice::NotOpenSource,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "nbforge",
            "new",
            "acme-dns-sync",
            "--license",
            "mit",
            "--no-graphql",
            "--yes",
        ]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.name, "acme-dns-sync");
                assert_eq!(args.license, Some(LicenseArg::Mit));
                assert!(args.no_graphql);
                assert!(!args.no_rest_api);
                assert!(args.yes);
            }
            other => panic!("expected New, got {other:?}"),
        }
    }

    #[test]
    fn parse_hook_command_defaults_root_to_cwd() {
        let cli = Cli::parse_from(["nbforge", "hook", "--answers", "a.toml"]);
        match cli.command {
            Commands::Hook(args) => {
                assert_eq!(args.root, PathBuf::from("."));
                assert_eq!(args.answers, PathBuf::from("a.toml"));
                assert!(!args.prune_api_dir);
            }
            other => panic!("expected Hook, got {other:?}"),
        }
    }

    #[test]
    fn hook_requires_answers() {
        assert!(Cli::try_parse_from(["nbforge", "hook"]).is_err());
    }

    #[test]
    fn license_arg_maps_to_core() {
        assert_eq!(LicenseArg::NotOpenSource.as_answer(), "Not open source");
        assert_eq!(LicenseArg::Apache2.as_answer(), "Apache-2.0");
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["nbforge", "--quiet", "--verbose", "init"]);
        assert!(result.is_err());
    }
}
