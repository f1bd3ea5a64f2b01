//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`NBFORGE__` prefix, `__` separator)
//! 3. Config file (`--config`, or the default location)
//! 4. Built-in defaults (always present, via serde defaults)

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Default license answer, e.g. "Apache-2.0".
    pub license: String,
    pub author: Option<String>,
    pub email: Option<String>,
    pub rest_api: bool,
    pub graphql: bool,
    pub devcontainer: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            license: "Apache-2.0".into(),
            author: None,
            email: None,
            rest_api: true,
            graphql: true,
            devcontainer: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Optional log file; `NBFORGE_LOG_FILE` overrides at runtime.
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: file (if present) layered with `NBFORGE__*`
    /// environment variables over the built-in defaults.
    ///
    /// The `config_file` parameter is the path the user passed via
    /// `--config` (or `None` to use the default location). A missing file
    /// is not an error — defaults apply; a present-but-broken file is.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);

        let cfg = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix("NBFORGE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("building configuration")?;

        cfg.try_deserialize().context("parsing configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.nbforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "cosecruz", "nbforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".nbforge.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_license_is_apache() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.license, "Apache-2.0");
    }

    #[test]
    fn default_flags_match_template_defaults() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.rest_api);
        assert!(cfg.defaults.graphql);
        assert!(!cfg.defaults.devcontainer);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        // Point at a path that cannot exist so a developer's real config
        // does not leak into the test.
        let missing = PathBuf::from("/nonexistent/nbforge/config.toml");
        let cfg = AppConfig::load(Some(&missing)).unwrap();
        assert_eq!(cfg.defaults.license, "Apache-2.0");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn load_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\nlicense = \"MIT\"\ngraphql = false\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.license, "MIT");
        assert!(!cfg.defaults.graphql);
        // Untouched sections keep their defaults.
        assert!(cfg.defaults.rest_api);
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
