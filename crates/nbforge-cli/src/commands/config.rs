//! `nbforge config` — read configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.license" => Ok(config.defaults.license.clone()),
        "defaults.author" => Ok(config.defaults.author.clone().unwrap_or_default()),
        "defaults.email" => Ok(config.defaults.email.clone().unwrap_or_default()),
        "defaults.rest_api" => Ok(config.defaults.rest_api.to_string()),
        "defaults.graphql" => Ok(config.defaults.graphql.to_string()),
        "defaults.devcontainer" => Ok(config.defaults.devcontainer.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "logging.file" => Ok(config
            .logging
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "defaults.license").unwrap(),
            "Apache-2.0"
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_bool_keys_render_as_text() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.rest_api").unwrap(), "true");
        assert_eq!(
            get_config_value(&cfg, "defaults.devcontainer").unwrap(),
            "false"
        );
    }
}
