//! `pyforge config` — read and write configuration values.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let mut config = config;
            set_config_value(&mut config, &key, &value)?;

            let path = global.config.clone().unwrap_or_else(AppConfig::config_path);
            config.store(&path).map_err(|e| CliError::ConfigError {
                message: e.to_string(),
                source: None,
            })?;
            output.success(&format!("Set {key} = {value}"))?;
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
        "defaults.line_length" => Ok(config.defaults.line_length.to_string()),
        "defaults.dependency_manager" => Ok(config.defaults.dependency_manager.clone()),
        "defaults.docker" => Ok(config.defaults.docker.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(unknown_key(key)),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    match key {
        "defaults.line_length" => {
            config.defaults.line_length = value.parse().map_err(|_| CliError::ConfigError {
                message: format!("'{value}' is not a valid line length"),
                source: None,
            })?;
        }
        "defaults.dependency_manager" => match value {
            "virtualenv" | "venv" | "poetry" => {
                config.defaults.dependency_manager = value.to_string();
            }
            _ => {
                return Err(CliError::ConfigError {
                    message: format!("'{value}' is not a dependency manager"),
                    source: None,
                });
            }
        },
        "defaults.docker" => {
            config.defaults.docker = parse_bool(key, value)?;
        }
        "output.no_color" => {
            config.output.no_color = parse_bool(key, value)?;
        }
        "output.format" => {
            config.output.format = value.to_string();
        }
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> CliResult<bool> {
    value.parse().map_err(|_| CliError::ConfigError {
        message: format!("'{value}' is not a boolean (key '{key}')"),
        source: None,
    })
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
