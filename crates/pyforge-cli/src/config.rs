//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it — defaults from here
//! are folded into the blueprint before any service runs.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` path, or the default location if it exists)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pyforge_core::domain::DEFAULT_LINE_LENGTH;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Line length when `--line-length` is not given.
    pub line_length: u32,
    /// `virtualenv` or `poetry`.
    pub dependency_manager: String,
    /// Emit Docker artifacts by default.
    pub docker: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            line_length: DEFAULT_LINE_LENGTH,
            dependency_manager: "virtualenv".into(),
            docker: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicitly passed `--config` file must exist and parse; the
    /// default-location file is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config '{}': {e}", path.display()))?;
        toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config '{}': {e}", path.display()))
    }

    /// Persist this configuration to `path` as pretty TOML.
    pub fn store(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("Failed to create config directory '{}': {e}", parent.display())
            })?;
        }
        let toml = toml::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialise config: {e}"))?;
        std::fs::write(path, toml)
            .map_err(|e| anyhow::anyhow!("Failed to write config '{}': {e}", path.display()))?;
        Ok(())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.pyforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "pyforge", "pyforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".pyforge.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_line_length_is_120() {
        assert_eq!(AppConfig::default().defaults.line_length, 120);
    }

    #[test]
    fn default_manager_is_virtualenv() {
        assert_eq!(AppConfig::default().defaults.dependency_manager, "virtualenv");
    }

    #[test]
    fn load_without_explicit_file_never_fails() {
        // Whatever the environment looks like, defaults must come back.
        let cfg = AppConfig::load(None);
        assert!(cfg.is_ok());
    }

    #[test]
    fn round_trips_through_toml() {
        let mut cfg = AppConfig::default();
        cfg.defaults.line_length = 88;
        cfg.defaults.dependency_manager = "poetry".into();

        let rendered = toml::to_string_pretty(&cfg).unwrap();
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.defaults.line_length, 88);
        assert_eq!(parsed.defaults.dependency_manager, "poetry");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let parsed: AppConfig = toml::from_str("[defaults]\nline_length = 100\n").unwrap();
        assert_eq!(parsed.defaults.line_length, 100);
        assert_eq!(parsed.defaults.dependency_manager, "virtualenv");
        assert!(!parsed.output.no_color);
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
