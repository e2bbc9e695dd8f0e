use crate::trace;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG: &str = ".gotestdox.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Trace every scanner decision
    #[serde(default)]
    pub debug: bool,

    /// Where trace output goes; standard error when unset
    #[serde(default)]
    pub trace_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration with priority: CLI args > environment > local config > global config > defaults
    pub fn load(cli_debug: bool, cli_trace_file: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(LOCAL_CONFIG);
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        config = config.merge(Self::from_env());

        // Apply CLI overrides
        if cli_debug {
            config.debug = true;
        }
        if let Some(path) = cli_trace_file {
            config.trace_file = Some(path);
        }

        Ok(config)
    }

    /// Configuration taken from `GOTESTDOX_DEBUG` alone.
    pub fn from_env() -> Self {
        Self {
            debug: trace::debug_enabled(),
            ..Default::default()
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn merge(mut self, other: Self) -> Self {
        // Switches only ever turn on; a later layer can't silence an earlier one
        self.debug |= other.debug;
        if other.trace_file.is_some() {
            self.trace_file = other.trace_file;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gotestdox").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.debug);
        assert!(config.trace_file.is_none());
    }

    #[test]
    fn test_parse_toml() {
        let config = Config::from_toml("debug = true\ntrace_file = \"trace.log\"\n").unwrap();
        assert!(config.debug);
        assert_eq!(config.trace_file, Some(PathBuf::from("trace.log")));

        let empty = Config::from_toml("").unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(Config::from_toml("debug = \"maybe\"").is_err());
    }

    #[test]
    fn test_merge_configs() {
        let base = Config {
            debug: true,
            trace_file: Some(PathBuf::from("global.log")),
        };
        let override_config = Config {
            debug: false,
            trace_file: Some(PathBuf::from("local.log")),
        };

        let merged = base.merge(override_config);
        assert!(merged.debug);
        assert_eq!(merged.trace_file, Some(PathBuf::from("local.log")));
    }

    #[test]
    fn test_merge_keeps_trace_file() {
        let base = Config {
            debug: false,
            trace_file: Some(PathBuf::from("global.log")),
        };
        let merged = base.merge(Config::default());
        assert_eq!(merged.trace_file, Some(PathBuf::from("global.log")));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "debug = true\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(config.debug);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
