//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.reel/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! A missing API key is not a local error: requests go out with an empty
//! `apikey` parameter and fail at the remote API instead.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::omdb::DEFAULT_OMDB_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReelConfig {
    #[serde(default)]
    pub omdb: OmdbConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OmdbConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// May be empty when no key was configured anywhere.
    pub api_key: String,
    pub base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.reel/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".reel").join("config.toml"))
}

/// Load config from `~/.reel/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ReelConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ReelConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ReelConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ReelConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ReelConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Reel Configuration
# All settings are optional. Override hierarchy:
# defaults → this file → env vars → CLI flags.

# [omdb]
# api_key = "..."                    # Or set OMDB_API_KEY env var
# base_url = "https://www.omdbapi.com/"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI. `cli_api_key` comes from the `--api-key` flag (None = not
/// specified).
pub fn resolve(config: &ReelConfig, cli_api_key: Option<&str>) -> ResolvedConfig {
    // API key: CLI → env → config → empty (requests fail at the remote API)
    let api_key = cli_api_key
        .map(|s| s.to_string())
        .or_else(|| std::env::var("OMDB_API_KEY").ok())
        .or_else(|| config.omdb.api_key.clone())
        .unwrap_or_default();

    // Base URL: env → config → default
    let base_url = std::env::var("OMDB_BASE_URL")
        .ok()
        .or_else(|| config.omdb.base_url.clone())
        .unwrap_or_else(|| DEFAULT_OMDB_BASE_URL.to_string());

    ResolvedConfig { api_key, base_url }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ReelConfig::default();
        assert!(config.omdb.api_key.is_none());
        assert!(config.omdb.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = ReelConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.base_url, DEFAULT_OMDB_BASE_URL);
        // Absent key resolves to empty, not an error
        assert_eq!(resolved.api_key, "");
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ReelConfig {
            omdb: OmdbConfig {
                api_key: Some("file-key".to_string()),
                base_url: Some("http://localhost:9999/".to_string()),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.api_key, "file-key");
        assert_eq!(resolved.base_url, "http://localhost:9999/");
    }

    #[test]
    fn test_resolve_cli_key_wins_over_config() {
        let config = ReelConfig {
            omdb: OmdbConfig {
                api_key: Some("file-key".to_string()),
                base_url: None,
            },
        };
        let resolved = resolve(&config, Some("cli-key"));
        assert_eq!(resolved.api_key, "cli-key");
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[omdb]
api_key = "abc123"
"#;
        let config: ReelConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.omdb.api_key.as_deref(), Some("abc123"));
        assert!(config.omdb.base_url.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: ReelConfig = toml::from_str("").unwrap();
        assert!(config.omdb.api_key.is_none());
    }
}
