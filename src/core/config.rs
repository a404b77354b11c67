//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.propview/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::profile::client::DEFAULT_API_BASE_URL;
use crate::profile::valid_radius;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PropviewConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    pub radius_km: Option<f64>,
    pub request_timeout_secs: Option<u64>,
}

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    /// Always within the accepted range when present.
    pub radius_km: Option<f64>,
    pub request_timeout_secs: u64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            radius_km: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub api_url: Option<&'a str>,
    pub radius_km: Option<f64>,
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

/// Returns the path to `~/.propview/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".propview").join("config.toml"))
}

/// Load config from `~/.propview/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PropviewConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PropviewConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(PropviewConfig::default());
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<PropviewConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(PropviewConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PropviewConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Propview Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "http://127.0.0.1:8000"   # Or set PROPVIEW_API_URL

# [search]
# radius_km = 2.0                      # 0.5 to 10; or set PROPVIEW_RADIUS_KM
# request_timeout_secs = 90
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PropviewConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &PropviewConfig,
    cli: &CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // API URL: CLI → env → config → default
    let api_base_url = cli
        .api_url
        .map(str::to_string)
        .or_else(|| env("PROPVIEW_API_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    // Radius: CLI → env → config; out-of-range values are dropped
    let requested_radius = cli
        .radius_km
        .or_else(|| env("PROPVIEW_RADIUS_KM").and_then(|v| v.trim().parse().ok()))
        .or(config.search.radius_km);
    let radius_km = valid_radius(requested_radius);
    if let (Some(r), None) = (requested_radius, radius_km) {
        warn!("Ignoring search radius {r} km (must be between 0.5 and 10)");
    }

    ResolvedConfig {
        api_base_url,
        radius_km,
        request_timeout_secs: config
            .search
            .request_timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = PropviewConfig::default();
        assert!(config.api.base_url.is_none());
        assert!(config.search.radius_km.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&PropviewConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved, ResolvedConfig::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PropviewConfig {
            api: ApiConfig {
                base_url: Some("http://api.example:9000".to_string()),
            },
            search: SearchConfig {
                radius_km: Some(3.5),
                request_timeout_secs: Some(30),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.api_base_url, "http://api.example:9000");
        assert_eq!(resolved.radius_km, Some(3.5));
        assert_eq!(resolved.request_timeout_secs, 30);
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = PropviewConfig {
            api: ApiConfig {
                base_url: Some("http://from-file".to_string()),
            },
            search: SearchConfig {
                radius_km: Some(1.0),
                request_timeout_secs: None,
            },
        };
        let env = |key: &str| match key {
            "PROPVIEW_API_URL" => Some("http://from-env".to_string()),
            "PROPVIEW_RADIUS_KM" => Some("4".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.api_base_url, "http://from-env");
        assert_eq!(resolved.radius_km, Some(4.0));

        let cli = CliOverrides {
            api_url: Some("http://from-cli"),
            radius_km: Some(6.0),
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.api_base_url, "http://from-cli");
        assert_eq!(resolved.radius_km, Some(6.0));
    }

    #[test]
    fn test_out_of_range_radius_is_dropped() {
        let cli = CliOverrides {
            api_url: None,
            radius_km: Some(50.0),
        };
        let resolved = resolve_with_env(&PropviewConfig::default(), &cli, no_env);
        assert_eq!(resolved.radius_km, None);
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config = PropviewConfig {
            search: SearchConfig {
                radius_km: None,
                request_timeout_secs: Some(0),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[api]
base_url = "http://192.168.1.100:8000"

[search]
radius_km = 2.5
request_timeout_secs = 45
"#;
        let config: PropviewConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://192.168.1.100:8000"));
        assert_eq!(config.search.radius_km, Some(2.5));
        assert_eq!(config.search.request_timeout_secs, Some(45));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: PropviewConfig = toml::from_str("[search]\nradius_km = 1.5\n").unwrap();
        assert_eq!(config.search.radius_km, Some(1.5));
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_default_template_is_valid_toml() {
        let config: PropviewConfig = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("propview-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let config = load_config_from(&path).unwrap();
        assert!(config.api.base_url.is_none());
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("propview-bad-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[search\nradius_km = ").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
