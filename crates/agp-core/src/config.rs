//! Configuration for the AGP gateway and CLI.

use std::path::{Path, PathBuf};

use agp_proto::{AgpError, AgpResult};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the manifest path.
pub const MANIFEST_ENV: &str = "AGP_MANIFEST";

/// AGP configuration — typically stored at `~/.agp/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgpConfig {
    /// Provider manifest announced at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,

    /// Telemetry configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AgpConfig {
    /// Default location: `~/.agp/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs_next::home_dir().map(|home| home.join(".agp").join("config.toml"))
    }

    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> AgpResult<Self> {
        toml::from_str(raw).map_err(|e| AgpError::Config(e.to_string()))
    }

    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing file yields the default configuration; an unreadable or
    /// malformed one is an error.
    pub fn load(path: Option<&Path>) -> AgpResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| AgpError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    /// Manifest path, with `AGP_MANIFEST` taking precedence over the file.
    pub fn manifest_path(&self) -> Option<PathBuf> {
        std::env::var_os(MANIFEST_ENV)
            .map(PathBuf::from)
            .or_else(|| self.manifest.clone())
    }
}

/// Telemetry/observability configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Whether to export spans over OTLP. Structured logs are always on.
    #[serde(default)]
    pub enabled: bool,

    /// OTLP exporter endpoint.
    #[serde(default = "default_otlp_endpoint")]
    pub otlp_endpoint: String,

    /// `service.name` resource attribute.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            otlp_endpoint: default_otlp_endpoint(),
            service_name: default_service_name(),
        }
    }
}

fn default_otlp_endpoint() -> String {
    "http://localhost:4317".into()
}

fn default_service_name() -> String {
    "agp-gateway".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config = AgpConfig::from_toml_str(
            r#"
            manifest = "/etc/agp/providers.toml"

            [telemetry]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(config.manifest, Some(PathBuf::from("/etc/agp/providers.toml")));
        assert!(config.telemetry.enabled);
        assert_eq!(config.telemetry.otlp_endpoint, "http://localhost:4317");
        assert_eq!(config.telemetry.service_name, "agp-gateway");
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(AgpConfig::from_toml_str("").unwrap(), AgpConfig::default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = AgpConfig::load(Some(Path::new("/nonexistent/agp/config.toml"))).unwrap();
        assert_eq!(config, AgpConfig::default());
    }

    #[test]
    fn test_manifest_path_env_override() {
        // Both directions live in one test: the variable is process-global.
        let saved = std::env::var_os(MANIFEST_ENV);
        let config = AgpConfig {
            manifest: Some(PathBuf::from("/etc/agp/providers.toml")),
            ..AgpConfig::default()
        };

        std::env::set_var(MANIFEST_ENV, "/tmp/override.toml");
        let overridden = config.manifest_path();

        std::env::remove_var(MANIFEST_ENV);
        let from_file = config.manifest_path();
        let unset = AgpConfig::default().manifest_path();

        if let Some(value) = saved {
            std::env::set_var(MANIFEST_ENV, value);
        }

        assert_eq!(overridden, Some(PathBuf::from("/tmp/override.toml")));
        assert_eq!(from_file, Some(PathBuf::from("/etc/agp/providers.toml")));
        assert_eq!(unset, None);
    }

    #[test]
    fn test_malformed_config_is_error() {
        let err = AgpConfig::from_toml_str("telemetry = 3").unwrap_err();
        assert!(matches!(err, AgpError::Config(_)));
    }
}
