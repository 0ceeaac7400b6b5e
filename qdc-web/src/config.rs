//! Service configuration
//!
//! Settings come from an optional TOML file with command-line/environment
//! overrides on top. A missing config file is not fatal: the service logs a
//! warning and starts with compiled defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Settings as written in the TOML config file. Every field is optional;
/// absent fields fall back to compiled defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub model_path: Option<PathBuf>,
    pub labels_path: Option<PathBuf>,
    pub session_ttl_seconds: Option<u64>,
    pub eviction_interval_seconds: Option<u64>,
}

impl TomlConfig {
    /// Read a config file, degrading to defaults if it is missing or
    /// malformed.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    "Config file {} not readable ({}); using defaults",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };
        match toml::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Config file {} is malformed ({}); using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

/// Fully resolved service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub model_path: PathBuf,
    pub labels_path: PathBuf,
    pub session_ttl: std::time::Duration,
    pub eviction_interval: std::time::Duration,
}

impl ServiceConfig {
    /// Merge CLI/env values over TOML values over compiled defaults.
    pub fn resolve(
        toml: &TomlConfig,
        cli_port: Option<u16>,
        cli_model: Option<PathBuf>,
        cli_labels: Option<PathBuf>,
    ) -> Self {
        Self {
            port: cli_port.or(toml.port).unwrap_or(5800),
            model_path: cli_model
                .or_else(|| toml.model_path.clone())
                .unwrap_or_else(|| PathBuf::from("models/quick_draw.onnx")),
            labels_path: cli_labels
                .or_else(|| toml.labels_path.clone())
                .unwrap_or_else(|| PathBuf::from("data/selected_classes.json")),
            session_ttl: std::time::Duration::from_secs(toml.session_ttl_seconds.unwrap_or(300)),
            eviction_interval: std::time::Duration::from_secs(
                toml.eviction_interval_seconds.unwrap_or(60),
            ),
        }
    }
}
