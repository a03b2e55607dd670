use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::PlannerOptions;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub proximity: ProximitySettings,
    #[serde(default)]
    pub planner: PlannerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ProximitySettings {
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,
    #[serde(default = "default_max_radius_km")]
    pub max_radius_km: f64,
}

impl Default for ProximitySettings {
    fn default() -> Self {
        Self {
            default_radius_km: default_radius_km(),
            max_radius_km: default_max_radius_km(),
        }
    }
}

impl ProximitySettings {
    /// Requested radius, or the default, capped at the maximum
    pub fn effective_radius(&self, requested: Option<f64>) -> f64 {
        requested
            .unwrap_or(self.default_radius_km)
            .min(self.max_radius_km)
    }
}

fn default_radius_km() -> f64 { 10.0 }
fn default_max_radius_km() -> f64 { 50.0 }

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlannerSettings {
    #[serde(default = "default_max_stops")]
    pub max_stops: usize,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self { max_stops: default_max_stops() }
    }
}

fn default_max_stops() -> usize { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PLATEFUL__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PLATEFUL__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Planner limits derived from the proximity and planner sections
    pub fn planner_options(&self) -> PlannerOptions {
        PlannerOptions {
            default_radius_km: self.proximity.default_radius_km,
            max_stops: self.planner.max_stops,
        }
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("PLATEFUL")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
