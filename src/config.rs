//! Configuration for the store and gateway processes.
//!
//! Sources, later ones overriding earlier:
//! 1. built-in defaults
//! 2. `inventory.toml` in the working directory (optional)
//! 3. `INVENTORY_`-prefixed environment variables, `__` separating
//!    sections, e.g. `INVENTORY_GATEWAY__LISTEN_ADDR=0.0.0.0:8080`

use std::net::SocketAddr;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE: &str = "inventory.toml";
pub const ENV_PREFIX: &str = "INVENTORY_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// Store process settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub listen_addr: SocketAddr,
    /// Start with the two-book demo catalogue instead of an empty store.
    pub seed_catalog: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 50051)),
            seed_catalog: false,
        }
    }
}

/// Gateway process settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub listen_addr: SocketAddr,
    /// URI of the store's gRPC endpoint.
    pub store_endpoint: String,
    pub connect_timeout_ms: u64,
}

impl GatewayConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            store_endpoint: "http://localhost:50051".to_string(),
            connect_timeout_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl Config {
    /// Load from defaults, `inventory.toml` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract()?)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}
