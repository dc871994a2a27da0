//! Service configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use tourid_types::{BlockHash, NetworkId, ServiceParams};

use crate::error::ServiceError;

/// Configuration for the tourid service.
///
/// Can be loaded from a TOML file via [`ServiceConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Port the HTTP surface listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Required leading zero hex digits in a valid block hash.
    #[serde(default = "default_difficulty")]
    pub difficulty: u32,

    /// Previous-hash of the genesis block.
    #[serde(default)]
    pub genesis_previous_hash: BlockHash,

    /// Network tag reported in statistics.
    #[serde(default)]
    pub network: NetworkId,

    /// Pool size at which a block is mined automatically.
    #[serde(default = "default_auto_mine_threshold")]
    pub auto_mine_threshold: usize,

    /// Maximum ids per batch verification.
    #[serde(default = "default_max_batch_verify")]
    pub max_batch_verify: usize,

    /// Optional hard cap on proof-of-work iterations per block.
    #[serde(default)]
    pub max_mine_iterations: Option<u64>,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_port() -> u16 {
    7000
}

fn default_difficulty() -> u32 {
    4
}

fn default_auto_mine_threshold() -> usize {
    5
}

fn default_max_batch_verify() -> usize {
    10
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            difficulty: default_difficulty(),
            genesis_previous_hash: BlockHash::ZERO,
            network: NetworkId::default(),
            auto_mine_threshold: default_auto_mine_threshold(),
            max_batch_verify: default_max_batch_verify(),
            max_mine_iterations: None,
            log_level: default_log_level(),
        }
    }
}

impl ServiceConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, ServiceError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ServiceError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&contents).map_err(|e| ServiceError::Config(e.to_string()))
    }

    /// The ledger-facing subset of this configuration.
    pub fn params(&self) -> ServiceParams {
        ServiceParams {
            difficulty: self.difficulty,
            genesis_previous_hash: self.genesis_previous_hash,
            auto_mine_threshold: self.auto_mine_threshold,
            id_validity_secs: ServiceParams::ID_VALIDITY_SECS,
            max_batch_verify: self.max_batch_verify,
            max_mine_iterations: self.max_mine_iterations,
            network: self.network.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, 7000);
        assert_eq!(config.difficulty, 4);
        assert_eq!(config.auto_mine_threshold, 5);
        assert_eq!(config.max_batch_verify, 10);
        assert!(config.genesis_previous_hash.is_zero());
    }

    #[test]
    fn fields_override_defaults() {
        let config: ServiceConfig = toml::from_str(
            r#"
            port = 8080
            difficulty = 2
            network = "tourid_devnet"
            max_mine_iterations = 1000000
            "#,
        )
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.difficulty, 2);
        assert_eq!(config.network.as_str(), "tourid_devnet");
        assert_eq!(config.max_mine_iterations, Some(1_000_000));

        let params = config.params();
        assert_eq!(params.difficulty, 2);
        assert_eq!(params.id_validity_secs, 365 * 24 * 3600);
    }
}
