//! Work configuration with TOML file support.
//!
//! The configured difficulties are passed explicitly into every validation
//! and search call, so callers targeting different networks can hold
//! different configs side by side.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use nano_types::{BlockHash, NetworkId};
use nano_utils::LogFormat;

use crate::validator::meets_difficulty;
use crate::{Difficulty, WorkError, WorkGenerator, WorkNonce, WorkThresholds};

/// Configuration for work validation and generation.
///
/// Can be loaded from a TOML file via [`WorkConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkConfig {
    /// Which network's thresholds apply when no difficulty is set.
    #[serde(default)]
    pub network: NetworkId,

    /// Minimum difficulty for validation and generation. Falls back to the
    /// network's send/change threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,

    /// Reference difficulty for multipliers. Falls back to the network's
    /// send/change threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_difficulty: Option<Difficulty>,

    /// Worker threads per search; `0` means one per available core.
    #[serde(default)]
    pub threads: usize,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl WorkConfig {
    /// Defaults for a given network.
    pub fn for_network(network: NetworkId) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, WorkError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| WorkError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, WorkError> {
        toml::from_str(s).map_err(|e| WorkError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, WorkError> {
        toml::to_string_pretty(self).map_err(|e| WorkError::Config(e.to_string()))
    }

    pub fn thresholds(&self) -> WorkThresholds {
        WorkThresholds::for_network(self.network)
    }

    /// The difficulty in force for validation and generation.
    pub fn effective_difficulty(&self) -> Difficulty {
        self.difficulty.unwrap_or_else(|| self.thresholds().base)
    }

    /// The reference difficulty for multipliers.
    pub fn effective_base_difficulty(&self) -> Difficulty {
        self.base_difficulty.unwrap_or_else(|| self.thresholds().base)
    }

    /// Build a generator honouring `threads`.
    pub fn generator(&self) -> WorkGenerator {
        WorkGenerator::with_threads(self.threads)
    }

    /// Check `nonce` against the configured difficulty.
    pub fn validate(&self, block_hash: &BlockHash, nonce: WorkNonce) -> bool {
        meets_difficulty(block_hash, nonce, self.effective_difficulty())
    }

    /// Solve for the configured difficulty.
    pub fn solve(
        &self,
        block_hash: &BlockHash,
        timeout: Option<Duration>,
    ) -> Result<Option<WorkNonce>, WorkError> {
        self.generator()
            .generate(block_hash, self.effective_difficulty(), timeout)
    }

    /// Multiplier of `difficulty` relative to the configured base.
    pub fn multiplier_of(&self, difficulty: Difficulty) -> f64 {
        difficulty.to_multiplier(self.effective_base_difficulty())
    }

    /// Difficulty for `multiplier` relative to the configured base.
    pub fn difficulty_for(&self, multiplier: f64) -> Result<Difficulty, WorkError> {
        Difficulty::from_multiplier(multiplier, self.effective_base_difficulty())
    }

    /// Install the global tracing subscriber with the configured format and
    /// level. Fails if one is already installed.
    pub fn init_logging(&self) -> Result<(), WorkError> {
        nano_utils::init_logging(self.log_format, &self.log_level)
            .map_err(|e| WorkError::Logging(e.to_string()))
    }
}

impl Default for WorkConfig {
    fn default() -> Self {
        Self {
            network: NetworkId::default(),
            difficulty: None,
            base_difficulty: None,
            threads: 0,
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
