//! Configuration for snowball binary decisions.

use core::num::NonZeroU64;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use snowbft_core_types::Beta;

const DEFAULT_BETA_VIRTUOUS: NonZeroU64 = NonZeroU64::new(15).unwrap();
const DEFAULT_BETA_ROGUE: NonZeroU64 = NonZeroU64::new(20).unwrap();

/// Errors which can occur while loading or validating the configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration sources could not be read or deserialized.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// Contested decisions would finalize faster than uncontested ones.
    #[error("beta_rogue ({rogue}) must be greater than or equal to beta_virtuous ({virtuous})")]
    BetaRogueBelowVirtuous {
        /// Configured threshold for uncontested decisions.
        virtuous: Beta,
        /// Configured threshold for contested decisions.
        rogue: Beta,
    },
}

/// Finalization thresholds for snowball decisions
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnowballConfig {
    /// Consecutive successful polls needed to finalize a decision
    /// which has no known conflict (unary). Default: 15
    #[serde(default = "default_beta_virtuous")]
    pub beta_virtuous: Beta,

    /// Consecutive successful polls needed to finalize a decision
    /// between two conflicting options (binary). Default: 20
    #[serde(default = "default_beta_rogue")]
    pub beta_rogue: Beta,
}

fn default_beta_virtuous() -> Beta {
    Beta::from_nonzero(DEFAULT_BETA_VIRTUOUS)
}

fn default_beta_rogue() -> Beta {
    Beta::from_nonzero(DEFAULT_BETA_ROGUE)
}

impl Default for SnowballConfig {
    fn default() -> Self {
        Self {
            beta_virtuous: default_beta_virtuous(),
            beta_rogue: default_beta_rogue(),
        }
    }
}

impl SnowballConfig {
    /// Check that the thresholds are consistent with each other.
    pub fn verify(&self) -> Result<(), Error> {
        if self.beta_rogue < self.beta_virtuous {
            return Err(Error::BetaRogueBelowVirtuous {
                virtuous: self.beta_virtuous,
                rogue: self.beta_rogue,
            });
        }

        Ok(())
    }
}

/// Top-level configuration
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Snowball configuration options
    #[serde(default)]
    pub snowball: SnowballConfig,
}

/// Load the configuration from the given TOML file, overridden by environment variables
/// of the form `{PREFIX}__SNOWBALL__BETA_ROGUE`, and verify it.
///
/// The prefix defaults to `SNOWBFT`.
pub fn load_config(path: impl AsRef<Path>, prefix: Option<&str>) -> Result<Config, Error> {
    let config: Config = ::config::Config::builder()
        .add_source(::config::File::from(path.as_ref()))
        .add_source(
            ::config::Environment::with_prefix(prefix.unwrap_or("SNOWBFT")).separator("__"),
        )
        .build()?
        .try_deserialize()?;

    config.snowball.verify()?;

    debug!(
        beta_virtuous = %config.snowball.beta_virtuous,
        beta_rogue = %config.snowball.beta_rogue,
        "Loaded configuration"
    );

    Ok(config)
}
