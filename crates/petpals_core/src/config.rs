//! Configuration for the pet interaction engine.
//!
//! Values come from hardcoded defaults, optionally overridden by a
//! `petpals.toml` file. Every section is `#[serde(default)]`, so a file only
//! needs the keys it changes.
//!
//! ## Example `petpals.toml`
//!
//! ```toml
//! [session]
//! seed = 42
//! pet_count = 2
//! history_capacity = 5
//!
//! [rules]
//! source_energy_cost = 5
//! play_energy_bonus = 10
//! feed_energy_bonus = 15
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest pet set a session will generate.
pub const MAX_PETS: usize = 64;

/// Session-level parameters: how many pets, how much history, which seed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub pet_count: usize,
    pub history_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pet_count: 2,
            history_capacity: 5,
        }
    }
}

/// Stat deltas applied by the resolver that do not depend on personality.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RuleConfig {
    /// Energy the acting pet spends per interaction.
    pub source_energy_cost: u8,
    /// Extra target energy from `play`.
    pub play_energy_bonus: u8,
    /// Extra target energy from `feed`.
    pub feed_energy_bonus: u8,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            source_energy_cost: 5,
            play_energy_bonus: 10,
            feed_energy_bonus: 15,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub session: SessionConfig,
    pub rules: RuleConfig,
}

impl EngineConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.session.pet_count >= 2,
            "Pet count must be at least 2"
        );
        anyhow::ensure!(
            self.session.pet_count <= MAX_PETS,
            "Pet count too large (max {MAX_PETS})"
        );
        anyhow::ensure!(
            self.session.history_capacity > 0,
            "History capacity must be positive"
        );
        anyhow::ensure!(
            self.rules.source_energy_cost <= 100,
            "Source energy cost must be in [0, 100]"
        );
        anyhow::ensure!(
            self.rules.play_energy_bonus <= 100,
            "Play energy bonus must be in [0, 100]"
        );
        anyhow::ensure!(
            self.rules.feed_energy_bonus <= 100,
            "Feed energy bonus must be in [0, 100]"
        );
        Ok(())
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing {}", path.display()))
    }
}
