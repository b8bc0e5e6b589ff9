//! Pairing configuration
//!
//! Every tunable table in one JSON document. Each section is optional and
//! falls back to the built-in defaults.

use crate::preferences::PreferenceEngine;
use crate::recommend::Recommender;
use crate::rules::PreferenceRules;
use crate::tiers::TierConfig;
use serde::{Deserialize, Serialize};
use sommelier_core::{CategoryRules, Error, Result};
use sommelier_pairing::{PairingWeights, Ranker, Scorer};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PairingConfig {
    pub weights: PairingWeights,
    pub rules: PreferenceRules,
    pub tiers: TierConfig,
    pub categories: CategoryRules,
}

impl PairingConfig {
    /// Parse a JSON config, validating and normalizing the weights
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut config: PairingConfig =
            serde_json::from_str(raw).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        info!("loaded pairing config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&mut self) -> Result<()> {
        self.weights
            .validate_and_normalize()
            .map_err(|e| Error::InvalidWeights(e.to_string()))?;

        let tiers = &self.tiers;
        if tiers.low_tier_max > tiers.mid_tier_max {
            return Err(Error::InvalidConfig(format!(
                "low tier bound {} exceeds mid tier bound {}",
                tiers.low_tier_max, tiers.mid_tier_max
            )));
        }
        Ok(())
    }

    /// Build a recommender from this configuration
    pub fn recommender(&self) -> Result<Recommender> {
        let scorer = Scorer::new(self.weights.clone()).map_err(|e| Error::InvalidWeights(e.to_string()))?;
        Ok(Recommender::new(
            Ranker::new(scorer),
            PreferenceEngine::new(self.rules.clone()),
            self.tiers.clone(),
            self.categories.clone(),
        ))
    }
}
