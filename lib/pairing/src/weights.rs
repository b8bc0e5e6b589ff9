//! Pairing factor weights
//!
//! Declares the scoring factors and how much each contributes to the total.
//! Weights are validated and normalized to sum to 1.0 before use, so the
//! weighted total of 0-100 sub-scores is itself bounded to 0-100.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// A single scoring factor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    BodyMatch,
    AcidityBalance,
    RichnessBalance,
    SpiceHandling,
    UmamiPairing,
    SweetnessBalance,
    FlavorHarmony,
    FatTanninBalance,
    IntensityMatch,
    OakSmokeHarmony,
    MineralitySeafood,
    ComplexityBalance,
}

impl Factor {
    pub const ALL: [Factor; 12] = [
        Factor::BodyMatch,
        Factor::AcidityBalance,
        Factor::RichnessBalance,
        Factor::SpiceHandling,
        Factor::UmamiPairing,
        Factor::SweetnessBalance,
        Factor::FlavorHarmony,
        Factor::FatTanninBalance,
        Factor::IntensityMatch,
        Factor::OakSmokeHarmony,
        Factor::MineralitySeafood,
        Factor::ComplexityBalance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Factor::BodyMatch => "bodyMatch",
            Factor::AcidityBalance => "acidityBalance",
            Factor::RichnessBalance => "richnessBalance",
            Factor::SpiceHandling => "spiceHandling",
            Factor::UmamiPairing => "umamiPairing",
            Factor::SweetnessBalance => "sweetnessBalance",
            Factor::FlavorHarmony => "flavorHarmony",
            Factor::FatTanninBalance => "fatTanninBalance",
            Factor::IntensityMatch => "intensityMatch",
            Factor::OakSmokeHarmony => "oakSmokeHarmony",
            Factor::MineralitySeafood => "mineralitySeafood",
            Factor::ComplexityBalance => "complexityBalance",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Weight of every factor in the total score.
///
/// The default weighs only the seven classic factors; the advanced factors
/// are still computed and reported but contribute nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PairingWeights {
    pub body_match: f64,
    pub acidity_balance: f64,
    pub richness_balance: f64,
    pub spice_handling: f64,
    pub umami_pairing: f64,
    pub sweetness_balance: f64,
    pub flavor_harmony: f64,
    pub fat_tannin_balance: f64,
    pub intensity_match: f64,
    pub oak_smoke_harmony: f64,
    pub minerality_seafood: f64,
    pub complexity_balance: f64,
}

impl Default for PairingWeights {
    fn default() -> Self {
        Self {
            body_match: 0.20,
            acidity_balance: 0.20,
            richness_balance: 0.20,
            spice_handling: 0.15,
            umami_pairing: 0.10,
            sweetness_balance: 0.05,
            flavor_harmony: 0.10,
            fat_tannin_balance: 0.0,
            intensity_match: 0.0,
            oak_smoke_harmony: 0.0,
            minerality_seafood: 0.0,
            complexity_balance: 0.0,
        }
    }
}

impl PairingWeights {
    /// Weighting that also draws on fat/tannin, intensity, oak/smoke and
    /// minerality. Complexity stays informational.
    pub fn extended() -> Self {
        Self {
            body_match: 0.15,
            acidity_balance: 0.15,
            richness_balance: 0.12,
            spice_handling: 0.10,
            umami_pairing: 0.08,
            sweetness_balance: 0.05,
            flavor_harmony: 0.10,
            fat_tannin_balance: 0.10,
            intensity_match: 0.08,
            oak_smoke_harmony: 0.05,
            minerality_seafood: 0.02,
            complexity_balance: 0.0,
        }
    }

    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::BodyMatch => self.body_match,
            Factor::AcidityBalance => self.acidity_balance,
            Factor::RichnessBalance => self.richness_balance,
            Factor::SpiceHandling => self.spice_handling,
            Factor::UmamiPairing => self.umami_pairing,
            Factor::SweetnessBalance => self.sweetness_balance,
            Factor::FlavorHarmony => self.flavor_harmony,
            Factor::FatTanninBalance => self.fat_tannin_balance,
            Factor::IntensityMatch => self.intensity_match,
            Factor::OakSmokeHarmony => self.oak_smoke_harmony,
            Factor::MineralitySeafood => self.minerality_seafood,
            Factor::ComplexityBalance => self.complexity_balance,
        }
    }

    pub fn set(&mut self, factor: Factor, weight: f64) {
        let slot = match factor {
            Factor::BodyMatch => &mut self.body_match,
            Factor::AcidityBalance => &mut self.acidity_balance,
            Factor::RichnessBalance => &mut self.richness_balance,
            Factor::SpiceHandling => &mut self.spice_handling,
            Factor::UmamiPairing => &mut self.umami_pairing,
            Factor::SweetnessBalance => &mut self.sweetness_balance,
            Factor::FlavorHarmony => &mut self.flavor_harmony,
            Factor::FatTanninBalance => &mut self.fat_tannin_balance,
            Factor::IntensityMatch => &mut self.intensity_match,
            Factor::OakSmokeHarmony => &mut self.oak_smoke_harmony,
            Factor::MineralitySeafood => &mut self.minerality_seafood,
            Factor::ComplexityBalance => &mut self.complexity_balance,
        };
        *slot = weight;
    }

    pub fn sum(&self) -> f64 {
        Factor::ALL.iter().map(|f| self.get(*f)).sum()
    }

    /// Validate the weights
    /// - Checks that weights are finite and non-negative
    /// - Normalizes weights to sum to 1.0 if they don't
    pub fn validate_and_normalize(&mut self) -> Result<(), WeightError> {
        for factor in Factor::ALL {
            let weight = self.get(factor);
            if !weight.is_finite() {
                return Err(WeightError::NonFinite(factor));
            }
            if weight < 0.0 {
                return Err(WeightError::NegativeWeight(factor));
            }
        }

        let weight_sum = self.sum();
        if weight_sum <= 0.0 {
            return Err(WeightError::ZeroTotalWeight);
        }

        if (weight_sum - 1.0).abs() > 1e-9 {
            for factor in Factor::ALL {
                self.set(factor, self.get(factor) / weight_sum);
            }
        }

        Ok(())
    }

    /// Copy with some weights replaced, then re-normalized.
    ///
    /// Negative overrides are clamped to zero. If the result cannot be
    /// normalized the overrides are ignored and the current weights returned.
    pub fn with_overrides(&self, overrides: &HashMap<Factor, f64>) -> PairingWeights {
        let mut modified = self.clone();
        for (factor, weight) in overrides {
            modified.set(*factor, weight.max(0.0));
        }
        match modified.validate_and_normalize() {
            Ok(()) => modified,
            Err(e) => {
                warn!("ignoring weight overrides: {}", e);
                self.clone()
            }
        }
    }
}

/// Errors that can occur during weight validation
#[derive(Debug, Clone, thiserror::Error)]
pub enum WeightError {
    #[error("Factor '{0}' has negative weight")]
    NegativeWeight(Factor),

    #[error("Factor '{0}' has a non-finite weight")]
    NonFinite(Factor),

    #[error("Total weight cannot be zero")]
    ZeroTotalWeight,
}
