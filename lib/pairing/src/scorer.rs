//! Pairing scorer
//!
//! Combines the per-factor scores into one 0-100 total. The two profiles
//! play fixed roles: every factor reads food-side axes from the [`Food`]
//! argument and drink-side axes from the [`Drink`] argument. The newtypes
//! make the roles explicit at every call site, so reversing a lookup
//! (foods for a drink) cannot silently swap which profile supplies which
//! axes.

use crate::factors::factor_score;
use crate::weights::{Factor, PairingWeights, WeightError};
use serde::{Deserialize, Serialize};
use sommelier_core::FlavorProfile;
use std::collections::HashMap;

/// Profile playing the food role
#[derive(Debug, Clone, Copy)]
pub struct Food<'a>(pub &'a FlavorProfile);

/// Profile playing the drink role
#[derive(Debug, Clone, Copy)]
pub struct Drink<'a>(pub &'a FlavorProfile);

/// Every factor score plus the weighted total
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
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
    /// Rounded weighted sum, 0-100
    pub total: u8,
}

impl ScoreBreakdown {
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

    /// Contribution of one factor to the total under `weights`
    pub fn contribution(&self, factor: Factor, weights: &PairingWeights) -> f64 {
        self.get(factor) * weights.get(factor)
    }

    /// Factor with the largest weighted contribution
    pub fn top_factor(&self, weights: &PairingWeights) -> Option<Factor> {
        Factor::ALL
            .iter()
            .copied()
            .filter(|f| weights.get(*f) > 0.0)
            .max_by(|a, b| {
                self.contribution(*a, weights)
                    .partial_cmp(&self.contribution(*b, weights))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

/// Weighted pairing scorer
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: PairingWeights,
}

impl Scorer {
    /// Create a scorer after validating and normalizing `weights`
    pub fn new(mut weights: PairingWeights) -> Result<Self, WeightError> {
        weights.validate_and_normalize()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &PairingWeights {
        &self.weights
    }

    /// Score a food profile against a drink profile
    pub fn score(&self, food: Food<'_>, drink: Drink<'_>) -> ScoreBreakdown {
        let (food, drink) = (food.0, drink.0);
        let score = |factor| factor_score(factor, food, drink);

        let mut breakdown = ScoreBreakdown {
            body_match: score(Factor::BodyMatch),
            acidity_balance: score(Factor::AcidityBalance),
            richness_balance: score(Factor::RichnessBalance),
            spice_handling: score(Factor::SpiceHandling),
            umami_pairing: score(Factor::UmamiPairing),
            sweetness_balance: score(Factor::SweetnessBalance),
            flavor_harmony: score(Factor::FlavorHarmony),
            fat_tannin_balance: score(Factor::FatTanninBalance),
            intensity_match: score(Factor::IntensityMatch),
            oak_smoke_harmony: score(Factor::OakSmokeHarmony),
            minerality_seafood: score(Factor::MineralitySeafood),
            complexity_balance: score(Factor::ComplexityBalance),
            total: 0,
        };

        let weighted: f64 = Factor::ALL
            .iter()
            .map(|f| breakdown.contribution(*f, &self.weights))
            .sum();
        breakdown.total = weighted.round().clamp(0.0, 100.0) as u8;

        breakdown
    }

    /// Create a new scorer with custom weight overrides
    ///
    /// Factors not in the overrides keep their current weights; the result
    /// is re-normalized to sum to 1.0.
    pub fn with_weights(&self, overrides: &HashMap<Factor, f64>) -> Scorer {
        Scorer {
            weights: self.weights.with_overrides(overrides),
        }
    }
}

/// Score with the default weights
pub fn score_profiles(food: Food<'_>, drink: Drink<'_>) -> ScoreBreakdown {
    Scorer::default().score(food, drink)
}
