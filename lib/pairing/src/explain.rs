//! Explainability for pairing results
//!
//! Turns a score breakdown into a coarse compatibility label and a
//! human-readable explanation, and summarizes ranked result lists.

use crate::factors::{first_shared_note, DEFAULT_DRINK_ALCOHOL};
use crate::rank::PairingResult;
use crate::scorer::ScoreBreakdown;
use crate::weights::{Factor, PairingWeights};
use serde::{Deserialize, Serialize};
use sommelier_core::{Axis, FlavorProfile};
use std::fmt;

/// Coarse compatibility label, ordered from worst to best
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Compatibility {
    Acceptable,
    Fair,
    Good,
    #[serde(rename = "Very Good")]
    VeryGood,
    Excellent,
}

impl Compatibility {
    /// Bucket a 0-100 score
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => Compatibility::Excellent,
            75..=84 => Compatibility::VeryGood,
            65..=74 => Compatibility::Good,
            55..=64 => Compatibility::Fair,
            _ => Compatibility::Acceptable,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Compatibility::Excellent => "Excellent",
            Compatibility::VeryGood => "Very Good",
            Compatibility::Good => "Good",
            Compatibility::Fair => "Fair",
            Compatibility::Acceptable => "Acceptable",
        }
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const FALLBACK_EXPLANATION: &str = "Well-balanced pairing with complementary characteristics";

/// Build the explanation for a food/drink pairing.
///
/// Clauses are gated by the same thresholds the factors use and joined
/// with ". ". When nothing stands out a generic clause is returned.
pub fn explain(food: &FlavorProfile, drink: &FlavorProfile, breakdown: &ScoreBreakdown) -> String {
    let mut reasons: Vec<String> = Vec::new();

    if breakdown.body_match >= 90.0 {
        reasons.push(format!(
            "Perfect body match - {}-bodied food with {}-bodied wine",
            food.body_or_medium(),
            drink.body_or_medium()
        ));
    }

    if food.level(Axis::Acidity) >= 6.0 && drink.level(Axis::Acidity) >= 7.0 {
        reasons.push("High acidity in both creates a harmonious pairing".to_string());
    }

    if food.level(Axis::Richness) >= 7.0 {
        if let Some(cutter) = richness_cutter(drink) {
            reasons.push(format!("Wine's {} cuts through the richness beautifully", cutter));
        }
    }

    if food.level(Axis::Spiciness) >= 4.0 {
        if drink.level(Axis::Sweetness) >= 4.0 {
            reasons.push("Sweetness balances the spice perfectly".to_string());
        }
        if drink.level_or(Axis::Alcohol, DEFAULT_DRINK_ALCOHOL) <= 6.0 {
            reasons.push("Lower alcohol won't amplify the heat".to_string());
        }
    }

    if food.level(Axis::Umami) >= 7.0 && drink.level(Axis::Tannin) >= 6.0 {
        reasons.push("Tannins complement the umami-rich flavors".to_string());
    }

    if let Some(note) = first_shared_note(food, drink) {
        reasons.push(format!("Shared {} flavors create harmony", note));
    }

    if reasons.is_empty() {
        return FALLBACK_EXPLANATION.to_string();
    }
    reasons.join(". ")
}

/// Strongest cutting agent at 6 or above. Ties favor bubbles, then tannins.
fn richness_cutter(drink: &FlavorProfile) -> Option<&'static str> {
    let candidates = [
        ("bubbles", drink.level(Axis::Carbonation)),
        ("tannins", drink.level(Axis::Tannin)),
        ("acidity", drink.level(Axis::Acidity)),
    ];

    let mut best: Option<(&'static str, f64)> = None;
    for (name, level) in candidates {
        if level < 6.0 {
            continue;
        }
        match best {
            Some((_, best_level)) if best_level >= level => {}
            _ => best = Some((name, level)),
        }
    }
    best.map(|(name, _)| name)
}

/// Summary statistics for a ranked pairing list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingStats {
    /// Number of candidates considered
    pub candidates_count: usize,
    /// Number of results returned
    pub results_count: usize,
    /// Average score of results
    pub avg_score: f64,
    /// Score of best result
    pub best_score: u8,
    /// Factor that contributed most to the best result
    pub top_contributing_factor: Option<Factor>,
}

impl PairingStats {
    /// Compute stats from ranked results (sorted best first)
    pub fn compute(results: &[PairingResult], candidates_count: usize, weights: &PairingWeights) -> Self {
        let Some(best) = results.first() else {
            return Self {
                candidates_count,
                results_count: 0,
                avg_score: 0.0,
                best_score: 0,
                top_contributing_factor: None,
            };
        };

        let total: f64 = results.iter().map(|r| f64::from(r.score)).sum();

        Self {
            candidates_count,
            results_count: results.len(),
            avg_score: total / results.len() as f64,
            best_score: best.score,
            top_contributing_factor: best.score_breakdown.top_factor(weights),
        }
    }
}
