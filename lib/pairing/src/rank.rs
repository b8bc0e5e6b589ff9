//! Pairing ranker
//!
//! Scores a subject item against a candidate pool, sorts by total score and
//! truncates. Candidates without a flavor profile are skipped, and a subject
//! without one yields no results.

use crate::explain::{explain, Compatibility};
use crate::scorer::{Drink, Food, ScoreBreakdown, Scorer};
use serde::{Deserialize, Serialize};
use sommelier_core::{FlavorProfile, Item};
use tracing::trace;

/// Result count used when the caller does not pick one
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Role the paired candidate plays in the scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    /// Candidate is a drink paired with a food subject
    Drink,
    /// Candidate is a food paired with a drink subject
    Food,
}

/// One scored candidate.
///
/// Carries a copy of the candidate's fields, so it stays valid after the
/// candidate pool is dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PairingResult {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub role: Role,
    /// Total score, equal to `score_breakdown.total` until a preference boost
    pub score: u8,
    pub score_breakdown: ScoreBreakdown,
    pub explanation: String,
    pub compatibility: Compatibility,
    pub flavor_profile: FlavorProfile,
    /// Points added by preference boosting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_boost: Option<u32>,
    #[serde(default)]
    pub boosted: bool,
}

impl PairingResult {
    fn new(
        candidate: &Item,
        profile: &FlavorProfile,
        role: Role,
        breakdown: ScoreBreakdown,
        explanation: String,
    ) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            pronunciation: candidate.pronunciation.clone(),
            description: candidate.description.clone(),
            category: candidate.category.clone(),
            region: candidate.region.clone(),
            price: candidate.price,
            role,
            score: breakdown.total,
            compatibility: Compatibility::from_score(breakdown.total),
            score_breakdown: breakdown,
            explanation,
            flavor_profile: profile.clone(),
            preference_boost: None,
            boosted: false,
        }
    }

    /// Price with absent treated as 0
    #[inline]
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

/// Ranks candidate pools with a [`Scorer`]
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    scorer: Scorer,
}

impl Ranker {
    pub fn new(scorer: Scorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Drinks for a food: the subject plays food, candidates play drink
    pub fn find_pairings(&self, food: &Item, drinks: &[Item], max_results: usize) -> Vec<PairingResult> {
        self.rank(food, drinks, max_results, Role::Drink)
    }

    /// Foods for a drink: the subject plays drink, candidates play food
    pub fn find_food_pairings(&self, drink: &Item, foods: &[Item], max_results: usize) -> Vec<PairingResult> {
        self.rank(drink, foods, max_results, Role::Food)
    }

    fn rank(&self, subject: &Item, candidates: &[Item], max_results: usize, role: Role) -> Vec<PairingResult> {
        let Some(subject_profile) = subject.flavor_profile.as_ref() else {
            trace!("subject '{}' has no flavor profile, nothing to rank", subject.id);
            return Vec::new();
        };

        let mut results: Vec<PairingResult> = candidates
            .iter()
            .filter_map(|candidate| {
                let profile = candidate.flavor_profile.as_ref()?;
                let (food, drink) = match role {
                    Role::Drink => (subject_profile, profile),
                    Role::Food => (profile, subject_profile),
                };
                let breakdown = self.scorer.score(Food(food), Drink(drink));
                let explanation = explain(food, drink, &breakdown);
                Some(PairingResult::new(candidate, profile, role, breakdown, explanation))
            })
            .collect();

        trace!(
            "ranked {} of {} candidates for '{}'",
            results.len(),
            candidates.len(),
            subject.id
        );

        // Stable: equal scores keep candidate order
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(max_results);
        results
    }
}

/// Drinks for a food with the default weights
pub fn find_pairings(food: &Item, drinks: &[Item], max_results: usize) -> Vec<PairingResult> {
    Ranker::default().find_pairings(food, drinks, max_results)
}

/// Foods for a drink with the default weights
pub fn find_food_pairings(drink: &Item, foods: &[Item], max_results: usize) -> Vec<PairingResult> {
    Ranker::default().find_food_pairings(drink, foods, max_results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::score_profiles;
    use sommelier_core::{Axis, Body};

    fn short_rib() -> Item {
        Item::new("short-rib", "Braised Short Rib")
            .with_category("Beef, Pork & Veal")
            .with_price(38.0)
            .with_profile(
                FlavorProfile::new()
                    .with(Axis::Acidity, 7.0)
                    .with(Axis::Richness, 8.0)
                    .with(Axis::Umami, 7.0)
                    .with(Axis::Sweetness, 1.0)
                    .with_body(Body::Full),
            )
    }

    fn drinks() -> Vec<Item> {
        vec![
            Item::new("pinot-grigio", "Pinot Grigio")
                .with_category("Interesting Whites")
                .with_price(12.0)
                .with_profile(FlavorProfile::new().with(Axis::Acidity, 6.0).with_body(Body::Light)),
            Item::new("house-special", "House Special").with_category("Cocktails").with_price(14.0),
            Item::new("barolo", "Barolo")
                .with_category("Italian Reds")
                .with_price(19.0)
                .with_region("Piemonte")
                .with_profile(
                    FlavorProfile::new()
                        .with(Axis::Acidity, 8.0)
                        .with(Axis::Tannin, 9.0)
                        .with(Axis::Alcohol, 7.0)
                        .with_body(Body::Full),
                ),
            Item::new("chianti", "Chianti")
                .with_category("Italian Reds")
                .with_price(13.0)
                .with_profile(
                    FlavorProfile::new()
                        .with(Axis::Acidity, 7.0)
                        .with(Axis::Tannin, 6.0)
                        .with_body(Body::Medium),
                ),
        ]
    }

    #[test]
    fn test_find_pairings_sorted_and_truncated() {
        let results = find_pairings(&short_rib(), &drinks(), 2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "barolo");
        assert!(results[0].score >= results[1].score);
        assert_eq!(results[0].role, Role::Drink);
        assert_eq!(results[0].region.as_deref(), Some("Piemonte"));
    }

    #[test]
    fn test_skips_candidates_without_profile() {
        let results = find_pairings(&short_rib(), &drinks(), 10);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.id != "house-special"));
    }

    #[test]
    fn test_subject_without_profile_yields_nothing() {
        let bare = Item::new("mystery", "Mystery Dish");
        assert!(find_pairings(&bare, &drinks(), 5).is_empty());
        assert!(find_food_pairings(&bare, &[short_rib()], 5).is_empty());
    }

    #[test]
    fn test_result_invariants() {
        for result in find_pairings(&short_rib(), &drinks(), 10) {
            assert_eq!(result.score, result.score_breakdown.total);
            assert_eq!(result.compatibility, Compatibility::from_score(result.score));
            assert!(!result.explanation.is_empty());
            assert!(!result.boosted);
        }
    }

    #[test]
    fn test_ties_keep_candidate_order() {
        let profile = FlavorProfile::new().with(Axis::Acidity, 7.0);
        let candidates: Vec<Item> = ["a", "b", "c", "d"]
            .iter()
            .map(|id| Item::new(*id, *id).with_profile(profile.clone()))
            .collect();

        let results = find_pairings(&short_rib(), &candidates, 10);
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_reverse_direction_wires_roles() {
        let food = short_rib();
        let barolo = drinks().remove(2);

        let forward = find_pairings(&food, std::slice::from_ref(&barolo), 1);
        let reverse = find_food_pairings(&barolo, std::slice::from_ref(&food), 1);

        assert_eq!(reverse[0].role, Role::Food);
        assert_eq!(reverse[0].id, "short-rib");
        assert_eq!(forward[0].score_breakdown, reverse[0].score_breakdown);

        let direct = score_profiles(
            Food(food.flavor_profile.as_ref().unwrap()),
            Drink(barolo.flavor_profile.as_ref().unwrap()),
        );
        assert_eq!(reverse[0].score, direct.total);
    }

    #[test]
    fn test_zero_max_results() {
        assert!(find_pairings(&short_rib(), &drinks(), 0).is_empty());
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let results = find_pairings(&short_rib(), &drinks(), 1);
        let value = serde_json::to_value(&results[0]).unwrap();
        assert!(value.get("scoreBreakdown").is_some());
        assert!(value.get("flavorProfile").is_some());
        assert_eq!(value["scoreBreakdown"]["total"], value["score"]);
    }
}
