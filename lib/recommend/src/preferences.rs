//! Preference filter and booster
//!
//! Post-processes ranked pairings in a fixed order: exclusions, price range,
//! minimum score, then preference boosts followed by a stable re-sort.

use crate::policy::PreferencePolicy;
use crate::rules::PreferenceRules;
use ahash::AHashMap;
use sommelier_core::Item;
use sommelier_pairing::{Compatibility, PairingResult};
use tracing::trace;

/// Applies a [`PreferencePolicy`] using a set of rule tables
#[derive(Debug, Clone, Default)]
pub struct PreferenceEngine {
    rules: PreferenceRules,
}

impl PreferenceEngine {
    pub fn new(rules: PreferenceRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &PreferenceRules {
        &self.rules
    }

    /// Filter and boost `pairings`.
    ///
    /// `candidates` is the pool the pairings were ranked from; rules read the
    /// originating item by id. Pairings whose item is not in the pool are
    /// never excluded or boosted by rules. A default policy returns the input
    /// unchanged.
    pub fn apply(
        &self,
        pairings: Vec<PairingResult>,
        candidates: &[Item],
        policy: &PreferencePolicy,
    ) -> Vec<PairingResult> {
        if policy.is_default() {
            return pairings;
        }

        let mut by_id: AHashMap<&str, &Item> = AHashMap::with_capacity(candidates.len());
        for item in candidates {
            by_id.entry(item.id.as_str()).or_insert(item);
        }

        let before = pairings.len();
        let mut filtered: Vec<PairingResult> = pairings
            .into_iter()
            .filter(|pairing| match by_id.get(pairing.id.as_str()) {
                Some(item) => !self
                    .rules
                    .is_excluded(item, &pairing.flavor_profile, policy.active_exclusions()),
                None => true,
            })
            .filter(|pairing| policy.price_range.contains(pairing.price_or_zero()))
            .filter(|pairing| pairing.score >= policy.min_score)
            .collect();

        if policy.active_preferences().next().is_some() {
            for pairing in &mut filtered {
                let Some(item) = by_id.get(pairing.id.as_str()) else {
                    continue;
                };
                let boost = self
                    .rules
                    .boost(item, &pairing.flavor_profile, policy.active_preferences());
                if boost > 0 {
                    let boosted = u32::from(pairing.score).saturating_add(boost).min(100);
                    pairing.score = boosted as u8;
                    pairing.score_breakdown.total = pairing.score;
                    pairing.compatibility = Compatibility::from_score(pairing.score);
                    pairing.preference_boost = Some(boost);
                    pairing.boosted = true;
                }
            }
            filtered.sort_by(|a, b| b.score.cmp(&a.score));
        }

        trace!("preferences kept {} of {} pairings", filtered.len(), before);
        filtered
    }
}

/// Apply `policy` with the built-in rule tables
pub fn apply_pairing_preferences(
    pairings: Vec<PairingResult>,
    candidates: &[Item],
    policy: &PreferencePolicy,
) -> Vec<PairingResult> {
    PreferenceEngine::default().apply(pairings, candidates, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{ExclusionKey, PreferenceKey};
    use crate::rules::{BoostRule, Predicate, TextField};
    use sommelier_core::{Axis, Body, FlavorProfile};
    use sommelier_pairing::find_pairings;

    fn salmon() -> Item {
        Item::new("salmon", "Cedar Plank Salmon").with_profile(
            FlavorProfile::new()
                .with(Axis::Acidity, 5.0)
                .with(Axis::Richness, 6.0)
                .with_body(Body::Medium)
                .with_notes(["seafood", "smoky"]),
        )
    }

    fn wines() -> Vec<Item> {
        vec![
            Item::new("chianti", "Chianti Classico")
                .with_category("Italian Reds")
                .with_description("Sangiovese from Tuscany")
                .with_price(14.0)
                .with_profile(
                    FlavorProfile::new()
                        .with(Axis::Acidity, 7.0)
                        .with(Axis::Tannin, 6.0)
                        .with_body(Body::Medium),
                ),
            Item::new("sancerre", "Sancerre")
                .with_category("Interesting Whites")
                .with_description("Sauvignon blanc from the Loire")
                .with_price(16.0)
                .with_profile(
                    FlavorProfile::new()
                        .with(Axis::Acidity, 8.0)
                        .with(Axis::Minerality, 8.0)
                        .with_body(Body::Light)
                        .with_notes(["citrus", "mineral"]),
                ),
            Item::new("prosecco", "Prosecco")
                .with_category("Sparkling")
                .with_price(12.0)
                .with_profile(
                    FlavorProfile::new()
                        .with(Axis::Acidity, 7.0)
                        .with(Axis::Carbonation, 8.0)
                        .with(Axis::Sweetness, 2.0)
                        .with_body(Body::Light),
                ),
            Item::new("amarone", "Amarone")
                .with_category("Italian Reds Bottles")
                .with_price(140.0)
                .with_profile(
                    FlavorProfile::new()
                        .with(Axis::Tannin, 8.0)
                        .with(Axis::Alcohol, 9.0)
                        .with_body(Body::Full),
                ),
        ]
    }

    fn ranked() -> (Vec<PairingResult>, Vec<Item>) {
        let pool = wines();
        (find_pairings(&salmon(), &pool, 10), pool)
    }

    fn ids(results: &[PairingResult]) -> Vec<&str> {
        results.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_default_policy_is_passthrough() {
        let (pairings, pool) = ranked();
        let out = apply_pairing_preferences(pairings.clone(), &pool, &PreferencePolicy::default());
        assert_eq!(out, pairings);
    }

    #[test]
    fn test_exclude_red() {
        let (pairings, pool) = ranked();
        let policy = PreferencePolicy::default().with_exclusion(ExclusionKey::Red);
        let out = apply_pairing_preferences(pairings, &pool, &policy);

        assert_eq!(out.len(), 2);
        assert!(out
            .iter()
            .all(|p| !p.category.to_lowercase().contains("red") && p.flavor_profile.level(Axis::Tannin) == 0.0));
    }

    #[test]
    fn test_price_range_and_min_score() {
        let (pairings, pool) = ranked();
        let policy = PreferencePolicy::default().with_price_range(13.0, 20.0);
        let out = apply_pairing_preferences(pairings.clone(), &pool, &policy);
        let mut kept = ids(&out);
        kept.sort_unstable();
        assert_eq!(kept, vec!["chianti", "sancerre"]);

        let threshold = pairings[1].score;
        let policy = PreferencePolicy::default().with_min_score(threshold);
        let out = apply_pairing_preferences(pairings.clone(), &pool, &policy);
        assert!(out.len() >= 2);
        assert!(out.iter().all(|p| p.score >= threshold));
    }

    #[test]
    fn test_boost_marks_and_resorts() {
        let (pairings, pool) = ranked();
        let policy = PreferencePolicy::default()
            .with_preference(PreferenceKey::Mineral)
            .with_preference(PreferenceKey::French);
        let out = apply_pairing_preferences(pairings.clone(), &pool, &policy);

        let sancerre = out.iter().find(|p| p.id == "sancerre").unwrap();
        let original = pairings.iter().find(|p| p.id == "sancerre").unwrap();
        assert!(sancerre.boosted);
        assert_eq!(sancerre.preference_boost, Some(18));
        assert_eq!(sancerre.score, (original.score + 18).min(100));

        for pairing in out.iter().filter(|p| p.id != "sancerre") {
            assert!(!pairing.boosted);
            assert!(pairing.preference_boost.is_none());
        }
        assert!(out.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_boost_never_decreases_scores() {
        let (pairings, pool) = ranked();
        for key in PreferenceKey::ALL {
            let policy = PreferencePolicy::default().with_preference(key);
            let out = apply_pairing_preferences(pairings.clone(), &pool, &policy);
            assert_eq!(out.len(), pairings.len());
            for boosted in &out {
                let before = pairings.iter().find(|p| p.id == boosted.id).unwrap();
                assert!(boosted.score >= before.score, "{} lowered {}", key, boosted.id);
                assert!(boosted.score <= 100);
            }
            assert!(out.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn test_unknown_candidate_is_kept() {
        let (pairings, _) = ranked();
        let policy = PreferencePolicy::default()
            .with_exclusion(ExclusionKey::Red)
            .with_preference(PreferenceKey::Italian);
        let out = apply_pairing_preferences(pairings.clone(), &[], &policy);
        assert_eq!(out.len(), pairings.len());
        assert!(out.iter().all(|p| !p.boosted));
    }

    #[test]
    fn test_stages_run_in_order() {
        let (pairings, pool) = ranked();
        // Boosting happens after the min-score cut, so a boost cannot rescue
        // a pairing that was already dropped.
        let weakest = pairings.last().unwrap().clone();
        let policy = PreferencePolicy::default()
            .with_min_score(weakest.score + 1)
            .with_preference(PreferenceKey::Red)
            .with_preference(PreferenceKey::FullBody);
        let out = apply_pairing_preferences(pairings, &pool, &policy);
        assert_eq!(weakest.id, "amarone");
        assert!(out.iter().all(|p| p.id != weakest.id));
    }

    #[test]
    fn test_boosted_label_follows_score() {
        let (pairings, pool) = ranked();
        let policy = PreferencePolicy::default()
            .with_preference(PreferenceKey::Mineral)
            .with_preference(PreferenceKey::French)
            .with_preference(PreferenceKey::LightBody);
        let out = apply_pairing_preferences(pairings, &pool, &policy);

        assert!(out.iter().any(|p| p.boosted));
        for pairing in &out {
            assert_eq!(pairing.compatibility, Compatibility::from_score(pairing.score));
            assert_eq!(pairing.score_breakdown.total, pairing.score);
        }
    }

    #[test]
    fn test_boost_resort_keeps_tie_order() {
        let twin = |id: &str| {
            Item::new(id, id)
                .with_category("Italian Reds")
                .with_price(14.0)
                .with_profile(
                    FlavorProfile::new()
                        .with(Axis::Acidity, 7.0)
                        .with(Axis::Tannin, 6.0)
                        .with_body(Body::Medium),
                )
        };
        let policy = PreferencePolicy::default().with_preference(PreferenceKey::Italian);

        for order in [["first", "second"], ["second", "first"]] {
            let pool: Vec<Item> = order.iter().map(|id| twin(*id)).collect();
            let pairings = find_pairings(&salmon(), &pool, 10);
            let out = apply_pairing_preferences(pairings, &pool, &policy);

            assert!(out.iter().all(|p| p.boosted));
            assert_eq!(out[0].score, out[1].score);
            assert_eq!(ids(&out), order.to_vec());
        }
    }

    #[test]
    fn test_huge_boost_points_saturate() {
        let italian = |points| BoostRule {
            key: PreferenceKey::Italian,
            predicate: Predicate::contains(TextField::Category, &["italian"]),
            points,
        };
        let rules = PreferenceRules {
            exclusions: Vec::new(),
            boosts: vec![italian(u32::MAX), italian(10)],
        };
        let (pairings, pool) = ranked();
        let policy = PreferencePolicy::default().with_preference(PreferenceKey::Italian);
        let out = PreferenceEngine::new(rules).apply(pairings, &pool, &policy);

        let chianti = out.iter().find(|p| p.id == "chianti").unwrap();
        assert_eq!(chianti.score, 100);
        assert_eq!(chianti.preference_boost, Some(u32::MAX));
        assert_eq!(chianti.compatibility, Compatibility::Excellent);
    }
}
