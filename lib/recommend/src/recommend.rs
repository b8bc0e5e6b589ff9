//! Tiered recommendation composer
//!
//! Food to drink: best glass pour plus alternatives, and the best bottle in
//! each price band. Drink to food: top matches overall and the best match
//! per course category.

use crate::policy::PreferencePolicy;
use crate::preferences::PreferenceEngine;
use crate::tiers::{DrinkPools, PriceBand, TierConfig};
use serde::Serialize;
use sommelier_core::{CategoryRules, Item};
use sommelier_pairing::{Compatibility, PairingResult, Ranker};
use std::collections::BTreeMap;
use tracing::debug;

/// Best bottle and runners-up for one price band
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TierRecommendation {
    pub label: String,
    pub best: Option<PairingResult>,
    pub alternatives: Vec<PairingResult>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BottleTiers {
    pub low_tier: TierRecommendation,
    pub mid_tier: TierRecommendation,
    pub high_tier: TierRecommendation,
}

impl BottleTiers {
    pub fn get(&self, band: PriceBand) -> &TierRecommendation {
        match band {
            PriceBand::Low => &self.low_tier,
            PriceBand::Mid => &self.mid_tier,
            PriceBand::High => &self.high_tier,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecommendationSet {
    pub by_the_glass: Option<PairingResult>,
    pub alternative_glasses: Vec<PairingResult>,
    pub bottles: BottleTiers,
}

/// Drink recommendations for one food item
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecommendations {
    pub food_id: String,
    pub food_name: String,
    pub recommendations: FoodRecommendationSet,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WineRecommendationSet {
    pub top_matches: Vec<PairingResult>,
    /// Best pairing per listed course category; empty categories are absent
    pub best_by_category: BTreeMap<String, PairingResult>,
    /// Every ranked pairing grouped by food category
    pub all_pairings: BTreeMap<String, Vec<PairingResult>>,
}

/// Food recommendations for one drink
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WineRecommendations {
    pub wine_id: String,
    pub wine_name: String,
    pub wine_price: Option<f64>,
    pub wine_category: String,
    pub recommendations: WineRecommendationSet,
}

/// Split a ranked list into best and the next `alternatives`
fn best_and_alternatives(ranked: &[PairingResult], alternatives: usize) -> (Option<PairingResult>, Vec<PairingResult>) {
    let best = ranked.first().cloned();
    let rest = ranked.iter().skip(1).take(alternatives).cloned().collect();
    (best, rest)
}

/// Composes tiered recommendations from a ranker, preference engine and
/// tier/category configuration
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    ranker: Ranker,
    preferences: PreferenceEngine,
    tiers: TierConfig,
    categories: CategoryRules,
}

impl Recommender {
    pub fn new(ranker: Ranker, preferences: PreferenceEngine, tiers: TierConfig, categories: CategoryRules) -> Self {
        Self {
            ranker,
            preferences,
            tiers,
            categories,
        }
    }

    pub fn ranker(&self) -> &Ranker {
        &self.ranker
    }

    pub fn tiers(&self) -> &TierConfig {
        &self.tiers
    }

    pub fn categories(&self) -> &CategoryRules {
        &self.categories
    }

    pub fn preference_engine(&self) -> &PreferenceEngine {
        &self.preferences
    }

    fn rank_pool(
        &self,
        food: &Item,
        pool: &[Item],
        limit: usize,
        policy: Option<&PreferencePolicy>,
    ) -> Vec<PairingResult> {
        let ranked = self.ranker.find_pairings(food, pool, limit);
        match policy {
            Some(policy) => self.preferences.apply(ranked, pool, policy),
            None => ranked,
        }
    }

    /// Glass and bottle recommendations for a food.
    ///
    /// `None` when the food has no flavor profile.
    pub fn get_food_pairing_recommendations(
        &self,
        food: &Item,
        drinks: &[Item],
        policy: Option<&PreferencePolicy>,
    ) -> Option<FoodRecommendations> {
        if !food.has_profile() {
            return None;
        }

        let pools = DrinkPools::partition(drinks, &self.tiers, &self.categories);
        debug!(
            "food '{}': {} glass pours, {} bottles of {} drinks",
            food.id,
            pools.by_the_glass.len(),
            pools.bottles.len(),
            drinks.len()
        );

        let glasses = self.rank_pool(food, &pools.by_the_glass, self.tiers.glass_limit, policy);
        let (by_the_glass, alternative_glasses) = best_and_alternatives(&glasses, self.tiers.glass_alternatives);

        let tier = |band: PriceBand| {
            let bottles = pools.band(band, &self.tiers);
            let ranked = self.rank_pool(food, &bottles, self.tiers.band_limit, policy);
            debug!("food '{}': {:?} band ranked {} of {}", food.id, band, ranked.len(), bottles.len());
            let (best, alternatives) = best_and_alternatives(&ranked, self.tiers.band_alternatives);
            TierRecommendation {
                label: self.tiers.label(band).to_string(),
                best,
                alternatives,
            }
        };

        Some(FoodRecommendations {
            food_id: food.id.clone(),
            food_name: food.name.clone(),
            recommendations: FoodRecommendationSet {
                by_the_glass,
                alternative_glasses,
                bottles: BottleTiers {
                    low_tier: tier(PriceBand::Low),
                    mid_tier: tier(PriceBand::Mid),
                    high_tier: tier(PriceBand::High),
                },
            },
        })
    }

    /// Food recommendations for a drink, grouped by course.
    ///
    /// `None` when the drink has no flavor profile.
    pub fn get_wine_pairing_recommendations(&self, wine: &Item, foods: &[Item]) -> Option<WineRecommendations> {
        if !wine.has_profile() {
            return None;
        }

        let ranked = self.ranker.find_food_pairings(wine, foods, self.tiers.food_limit);
        debug!("wine '{}': {} food pairings of {} foods", wine.id, ranked.len(), foods.len());

        let mut all_pairings: BTreeMap<String, Vec<PairingResult>> = BTreeMap::new();
        for pairing in &ranked {
            let category = if pairing.category.is_empty() {
                self.tiers.fallback_category.clone()
            } else {
                pairing.category.clone()
            };
            all_pairings.entry(category).or_default().push(pairing.clone());
        }

        let best_by_category = self
            .tiers
            .course_categories
            .iter()
            .filter_map(|course| {
                let best = all_pairings.get(course)?.first()?;
                Some((course.clone(), best.clone()))
            })
            .collect();

        let top_matches = ranked.into_iter().take(self.tiers.top_matches).collect();

        Some(WineRecommendations {
            wine_id: wine.id.clone(),
            wine_name: wine.name.clone(),
            wine_price: wine.price,
            wine_category: wine.category.clone(),
            recommendations: WineRecommendationSet {
                top_matches,
                best_by_category,
                all_pairings,
            },
        })
    }

    /// Compact food-to-drink summary for menu display
    pub fn get_menu_pairing_summary(&self, food: &Item, drinks: &[Item]) -> Option<MenuPairingSummary> {
        let recs = self.get_food_pairing_recommendations(food, drinks, None)?;
        let set = recs.recommendations;
        let bottle = |band| set.bottles.get(band).best.as_ref().map(BottleSummary::from);

        Some(MenuPairingSummary {
            food_name: recs.food_name,
            glass: set.by_the_glass.as_ref().map(GlassSummary::from),
            bottles: BottleSummaries {
                budget: bottle(PriceBand::Low),
                premium: bottle(PriceBand::Mid),
                luxury: bottle(PriceBand::High),
            },
        })
    }

    /// Compact drink-to-food summary for wine list display
    pub fn get_wine_list_pairing_summary(&self, wine: &Item, foods: &[Item]) -> Option<WineListPairingSummary> {
        let recs = self.get_wine_pairing_recommendations(wine, foods)?;
        let set = &recs.recommendations;

        let top_food_pairings = set
            .top_matches
            .iter()
            .take(self.tiers.summary_top)
            .map(|p| FoodPairingSummary {
                name: p.name.clone(),
                category: p.category.clone(),
                compatibility: p.compatibility,
                score: p.score,
                explanation: p.explanation.clone(),
            })
            .collect();

        let best_by_category = self
            .tiers
            .course_categories
            .iter()
            .filter_map(|course| {
                let p = set.best_by_category.get(course)?;
                Some(CategoryPairingSummary {
                    category: course.clone(),
                    food_name: p.name.clone(),
                    compatibility: p.compatibility,
                    score: p.score,
                })
            })
            .collect();

        Some(WineListPairingSummary {
            wine_name: recs.wine_name,
            wine_price: recs.wine_price,
            top_food_pairings,
            best_by_category,
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlassSummary {
    pub name: String,
    pub price: Option<f64>,
    #[serde(rename = "match")]
    pub compatibility: Compatibility,
    pub score: u8,
}

impl From<&PairingResult> for GlassSummary {
    fn from(p: &PairingResult) -> Self {
        Self {
            name: p.name.clone(),
            price: p.price,
            compatibility: p.compatibility,
            score: p.score,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BottleSummary {
    pub name: String,
    pub price: Option<f64>,
    #[serde(rename = "match")]
    pub compatibility: Compatibility,
}

impl From<&PairingResult> for BottleSummary {
    fn from(p: &PairingResult) -> Self {
        Self {
            name: p.name.clone(),
            price: p.price,
            compatibility: p.compatibility,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BottleSummaries {
    pub budget: Option<BottleSummary>,
    pub premium: Option<BottleSummary>,
    pub luxury: Option<BottleSummary>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuPairingSummary {
    pub food_name: String,
    pub glass: Option<GlassSummary>,
    pub bottles: BottleSummaries,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodPairingSummary {
    pub name: String,
    pub category: String,
    #[serde(rename = "match")]
    pub compatibility: Compatibility,
    pub score: u8,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPairingSummary {
    pub category: String,
    pub food_name: String,
    #[serde(rename = "match")]
    pub compatibility: Compatibility,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WineListPairingSummary {
    pub wine_name: String,
    pub wine_price: Option<f64>,
    pub top_food_pairings: Vec<FoodPairingSummary>,
    pub best_by_category: Vec<CategoryPairingSummary>,
}

/// One-line rendering of a pairing, e.g. `Barolo ($19) - Excellent Match (95/100)`
pub fn format_pairing_display(pairing: Option<&PairingResult>) -> String {
    match pairing {
        Some(p) => format!(
            "{} (${}) - {} Match ({}/100)",
            p.name,
            p.price_or_zero(),
            p.compatibility,
            p.score
        ),
        None => "No pairing available".to_string(),
    }
}

pub fn get_food_pairing_recommendations(
    food: &Item,
    drinks: &[Item],
    policy: Option<&PreferencePolicy>,
) -> Option<FoodRecommendations> {
    Recommender::default().get_food_pairing_recommendations(food, drinks, policy)
}

pub fn get_wine_pairing_recommendations(wine: &Item, foods: &[Item]) -> Option<WineRecommendations> {
    Recommender::default().get_wine_pairing_recommendations(wine, foods)
}

pub fn get_menu_pairing_summary(food: &Item, drinks: &[Item]) -> Option<MenuPairingSummary> {
    Recommender::default().get_menu_pairing_summary(food, drinks)
}

pub fn get_wine_list_pairing_summary(wine: &Item, foods: &[Item]) -> Option<WineListPairingSummary> {
    Recommender::default().get_wine_list_pairing_summary(wine, foods)
}
