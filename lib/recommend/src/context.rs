//! Contextual pairings for a menu item
//!
//! Given an item and caller-built [`MenuPools`], decides which pairing
//! sections apply (wine list, tiered drinks, after-dinner, beer, bourbon,
//! whiskey, dessert) and fills them.

use crate::policy::PreferencePolicy;
use crate::recommend::{FoodRecommendations, Recommender, WineRecommendations};
use serde::Serialize;
use sommelier_core::{CategoryRules, CourseClass, DrinkClass, Item};
use sommelier_pairing::PairingResult;
use tracing::debug;

const AFTER_DINNER_LIMIT: usize = 10;
const SECTION_LIMIT: usize = 6;

/// How an item's category places it on the menu
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFlags {
    /// Profiled drink whose pairings are foods
    pub is_drink_with_food_pairing: bool,
    pub is_dessert: bool,
    pub is_appetizer_or_pizza: bool,
    pub is_main_course: bool,
    pub is_beer: bool,
    /// After-dinner drink or whiskey
    pub is_dessert_drink: bool,
}

impl CategoryFlags {
    pub fn for_item(item: &Item, rules: &CategoryRules) -> Self {
        let drink = rules.classify_drink(&item.category);
        let course = rules.classify_course(&item.category);
        Self {
            is_drink_with_food_pairing: item.has_profile() && drink.is_some(),
            is_dessert: course == Some(CourseClass::Dessert),
            is_appetizer_or_pizza: course == Some(CourseClass::AppetizerOrPizza),
            is_main_course: course == Some(CourseClass::MainCourse),
            is_beer: drink == Some(DrinkClass::Beer),
            is_dessert_drink: matches!(drink, Some(DrinkClass::AfterDinner | DrinkClass::Whiskey)),
        }
    }
}

/// Candidate pools derived from a full menu.
///
/// Built once by the caller and passed to [`contextual_pairings`]; rebuild
/// when the menu changes.
#[derive(Debug, Clone, Default)]
pub struct MenuPools {
    /// Every drink, for tiered recommendations
    pub drinks: Vec<Item>,
    pub beers: Vec<Item>,
    pub whiskeys: Vec<Item>,
    pub after_dinner: Vec<Item>,
    pub desserts: Vec<Item>,
    /// Foods offered as pairings for a drink
    pub pairable_foods: Vec<Item>,
}

impl MenuPools {
    pub fn from_menu(drinks: &[Item], foods: &[Item], rules: &CategoryRules) -> Self {
        let drinks_in = |class: DrinkClass| -> Vec<Item> {
            drinks
                .iter()
                .filter(|d| d.has_profile() && rules.classify_drink(&d.category) == Some(class))
                .cloned()
                .collect()
        };

        let pools = Self {
            drinks: drinks.to_vec(),
            beers: drinks_in(DrinkClass::Beer),
            whiskeys: drinks_in(DrinkClass::Whiskey),
            after_dinner: drinks_in(DrinkClass::AfterDinner),
            desserts: foods
                .iter()
                .filter(|f| rules.classify_course(&f.category) == Some(CourseClass::Dessert))
                .cloned()
                .collect(),
            pairable_foods: foods.iter().filter(|f| rules.is_pairable_food(f)).cloned().collect(),
        };

        debug!(
            "menu pools: {} drinks, {} beers, {} whiskeys, {} after-dinner, {} desserts, {} pairable foods",
            pools.drinks.len(),
            pools.beers.len(),
            pools.whiskeys.len(),
            pools.after_dinner.len(),
            pools.desserts.len(),
            pools.pairable_foods.len()
        );
        pools
    }
}

/// Every pairing section that applies to one item. Absent sections did not
/// apply or came out empty.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContextualPairings {
    pub category_flags: CategoryFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wine_pairings: Option<WineRecommendations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_pairings: Option<FoodRecommendations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_dinner_pairings: Option<Vec<PairingResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beer_pairings: Option<Vec<PairingResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bourbon_pairings: Option<Vec<PairingResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whiskey_pairings: Option<Vec<PairingResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dessert_pairings: Option<Vec<PairingResult>>,
}

fn non_empty(results: Vec<PairingResult>) -> Option<Vec<PairingResult>> {
    if results.is_empty() {
        None
    } else {
        Some(results)
    }
}

impl Recommender {
    /// Fill every pairing section that applies to `item`
    pub fn contextual_pairings(
        &self,
        item: &Item,
        pools: &MenuPools,
        policy: Option<&PreferencePolicy>,
    ) -> ContextualPairings {
        let flags = CategoryFlags::for_item(item, self.categories());
        let mut out = ContextualPairings {
            category_flags: flags,
            ..ContextualPairings::default()
        };
        if !item.has_profile() {
            return out;
        }

        let ranker = self.ranker();
        let savory = flags.is_appetizer_or_pizza || flags.is_main_course;

        if flags.is_drink_with_food_pairing {
            out.wine_pairings = self.get_wine_pairing_recommendations(item, &pools.pairable_foods);
        } else {
            out.food_pairings = self.get_food_pairing_recommendations(item, &pools.drinks, policy);
        }

        if flags.is_dessert {
            out.after_dinner_pairings =
                non_empty(ranker.find_pairings(item, &pools.after_dinner, AFTER_DINNER_LIMIT));
        }
        if savory {
            out.beer_pairings = non_empty(ranker.find_pairings(item, &pools.beers, SECTION_LIMIT));
            out.bourbon_pairings = non_empty(ranker.find_pairings(item, &pools.whiskeys, SECTION_LIMIT));
        }
        if flags.is_dessert || flags.is_beer {
            out.whiskey_pairings = non_empty(ranker.find_pairings(item, &pools.whiskeys, SECTION_LIMIT));
        }
        if flags.is_dessert_drink {
            // The port or whiskey stays in the drink role; desserts are scored as food
            out.dessert_pairings = non_empty(ranker.find_food_pairings(item, &pools.desserts, SECTION_LIMIT));
        }

        out
    }
}

/// Contextual pairings with the default configuration
pub fn contextual_pairings(item: &Item, pools: &MenuPools, policy: Option<&PreferencePolicy>) -> ContextualPairings {
    Recommender::default().contextual_pairings(item, pools, policy)
}
