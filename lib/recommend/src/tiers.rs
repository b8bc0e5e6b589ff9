//! Price tiers and drink pools
//!
//! Splits a drink list into a by-the-glass pool and a bottle pool, and the
//! bottle pool into low, mid and high price bands.

use serde::{Deserialize, Serialize};
use sommelier_core::{CategoryRules, Item};

/// Price cut-offs, pool limits and labels for tiered recommendations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TierConfig {
    /// Glass pours cost strictly less than this
    pub glass_max_price: f64,
    /// Drinks at or above this price count as bottles whatever their category
    pub bottle_min_price: f64,
    /// Upper bound (exclusive) of the low band
    pub low_tier_max: f64,
    /// Upper bound (exclusive) of the mid band; the high band starts here
    pub mid_tier_max: f64,

    pub glass_limit: usize,
    pub glass_alternatives: usize,
    pub band_limit: usize,
    pub band_alternatives: usize,

    /// Reverse (drink to food) ranking limit
    pub food_limit: usize,
    pub top_matches: usize,
    /// Entries listed by the wine-list summary
    pub summary_top: usize,

    pub low_tier_label: String,
    pub mid_tier_label: String,
    pub high_tier_label: String,

    /// Course categories listed in best-by-category, in display order
    pub course_categories: Vec<String>,
    /// Bucket for food without a category
    pub fallback_category: String,
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            glass_max_price: 20.0,
            bottle_min_price: 30.0,
            low_tier_max: 60.0,
            mid_tier_max: 120.0,
            glass_limit: 20,
            glass_alternatives: 3,
            band_limit: 10,
            band_alternatives: 2,
            food_limit: 20,
            top_matches: 5,
            summary_top: 3,
            low_tier_label: "Budget-Friendly Bottles (Under $60)".to_string(),
            mid_tier_label: "Premium Bottles ($60-$120)".to_string(),
            high_tier_label: "Luxury Bottles ($120+)".to_string(),
            course_categories: [
                "Appetizers",
                "House Pastas",
                "Seafood",
                "VIA Italian Classics",
                "Beef, Pork & Veal",
                "Grilled Pizzas",
                "Salads",
                "Desserts",
                "Gelato",
                "Sorbetto",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            fallback_category: "Other".to_string(),
        }
    }
}

/// Bottle price band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceBand {
    Low,
    Mid,
    High,
}

impl PriceBand {
    pub const ALL: [PriceBand; 3] = [PriceBand::Low, PriceBand::Mid, PriceBand::High];
}

impl TierConfig {
    /// Band for a price; `None` when the price is absent or not a number
    pub fn band(&self, price: Option<f64>) -> Option<PriceBand> {
        let price = price.filter(|p| !p.is_nan())?;
        if price < self.low_tier_max {
            Some(PriceBand::Low)
        } else if price < self.mid_tier_max {
            Some(PriceBand::Mid)
        } else {
            Some(PriceBand::High)
        }
    }

    pub fn label(&self, band: PriceBand) -> &str {
        match band {
            PriceBand::Low => &self.low_tier_label,
            PriceBand::Mid => &self.mid_tier_label,
            PriceBand::High => &self.high_tier_label,
        }
    }
}

/// Drinks split into pairing pools. Both pools hold copies, only of drinks
/// with a flavor profile; a drink may sit in both.
#[derive(Debug, Clone, Default)]
pub struct DrinkPools {
    pub by_the_glass: Vec<Item>,
    pub bottles: Vec<Item>,
}

impl DrinkPools {
    pub fn partition(drinks: &[Item], tiers: &TierConfig, categories: &CategoryRules) -> Self {
        let mut pools = DrinkPools::default();
        for drink in drinks.iter().filter(|d| d.has_profile()) {
            if is_by_the_glass(drink, tiers, categories) {
                pools.by_the_glass.push(drink.clone());
            }
            if is_bottle(drink, tiers, categories) {
                pools.bottles.push(drink.clone());
            }
        }
        pools
    }

    /// Bottles in one price band, in pool order
    pub fn band(&self, band: PriceBand, tiers: &TierConfig) -> Vec<Item> {
        self.bottles
            .iter()
            .filter(|b| tiers.band(b.price) == Some(band))
            .cloned()
            .collect()
    }
}

fn is_by_the_glass(drink: &Item, tiers: &TierConfig, categories: &CategoryRules) -> bool {
    drink.price_matches(|p| p < tiers.glass_max_price) && categories.is_glass_wine_category(&drink.category)
}

fn is_bottle(drink: &Item, tiers: &TierConfig, categories: &CategoryRules) -> bool {
    (categories.is_bottle_category(&drink.category) || drink.price_matches(|p| p >= tiers.bottle_min_price))
        && !categories.is_beer_or_cocktail(&drink.category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sommelier_core::{Axis, FlavorProfile};

    fn drink(id: &str, category: &str, price: Option<f64>) -> Item {
        let item = Item::new(id, id)
            .with_category(category)
            .with_profile(FlavorProfile::new().with(Axis::Acidity, 6.0));
        match price {
            Some(p) => item.with_price(p),
            None => item,
        }
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_partition() {
        let drinks = vec![
            drink("glass-red", "Italian Reds", Some(14.0)),
            drink("glass-rose", "Rosé", Some(12.0)),
            drink("pricey-glass", "Italian Reds", Some(32.0)),
            drink("bottle", "Italian Reds Bottles", Some(48.0)),
            drink("half", "Half Bottles", Some(28.0)),
            drink("ipa", "Draught", Some(8.0)),
            drink("cans", "Bottles & Cans", Some(35.0)),
            drink("negroni", "Classic Cocktails", Some(16.0)),
            drink("chardonnay", "Chardonnay", Some(13.0)),
            drink("unpriced", "Interesting Whites", None),
            Item::new("bare", "Bare").with_category("Italian Reds").with_price(10.0),
        ];

        let pools = DrinkPools::partition(&drinks, &TierConfig::default(), &CategoryRules::default());
        assert_eq!(ids(&pools.by_the_glass), vec!["glass-red", "glass-rose"]);
        assert_eq!(ids(&pools.bottles), vec!["pricey-glass", "bottle", "half"]);
    }

    #[test]
    fn test_bands() {
        let tiers = TierConfig::default();
        assert_eq!(tiers.band(Some(59.99)), Some(PriceBand::Low));
        assert_eq!(tiers.band(Some(60.0)), Some(PriceBand::Mid));
        assert_eq!(tiers.band(Some(119.0)), Some(PriceBand::Mid));
        assert_eq!(tiers.band(Some(120.0)), Some(PriceBand::High));
        assert_eq!(tiers.band(None), None);
        assert_eq!(tiers.band(Some(f64::NAN)), None);

        let pools = DrinkPools {
            by_the_glass: Vec::new(),
            bottles: vec![
                drink("a", "Italian Reds Bottles", Some(45.0)),
                drink("b", "Italian Reds Bottles", Some(95.0)),
                drink("c", "Italian Reds Bottles", None),
                drink("d", "Italian Reds Bottles", Some(210.0)),
                drink("e", "Italian Reds Bottles", Some(38.0)),
            ],
        };
        assert_eq!(ids(&pools.band(PriceBand::Low, &tiers)), vec!["a", "e"]);
        assert_eq!(ids(&pools.band(PriceBand::Mid, &tiers)), vec!["b"]);
        assert_eq!(ids(&pools.band(PriceBand::High, &tiers)), vec!["d"]);
    }

    #[test]
    fn test_labels() {
        let tiers = TierConfig::default();
        assert_eq!(tiers.label(PriceBand::Low), "Budget-Friendly Bottles (Under $60)");
        assert_eq!(tiers.label(PriceBand::High), "Luxury Bottles ($120+)");
    }
}
