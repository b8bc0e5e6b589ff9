//! # sommelier recommend
//!
//! Tiered recommendations and user preferences on top of the pairing ranker.
//!
//! - [`Recommender`] - glass/bottle tiers for a food, course-grouped foods for a drink
//! - [`PreferencePolicy`] / [`PreferenceEngine`] - exclusions, price and score
//!   cut-offs, preference boosts
//! - [`MenuPools`] / [`contextual_pairings`] - every pairing section for a menu item
//! - [`PairingConfig`] - weights, rule tables, tiers and categories from JSON
//!
//! ## Example
//!
//! ```rust
//! use sommelier_core::{Axis, Body, FlavorProfile, Item};
//! use sommelier_recommend::{get_food_pairing_recommendations, ExclusionKey, PreferencePolicy};
//!
//! let salmon = Item::new("salmon", "Cedar Plank Salmon").with_profile(
//!     FlavorProfile::new().with(Axis::Richness, 6.0).with_body(Body::Medium),
//! );
//! let drinks = vec![
//!     Item::new("pinot", "Pinot Noir")
//!         .with_category("Pinot Noir & Interesting Reds")
//!         .with_price(15.0)
//!         .with_profile(FlavorProfile::new().with(Axis::Tannin, 4.0).with_body(Body::Medium)),
//!     Item::new("sancerre", "Sancerre")
//!         .with_category("Interesting Whites")
//!         .with_price(16.0)
//!         .with_profile(FlavorProfile::new().with(Axis::Acidity, 8.0).with_body(Body::Light)),
//! ];
//!
//! let policy = PreferencePolicy::default().with_exclusion(ExclusionKey::Red);
//! let recs = get_food_pairing_recommendations(&salmon, &drinks, Some(&policy)).unwrap();
//! assert_eq!(recs.recommendations.by_the_glass.unwrap().id, "sancerre");
//! ```

pub mod policy;
pub mod rules;
pub mod preferences;
pub mod tiers;
pub mod recommend;
pub mod context;
pub mod config;

pub use policy::{default_preferences, ExclusionKey, PreferenceKey, PreferencePolicy, PriceRange, UnknownKey};
pub use rules::{BoostRule, Comparison, ExclusionRule, Predicate, PreferenceRules, TextField};
pub use preferences::{apply_pairing_preferences, PreferenceEngine};
pub use tiers::{DrinkPools, PriceBand, TierConfig};
pub use recommend::{
    format_pairing_display, get_food_pairing_recommendations, get_menu_pairing_summary,
    get_wine_list_pairing_summary, get_wine_pairing_recommendations, BottleTiers, FoodRecommendations,
    MenuPairingSummary, Recommender, TierRecommendation, WineListPairingSummary, WineRecommendations,
};
pub use context::{contextual_pairings, CategoryFlags, ContextualPairings, MenuPools};
pub use config::PairingConfig;
