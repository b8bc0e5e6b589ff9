//! # sommelier
//!
//! A deterministic food and drink pairing engine.
//!
//! sommelier scores food against drinks on multi-axis flavor profiles, ranks
//! candidate pools, filters and boosts results by user preference, and
//! composes tiered recommendations (by the glass, bottles by price band,
//! foods by course).
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! sommelier --menu drinks.json --menu dinner.json food short-rib --exclude sweetWines
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use sommelier::prelude::*;
//!
//! let food = Item::new("short-rib", "Braised Short Rib").with_profile(
//!     FlavorProfile::new()
//!         .with(Axis::Acidity, 7.0)
//!         .with(Axis::Richness, 8.0)
//!         .with_body(Body::Full),
//! );
//! let wine = Item::new("barbera", "Barbera")
//!     .with_category("Italian Reds")
//!     .with_price(15.0)
//!     .with_profile(
//!         FlavorProfile::new()
//!             .with(Axis::Acidity, 8.0)
//!             .with(Axis::Tannin, 7.0)
//!             .with_body(Body::Full),
//!     );
//!
//! let pairings = find_pairings(&food, std::slice::from_ref(&wine), 5);
//! println!("{}", format_pairing_display(pairings.first()));
//!
//! let recs = get_food_pairing_recommendations(&food, &[wine], None).unwrap();
//! assert_eq!(recs.recommendations.by_the_glass.unwrap().id, "barbera");
//! ```
//!
//! ## Crate Structure
//!
//! - `sommelier-core` - flavor profiles, menu items, category rules
//! - `sommelier-pairing` - factor scoring, weights, explanations, ranking
//! - `sommelier-recommend` - preferences, tiers, recommendations, configuration

// Re-export core types
pub use sommelier_core::{
    find_item, items_from_value, load_menu, Axis, Body, CategoryRules, CourseClass, DrinkClass, Error,
    FlavorProfile, Item, Result,
};

// Re-export pairing
pub use sommelier_pairing::{
    explain, find_food_pairings, find_pairings, score_profiles, Compatibility, Drink, Factor, Food,
    PairingResult, PairingStats, PairingWeights, Ranker, Role, ScoreBreakdown, Scorer, WeightError,
    DEFAULT_MAX_RESULTS,
};

// Re-export recommendations
pub use sommelier_recommend::{
    apply_pairing_preferences, contextual_pairings, default_preferences, format_pairing_display,
    get_food_pairing_recommendations, get_menu_pairing_summary, get_wine_list_pairing_summary,
    get_wine_pairing_recommendations, ContextualPairings, ExclusionKey, FoodRecommendations, MenuPools,
    PairingConfig, PreferenceEngine, PreferenceKey, PreferencePolicy, PreferenceRules, Recommender,
    TierConfig, WineRecommendations,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Axis, Body, FlavorProfile, Item,
        Error, Result,
        Compatibility, PairingResult, PairingWeights, Ranker, Scorer,
        find_pairings, find_food_pairings,
        PreferencePolicy, PreferenceKey, ExclusionKey, apply_pairing_preferences,
        Recommender, PairingConfig, MenuPools,
        get_food_pairing_recommendations, get_wine_pairing_recommendations,
        format_pairing_display,
    };
}
