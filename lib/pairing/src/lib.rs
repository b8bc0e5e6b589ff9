//! # sommelier pairing
//!
//! Deterministic food/drink pairing on top of flavor profiles.
//!
//! ## Features
//!
//! - **Factor scores**: body, acidity, richness, spice, umami, sweetness and
//!   note harmony, plus advanced fat/tannin, intensity, oak/smoke,
//!   minerality and complexity factors
//! - **Configurable weights**: validated and normalized to sum to 1.0
//! - **Ranking**: drinks for a food, or foods for a drink
//! - **Explainability**: compatibility labels and human-readable reasons
//!
//! ## Example
//!
//! ```rust
//! use sommelier_core::{Axis, Body, FlavorProfile, Item};
//! use sommelier_pairing::{find_pairings, Compatibility};
//!
//! let short_rib = Item::new("short-rib", "Braised Short Rib").with_profile(
//!     FlavorProfile::new()
//!         .with(Axis::Acidity, 7.0)
//!         .with(Axis::Richness, 8.0)
//!         .with(Axis::Umami, 7.0)
//!         .with_body(Body::Full),
//! );
//! let barolo = Item::new("barolo", "Barolo").with_price(19.0).with_profile(
//!     FlavorProfile::new()
//!         .with(Axis::Acidity, 8.0)
//!         .with(Axis::Tannin, 9.0)
//!         .with_body(Body::Full),
//! );
//!
//! let results = find_pairings(&short_rib, &[barolo], 5);
//! assert_eq!(results[0].compatibility, Compatibility::Excellent);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Weights   │────>│   Scorer    │<────│   Factors   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │   Ranker    │────>│   Explain   │
//!                     │ (candidates)│     │  (results)  │
//!                     └─────────────┘     └─────────────┘
//! ```

pub mod weights;
pub mod factors;
pub mod scorer;
pub mod explain;
pub mod rank;

// Re-export main types for convenience
pub use weights::{Factor, PairingWeights, WeightError};
pub use scorer::{score_profiles, Drink, Food, ScoreBreakdown, Scorer};
pub use explain::{explain, Compatibility, PairingStats};
pub use rank::{find_food_pairings, find_pairings, PairingResult, Ranker, Role, DEFAULT_MAX_RESULTS};
