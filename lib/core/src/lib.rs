//! # sommelier core
//!
//! Core data model for the sommelier pairing engine.
//!
//! - [`FlavorProfile`] - multi-axis flavor description carried by food and drinks
//! - [`Item`] - a menu item as supplied by menu data loaders
//! - [`CategoryRules`] - free-text category classification (wine, beer, dessert, ...)
//!
//! ## Example
//!
//! ```rust
//! use sommelier_core::{Axis, Body, FlavorProfile, Item};
//!
//! let profile = FlavorProfile::new()
//!     .with(Axis::Acidity, 8.0)
//!     .with(Axis::Tannin, 2.0)
//!     .with_body(Body::Light)
//!     .with_notes(["citrus", "crisp"]);
//!
//! let wine = Item::new("vermentino", "Vermentino")
//!     .with_category("Interesting Whites")
//!     .with_price(14.0)
//!     .with_profile(profile);
//!
//! assert!(wine.has_profile());
//! ```

pub mod error;
pub mod profile;
pub mod item;
pub mod category;

pub use error::{Error, Result};
pub use profile::{Axis, Body, FlavorProfile};
pub use item::{Item, items_from_value, load_menu, find_item};
pub use category::{CategoryRules, CourseClass, DrinkClass};
