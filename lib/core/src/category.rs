//! Category membership rules
//!
//! Menu categories are free text, not a closed enum. Classification works on
//! membership lists (exact names) and substring markers, all of which are
//! plain data so a deployment can extend them from configuration.

use crate::Item;
use serde::{Deserialize, Serialize};

/// Broad class of a drink category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrinkClass {
    Wine,
    Beer,
    Whiskey,
    AfterDinner,
}

/// Broad class of a food category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CourseClass {
    Dessert,
    AppetizerOrPizza,
    MainCourse,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| haystack.contains(n.as_str()))
}

fn is_member(category: &str, list: &[String]) -> bool {
    list.iter().any(|c| c == category)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryRules {
    pub wine_categories: Vec<String>,
    pub beer_categories: Vec<String>,
    pub whiskey_categories: Vec<String>,
    pub after_dinner_categories: Vec<String>,
    pub dessert_categories: Vec<String>,
    pub appetizer_pizza_categories: Vec<String>,
    pub main_course_categories: Vec<String>,

    /// Substring marking a cocktail category
    pub cocktail_marker: String,
    /// A by-the-glass wine category mentions one of these
    pub glass_style_markers: Vec<String>,
    /// A by-the-glass wine category mentions none of these
    pub glass_excluded_markers: Vec<String>,
    /// A bottle category mentions one of these
    pub bottle_markers: Vec<String>,

    /// Exact food categories kept out of the pairable food pool
    pub excluded_food_categories: Vec<String>,
    /// Id substrings kept out of the pairable food pool
    pub excluded_food_id_markers: Vec<String>,
    /// Category substrings kept out of the pairable food pool
    pub excluded_food_category_markers: Vec<String>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self {
            wine_categories: strings(&[
                "Italian Reds",
                "Super Tuscan",
                "Merlot & Malbec",
                "Pinot Noir & Interesting Reds",
                "Organic Pinot Noir",
                "Cabernet & Blends",
                "Sauvignon Blanc",
                "Chardonnay",
                "Interesting Whites",
                "Sparkling",
                "Italian Reds Bottles",
                "Super Tuscan Bottles",
                "Merlot & Malbec Bottles",
                "Pinot Noir & Interesting Reds Bottles",
                "Cabernet & Blends Bottles",
                "Sauvignon Blanc Bottles",
                "Chardonnay Bottles",
                "Interesting Whites Bottles",
                "Sparkling Bottles",
                "Half Bottles",
                "Half Bottles - Wine",
            ]),
            beer_categories: strings(&["Draught", "Bottles & Cans", "Non-Alcoholic Beer", "Beer"]),
            whiskey_categories: strings(&["Bourbon", "Rye", "Scotch"]),
            after_dinner_categories: strings(&[
                "Port",
                "Amaro & Digestivo",
                "Coffee Cocktails",
                "Grappa",
                "Cognac",
            ]),
            dessert_categories: strings(&["Desserts", "Gelato", "Sorbetto"]),
            appetizer_pizza_categories: strings(&["Appetizers", "Grilled Pizzas"]),
            main_course_categories: strings(&[
                "Salads",
                "VIA Italian Classics",
                "Beef, Pork & Veal",
                "House Pastas",
                "Seafood",
                "VIA Signature Sandwiches",
                "VIA Lunch Classics",
            ]),
            cocktail_marker: "Cocktails".to_string(),
            glass_style_markers: strings(&["Red", "White", "Rosé", "Rose", "Sparkling"]),
            glass_excluded_markers: strings(&["Bottles", "Half"]),
            bottle_markers: strings(&["Bottles", "Half Bottle"]),
            excluded_food_categories: strings(&["Pasta"]),
            excluded_food_id_markers: strings(&["scoops", "sampler"]),
            excluded_food_category_markers: strings(&[
                "Red",
                "White",
                "Sparkling",
                "Rosé",
                "Port",
                "Amaro",
                "Cocktails",
                "Beer",
                "Bottles",
            ]),
        }
    }
}

impl CategoryRules {
    pub fn is_beer(&self, category: &str) -> bool {
        is_member(category, &self.beer_categories)
    }

    pub fn is_cocktail(&self, category: &str) -> bool {
        !self.cocktail_marker.is_empty() && category.contains(self.cocktail_marker.as_str())
    }

    /// Beers and cocktails never enter the wine pools
    pub fn is_beer_or_cocktail(&self, category: &str) -> bool {
        self.is_beer(category) || self.is_cocktail(category)
    }

    /// Wine-by-the-glass category: a wine style, not a bottle listing
    pub fn is_glass_wine_category(&self, category: &str) -> bool {
        !contains_any(category, &self.glass_excluded_markers)
            && contains_any(category, &self.glass_style_markers)
            && !self.is_beer_or_cocktail(category)
    }

    pub fn is_bottle_category(&self, category: &str) -> bool {
        contains_any(category, &self.bottle_markers)
    }

    pub fn classify_drink(&self, category: &str) -> Option<DrinkClass> {
        if is_member(category, &self.wine_categories) {
            Some(DrinkClass::Wine)
        } else if is_member(category, &self.beer_categories) {
            Some(DrinkClass::Beer)
        } else if is_member(category, &self.whiskey_categories) {
            Some(DrinkClass::Whiskey)
        } else if is_member(category, &self.after_dinner_categories) {
            Some(DrinkClass::AfterDinner)
        } else {
            None
        }
    }

    pub fn classify_course(&self, category: &str) -> Option<CourseClass> {
        if is_member(category, &self.dessert_categories) {
            Some(CourseClass::Dessert)
        } else if is_member(category, &self.appetizer_pizza_categories) {
            Some(CourseClass::AppetizerOrPizza)
        } else if is_member(category, &self.main_course_categories) {
            Some(CourseClass::MainCourse)
        } else {
            None
        }
    }

    /// Whether a menu item belongs to the drink list
    pub fn is_drink(&self, item: &Item) -> bool {
        self.classify_drink(&item.category).is_some()
            || self.is_cocktail(&item.category)
            || self.is_glass_wine_category(&item.category)
            || self.is_bottle_category(&item.category)
    }

    /// Whether a food item may be offered as a pairing for a drink
    pub fn is_pairable_food(&self, item: &Item) -> bool {
        !is_member(&item.category, &self.excluded_food_categories)
            && !contains_any(&item.id, &self.excluded_food_id_markers)
            && !contains_any(&item.category, &self.excluded_food_category_markers)
    }
}
