//! Per-factor pairing scores
//!
//! Each function compares the food-side profile with the drink-side profile
//! on one culinary principle and returns a score in [0.0, 100.0].
//! Absent axes read as 0 unless a function documents another default.

use crate::weights::Factor;
use ahash::AHashSet;
use sommelier_core::{Axis, FlavorProfile};

/// Complementary drink notes for a food note
pub const COMPLEMENTARY_NOTES: &[(&str, &[&str])] = &[
    ("seafood", &["citrus", "mineral", "crisp", "bright"]),
    ("creamy", &["citrus", "oak", "butter", "rich"]),
    ("spicy", &["sweet", "fruity", "off-dry"]),
    ("earthy", &["earthy", "truffle", "mushroom", "complex"]),
    ("fruity", &["fruity", "cherry", "berry"]),
    ("meaty", &["dark-fruit", "oak", "bold", "structured"]),
    ("fresh", &["crisp", "bright", "citrus", "clean"]),
];

/// Food notes (lowercased) that mark a dish as seafood
pub const SEAFOOD_NOTES: &[&str] = &["seafood", "fish", "shellfish", "oyster", "ocean", "briny"];

/// Drink alcohol assumed by spice handling when absent
pub const DEFAULT_DRINK_ALCOHOL: f64 = 5.0;

/// Intensity assumed on either side when absent
pub const DEFAULT_INTENSITY: f64 = 5.0;

/// Complexity assumed on either side when absent
pub const DEFAULT_COMPLEXITY: f64 = 5.0;

/// Score one factor
pub fn factor_score(factor: Factor, food: &FlavorProfile, drink: &FlavorProfile) -> f64 {
    match factor {
        Factor::BodyMatch => body_match(food, drink),
        Factor::AcidityBalance => acidity_balance(food, drink),
        Factor::RichnessBalance => richness_balance(food, drink),
        Factor::SpiceHandling => spice_handling(food, drink),
        Factor::UmamiPairing => umami_pairing(food, drink),
        Factor::SweetnessBalance => sweetness_balance(food, drink),
        Factor::FlavorHarmony => flavor_harmony(food, drink),
        Factor::FatTanninBalance => fat_tannin_balance(food, drink),
        Factor::IntensityMatch => intensity_match(food, drink),
        Factor::OakSmokeHarmony => oak_smoke_harmony(food, drink),
        Factor::MineralitySeafood => minerality_seafood(food, drink),
        Factor::ComplexityBalance => complexity_balance(food, drink),
    }
}

/// Light with light, full with full. Absent body counts as medium.
pub fn body_match(food: &FlavorProfile, drink: &FlavorProfile) -> f64 {
    let diff = food.body_or_medium().weight().abs_diff(drink.body_or_medium().weight());
    match diff {
        0 => 100.0,
        1 => 70.0,
        _ => 40.0,
    }
}

/// High-acid food wants a high-acid drink
pub fn acidity_balance(food: &FlavorProfile, drink: &FlavorProfile) -> f64 {
    let food_acidity = food.level(Axis::Acidity);
    let drink_acidity = drink.level(Axis::Acidity);

    if food_acidity >= 6.0 && drink_acidity >= 7.0 {
        return 100.0;
    }
    if food_acidity >= 6.0 && drink_acidity >= 5.0 {
        return 80.0;
    }
    if food_acidity <= 4.0 {
        return 90.0;
    }
    if food_acidity <= 6.0 {
        return if drink_acidity >= 5.0 { 85.0 } else { 70.0 };
    }
    60.0
}

/// Rich food needs acid, tannin or bubbles to cut through it
pub fn richness_balance(food: &FlavorProfile, drink: &FlavorProfile) -> f64 {
    let food_richness = food.level(Axis::Richness);

    if food_richness >= 7.0 {
        let cut = cutting_power(drink);
        return if cut >= 7.0 {
            100.0
        } else if cut >= 5.0 {
            80.0
        } else {
            50.0
        };
    }

    if (4.0..=6.0).contains(&food_richness) {
        return 85.0;
    }

    if food_richness <= 3.0 && drink.level(Axis::Richness) <= 5.0 {
        return 90.0;
    }

    70.0
}

/// Strongest of the drink's acidity, tannin and carbonation
pub fn cutting_power(drink: &FlavorProfile) -> f64 {
    drink
        .level(Axis::Acidity)
        .max(drink.level(Axis::Tannin))
        .max(drink.level(Axis::Carbonation))
}

/// Spicy food wants sweetness and moderate alcohol
pub fn spice_handling(food: &FlavorProfile, drink: &FlavorProfile) -> f64 {
    let food_spice = food.level(Axis::Spiciness);
    if food_spice == 0.0 {
        return 90.0;
    }

    let drink_sweetness = drink.level(Axis::Sweetness);
    let drink_alcohol = drink.level_or(Axis::Alcohol, DEFAULT_DRINK_ALCOHOL);

    if food_spice >= 4.0 {
        let mut score: f64 = 50.0;
        if drink_sweetness >= 4.0 {
            score += 30.0;
        }
        if drink_alcohol <= 6.0 {
            score += 20.0;
        }
        return score.min(100.0);
    }

    if (1.0..=3.0).contains(&food_spice) {
        return if drink_sweetness >= 2.0 || drink_alcohol <= 7.0 {
            85.0
        } else {
            75.0
        };
    }

    80.0
}

/// Savory food pairs with tannic or savory drinks
pub fn umami_pairing(food: &FlavorProfile, drink: &FlavorProfile) -> f64 {
    let food_umami = food.level(Axis::Umami);
    let drink_umami = drink.level(Axis::Umami);
    let drink_tannin = drink.level(Axis::Tannin);

    if food_umami >= 7.0 {
        if drink_tannin >= 6.0 || drink_umami >= 4.0 {
            return 100.0;
        }
        if drink_tannin >= 4.0 || drink_umami >= 2.0 {
            return 80.0;
        }
        return 60.0;
    }

    if (4.0..=6.0).contains(&food_umami) {
        return if drink_tannin >= 4.0 || drink_umami >= 2.0 {
            90.0
        } else {
            75.0
        };
    }

    85.0
}

/// Sweet food needs a drink at least as sweet
pub fn sweetness_balance(food: &FlavorProfile, drink: &FlavorProfile) -> f64 {
    let food_sweetness = food.level(Axis::Sweetness);
    let drink_sweetness = drink.level(Axis::Sweetness);

    if food_sweetness >= 6.0 {
        if drink_sweetness >= food_sweetness {
            return 100.0;
        }
        if drink_sweetness >= 4.0 {
            return 70.0;
        }
        return 40.0;
    }

    85.0
}

/// Shared and complementary flavor notes.
///
/// A food note found verbatim among the drink notes counts 2, every drink
/// note in the food note's complementary set counts 1. The tally is scaled
/// against two points per food note and offset by 50, capped at 100.
pub fn flavor_harmony(food: &FlavorProfile, drink: &FlavorProfile) -> f64 {
    let food_notes = food.unique_notes();
    let drink_notes = drink.unique_notes();

    if food_notes.is_empty() || drink_notes.is_empty() {
        return 70.0;
    }

    let drink_set: AHashSet<&str> = drink_notes.iter().copied().collect();

    let mut matches = 0usize;
    for food_note in &food_notes {
        if drink_set.contains(*food_note) {
            matches += 2;
        }
        if let Some(complements) = complements_of(food_note) {
            matches += drink_notes
                .iter()
                .filter(|note| complements.iter().any(|c| c == *note))
                .count();
        }
    }

    let max_possible = (food_notes.len() * 2) as f64;
    (matches as f64 / max_possible * 100.0 + 50.0).min(100.0)
}

fn complements_of(food_note: &str) -> Option<&'static [&'static str]> {
    COMPLEMENTARY_NOTES
        .iter()
        .find(|(note, _)| *note == food_note)
        .map(|(_, complements)| *complements)
}

/// First food note (in food order) that the drink shares
pub fn first_shared_note<'a>(food: &'a FlavorProfile, drink: &FlavorProfile) -> Option<&'a str> {
    food.flavor_notes
        .iter()
        .map(String::as_str)
        .find(|note| drink.flavor_notes.iter().any(|d| d.as_str() == *note))
}

/// Fatty food is cut by tannin
pub fn fat_tannin_balance(food: &FlavorProfile, drink: &FlavorProfile) -> f64 {
    let fattiness = food.level(Axis::Fattiness);
    let tannin = drink.level(Axis::Tannin);

    if fattiness == 0.0 {
        return 50.0;
    }
    if fattiness >= 7.0 && tannin >= 6.0 {
        return 100.0;
    }
    if fattiness >= 5.0 && tannin >= 4.0 {
        return 85.0;
    }
    if fattiness >= 7.0 && tannin <= 2.0 {
        return 30.0;
    }
    60.0
}

/// Bold with bold, delicate with delicate. Only whole-step gaps earn partial credit.
pub fn intensity_match(food: &FlavorProfile, drink: &FlavorProfile) -> f64 {
    let diff = (food.level_or(Axis::Intensity, DEFAULT_INTENSITY)
        - drink.level_or(Axis::Intensity, DEFAULT_INTENSITY))
    .abs();

    if diff == 0.0 {
        100.0
    } else if diff == 1.0 {
        90.0
    } else if diff == 2.0 {
        75.0
    } else if diff == 3.0 {
        60.0
    } else {
        40.0
    }
}

/// Smoked or charred food with oaky or smoky drinks
pub fn oak_smoke_harmony(food: &FlavorProfile, drink: &FlavorProfile) -> f64 {
    let food_smoke = food.level(Axis::Smokiness) + food.level(Axis::CharLevel);
    let drink_smoke = drink.level(Axis::Oakiness) + drink.level(Axis::Smokiness);

    if food_smoke >= 6.0 && drink_smoke >= 6.0 {
        return 100.0;
    }
    if food_smoke >= 4.0 && drink_smoke >= 4.0 {
        return 80.0;
    }
    50.0
}

/// Mineral drinks with seafood
pub fn minerality_seafood(food: &FlavorProfile, drink: &FlavorProfile) -> f64 {
    let minerality = drink.level(Axis::Minerality);
    let is_seafood = food
        .flavor_notes
        .iter()
        .any(|note| {
            let lowered = note.to_lowercase();
            SEAFOOD_NOTES.iter().any(|seafood| *seafood == lowered)
        });

    if is_seafood && minerality >= 7.0 {
        return 100.0;
    }
    if is_seafood && minerality >= 4.0 {
        return 80.0;
    }
    50.0
}

/// Simple food can be overwhelmed by a complex drink, and vice versa
pub fn complexity_balance(food: &FlavorProfile, drink: &FlavorProfile) -> f64 {
    let diff = (food.level_or(Axis::Complexity, DEFAULT_COMPLEXITY)
        - drink.level_or(Axis::Complexity, DEFAULT_COMPLEXITY))
    .abs();

    if diff == 0.0 {
        100.0
    } else if diff == 1.0 {
        85.0
    } else if diff == 2.0 {
        70.0
    } else {
        50.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sommelier_core::Body;

    fn profile() -> FlavorProfile {
        FlavorProfile::new()
    }

    #[test]
    fn test_body_match() {
        let full = profile().with_body(Body::Full);
        let light = profile().with_body(Body::Light);
        let medium = profile().with_body(Body::Medium);

        assert_eq!(body_match(&full, &full), 100.0);
        assert_eq!(body_match(&full, &medium), 70.0);
        assert_eq!(body_match(&full, &light), 40.0);
        // Absent body defaults to medium on both sides
        assert_eq!(body_match(&profile(), &profile()), 100.0);
        assert_eq!(body_match(&profile(), &light), 70.0);
    }

    #[test]
    fn test_acidity_balance() {
        let food = |a| profile().with(Axis::Acidity, a);
        let drink = |a| profile().with(Axis::Acidity, a);

        assert_eq!(acidity_balance(&food(7.0), &drink(8.0)), 100.0);
        assert_eq!(acidity_balance(&food(6.0), &drink(5.0)), 80.0);
        assert_eq!(acidity_balance(&food(3.0), &drink(1.0)), 90.0);
        assert_eq!(acidity_balance(&profile(), &profile()), 90.0);
        assert_eq!(acidity_balance(&food(5.0), &drink(5.0)), 85.0);
        assert_eq!(acidity_balance(&food(5.0), &drink(4.0)), 70.0);
        assert_eq!(acidity_balance(&food(6.0), &drink(2.0)), 70.0);
        assert_eq!(acidity_balance(&food(8.0), &drink(3.0)), 60.0);
    }

    #[test]
    fn test_richness_balance() {
        let rich = profile().with(Axis::Richness, 8.0);
        let tannic = profile().with(Axis::Acidity, 8.0).with(Axis::Tannin, 9.0);
        let bubbly = profile().with(Axis::Carbonation, 5.0);

        assert_eq!(richness_balance(&rich, &tannic), 100.0);
        assert_eq!(richness_balance(&rich, &bubbly), 80.0);
        assert_eq!(richness_balance(&rich, &profile()), 50.0);
        assert_eq!(richness_balance(&profile().with(Axis::Richness, 5.0), &profile()), 85.0);
        assert_eq!(richness_balance(&profile(), &profile().with(Axis::Richness, 5.0)), 90.0);
        assert_eq!(richness_balance(&profile(), &profile().with(Axis::Richness, 7.0)), 70.0);
        assert_eq!(richness_balance(&profile().with(Axis::Richness, 6.5), &profile()), 70.0);
        assert_eq!(cutting_power(&tannic), 9.0);
    }

    #[test]
    fn test_spice_handling() {
        let spicy = profile().with(Axis::Spiciness, 5.0);
        let dry_hot = profile().with(Axis::Sweetness, 0.0).with(Axis::Alcohol, 9.0);
        let off_dry_light = profile().with(Axis::Sweetness, 4.0).with(Axis::Alcohol, 5.5);

        assert_eq!(spice_handling(&profile(), &dry_hot), 90.0);
        assert_eq!(spice_handling(&spicy, &dry_hot), 50.0);
        assert_eq!(spice_handling(&spicy, &off_dry_light), 100.0);
        // Absent alcohol reads as 5, which earns the low-alcohol bonus
        assert_eq!(spice_handling(&spicy, &profile()), 70.0);

        let mild = profile().with(Axis::Spiciness, 2.0);
        assert_eq!(spice_handling(&mild, &dry_hot), 75.0);
        assert_eq!(spice_handling(&mild, &profile().with(Axis::Alcohol, 7.0)), 85.0);
        assert_eq!(spice_handling(&profile().with(Axis::Spiciness, 3.5), &dry_hot), 80.0);
    }

    #[test]
    fn test_umami_pairing() {
        let savory = profile().with(Axis::Umami, 7.0);
        assert_eq!(umami_pairing(&savory, &profile().with(Axis::Tannin, 6.0)), 100.0);
        assert_eq!(umami_pairing(&savory, &profile().with(Axis::Umami, 2.0)), 80.0);
        assert_eq!(umami_pairing(&savory, &profile()), 60.0);

        let medium = profile().with(Axis::Umami, 5.0);
        assert_eq!(umami_pairing(&medium, &profile().with(Axis::Tannin, 4.0)), 90.0);
        assert_eq!(umami_pairing(&medium, &profile()), 75.0);
        assert_eq!(umami_pairing(&profile(), &profile()), 85.0);
    }

    #[test]
    fn test_sweetness_balance() {
        let dessert = profile().with(Axis::Sweetness, 8.0);
        assert_eq!(sweetness_balance(&dessert, &profile().with(Axis::Sweetness, 9.0)), 100.0);
        assert_eq!(sweetness_balance(&dessert, &profile().with(Axis::Sweetness, 5.0)), 70.0);
        assert_eq!(sweetness_balance(&dessert, &profile()), 40.0);
        assert_eq!(sweetness_balance(&profile(), &profile()), 85.0);
    }

    #[test]
    fn test_flavor_harmony() {
        let seafood = profile().with_notes(["seafood", "fresh"]);
        let crisp = profile().with_notes(["citrus", "crisp", "mineral"]);
        // seafood: citrus+crisp+mineral = 3, fresh: crisp+citrus = 2 -> 5/4*100+50 capped
        assert_eq!(flavor_harmony(&seafood, &crisp), 100.0);

        let earthy = profile().with_notes(["earthy", "savory"]);
        let cherry = profile().with_notes(["cherry"]);
        assert_eq!(flavor_harmony(&earthy, &cherry), 50.0);

        let shared = profile().with_notes(["earthy", "savory"]);
        let earthy_wine = profile().with_notes(["earthy"]);
        // exact 2 + complementary 1 = 3 -> 3/4*100+50 = 125 capped
        assert_eq!(flavor_harmony(&shared, &earthy_wine), 100.0);

        let single = profile().with_notes(["meaty", "smoky", "charred", "salty"]);
        let bold = profile().with_notes(["bold"]);
        assert_eq!(flavor_harmony(&single, &bold), 1.0 / 8.0 * 100.0 + 50.0);

        assert_eq!(flavor_harmony(&profile(), &crisp), 70.0);
        assert_eq!(flavor_harmony(&seafood, &profile()), 70.0);
    }

    #[test]
    fn test_flavor_harmony_ignores_duplicates() {
        let food = profile().with_notes(["creamy", "creamy"]);
        let drink = profile().with_notes(["oak", "oak"]);
        assert_eq!(flavor_harmony(&food, &drink), 100.0 * 1.0 / 2.0 + 50.0);
    }

    #[test]
    fn test_first_shared_note() {
        let food = profile().with_notes(["smoky", "earthy", "citrus"]);
        let drink = profile().with_notes(["citrus", "earthy"]);
        assert_eq!(first_shared_note(&food, &drink), Some("earthy"));
        assert_eq!(first_shared_note(&food, &profile()), None);
    }

    #[test]
    fn test_fat_tannin_balance() {
        let fatty = profile().with(Axis::Fattiness, 8.0);
        assert_eq!(fat_tannin_balance(&profile(), &profile()), 50.0);
        assert_eq!(fat_tannin_balance(&fatty, &profile().with(Axis::Tannin, 7.0)), 100.0);
        assert_eq!(fat_tannin_balance(&fatty, &profile().with(Axis::Tannin, 4.0)), 85.0);
        assert_eq!(fat_tannin_balance(&fatty, &profile()), 30.0);
        assert_eq!(fat_tannin_balance(&profile().with(Axis::Fattiness, 3.0), &profile()), 60.0);
    }

    #[test]
    fn test_intensity_match() {
        let bold = profile().with(Axis::Intensity, 8.0);
        assert_eq!(intensity_match(&profile(), &profile()), 100.0);
        assert_eq!(intensity_match(&bold, &profile().with(Axis::Intensity, 7.0)), 90.0);
        assert_eq!(intensity_match(&bold, &profile().with(Axis::Intensity, 6.0)), 75.0);
        assert_eq!(intensity_match(&bold, &profile()), 60.0);
        assert_eq!(intensity_match(&bold, &profile().with(Axis::Intensity, 2.0)), 40.0);
        assert_eq!(intensity_match(&bold, &profile().with(Axis::Intensity, 7.5)), 40.0);
    }

    #[test]
    fn test_oak_smoke_harmony() {
        let charred = profile().with(Axis::Smokiness, 3.0).with(Axis::CharLevel, 3.0);
        let oaky = profile().with(Axis::Oakiness, 6.0);
        let light_oak = profile().with(Axis::Oakiness, 4.0);
        assert_eq!(oak_smoke_harmony(&charred, &oaky), 100.0);
        assert_eq!(oak_smoke_harmony(&charred, &light_oak), 80.0);
        assert_eq!(oak_smoke_harmony(&profile(), &oaky), 50.0);
    }

    #[test]
    fn test_minerality_seafood() {
        let oysters = profile().with_notes(["Briny", "fresh"]);
        assert_eq!(minerality_seafood(&oysters, &profile().with(Axis::Minerality, 8.0)), 100.0);
        assert_eq!(minerality_seafood(&oysters, &profile().with(Axis::Minerality, 5.0)), 80.0);
        assert_eq!(minerality_seafood(&oysters, &profile()), 50.0);
        assert_eq!(
            minerality_seafood(&profile(), &profile().with(Axis::Minerality, 9.0)),
            50.0
        );
    }

    #[test]
    fn test_complexity_balance() {
        let complex = profile().with(Axis::Complexity, 8.0);
        assert_eq!(complexity_balance(&profile(), &profile()), 100.0);
        assert_eq!(complexity_balance(&complex, &profile().with(Axis::Complexity, 7.0)), 85.0);
        assert_eq!(complexity_balance(&complex, &profile().with(Axis::Complexity, 6.0)), 70.0);
        assert_eq!(complexity_balance(&complex, &profile()), 50.0);
    }

    #[test]
    fn test_factor_scores_in_range() {
        let values = [0.0, 1.0, 3.0, 4.0, 5.5, 6.0, 7.0, 10.0, 14.0];
        for &a in &values {
            for &b in &values {
                let food = profile()
                    .with(Axis::Acidity, a)
                    .with(Axis::Richness, a)
                    .with(Axis::Spiciness, a)
                    .with(Axis::Umami, a)
                    .with(Axis::Sweetness, a)
                    .with(Axis::Fattiness, a)
                    .with_notes(["seafood", "earthy"]);
                let drink = profile()
                    .with(Axis::Acidity, b)
                    .with(Axis::Tannin, b)
                    .with(Axis::Sweetness, b)
                    .with(Axis::Alcohol, b)
                    .with(Axis::Minerality, b)
                    .with_notes(["earthy", "citrus"]);
                for factor in Factor::ALL {
                    let score = factor_score(factor, &food, &drink);
                    assert!((0.0..=100.0).contains(&score), "{} out of range: {}", factor, score);
                }
            }
        }
    }
}
