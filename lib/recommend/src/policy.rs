//! Preference policy
//!
//! A caller-owned value describing which characteristics to boost, which to
//! exclude, the accepted price range and the minimum score.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Characteristic that earns a score boost
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PreferenceKey {
    Italian,
    French,
    California,
    Champagne,
    Red,
    White,
    #[serde(rename = "rosé", alias = "rose")]
    Rose,
    FullBody,
    LightBody,
    HighAcidity,
    LowTannin,
    Mineral,
    Fruity,
    Oaky,
    Crisp,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 15] = [
        PreferenceKey::Italian,
        PreferenceKey::French,
        PreferenceKey::California,
        PreferenceKey::Champagne,
        PreferenceKey::Red,
        PreferenceKey::White,
        PreferenceKey::Rose,
        PreferenceKey::FullBody,
        PreferenceKey::LightBody,
        PreferenceKey::HighAcidity,
        PreferenceKey::LowTannin,
        PreferenceKey::Mineral,
        PreferenceKey::Fruity,
        PreferenceKey::Oaky,
        PreferenceKey::Crisp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PreferenceKey::Italian => "italian",
            PreferenceKey::French => "french",
            PreferenceKey::California => "california",
            PreferenceKey::Champagne => "champagne",
            PreferenceKey::Red => "red",
            PreferenceKey::White => "white",
            PreferenceKey::Rose => "rosé",
            PreferenceKey::FullBody => "fullBody",
            PreferenceKey::LightBody => "lightBody",
            PreferenceKey::HighAcidity => "highAcidity",
            PreferenceKey::LowTannin => "lowTannin",
            PreferenceKey::Mineral => "mineral",
            PreferenceKey::Fruity => "fruity",
            PreferenceKey::Oaky => "oaky",
            PreferenceKey::Crisp => "crisp",
        }
    }
}

/// Characteristic that removes a pairing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ExclusionKey {
    Red,
    White,
    Sparkling,
    SweetWines,
    HighAlcohol,
    Tannic,
    Oaky,
    Expensive,
    Bottles,
    ByGlass,
}

impl ExclusionKey {
    pub const ALL: [ExclusionKey; 10] = [
        ExclusionKey::Red,
        ExclusionKey::White,
        ExclusionKey::Sparkling,
        ExclusionKey::SweetWines,
        ExclusionKey::HighAlcohol,
        ExclusionKey::Tannic,
        ExclusionKey::Oaky,
        ExclusionKey::Expensive,
        ExclusionKey::Bottles,
        ExclusionKey::ByGlass,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExclusionKey::Red => "red",
            ExclusionKey::White => "white",
            ExclusionKey::Sparkling => "sparkling",
            ExclusionKey::SweetWines => "sweetWines",
            ExclusionKey::HighAlcohol => "highAlcohol",
            ExclusionKey::Tannic => "tannic",
            ExclusionKey::Oaky => "oaky",
            ExclusionKey::Expensive => "expensive",
            ExclusionKey::Bottles => "bottles",
            ExclusionKey::ByGlass => "byGlass",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ExclusionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A preference or exclusion name that is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} key '{key}'")]
pub struct UnknownKey {
    pub kind: &'static str,
    pub key: String,
}

fn parse_key<K: Copy>(raw: &str, all: &[K], name: impl Fn(K) -> &'static str, kind: &'static str) -> Result<K, UnknownKey> {
    let wanted = raw.trim();
    all.iter()
        .copied()
        .find(|k| name(*k).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| UnknownKey {
            kind,
            key: raw.to_string(),
        })
}

impl FromStr for PreferenceKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("rose") {
            return Ok(PreferenceKey::Rose);
        }
        parse_key(s, &PreferenceKey::ALL, PreferenceKey::name, "preference")
    }
}

impl FromStr for ExclusionKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s, &ExclusionKey::ALL, ExclusionKey::name, "exclusion")
    }
}

/// Inclusive price bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1000.0 }
    }
}

impl PriceRange {
    #[inline]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// User pairing preferences.
///
/// Only keys mapped to `true` are active.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferencePolicy {
    pub prefer: BTreeMap<PreferenceKey, bool>,
    pub exclude: BTreeMap<ExclusionKey, bool>,
    pub price_range: PriceRange,
    pub min_score: u8,
}

/// Empty prefer/exclude, price range 0-1000, no minimum score
pub fn default_preferences() -> PreferencePolicy {
    PreferencePolicy::default()
}

impl PreferencePolicy {
    #[must_use]
    pub fn with_preference(mut self, key: PreferenceKey) -> Self {
        self.prefer.insert(key, true);
        self
    }

    #[must_use]
    pub fn with_exclusion(mut self, key: ExclusionKey) -> Self {
        self.exclude.insert(key, true);
        self
    }

    #[must_use]
    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = PriceRange { min, max };
        self
    }

    #[must_use]
    pub fn with_min_score(mut self, min_score: u8) -> Self {
        self.min_score = min_score;
        self
    }

    /// Flip one preference on or off, returning the new state
    pub fn toggle_preference(&mut self, key: PreferenceKey) -> bool {
        let enabled = !self.prefers(key);
        if enabled {
            self.prefer.insert(key, true);
        } else {
            self.prefer.remove(&key);
        }
        enabled
    }

    /// Flip one exclusion on or off, returning the new state
    pub fn toggle_exclusion(&mut self, key: ExclusionKey) -> bool {
        let enabled = !self.excludes(key);
        if enabled {
            self.exclude.insert(key, true);
        } else {
            self.exclude.remove(&key);
        }
        enabled
    }

    pub fn prefers(&self, key: PreferenceKey) -> bool {
        self.prefer.get(&key).copied().unwrap_or(false)
    }

    pub fn excludes(&self, key: ExclusionKey) -> bool {
        self.exclude.get(&key).copied().unwrap_or(false)
    }

    pub fn active_preferences(&self) -> impl Iterator<Item = PreferenceKey> + '_ {
        self.prefer.iter().filter(|(_, on)| **on).map(|(k, _)| *k)
    }

    pub fn active_exclusions(&self) -> impl Iterator<Item = ExclusionKey> + '_ {
        self.exclude.iter().filter(|(_, on)| **on).map(|(k, _)| *k)
    }

    /// True when applying the policy cannot change a result list
    pub fn is_default(&self) -> bool {
        self.active_preferences().next().is_none()
            && self.active_exclusions().next().is_none()
            && self.price_range == PriceRange::default()
            && self.min_score == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_preferences() {
        let policy = default_preferences();
        assert!(policy.prefer.is_empty());
        assert!(policy.exclude.is_empty());
        assert_eq!(policy.price_range, PriceRange { min: 0.0, max: 1000.0 });
        assert_eq!(policy.min_score, 0);
        assert!(policy.is_default());
    }

    #[test]
    fn test_toggle() {
        let mut policy = PreferencePolicy::default();
        assert!(policy.toggle_preference(PreferenceKey::Italian));
        assert!(policy.prefers(PreferenceKey::Italian));
        assert!(!policy.is_default());
        assert!(!policy.toggle_preference(PreferenceKey::Italian));
        assert!(!policy.prefers(PreferenceKey::Italian));
        assert!(policy.is_default());

        assert!(policy.toggle_exclusion(ExclusionKey::ByGlass));
        assert_eq!(policy.active_exclusions().collect::<Vec<_>>(), vec![ExclusionKey::ByGlass]);
    }

    #[test]
    fn test_false_keys_are_inactive() {
        let policy: PreferencePolicy = serde_json::from_value(json!({
            "prefer": { "italian": false },
            "exclude": { "red": false }
        }))
        .unwrap();
        assert!(!policy.prefers(PreferenceKey::Italian));
        assert!(policy.is_default());
    }

    #[test]
    fn test_json_shape() {
        let policy: PreferencePolicy = serde_json::from_value(json!({
            "prefer": { "rosé": true, "fullBody": true },
            "exclude": { "sweetWines": true },
            "priceRange": { "min": 10, "max": 80 },
            "minScore": 70
        }))
        .unwrap();

        assert!(policy.prefers(PreferenceKey::Rose));
        assert!(policy.prefers(PreferenceKey::FullBody));
        assert!(policy.excludes(ExclusionKey::SweetWines));
        assert!(policy.price_range.contains(80.0));
        assert!(!policy.price_range.contains(80.5));
        assert_eq!(policy.min_score, 70);

        let value = serde_json::to_value(&policy).unwrap();
        assert_eq!(value["prefer"]["rosé"], json!(true));
        assert_eq!(value["priceRange"]["max"], json!(80.0));
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!("highAcidity".parse::<PreferenceKey>().unwrap(), PreferenceKey::HighAcidity);
        assert_eq!("HIGHACIDITY".parse::<PreferenceKey>().unwrap(), PreferenceKey::HighAcidity);
        assert_eq!("rose".parse::<PreferenceKey>().unwrap(), PreferenceKey::Rose);
        assert_eq!("rosé".parse::<PreferenceKey>().unwrap(), PreferenceKey::Rose);
        assert_eq!(" byGlass ".parse::<ExclusionKey>().unwrap(), ExclusionKey::ByGlass);

        let err = "spicy".parse::<ExclusionKey>().unwrap_err();
        assert_eq!(err.to_string(), "unknown exclusion key 'spicy'");
    }
}
