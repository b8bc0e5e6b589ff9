//! Flavor profile data model
//!
//! Every scorable menu item (food or drink) may carry a [`FlavorProfile`].
//! Numeric axes are nominally on a 0-10 scale but no upper bound is enforced.
//! Every axis is optional: the scorer substitutes its own per-factor default
//! when an axis is absent, so the model itself never rejects sparse data.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Perceived weight of an item on the palate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Light,
    Medium,
    Full,
}

impl Body {
    /// Ordinal weight used by body matching (light=1, medium=2, full=3)
    pub fn weight(self) -> u8 {
        match self {
            Body::Light => 1,
            Body::Medium => 2,
            Body::Full => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Body::Light => "light",
            Body::Medium => "medium",
            Body::Full => "full",
        }
    }

    /// Parse a body label, case-insensitively. Unknown labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Body::Light),
            "medium" => Some(Body::Medium),
            "full" => Some(Body::Full),
            _ => None,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric flavor axis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    Sweetness,
    Acidity,
    Bitterness,
    Richness,
    Spiciness,
    Umami,
    Tannin,
    Alcohol,
    Carbonation,
    Saltiness,
    Minerality,
    Fruitiness,
    Oakiness,
    Fattiness,
    Intensity,
    Smokiness,
    CharLevel,
    Complexity,
}

impl Axis {
    pub const ALL: [Axis; 18] = [
        Axis::Sweetness,
        Axis::Acidity,
        Axis::Bitterness,
        Axis::Richness,
        Axis::Spiciness,
        Axis::Umami,
        Axis::Tannin,
        Axis::Alcohol,
        Axis::Carbonation,
        Axis::Saltiness,
        Axis::Minerality,
        Axis::Fruitiness,
        Axis::Oakiness,
        Axis::Fattiness,
        Axis::Intensity,
        Axis::Smokiness,
        Axis::CharLevel,
        Axis::Complexity,
    ];
}

/// Multi-dimensional flavor description of a food or drink
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlavorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweetness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitterness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub richness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spiciness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umami: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tannin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alcohol: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbonation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saltiness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minerality: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fruitiness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oakiness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fattiness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smokiness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<f64>,

    /// Body; unrecognised labels deserialize as absent
    #[serde(
        default,
        deserialize_with = "deserialize_body",
        skip_serializing_if = "Option::is_none"
    )]
    pub body: Option<Body>,

    /// Free-text tags such as "citrus" or "earthy"
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub flavor_notes: Vec<String>,
}

fn deserialize_body<'de, D>(deserializer: D) -> Result<Option<Body>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Body::parse))
}

/// Deserialize an explicit `null` as the type's default
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl FlavorProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of an axis, `None` when the axis is absent
    pub fn axis(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Sweetness => self.sweetness,
            Axis::Acidity => self.acidity,
            Axis::Bitterness => self.bitterness,
            Axis::Richness => self.richness,
            Axis::Spiciness => self.spiciness,
            Axis::Umami => self.umami,
            Axis::Tannin => self.tannin,
            Axis::Alcohol => self.alcohol,
            Axis::Carbonation => self.carbonation,
            Axis::Saltiness => self.saltiness,
            Axis::Minerality => self.minerality,
            Axis::Fruitiness => self.fruitiness,
            Axis::Oakiness => self.oakiness,
            Axis::Fattiness => self.fattiness,
            Axis::Intensity => self.intensity,
            Axis::Smokiness => self.smokiness,
            Axis::CharLevel => self.char_level,
            Axis::Complexity => self.complexity,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut Option<f64> {
        match axis {
            Axis::Sweetness => &mut self.sweetness,
            Axis::Acidity => &mut self.acidity,
            Axis::Bitterness => &mut self.bitterness,
            Axis::Richness => &mut self.richness,
            Axis::Spiciness => &mut self.spiciness,
            Axis::Umami => &mut self.umami,
            Axis::Tannin => &mut self.tannin,
            Axis::Alcohol => &mut self.alcohol,
            Axis::Carbonation => &mut self.carbonation,
            Axis::Saltiness => &mut self.saltiness,
            Axis::Minerality => &mut self.minerality,
            Axis::Fruitiness => &mut self.fruitiness,
            Axis::Oakiness => &mut self.oakiness,
            Axis::Fattiness => &mut self.fattiness,
            Axis::Intensity => &mut self.intensity,
            Axis::Smokiness => &mut self.smokiness,
            Axis::CharLevel => &mut self.char_level,
            Axis::Complexity => &mut self.complexity,
        }
    }

    /// Axis value with absent treated as 0
    #[inline]
    pub fn level(&self, axis: Axis) -> f64 {
        self.axis(axis).unwrap_or(0.0)
    }

    /// Axis value where absent or zero falls back to `default`
    #[inline]
    pub fn level_or(&self, axis: Axis, default: f64) -> f64 {
        match self.axis(axis) {
            Some(v) if v != 0.0 => v,
            _ => default,
        }
    }

    /// Body with absent treated as medium
    #[inline]
    pub fn body_or_medium(&self) -> Body {
        self.body.unwrap_or(Body::Medium)
    }

    /// Flavor notes with duplicates removed, first occurrence order kept
    pub fn unique_notes(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.flavor_notes.len());
        for note in &self.flavor_notes {
            if !seen.contains(&note.as_str()) {
                seen.push(note.as_str());
            }
        }
        seen
    }

    #[must_use]
    pub fn with(mut self, axis: Axis, value: f64) -> Self {
        *self.axis_mut(axis) = Some(value);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_notes<I, S>(mut self, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flavor_notes = notes.into_iter().map(Into::into).collect();
        self
    }
}
