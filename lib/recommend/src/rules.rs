//! Exclusion and boost rule tables
//!
//! Each preference or exclusion key maps to a [`Predicate`] over the
//! candidate item and its flavor profile. The tables are plain data: the
//! substring lists and thresholds can be replaced from configuration.

use crate::policy::{ExclusionKey, PreferenceKey};
use serde::{Deserialize, Serialize};
use sommelier_core::{Axis, Body, FlavorProfile, Item};

/// Free-text item field a predicate can search
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    Category,
    Description,
    Region,
    Name,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Comparison {
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Comparison {
    #[inline]
    pub fn holds(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Comparison::Gt => lhs > rhs,
            Comparison::Gte => lhs >= rhs,
            Comparison::Lt => lhs < rhs,
            Comparison::Lte => lhs <= rhs,
        }
    }
}

/// Boolean rule over a candidate item and its flavor profile.
///
/// Absent data never matches a leaf: a missing field contains nothing, and
/// a missing axis or price satisfies no comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Predicate {
    TextContains {
        field: TextField,
        #[serde(rename = "anyOf")]
        any_of: Vec<String>,
        #[serde(default, rename = "caseSensitive")]
        case_sensitive: bool,
    },
    AxisCompare {
        axis: Axis,
        op: Comparison,
        value: f64,
    },
    BodyIs {
        body: Body,
    },
    PriceCompare {
        op: Comparison,
        value: f64,
    },
    Any {
        of: Vec<Predicate>,
    },
    All {
        of: Vec<Predicate>,
    },
    Not {
        predicate: Box<Predicate>,
    },
}

fn text_field<'a>(item: &'a Item, field: TextField) -> Option<&'a str> {
    match field {
        TextField::Category => Some(item.category.as_str()),
        TextField::Description => item.description.as_deref(),
        TextField::Region => item.region.as_deref(),
        TextField::Name => Some(item.name.as_str()),
    }
}

impl Predicate {
    /// Case-insensitive substring match on one field
    pub fn contains(field: TextField, any_of: &[&str]) -> Self {
        Predicate::TextContains {
            field,
            any_of: any_of.iter().map(|s| s.to_string()).collect(),
            case_sensitive: false,
        }
    }

    /// Case-sensitive substring match on one field
    pub fn contains_exact(field: TextField, any_of: &[&str]) -> Self {
        Predicate::TextContains {
            field,
            any_of: any_of.iter().map(|s| s.to_string()).collect(),
            case_sensitive: true,
        }
    }

    pub fn axis(axis: Axis, op: Comparison, value: f64) -> Self {
        Predicate::AxisCompare { axis, op, value }
    }

    pub fn price(op: Comparison, value: f64) -> Self {
        Predicate::PriceCompare { op, value }
    }

    pub fn body(body: Body) -> Self {
        Predicate::BodyIs { body }
    }

    pub fn any(of: Vec<Predicate>) -> Self {
        Predicate::Any { of }
    }

    pub fn all(of: Vec<Predicate>) -> Self {
        Predicate::All { of }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(predicate: Predicate) -> Self {
        Predicate::Not {
            predicate: Box::new(predicate),
        }
    }

    pub fn matches(&self, item: &Item, profile: &FlavorProfile) -> bool {
        match self {
            Predicate::TextContains {
                field,
                any_of,
                case_sensitive,
            } => {
                let Some(text) = text_field(item, *field) else {
                    return false;
                };
                if *case_sensitive {
                    any_of.iter().any(|needle| text.contains(needle.as_str()))
                } else {
                    let text = text.to_lowercase();
                    any_of
                        .iter()
                        .any(|needle| text.contains(needle.to_lowercase().as_str()))
                }
            }
            Predicate::AxisCompare { axis, op, value } => profile
                .axis(*axis)
                .map(|level| op.holds(level, *value))
                .unwrap_or(false),
            Predicate::BodyIs { body } => profile.body == Some(*body),
            Predicate::PriceCompare { op, value } => item.price_matches(|price| op.holds(price, *value)),
            Predicate::Any { of } => of.iter().any(|p| p.matches(item, profile)),
            Predicate::All { of } => of.iter().all(|p| p.matches(item, profile)),
            Predicate::Not { predicate } => !predicate.matches(item, profile),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExclusionRule {
    pub key: ExclusionKey,
    pub predicate: Predicate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoostRule {
    pub key: PreferenceKey,
    pub predicate: Predicate,
    /// Points added to the score when the rule matches
    pub points: u32,
}

/// The full exclusion and boost tables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PreferenceRules {
    pub exclusions: Vec<ExclusionRule>,
    pub boosts: Vec<BoostRule>,
}

fn red_wine() -> Predicate {
    Predicate::any(vec![
        Predicate::contains(TextField::Category, &["red"]),
        Predicate::axis(Axis::Tannin, Comparison::Gt, 0.0),
    ])
}

fn white_wine() -> Predicate {
    Predicate::contains(TextField::Category, &["white", "chardonnay", "sauvignon blanc"])
}

fn bottle_listing() -> Predicate {
    Predicate::contains_exact(TextField::Category, &["Bottles"])
}

impl Default for PreferenceRules {
    fn default() -> Self {
        use Comparison::*;

        let exclusions = vec![
            ExclusionRule {
                key: ExclusionKey::Red,
                predicate: red_wine(),
            },
            ExclusionRule {
                key: ExclusionKey::White,
                predicate: white_wine(),
            },
            ExclusionRule {
                key: ExclusionKey::Sparkling,
                predicate: Predicate::any(vec![
                    Predicate::contains(TextField::Category, &["sparkling", "champagne", "prosecco"]),
                    Predicate::axis(Axis::Carbonation, Gt, 5.0),
                ]),
            },
            ExclusionRule {
                key: ExclusionKey::SweetWines,
                predicate: Predicate::axis(Axis::Sweetness, Gte, 5.0),
            },
            ExclusionRule {
                key: ExclusionKey::HighAlcohol,
                predicate: Predicate::axis(Axis::Alcohol, Gt, 7.0),
            },
            ExclusionRule {
                key: ExclusionKey::Tannic,
                predicate: Predicate::axis(Axis::Tannin, Gte, 7.0),
            },
            ExclusionRule {
                key: ExclusionKey::Oaky,
                predicate: Predicate::axis(Axis::Oakiness, Gte, 7.0),
            },
            ExclusionRule {
                key: ExclusionKey::Expensive,
                predicate: Predicate::price(Gte, 100.0),
            },
            ExclusionRule {
                key: ExclusionKey::Bottles,
                predicate: Predicate::any(vec![bottle_listing(), Predicate::price(Gte, 30.0)]),
            },
            ExclusionRule {
                key: ExclusionKey::ByGlass,
                predicate: Predicate::all(vec![
                    Predicate::not(bottle_listing()),
                    Predicate::price(Lt, 30.0),
                ]),
            },
        ];

        let boost = |key, predicate, points| BoostRule { key, predicate, points };
        let boosts = vec![
            boost(
                PreferenceKey::Italian,
                Predicate::any(vec![
                    Predicate::contains(
                        TextField::Description,
                        &["italian", "italy", "tuscany", "piemonte", "sicily"],
                    ),
                    Predicate::contains_exact(TextField::Category, &["Italian"]),
                ]),
                10,
            ),
            boost(
                PreferenceKey::French,
                Predicate::contains(
                    TextField::Description,
                    &["france", "french", "bordeaux", "burgundy", "champagne", "loire"],
                ),
                10,
            ),
            boost(
                PreferenceKey::California,
                Predicate::contains(
                    TextField::Description,
                    &["california", "napa", "sonoma", "paso robles"],
                ),
                10,
            ),
            boost(
                PreferenceKey::Champagne,
                Predicate::any(vec![
                    Predicate::contains(TextField::Category, &["sparkling", "champagne"]),
                    Predicate::axis(Axis::Carbonation, Gt, 5.0),
                ]),
                10,
            ),
            boost(PreferenceKey::Red, red_wine(), 8),
            boost(PreferenceKey::White, white_wine(), 8),
            boost(
                PreferenceKey::Rose,
                Predicate::contains(TextField::Category, &["rosé", "rose"]),
                8,
            ),
            boost(PreferenceKey::FullBody, Predicate::body(Body::Full), 8),
            boost(PreferenceKey::LightBody, Predicate::body(Body::Light), 8),
            boost(PreferenceKey::HighAcidity, Predicate::axis(Axis::Acidity, Gte, 7.0), 6),
            boost(PreferenceKey::LowTannin, Predicate::axis(Axis::Tannin, Lte, 3.0), 6),
            boost(PreferenceKey::Mineral, Predicate::axis(Axis::Minerality, Gte, 6.0), 8),
            boost(PreferenceKey::Fruity, Predicate::axis(Axis::Fruitiness, Gte, 7.0), 6),
            boost(PreferenceKey::Oaky, Predicate::axis(Axis::Oakiness, Gte, 6.0), 6),
            boost(
                PreferenceKey::Crisp,
                Predicate::all(vec![
                    Predicate::axis(Axis::Acidity, Gte, 7.0),
                    Predicate::axis(Axis::Richness, Lte, 4.0),
                ]),
                6,
            ),
        ];

        Self { exclusions, boosts }
    }
}

impl PreferenceRules {
    /// Whether any rule for an active exclusion key matches
    pub fn is_excluded<I>(&self, item: &Item, profile: &FlavorProfile, active: I) -> bool
    where
        I: IntoIterator<Item = ExclusionKey>,
    {
        active.into_iter().any(|key| {
            self.exclusions
                .iter()
                .filter(|rule| rule.key == key)
                .any(|rule| rule.predicate.matches(item, profile))
        })
    }

    /// Sum of points from every matching rule of an active preference key
    pub fn boost<I>(&self, item: &Item, profile: &FlavorProfile, active: I) -> u32
    where
        I: IntoIterator<Item = PreferenceKey>,
    {
        active
            .into_iter()
            .map(|key| {
                self.boosts
                    .iter()
                    .filter(|rule| rule.key == key && rule.predicate.matches(item, profile))
                    .map(|rule| rule.points)
                    .fold(0u32, u32::saturating_add)
            })
            .fold(0u32, u32::saturating_add)
    }
}
