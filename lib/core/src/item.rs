use crate::profile::{null_as_default, FlavorProfile};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::warn;

/// A menu item - food or drink - as supplied by the menu data loaders
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-text menu category ("Italian Reds Bottles", "Seafood", ...). Empty when unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Items without a profile never take part in pairing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_profile: Option<FlavorProfile>,
}

impl Item {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_profile(mut self, profile: FlavorProfile) -> Self {
        self.flavor_profile = Some(profile);
        self
    }

    #[inline]
    pub fn has_profile(&self) -> bool {
        self.flavor_profile.is_some()
    }

    /// Price as used by range filters: absent counts as 0
    #[inline]
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Whether the price satisfies `pred`; absent prices never do
    #[inline]
    pub fn price_matches(&self, pred: impl FnOnce(f64) -> bool) -> bool {
        self.price.map(pred).unwrap_or(false)
    }
}

/// Parse a JSON menu leniently.
///
/// Anything other than an array yields an empty menu, and entries that do not
/// deserialize as an [`Item`] are skipped with a warning.
pub fn items_from_value(value: &Value) -> Vec<Item> {
    let Some(entries) = value.as_array() else {
        warn!("menu data is not an array, ignoring it");
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match Item::deserialize(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("skipping malformed menu entry #{}: {}", index, e);
                None
            }
        })
        .collect()
}

/// Read a JSON menu file (an array of items)
pub fn load_menu(path: impl AsRef<Path>) -> Result<Vec<Item>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;
    if !value.is_array() {
        return Err(Error::InvalidMenu(format!(
            "{} does not contain a JSON array",
            path.display()
        )));
    }
    Ok(items_from_value(&value))
}

/// Look up an item by id
pub fn find_item<'a>(items: &'a [Item], id: &str) -> Result<&'a Item> {
    items
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| Error::ItemNotFound(id.to_string()))
}
