//! Foodbank records and precomputed distances.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::Postcode;

/// Stable identifier of a foodbank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodbankId(pub u32);

impl fmt::Display for FoodbankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One physical foodbank, as loaded from the attribute table.
///
/// Contact fields are optional; an empty string in the source table reads
/// as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Foodbank {
    pub id: FoodbankId,
    pub postcode: Postcode,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub website: Option<String>,
    /// Free-text opening hours, possibly several lines.
    #[serde(default, alias = "opening")]
    pub opening_text: String,
    #[serde(default)]
    pub referral_required: bool,
    #[serde(default)]
    pub delivery_option: bool,
}

impl Foodbank {
    /// Create a foodbank with no contact details.
    pub fn new(id: FoodbankId, postcode: Postcode, opening_text: impl Into<String>) -> Self {
        Self {
            id,
            postcode,
            name: None,
            address: None,
            phone: None,
            email: None,
            website: None,
            opening_text: opening_text.into(),
            referral_required: false,
            delivery_option: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Straight-line distance from an origin postcode to a foodbank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceEntry {
    #[serde(alias = "ID")]
    pub foodbank_id: FoodbankId,
    #[serde(alias = "postcode")]
    pub origin_postcode: Postcode,
    #[serde(alias = "distance")]
    pub distance_m: f64,
}

impl DistanceEntry {
    pub fn new(foodbank_id: FoodbankId, origin_postcode: Postcode, distance_m: f64) -> Self {
        Self {
            foodbank_id,
            origin_postcode,
            distance_m,
        }
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}
