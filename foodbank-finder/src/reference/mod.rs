//! Read-only reference tables: foodbank attributes and the precomputed
//! postcode-to-foodbank distance table.
//!
//! The tables are built once at startup into a [`ReferenceData`] and never
//! mutated afterwards, so one instance can be shared behind an `Arc` by
//! any number of concurrent searches.

mod error;
mod load;

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{DistanceEntry, Foodbank, FoodbankId, Postcode};
use crate::hours::OpeningHours;

pub use error::DataError;

/// A foodbank together with its interpreted opening hours.
#[derive(Debug, Clone)]
pub struct FoodbankRecord {
    pub foodbank: Arc<Foodbank>,
    pub hours: OpeningHours,
}

/// A foodbank within reach of an origin postcode.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub record: &'a FoodbankRecord,
    pub distance_m: f64,
}

/// The immutable reference tables every search reads from.
#[derive(Debug, Default)]
pub struct ReferenceData {
    foodbanks: HashMap<FoodbankId, FoodbankRecord>,
    /// Distance rows per origin postcode, sorted by ascending distance.
    distances: HashMap<Postcode, Vec<(FoodbankId, f64)>>,
}

impl ReferenceData {
    /// Build the tables from foodbank rows and distance rows.
    ///
    /// Opening hours are interpreted here, once per foodbank. Foodbanks
    /// whose hours cannot be read are kept with [`OpeningHours::Unknown`].
    pub fn new(foodbanks: Vec<Foodbank>, distances: Vec<DistanceEntry>) -> Result<Self, DataError> {
        let mut by_id = HashMap::with_capacity(foodbanks.len());

        for foodbank in foodbanks {
            let hours = OpeningHours::from_text(&foodbank.opening_text);
            if let OpeningHours::Unknown(e) = &hours {
                warn!(foodbank = %foodbank.id, error = %e, "opening hours not understood");
            }

            match by_id.entry(foodbank.id) {
                Entry::Occupied(_) => return Err(DataError::DuplicateFoodbank(foodbank.id)),
                Entry::Vacant(slot) => {
                    slot.insert(FoodbankRecord {
                        foodbank: Arc::new(foodbank),
                        hours,
                    });
                }
            }
        }

        let mut by_postcode: HashMap<Postcode, Vec<(FoodbankId, f64)>> = HashMap::new();
        for entry in distances {
            if !by_id.contains_key(&entry.foodbank_id) {
                return Err(DataError::UnknownFoodbank(entry.foodbank_id));
            }
            if !entry.distance_m.is_finite() || entry.distance_m < 0.0 {
                return Err(DataError::InvalidDistance {
                    foodbank_id: entry.foodbank_id,
                    distance_m: entry.distance_m,
                });
            }
            by_postcode
                .entry(entry.origin_postcode)
                .or_default()
                .push((entry.foodbank_id, entry.distance_m));
        }

        for rows in by_postcode.values_mut() {
            rows.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        }

        debug!(
            foodbanks = by_id.len(),
            postcodes = by_postcode.len(),
            "reference data ready"
        );

        Ok(Self {
            foodbanks: by_id,
            distances: by_postcode,
        })
    }

    /// Look up a foodbank by id.
    pub fn foodbank(&self, id: FoodbankId) -> Option<&FoodbankRecord> {
        self.foodbanks.get(&id)
    }

    /// Whether the distance table has rows for this postcode.
    pub fn knows_postcode(&self, postcode: &Postcode) -> bool {
        self.distances.contains_key(postcode)
    }

    /// Foodbanks no further than `max_distance_m` from `origin`, nearest
    /// first. Equal distances are ordered by foodbank id.
    pub fn within(&self, origin: &Postcode, max_distance_m: f64) -> Vec<Candidate<'_>> {
        let Some(rows) = self.distances.get(origin) else {
            return Vec::new();
        };

        rows.iter()
            .take_while(|(_, distance)| *distance <= max_distance_m)
            .filter_map(|(id, distance)| {
                self.foodbanks.get(id).map(|record| Candidate {
                    record,
                    distance_m: *distance,
                })
            })
            .collect()
    }

    pub fn foodbank_count(&self) -> usize {
        self.foodbanks.len()
    }

    pub fn postcode_count(&self) -> usize {
        self.distances.len()
    }
}
