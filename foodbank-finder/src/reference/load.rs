//! Loading the reference tables from JSON files.
//!
//! Each file holds a JSON array of rows: foodbank attribute rows for one,
//! distance rows for the other. Producing the files is the ingestion
//! layer's job.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::domain::{DistanceEntry, Foodbank};

use super::{DataError, ReferenceData};

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataError> {
    let contents = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

impl ReferenceData {
    /// Load the foodbank and distance tables from JSON files.
    pub fn load(
        foodbanks_path: impl AsRef<Path>,
        distances_path: impl AsRef<Path>,
    ) -> Result<Self, DataError> {
        let foodbanks: Vec<Foodbank> = read_table(foodbanks_path.as_ref())?;
        let distances: Vec<DistanceEntry> = read_table(distances_path.as_ref())?;

        info!(
            foodbanks = foodbanks.len(),
            distances = distances.len(),
            "loaded reference tables"
        );

        ReferenceData::new(foodbanks, distances)
    }
}
