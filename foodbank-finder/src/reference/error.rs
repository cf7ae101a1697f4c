//! Reference data errors.

use std::path::PathBuf;

use crate::domain::FoodbankId;

/// Errors raised while building or loading the reference tables.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Reading a table file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A table file is not valid JSON for its row type
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two foodbank rows share an id
    #[error("duplicate foodbank id {0}")]
    DuplicateFoodbank(FoodbankId),

    /// A distance row names a foodbank missing from the attribute table
    #[error("distance row refers to unknown foodbank {0}")]
    UnknownFoodbank(FoodbankId),

    /// A distance is negative or not a number
    #[error("invalid distance {distance_m} for foodbank {foodbank_id}")]
    InvalidDistance {
        foodbank_id: FoodbankId,
        distance_m: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DataError::DuplicateFoodbank(FoodbankId(4));
        assert_eq!(err.to_string(), "duplicate foodbank id #4");

        let err = DataError::UnknownFoodbank(FoodbankId(9));
        assert_eq!(err.to_string(), "distance row refers to unknown foodbank #9");

        let err = DataError::InvalidDistance {
            foodbank_id: FoodbankId(2),
            distance_m: -1.0,
        };
        assert_eq!(err.to_string(), "invalid distance -1 for foodbank #2");

        let err = DataError::Io {
            path: PathBuf::from("data/foodbanks.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to read data/foodbanks.json: not found");
    }
}
