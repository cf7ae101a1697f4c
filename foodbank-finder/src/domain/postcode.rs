//! Postcode type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string cannot be normalized into a postcode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid postcode: {reason}")]
pub struct InvalidPostcode {
    reason: &'static str,
}

/// A normalized UK-style postcode.
///
/// Postcodes are the join key between a user's location and the distance
/// table, so every `Postcode` is stored in one canonical form: whitespace
/// removed and letters uppercased.
///
/// # Examples
///
/// ```
/// use foodbank_finder::domain::Postcode;
///
/// let pc = Postcode::parse("s10 2fd").unwrap();
/// assert_eq!(pc.as_str(), "S102FD");
/// assert_eq!(pc, Postcode::parse("S10 2FD").unwrap());
///
/// assert!(Postcode::parse("").is_err());
/// assert!(Postcode::parse("S1-1AD").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Postcode(String);

impl Postcode {
    /// Normalize and validate a postcode.
    ///
    /// Interior and surrounding whitespace is dropped; what remains must be
    /// 2 to 8 ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidPostcode> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if compact.is_empty() {
            return Err(InvalidPostcode {
                reason: "must not be empty",
            });
        }

        if !compact.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InvalidPostcode {
                reason: "must contain only letters and digits",
            });
        }

        if !(2..=8).contains(&compact.len()) {
            return Err(InvalidPostcode {
                reason: "must be 2 to 8 characters",
            });
        }

        Ok(Postcode(compact))
    }

    /// Returns the normalized postcode.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Postcode {
    type Error = InvalidPostcode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Postcode::parse(&value)
    }
}

impl From<Postcode> for String {
    fn from(value: Postcode) -> Self {
        value.0
    }
}

impl fmt::Debug for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Postcode({})", self.0)
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Inserting spaces or lowering case never changes the result.
        #[test]
        fn spacing_and_case_are_irrelevant(s in "[A-Z0-9]{2,8}", split in 0usize..8) {
            let split = split.min(s.len());
            let spaced = format!(" {} {} ", &s[..split], &s[split..]).to_lowercase();
            prop_assert_eq!(Postcode::parse(&spaced).unwrap(), Postcode::parse(&s).unwrap());
        }

        #[test]
        fn normalized_form_is_idempotent(s in "[a-zA-Z0-9 ]{2,12}") {
            if let Ok(pc) = Postcode::parse(&s) {
                prop_assert_eq!(Postcode::parse(pc.as_str()).unwrap(), pc);
            }
        }
    }
}
