//! Interpreting a foodbank's opening-hours text as a whole.

use crate::domain::{Day, OpeningSlot};

use super::error::ParseError;
use super::parse::parse_entry;

/// What a foodbank's opening-hours text says about when it is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpeningHours {
    /// Open every day with no time restriction ("all").
    Always,
    /// Open during the listed slots.
    Scheduled(Vec<OpeningSlot>),
    /// The text could not be read.
    Unknown(ParseError),
}

impl OpeningHours {
    /// Interpret opening-hours text.
    ///
    /// Text that is just "all", or says "all week", "all days" or "every
    /// day" without naming any weekday, means open every day and never
    /// reaches the parser. Everything else is parsed; text that yields no
    /// slots is `Unknown`.
    ///
    /// # Examples
    ///
    /// ```
    /// use foodbank_finder::hours::OpeningHours;
    ///
    /// assert_eq!(OpeningHours::from_text("All"), OpeningHours::Always);
    /// assert!(OpeningHours::from_text("Tuesday 11.00 - 13.00").is_known());
    /// assert!(!OpeningHours::from_text("Ring for details").is_known());
    /// ```
    pub fn from_text(text: &str) -> Self {
        if says_every_day(text) && !Day::ALL.into_iter().any(|day| mentions_day(text, day)) {
            return OpeningHours::Always;
        }

        match parse_entry(text) {
            Ok(slots) => OpeningHours::Scheduled(slots),
            Err(e) => OpeningHours::Unknown(e),
        }
    }

    /// Parsed slots; empty for `Always` and `Unknown`.
    pub fn slots(&self) -> &[OpeningSlot] {
        match self {
            OpeningHours::Scheduled(slots) => slots,
            OpeningHours::Always | OpeningHours::Unknown(_) => &[],
        }
    }

    /// Whether the text could be interpreted.
    pub fn is_known(&self) -> bool {
        !matches!(self, OpeningHours::Unknown(_))
    }

    /// Whether the foodbank opens at some point on `day`.
    pub fn opens_on(&self, day: Day) -> bool {
        match self {
            OpeningHours::Always => true,
            OpeningHours::Scheduled(slots) => slots.iter().any(|s| s.day == day),
            OpeningHours::Unknown(_) => false,
        }
    }
}

/// Whether the text names `day`, ignoring case.
///
/// This is a plain substring check, so "Mondays" and "Monday-Friday" both
/// count; it does not consult the parser.
pub fn mentions_day(text: &str, day: Day) -> bool {
    text.to_ascii_lowercase().contains(day.name())
}

/// Whether the text states it is open every day.
fn says_every_day(text: &str) -> bool {
    let words: Vec<String> = text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect();

    if let [only] = words.as_slice() {
        return only == "all";
    }

    words.windows(2).any(|pair| {
        matches!(
            (pair[0].as_str(), pair[1].as_str()),
            ("all", "week") | ("all", "days") | ("every", "day")
        )
    })
}

/// Whether the text contains the word "all", ignoring case.
///
/// Looser than the check behind [`OpeningHours::Always`]; the day-name
/// search modes use it on the raw text.
pub fn mentions_all(text: &str) -> bool {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .any(|word| word.eq_ignore_ascii_case("all"))
}
