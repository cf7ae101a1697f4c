//! Search configuration.

use chrono::{Duration, NaiveDateTime, NaiveTime};

/// How "asap" queries decide which foodbank is soonest available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AsapStrategy {
    /// Parse opening hours and rank by time until next opening or closing.
    #[default]
    Ranked,
    /// Match weekday names in the raw text, day by day from today.
    /// Kept for comparison with the older behaviour.
    DayMatch,
}

/// Configuration parameters for foodbank search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// How many days after today an "asap" query looks ahead.
    pub lookahead_days: u8,

    /// Strategy used for "asap" queries.
    pub asap_strategy: AsapStrategy,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(lookahead_days: u8, asap_strategy: AsapStrategy) -> Self {
        Self {
            lookahead_days,
            asap_strategy,
        }
    }

    /// Returns the span an "asap" query covers: today plus the look-ahead days.
    pub fn lookahead(&self) -> Duration {
        Duration::days(self.lookahead_days as i64 + 1)
    }

    /// Time from `reference` until midnight at the end of the last
    /// look-ahead day.
    pub fn remaining_window(&self, reference: NaiveDateTime) -> Duration {
        let midnight = reference.date().and_time(NaiveTime::MIN);
        self.lookahead() - reference.signed_duration_since(midnight)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lookahead_days: 6,
            asap_strategy: AsapStrategy::Ranked,
        }
    }
}
