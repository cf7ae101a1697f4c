//! Opening slots: one opening window on one weekday.

use std::fmt;

use super::{ClockTime, Day};

/// One contiguous opening interval on a single day.
///
/// A foodbank may have any number of slots, including several on the same
/// day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpeningSlot {
    pub day: Day,
    pub open: ClockTime,
    pub close: ClockTime,
}

impl OpeningSlot {
    pub fn new(day: Day, open: ClockTime, close: ClockTime) -> Self {
        Self { day, open, close }
    }
}

impl fmt::Display for OpeningSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.open, self.close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let slot = OpeningSlot::new(
            Day::Tuesday,
            ClockTime::new(11, 0).unwrap(),
            ClockTime::new(13, 0).unwrap(),
        );
        assert_eq!(slot.to_string(), "Tuesday 11:00-13:00");
    }
}
